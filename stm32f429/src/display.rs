//! ILI9341 panel and the display log drawn on it.
//!
//! The panel is driven over its serial command interface. [`Ili9341`] is an
//! `embedded-graphics` draw target; [`DisplayLog`] lays out a header band, a
//! scrolling window of log lines and a footer band, and mirrors every
//! completed line to the defmt trace channel.

use core::fmt;

use defmt::{debug, info, warn};
use embassy_stm32::dma::NoDma;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::peripherals::{PC2, PD13, SPI5};
use embassy_stm32::spi::{self, Spi};
use embassy_stm32::time::mhz;
use embassy_time::{block_for, Duration};
use embedded_graphics::mono_font::ascii::FONT_6X12;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::raw::ToBytes;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use uptime::{LineLog, LogSink};

use crate::board::LcdPins;

pub const WIDTH: u16 = 240;
pub const HEIGHT: u16 = 320;

pub const HEADER: &str = "LTDC Application";
pub const FOOTER: &str = "                   Baerospace GmbH";
pub const STARTED: &str = "*** Application started. ***";

// FONT_6X12 cells between the header and footer bands
const CELL_WIDTH: u16 = 6;
const CELL_HEIGHT: u16 = 12;
const BAND_HEIGHT: u16 = 24;
const LOG_LINES: usize = ((HEIGHT - 2 * BAND_HEIGHT) / CELL_HEIGHT) as usize;
const LOG_COLUMNS: usize = (WIDTH / CELL_WIDTH) as usize;

const BACKGROUND: Rgb565 = Rgb565::BLACK;
const BAND: Rgb565 = Rgb565::BLUE;

mod cmd {
    pub const SOFT_RESET: u8 = 0x01;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const COLUMN_ADDRESS_SET: u8 = 0x2A;
    pub const PAGE_ADDRESS_SET: u8 = 0x2B;
    pub const MEMORY_WRITE: u8 = 0x2C;
    pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;
    pub const PIXEL_FORMAT_SET: u8 = 0x3A;
}

pub struct Ili9341 {
    spi: Spi<'static, SPI5, NoDma, NoDma>,
    csx: Output<'static, PC2>,
    dcx: Output<'static, PD13>,
}

impl Ili9341 {
    pub fn new(pins: LcdPins) -> Self {
        let mut config = spi::Config::default();
        config.frequency = mhz(10);

        let spi = Spi::new_txonly(pins.spi, pins.sck, pins.mosi, NoDma, NoDma, config);

        Self {
            spi,
            csx: Output::new(pins.csx, Level::High, Speed::VeryHigh),
            dcx: Output::new(pins.dcx, Level::High, Speed::VeryHigh),
        }
    }

    pub fn init(&mut self) -> Result<(), spi::Error> {
        self.command(cmd::SOFT_RESET, &[])?;
        block_for(Duration::from_millis(5));
        self.command(cmd::SLEEP_OUT, &[])?;
        // the controller ignores commands for 120 ms after sleep out
        block_for(Duration::from_millis(120));

        // 16 bits per pixel
        self.command(cmd::PIXEL_FORMAT_SET, &[0x55])?;
        // column address order mirrored, BGR panel
        self.command(cmd::MEMORY_ACCESS_CONTROL, &[0x48])?;
        self.command(cmd::DISPLAY_ON, &[])?;
        debug!("ILI9341 on, {}x{}", WIDTH, HEIGHT);
        Ok(())
    }

    // `area` must be non-empty and inside the panel
    fn set_window(&mut self, area: &Rectangle) -> Result<(), spi::Error> {
        let x = area.top_left.x as u16;
        let y = area.top_left.y as u16;
        let x1 = x + area.size.width as u16 - 1;
        let y1 = y + area.size.height as u16 - 1;
        self.command(cmd::COLUMN_ADDRESS_SET, &window(x, x1))?;
        self.command(cmd::PAGE_ADDRESS_SET, &window(y, y1))
    }

    // writes the pixels of a window set by `set_window`, in row order
    fn write_pixels<I>(&mut self, colors: I) -> Result<(), spi::Error>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        self.select(cmd::MEMORY_WRITE)?;
        let result = self.stream(colors);
        self.csx.set_high();
        result
    }

    fn stream<I>(&mut self, colors: I) -> Result<(), spi::Error>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        let mut chunk = [0u8; 64];
        let mut used = 0;
        for color in colors {
            chunk[used..used + 2].copy_from_slice(&color.to_be_bytes());
            used += 2;
            if used == chunk.len() {
                self.spi.blocking_write(&chunk)?;
                used = 0;
            }
        }
        if used > 0 {
            self.spi.blocking_write(&chunk[..used])?;
        }
        Ok(())
    }

    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), spi::Error> {
        self.select(command)?;
        let result = if params.is_empty() {
            Ok(())
        } else {
            self.spi.blocking_write(params)
        };
        self.csx.set_high();
        result
    }

    // sends `command` and leaves the chip selected in data mode
    fn select(&mut self, command: u8) -> Result<(), spi::Error> {
        self.csx.set_low();
        self.dcx.set_low();
        let result = self.spi.blocking_write(&[command]);
        self.dcx.set_high();
        if result.is_err() {
            self.csx.set_high();
        }
        result
    }
}

fn window(start: u16, end: u16) -> [u8; 4] {
    let [s0, s1] = start.to_be_bytes();
    let [e0, e1] = end.to_be_bytes();
    [s0, s1, e0, e1]
}

impl OriginDimensions for Ili9341 {
    fn size(&self) -> Size {
        Size::new(WIDTH as _, HEIGHT as _)
    }
}

impl DrawTarget for Ili9341 {
    type Color = Rgb565;
    type Error = spi::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            self.set_window(&Rectangle::new(point, Size::new(1, 1)))?;
            self.write_pixels([color])?;
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let visible = area.intersection(&self.bounding_box());
        if visible.size == Size::zero() {
            return Ok(());
        }
        if visible != *area {
            let pixels = area
                .points()
                .zip(colors)
                .map(|(point, color)| Pixel(point, color));
            return self.draw_iter(pixels);
        }
        self.set_window(area)?;
        self.write_pixels(colors)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let visible = area.intersection(&self.bounding_box());
        if visible.size == Size::zero() {
            return Ok(());
        }
        let count = visible.size.width * visible.size.height;
        self.set_window(&visible)?;
        self.write_pixels((0..count).map(|_| color))
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_solid(&self.bounding_box(), color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Error {
    Spi(spi::Error),
    Format,
}

impl From<spi::Error> for Error {
    fn from(v: spi::Error) -> Self {
        Self::Spi(v)
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::Format
    }
}

/// Log sink for the uptime loop, laid out like the panel: header, scrolling
/// user lines, footer.
pub struct DisplayLog {
    lcd: Ili9341,
    console: LineLog<LOG_LINES, LOG_COLUMNS>,
    band_style: MonoTextStyle<'static, Rgb565>,
    text_style: MonoTextStyle<'static, Rgb565>,
}

impl DisplayLog {
    pub fn new(lcd: Ili9341) -> Self {
        Self {
            lcd,
            console: LineLog::new(),
            band_style: MonoTextStyleBuilder::new()
                .font(&FONT_6X12)
                .text_color(Rgb565::WHITE)
                .background_color(BAND)
                .build(),
            text_style: MonoTextStyleBuilder::new()
                .font(&FONT_6X12)
                .text_color(Rgb565::WHITE)
                .background_color(BACKGROUND)
                .build(),
        }
    }

    /// Paints the frame with the header and the footer, then logs the start
    /// banner.
    pub fn start(&mut self) -> Result<(), Error> {
        self.console.set_header(HEADER);
        self.console.set_footer(FOOTER);
        info!("[header] {=str}", self.console.header());
        info!("[footer] {=str}", self.console.footer());

        self.lcd.clear(BACKGROUND)?;
        self.draw_bands()?;
        self.log(format_args!("{}\n", STARTED))
    }

    fn log(&mut self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        let mark = self.console.completed();
        let scrolled = self.console.scrolled();
        fmt::Write::write_fmt(&mut self.console, args)?;

        for line in self.console.lines_since(mark) {
            info!("{=str}", line);
        }

        if self.console.scrolled() != scrolled {
            // every held line moved up a row
            self.draw_window(0)?;
        } else {
            let fresh = self.console.lines_since(mark).count();
            self.draw_window(self.console.len() - fresh)?;
        }
        Ok(())
    }

    fn draw_bands(&mut self) -> Result<(), spi::Error> {
        let footer_top = i32::from(HEIGHT - BAND_HEIGHT);
        let bands = [
            (0, self.console.header()),
            (footer_top, self.console.footer()),
        ];
        for (top, text) in bands {
            let band = Rectangle::new(
                Point::new(0, top),
                Size::new(WIDTH.into(), BAND_HEIGHT.into()),
            );
            self.lcd.fill_solid(&band, BAND)?;

            let origin = Point::new(0, top + i32::from((BAND_HEIGHT - CELL_HEIGHT) / 2));
            Text::with_baseline(text, origin, self.band_style, Baseline::Top)
                .draw(&mut self.lcd)?;
        }
        Ok(())
    }

    // redraws the window rows from `first` down; text is drawn over its own
    // background, the rest of each row is blanked
    fn draw_window(&mut self, first: usize) -> Result<(), spi::Error> {
        for (row, line) in self.console.lines().enumerate().skip(first) {
            let top = i32::from(BAND_HEIGHT) + (row as i32) * i32::from(CELL_HEIGHT);
            let end = Text::with_baseline(line, Point::new(0, top), self.text_style, Baseline::Top)
                .draw(&mut self.lcd)?;

            if end.x < i32::from(WIDTH) {
                let rest = Rectangle::with_corners(
                    Point::new(end.x, top),
                    Point::new(i32::from(WIDTH) - 1, top + i32::from(CELL_HEIGHT) - 1),
                );
                self.lcd.fill_solid(&rest, BACKGROUND)?;
            }
        }
        Ok(())
    }
}

impl LogSink for DisplayLog {
    fn emit(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.log(args).map_err(|e| {
            warn!("display log: {}", e);
            fmt::Error
        })
    }
}
