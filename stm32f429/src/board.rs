use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::peripherals::*;
use embassy_stm32::time::{mhz, Hertz};
use embassy_stm32::Config;

/// HSE crystal on the STM32F429I-Discovery.
pub const HSE: Hertz = Hertz(8_000_000);
pub const SYSCLK: Hertz = Hertz(168_000_000);

/// Clock tree: 168 MHz core from the 8 MHz crystal. HCLK runs at SYSCLK, so
/// the FMC SDRAM clock (HCLK / 2) ends up at 84 MHz.
pub fn config() -> Config {
    let mut config = Config::default();
    config.rcc.hse = Some(HSE);
    config.rcc.sys_ck = Some(SYSCLK);
    config.rcc.hclk = Some(SYSCLK);
    config.rcc.pclk1 = Some(mhz(42));
    config.rcc.pclk2 = Some(mhz(84));
    config
}

// Separating the board from the application
pub struct Board {
    // LD3, the green user LED
    pub led: Output<'static, PG13>,
    pub sdram: SdramPins,
    pub lcd: LcdPins,
}

/// FMC bank 2 wiring of the on-board IS42S16400J.
pub struct SdramPins {
    pub fmc: FMC,
    // row/column address
    pub a0: PF0,
    pub a1: PF1,
    pub a2: PF2,
    pub a3: PF3,
    pub a4: PF4,
    pub a5: PF5,
    pub a6: PF12,
    pub a7: PF13,
    pub a8: PF14,
    pub a9: PF15,
    pub a10: PG0,
    pub a11: PG1,
    // internal bank select
    pub ba0: PG4,
    pub ba1: PG5,
    pub d0: PD14,
    pub d1: PD15,
    pub d2: PD0,
    pub d3: PD1,
    pub d4: PE7,
    pub d5: PE8,
    pub d6: PE9,
    pub d7: PE10,
    pub d8: PE11,
    pub d9: PE12,
    pub d10: PE13,
    pub d11: PE14,
    pub d12: PE15,
    pub d13: PD8,
    pub d14: PD9,
    pub d15: PD10,
    // byte lane masks
    pub nbl0: PE0,
    pub nbl1: PE1,
    pub sdcke1: PB5,
    pub sdclk: PG8,
    pub sdncas: PG15,
    pub sdne1: PB6,
    pub sdnras: PF11,
    pub sdnwe: PC0,
}

/// ILI9341 panel controller on SPI5.
pub struct LcdPins {
    pub spi: SPI5,
    pub sck: PF7,
    pub mosi: PF9,
    // chip select, active low
    pub csx: PC2,
    // WRX doubles as the data/command select in serial mode
    pub dcx: PD13,
}

impl Board {
    pub fn new(p: embassy_stm32::Peripherals) -> Self {
        Self {
            led: Output::new(p.PG13, Level::Low, Speed::Low),
            sdram: SdramPins {
                fmc: p.FMC,
                a0: p.PF0,
                a1: p.PF1,
                a2: p.PF2,
                a3: p.PF3,
                a4: p.PF4,
                a5: p.PF5,
                a6: p.PF12,
                a7: p.PF13,
                a8: p.PF14,
                a9: p.PF15,
                a10: p.PG0,
                a11: p.PG1,
                ba0: p.PG4,
                ba1: p.PG5,
                d0: p.PD14,
                d1: p.PD15,
                d2: p.PD0,
                d3: p.PD1,
                d4: p.PE7,
                d5: p.PE8,
                d6: p.PE9,
                d7: p.PE10,
                d8: p.PE11,
                d9: p.PE12,
                d10: p.PE13,
                d11: p.PE14,
                d12: p.PE15,
                d13: p.PD8,
                d14: p.PD9,
                d15: p.PD10,
                nbl0: p.PE0,
                nbl1: p.PE1,
                sdcke1: p.PB5,
                sdclk: p.PG8,
                sdncas: p.PG15,
                sdne1: p.PB6,
                sdnras: p.PF11,
                sdnwe: p.PC0,
            },
            lcd: LcdPins {
                spi: p.SPI5,
                sck: p.PF7,
                mosi: p.PF9,
                csx: p.PC2,
                dcx: p.PD13,
            },
        }
    }
}
