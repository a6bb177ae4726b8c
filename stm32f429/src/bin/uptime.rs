#![no_std]
#![no_main]
#![feature(type_alias_impl_trait)]

use defmt::{info, unwrap, Debug2Format};
use embassy_executor::Spawner;
use f429_uptime::board::{self, Board};
use f429_uptime::display::{DisplayLog, Ili9341};
use f429_uptime::sdram::Sdram;
use f429_uptime::{trace, TickTimer, TICKS_PER_SECOND};
use uptime::{Blinker, Cadence};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let p = embassy_stm32::init(board::config());
    let sysclk = embassy_stm32::rcc::clocks(&p.RCC).sys;
    let board = Board::new(p);

    let mut sdram = Sdram::init(board.sdram);
    defmt::assert!(sdram.self_test(), "SDRAM read-back mismatch");

    let mut lcd = Ili9341::new(board.lcd);
    unwrap!(lcd.init());
    let mut log = DisplayLog::new(lcd);
    unwrap!(log.start());

    trace::greet(sysclk);

    info!(
        "blinking at {} ticks/s, on {} off {}",
        TICKS_PER_SECOND,
        Cadence::<TICKS_PER_SECOND>::ON_TICKS,
        Cadence::<TICKS_PER_SECOND>::OFF_TICKS
    );

    let mut blinker: Blinker<_, _, _, TICKS_PER_SECOND> = Blinker::new(board.led, TickTimer, log);
    match blinker.run() {
        Ok(never) => match never {},
        Err(e) => defmt::panic!("uptime loop stopped: {}", Debug2Format(&e)),
    }
}
