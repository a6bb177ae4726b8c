#![no_std]

use embassy_time::{block_for, Duration};
use uptime::TickSleep;

pub mod board;
pub mod display;
pub mod sdram;
pub mod trace;

/// Rate of the embassy time driver, see the `tick-hz-*` feature of `embassy-time`.
pub const TICKS_PER_SECOND: u64 = embassy_time::TICK_HZ;

// traps like the linked panic handler but doesn't print a panic message
// this prevents the panic message being printed *twice* when `defmt::panic` is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}

/// Hardfault handler.
///
/// Makes a semihosting-capable debug tool exit with an error instead of
/// spinning in the default handler.
#[cfg(feature = "semihosting")]
#[cortex_m_rt::exception]
unsafe fn HardFault(_frame: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m_semihosting::debug::exit(cortex_m_semihosting::debug::EXIT_FAILURE);
    }
}

/// Busy waits on the embassy time driver. The uptime loop runs alone, so
/// there is nothing to yield to.
pub struct TickTimer;

impl TickSleep for TickTimer {
    fn sleep_ticks(&mut self, ticks: u64) {
        block_for(Duration::from_ticks(ticks));
    }
}
