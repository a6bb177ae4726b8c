//! Greeting on the trace channel.

use defmt::{info, warn};
use embassy_stm32::time::Hertz;

pub const GREETING: &str = "Hello ARM World!";
pub const STDOUT_MESSAGE: &str = "Standard output message.";
pub const STDERR_MESSAGE: &str = "Standard error message.";

/// `sysclk` is the core clock the RCC ended up with. With `semihosting` the
/// stdout and stderr lines also go to the debugger's host console.
pub fn greet(sysclk: Hertz) {
    info!("{=str}", GREETING);

    info!("{=str}", STDOUT_MESSAGE);
    warn!("{=str}", STDERR_MESSAGE);

    #[cfg(feature = "semihosting")]
    {
        cortex_m_semihosting::hprintln!("{}", STDOUT_MESSAGE);
        cortex_m_semihosting::heprintln!("{}", STDERR_MESSAGE);
    }

    info!("System clock: {} Hz", sysclk.0);
}
