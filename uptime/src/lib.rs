//! Blink cadence and uptime counting for the STM32F429I-Discovery demo.
//!
//! Hardware free so it can be tested on the host; the firmware crate plugs in
//! the LED pin, the tick timer and the display log.
#![no_std]

pub mod blinker;
pub mod cadence;
pub mod console;
pub mod counter;

pub use blinker::{Blinker, Error, LogSink, TickSleep};
pub use cadence::Cadence;
pub use console::LineLog;
pub use counter::{Snapshot, UptimeCounter};
