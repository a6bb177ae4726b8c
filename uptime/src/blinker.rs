use core::convert::Infallible;
use core::fmt;

use embedded_hal::digital::v2::OutputPin;

use crate::cadence::Cadence;
use crate::counter::{Snapshot, UptimeCounter};

/// Blocking wait on the board tick timer.
pub trait TickSleep {
    /// Returns once `ticks` ticks have elapsed. Never cancelled.
    fn sleep_ticks(&mut self, ticks: u64);
}

/// Line oriented text sink, e.g. the display log.
pub trait LogSink {
    fn emit(&mut self, args: fmt::Arguments<'_>) -> fmt::Result;
}

impl<T: LogSink + ?Sized> LogSink for &mut T {
    fn emit(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        (**self).emit(args)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    Pin(E),
    Log,
}

impl<E> From<fmt::Error> for Error<E> {
    fn from(_: fmt::Error) -> Self {
        Self::Log
    }
}

/// The 1 Hz blink loop: drives `led`, sleeps on `timer`, counts uptime and
/// reports it to `log` once per cycle.
pub struct Blinker<P, S, L, const TICK_HZ: u64> {
    led: P,
    timer: S,
    log: L,
    counter: UptimeCounter,
}

impl<P, S, L, const TICK_HZ: u64> Blinker<P, S, L, TICK_HZ>
where
    P: OutputPin,
    S: TickSleep,
    L: LogSink,
{
    pub fn new(led: P, timer: S, log: L) -> Self {
        Self {
            led,
            timer,
            log,
            counter: UptimeCounter::new(),
        }
    }

    /// One on/off cycle followed by one counter advance. Returns the
    /// snapshot that was written to the log.
    pub fn cycle(&mut self) -> Result<Snapshot, Error<P::Error>> {
        self.led.set_high().map_err(Error::Pin)?;
        self.timer
            .sleep_ticks(Cadence::<TICK_HZ>::on_duration(self.counter.seconds()));

        self.led.set_low().map_err(Error::Pin)?;
        self.timer.sleep_ticks(Cadence::<TICK_HZ>::off_duration());

        self.counter.advance();
        let snapshot = self.counter.snapshot();
        self.log.emit(format_args!("{}\n", snapshot))?;
        Ok(snapshot)
    }

    /// Runs forever; only returns if a collaborator fails.
    pub fn run(&mut self) -> Result<Infallible, Error<P::Error>> {
        loop {
            self.cycle()?;
        }
    }

    /// Like `run`, but asks `keep_going` before every cycle and stops once it
    /// returns `false`. Returns the number of completed cycles.
    pub fn run_while<F>(&mut self, mut keep_going: F) -> Result<u64, Error<P::Error>>
    where
        F: FnMut(&Snapshot) -> bool,
    {
        let mut cycles = 0;
        while keep_going(&self.counter.snapshot()) {
            self.cycle()?;
            cycles += 1;
        }
        Ok(cycles)
    }

    pub fn counter(&self) -> &UptimeCounter {
        &self.counter
    }

    pub fn log(&self) -> &L {
        &self.log
    }
}
