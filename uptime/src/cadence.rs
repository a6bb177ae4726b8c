/// On/off timing of the indicator, in ticks of a `TICK_HZ` timer.
///
/// Each cycle lasts exactly one second worth of ticks. The LED is lit for
/// three quarters of it, except when the counter's seconds field is zero:
/// then the on phase is a full second. Because the check is on the counter
/// and not on a first-cycle flag, the stretch happens at startup and again on
/// every minute boundary, so those cycles are `TICK_HZ + OFF_TICKS` long.
pub struct Cadence<const TICK_HZ: u64>;

impl<const TICK_HZ: u64> Cadence<TICK_HZ> {
    pub const TICKS_PER_SECOND: u64 = TICK_HZ;

    /// `round(TICK_HZ * 3 / 4)`
    pub const ON_TICKS: u64 = (TICK_HZ * 3 + 2) / 4;

    pub const OFF_TICKS: u64 = TICK_HZ - Self::ON_TICKS;

    pub const fn on_duration(seconds: u8) -> u64 {
        if seconds == 0 {
            TICK_HZ
        } else {
            Self::ON_TICKS
        }
    }

    pub const fn off_duration() -> u64 {
        Self::OFF_TICKS
    }
}
