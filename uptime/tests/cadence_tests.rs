//! Blink timing, including the stretched on phase at every minute boundary.

use rstest::rstest;
use uptime::Cadence;

type Millis = Cadence<1_000>;

#[test]
fn millisecond_ticks() {
    assert_eq!(Millis::on_duration(0), 1_000);
    assert_eq!(Millis::on_duration(1), 750);
    assert_eq!(Millis::off_duration(), 250);
}

#[test]
fn on_phase_is_three_quarters_except_at_zero() {
    for s in 1..60u8 {
        assert_eq!(Millis::on_duration(s), 750, "seconds = {s}");
    }
    assert_eq!(Millis::on_duration(0), Millis::TICKS_PER_SECOND);
}

fn assert_cycle_is_one_second<const HZ: u64>() {
    for s in 1..60u8 {
        assert_eq!(
            Cadence::<HZ>::on_duration(s) + Cadence::<HZ>::off_duration(),
            HZ,
            "seconds = {s}"
        );
    }
}

#[test]
fn on_plus_off_is_one_second() {
    assert_cycle_is_one_second::<1_000>();
    assert_cycle_is_one_second::<32_768>();
    assert_cycle_is_one_second::<10>();
    assert_cycle_is_one_second::<7>();
}

#[rstest]
#[case(0, 1_000)]
#[case(1, 750)]
#[case(30, 750)]
#[case(59, 750)]
fn on_duration_by_seconds_field(#[case] seconds: u8, #[case] expected: u64) {
    assert_eq!(Millis::on_duration(seconds), expected);
}

// The on phase keys off the counter's seconds field, not a first-cycle flag,
// so every minute rollover gets a full second of on time and the cycle runs
// long by the off phase.
#[test]
fn minute_boundary_cycle_is_stretched() {
    let cycle = Millis::on_duration(0) + Millis::off_duration();
    assert_eq!(cycle, 1_250);
}

#[test]
fn off_duration_is_constant() {
    assert_eq!(Millis::off_duration(), Millis::OFF_TICKS);
    assert_eq!(Cadence::<32_768>::off_duration(), 8_192);
}
