//! Carry-chain behaviour of the uptime counter.

use rstest::rstest;
use uptime::{Snapshot, UptimeCounter};

fn advanced(times: u32) -> UptimeCounter {
    let mut counter = UptimeCounter::new();
    for _ in 0..times {
        counter.advance();
    }
    counter
}

fn in_bounds(s: &Snapshot) -> bool {
    s.seconds < 60 && s.minutes < 60 && s.hours < 24
}

#[rstest]
#[case(1, (0, 0, 0, 1))]
#[case(59, (0, 0, 0, 59))]
#[case(60, (0, 0, 1, 0))]
#[case(61, (0, 0, 1, 1))]
#[case(3_599, (0, 0, 59, 59))]
#[case(3_600, (0, 1, 0, 0))]
#[case(86_399, (0, 23, 59, 59))]
#[case(86_400, (1, 0, 0, 0))]
#[case(90_061, (1, 1, 1, 1))]
fn reaches_expected_state(#[case] advances: u32, #[case] expected: (u32, u8, u8, u8)) {
    assert_eq!(advanced(advances).snapshot().as_tuple(), expected);
}

#[test]
fn sixty_advances_bump_minutes_once() {
    // start from a handful of arbitrary phases, including one where minutes wraps
    for start in [0u32, 17, 59, 3_540, 3_599, 86_399, 123_456] {
        let mut counter = advanced(start);
        let before = counter.snapshot();
        for _ in 0..60 {
            counter.advance();
        }
        let after = counter.snapshot();

        assert_eq!(after.seconds, before.seconds, "start {start}");
        assert_eq!(after.minutes, (before.minutes + 1) % 60, "start {start}");
        if before.minutes != 59 {
            assert_eq!(after.hours, before.hours, "start {start}");
            assert_eq!(after.days, before.days, "start {start}");
        }
    }
}

#[test]
fn one_day_of_advances_bumps_days_and_stays_in_bounds() {
    let mut counter = advanced(86_400 * 2);
    assert_eq!(counter.snapshot().as_tuple(), (2, 0, 0, 0));

    for _ in 0..86_400 - 1 {
        counter.advance();
        let s = counter.snapshot();
        assert!(in_bounds(&s), "{s:?}");
        assert_eq!(s.days, 2);
    }
    counter.advance();
    assert_eq!(counter.snapshot().as_tuple(), (3, 0, 0, 0));
}

#[test]
fn total_seconds_tracks_advance_count() {
    let mut counter = UptimeCounter::new();
    for n in 1..=200_000u64 {
        counter.advance();
        assert_eq!(counter.snapshot().total_seconds(), n);
    }
}

#[test]
fn snapshot_twice_is_identical() {
    let counter = advanced(12_345);
    let first = counter.snapshot();
    let second = counter.snapshot();
    assert_eq!(first, second);
    assert_eq!(first.as_tuple(), (0, 3, 25, 45));
}
