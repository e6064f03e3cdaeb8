use crate::{randomizers, run};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use proptest::prelude::*;
use randomizer::{DefaultSource, Randomizer};
use test_log::test;

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .unwrap()
}

fn is_midnight(value: &NaiveDateTime) -> bool {
    value.time() == NaiveTime::from_hms_opt(0, 0, 0).unwrap()
}

#[test]
fn date_between_min_and_max() {
    let min = datetime(2020, 1, 1, 0, 0, 0);
    let max = datetime(2022, 1, 1, 0, 0, 0);
    for (backend, mut r) in randomizers() {
        for _ in 0..1000 {
            let value = r.date(min, max);
            assert!(value >= min && value <= max, "{:?} produced {}", backend, value);
            assert!(is_midnight(&value), "{:?} produced {}", backend, value);
        }
    }
}

#[test]
fn date_covers_short_range() {
    let min = datetime(2021, 3, 1, 0, 0, 0);
    let max = datetime(2021, 3, 3, 0, 0, 0);
    for (backend, mut r) in randomizers() {
        let values = (0..300).map(|_| r.date(min, max)).collect::<Vec<_>>();
        for day in 1..=3 {
            let expected = datetime(2021, 3, day, 0, 0, 0);
            assert!(values.contains(&expected), "{:?} never produced {}", backend, expected);
        }
    }
}

#[test]
fn date_with_inverted_range_returns_min() {
    let min = datetime(2022, 1, 1, 0, 0, 0);
    let max = datetime(2020, 1, 1, 0, 0, 0);
    for (_, mut r) in randomizers() {
        assert_eq!(r.date(min, max), min);
        assert_eq!(r.date(min, min), min);
    }
}

#[test]
fn nullable_date_is_midnight_when_present() {
    let min = datetime(2020, 1, 1, 0, 0, 0);
    let max = datetime(2022, 1, 1, 0, 0, 0);
    for (_, mut r) in randomizers() {
        let count = 100;
        let counter = run(|| r.nullable_date(min, max), count);
        counter.assert_mixed(count);
        assert!(counter.values.iter().all(|d| *d >= min && *d <= max));
        assert!(counter.values.iter().all(is_midnight));
    }
}

#[test]
fn date_time_between_min_and_max() {
    let min = datetime(2023, 1, 1, 12, 0, 0);
    let max = datetime(2023, 5, 5, 18, 0, 0);
    for (backend, mut r) in randomizers() {
        for _ in 0..1000 {
            let value = r.date_time(min, max);
            assert!(value >= min && value <= max, "{:?} produced {}", backend, value);
        }
    }
}

#[test]
fn nullable_date_time_carries_time_of_day() {
    let min = datetime(2023, 1, 1, 12, 0, 0);
    let max = datetime(2023, 5, 5, 18, 0, 0);
    for (_, mut r) in randomizers() {
        let count = 100;
        let counter = run(|| r.nullable_date_time(min, max), count);
        counter.assert_mixed(count);
        assert!(counter.values.iter().all(|d| *d >= min && *d <= max));
        assert!(counter.values.iter().any(|d| !is_midnight(d)));
    }
}

#[test]
fn date_time_with_inverted_range_returns_min() {
    let min = datetime(2023, 5, 5, 18, 0, 0);
    let max = datetime(2023, 1, 1, 12, 0, 0);
    for (_, mut r) in randomizers() {
        assert_eq!(r.date_time(min, max), min);
    }
}

#[test]
fn date_time_resolves_sub_second_spans() {
    let min = datetime(2023, 1, 1, 0, 0, 0);
    let max = min + Duration::milliseconds(999);
    for (_, mut r) in randomizers() {
        let values = (0..100).map(|_| r.date_time(min, max)).collect::<Vec<_>>();
        assert!(values.iter().all(|d| *d >= min && *d <= max));
        assert!(values.iter().any(|d| d.nanosecond() > 0));
    }
}

proptest! {
    #[test]
    fn date_stays_in_range(
        seed in any::<u64>(),
        start in 0i64..(300 * 365 * 86_400),
        width in 0i64..(20 * 365 * 86_400),
    ) {
        let epoch = datetime(1900, 1, 1, 0, 0, 0);
        let min = epoch + Duration::seconds(start);
        let max = min + Duration::seconds(width);
        let mut r = Randomizer::with_source(DefaultSource::from_seed(seed));

        let date = r.date(min, max);
        assert!(date >= min && date <= max);
        assert!(date == min || is_midnight(&date));

        let instant = r.date_time(min, max);
        assert!(instant >= min && instant <= max);
    }
}
