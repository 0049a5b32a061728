use clock_arith::weekday::{weekday_name, WEEK};
use clock_arith::{add_duration, add_time, ClockTime, Duration, Meridiem, MINUTES_PER_DAY};
use proptest::prelude::*;

fn clock_time() -> impl Strategy<Value = ClockTime> {
    (1u32..=12, 0u32..60, prop::bool::ANY).prop_map(|(h, m, pm)| {
        let period = if pm { Meridiem::Pm } else { Meridiem::Am };
        ClockTime::new(h, m, period).unwrap()
    })
}

fn duration() -> impl Strategy<Value = Duration> {
    (0u64..10_000, 0u64..100).prop_map(|(h, m)| Duration::new(h, m))
}

/// `H:MM AM|PM` with H in 1-12 and a zero-padded minute.
fn is_clock_string(s: &str) -> bool {
    let Some((time, period)) = s.split_once(' ') else {
        return false;
    };
    let Some((h, m)) = time.split_once(':') else {
        return false;
    };
    let hour_ok = h.parse::<u32>().is_ok_and(|h| (1..=12).contains(&h)) && !h.starts_with('0');
    let minute_ok = m.len() == 2 && m.parse::<u32>().is_ok_and(|m| m < 60);
    hour_ok && minute_ok && (period == "AM" || period == "PM")
}

proptest! {
    #[test]
    fn result_time_is_well_formed(start in clock_time(), d in duration()) {
        let added = add_duration(start, d, None).unwrap();
        let rendered = added.time.to_string();
        prop_assert!(is_clock_string(&rendered), "bad time: {}", rendered);
    }

    #[test]
    fn zero_duration_is_identity(start in clock_time()) {
        let out = add_time(&start.to_string(), "0:00", None).unwrap();
        prop_assert_eq!(out, start.to_string());
    }

    #[test]
    fn matches_minute_arithmetic(start in clock_time(), d in duration()) {
        let added = add_duration(start, d, None).unwrap();
        let total = start.minute_of_day() as u64 + d.total_minutes().unwrap();
        prop_assert_eq!(added.days_later, total / MINUTES_PER_DAY as u64);
        prop_assert_eq!(added.time.minute_of_day() as u64, total % MINUTES_PER_DAY as u64);
    }

    #[test]
    fn suffix_follows_days_later(start in clock_time(), d in duration()) {
        let added = add_duration(start, d, None).unwrap();
        let out = added.to_string();
        match added.days_later {
            0 => prop_assert!(!out.contains('(')),
            1 => prop_assert!(out.ends_with(" (next day)")),
            n => {
                let expected = format!(" ({} days later)", n);
                prop_assert!(out.ends_with(&expected));
            }
        }
    }

    #[test]
    fn weekday_rolls_over_modulo_seven(
        start in clock_time(),
        d in duration(),
        day_index in 0usize..7,
        upper in prop::bool::ANY,
    ) {
        let day = WEEK[day_index];
        let name = if upper {
            weekday_name(day).to_uppercase()
        } else {
            weekday_name(day).to_lowercase()
        };
        let added = clock_arith::add_time_detailed(&start.to_string(), &d.to_string(), Some(name.as_str()))
            .unwrap();
        let expected = WEEK[(day_index + (added.days_later % 7) as usize) % 7];
        prop_assert_eq!(added.weekday, Some(expected));
        let expected_fragment = format!(", {}", weekday_name(expected));
        prop_assert!(added.to_string().contains(&expected_fragment));
    }

    #[test]
    fn adding_whole_days_keeps_time(start in clock_time(), days in 0u64..400) {
        let added = add_duration(start, Duration::new(days * 24, 0), None).unwrap();
        prop_assert_eq!(added.time, start);
        prop_assert_eq!(added.days_later, days);
    }
}
