use chrono::{NaiveTime, Timelike};

/// First bookable hour (10:00 AM).
pub const FIRST_SLOT_HOUR: u32 = 10;
/// Number of hourly slots per day; the last one starts at 7:00 PM.
pub const SLOT_COUNT: usize = 10;

/// The fixed daily slots, earliest first.
pub fn all_slots() -> impl Iterator<Item = NaiveTime> {
    (0..SLOT_COUNT as u32).filter_map(|i| NaiveTime::from_hms_opt(FIRST_SLOT_HOUR + i, 0, 0))
}

/// Labels of the fixed daily slots, e.g. `"10:00 AM"` .. `"7:00 PM"`.
pub fn all_labels() -> Vec<String> {
    all_slots().map(format_label).collect()
}

pub fn is_slot(time: NaiveTime) -> bool {
    all_slots().any(|slot| slot == time)
}

/// Render a time of day as a 12-hour label: `13:00:00` becomes `"1:00 PM"`.
pub fn format_label(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, time.minute(), suffix)
}

/// Accepts a 12-hour label (`"2:00 PM"`) or a 24-hour time (`"14:00"`, `"14:00:00"`).
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    ["%I:%M %p", "%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(input, fmt).ok())
}

/// Parse `input` and require it to be one of the fixed slots.
pub fn parse_slot(input: &str) -> Option<NaiveTime> {
    parse_time(input).filter(|t| is_slot(*t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_fixed_slot_labels() {
        assert_eq!(
            all_labels(),
            vec![
                "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
                "5:00 PM", "6:00 PM", "7:00 PM",
            ]
        );
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(at(14, 0)), "2:00 PM");
        assert_eq!(format_label(at(13, 0)), "1:00 PM");
        assert_eq!(format_label(at(12, 0)), "12:00 PM");
        assert_eq!(format_label(at(0, 30)), "12:30 AM");
        assert_eq!(format_label(at(9, 5)), "9:05 AM");
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time("2:00 PM"), Some(at(14, 0)));
        assert_eq!(parse_time("10:00 AM"), Some(at(10, 0)));
        assert_eq!(parse_time("14:00:00"), Some(at(14, 0)));
        assert_eq!(parse_time(" 19:00 "), Some(at(19, 0)));
        assert_eq!(parse_time("teatime"), None);
    }

    #[test]
    fn test_parse_slot_rejects_off_grid_times() {
        assert_eq!(parse_slot("7:00 PM"), Some(at(19, 0)));
        assert_eq!(parse_slot("8:00 PM"), None);
        assert_eq!(parse_slot("10:30 AM"), None);
        assert_eq!(parse_slot("09:00"), None);
    }

    #[test]
    fn test_labels_round_trip_through_parse() {
        for slot in all_slots() {
            assert_eq!(parse_slot(&format_label(slot)), Some(slot));
        }
    }
}
