//! Human-readable formatting for shift groups and measurements
//!
//! All output is rendered in UTC so that labels agree with the calendar
//! days the partitioner groups by.

use chrono::{DateTime, NaiveDate, Utc};
use shiftboard_domain::ShiftGroup;

const DAY_FORMAT: &str = "%a, %b %-d, %Y";
const TIME_FORMAT: &str = "%-I:%M %p";

/// `"Fri, Mar 1, 2024"`
pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// `"8:05 AM"`
pub fn format_time(instant: DateTime<Utc>) -> String {
    instant.format(TIME_FORMAT).to_string()
}

/// Whole hours and minutes, e.g. `"7:30 hrs"`. Negative input reads as zero.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 { seconds as u64 } else { 0 };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    format!("{hours}:{minutes:02} hrs")
}

/// Suffix appended to custom group names:
/// `" (Fri, Mar 1, 2024 8:00 AM - Sat, Mar 2, 2024 6:30 AM)"`.
pub fn format_range_suffix(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!(
        " ({} {} - {} {})",
        format_day(start.date_naive()),
        format_time(start),
        format_day(end.date_naive()),
        format_time(end)
    )
}

/// `"8:00 AM - 4:00 PM"` for a group, empty when it has no timed measurements.
pub fn format_group_time_range(group: &ShiftGroup) -> String {
    group
        .time_range()
        .map(|(start, end)| format!("{} - {}", format_time(start), format_time(end)))
        .unwrap_or_default()
}

/// Heading shown for a group in the dashboard list.
pub fn group_title(group: &ShiftGroup) -> String {
    if group.is_custom() {
        if let Some(name) = &group.custom_name {
            return name.clone();
        }
    }

    let mut title = format_day(group.date);
    if let Some(end) = group.end_date.filter(|end| *end != group.date) {
        title.push_str(" - ");
        title.push_str(&format_day(end));
    }
    title.push_str(&format!(" {} ({} measurements)", group.shift_type, group.measurements.len()));

    let range = format_group_time_range(group);
    if !range.is_empty() {
        title.push(' ');
        title.push_str(&range);
    }
    title
}

#[cfg(test)]
mod tests {
    use shiftboard_domain::{parse_timestamp, Measurement, ShiftType};

    use super::*;

    fn instant(raw: &str) -> DateTime<Utc> {
        parse_timestamp(raw).unwrap()
    }

    #[test]
    fn formats_days_and_times_without_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_day(date), "Fri, Mar 1, 2024");
        assert_eq!(format_time(instant("2024-03-01T08:05:00Z")), "8:05 AM");
        assert_eq!(format_time(instant("2024-03-01T18:30:00Z")), "6:30 PM");
        assert_eq!(format_time(instant("2024-03-01T00:00:00Z")), "12:00 AM");
    }

    #[test]
    fn range_suffix_spans_both_days() {
        let suffix =
            format_range_suffix(instant("2024-03-01T22:00:00Z"), instant("2024-03-02T06:30:00Z"));
        assert_eq!(suffix, " (Fri, Mar 1, 2024 10:00 PM - Sat, Mar 2, 2024 6:30 AM)");
    }

    #[test]
    fn durations_round_down_to_minutes() {
        assert_eq!(format_duration(27_000.0), "7:30 hrs");
        assert_eq!(format_duration(59.0), "0:00 hrs");
        assert_eq!(format_duration(-5.0), "0:00 hrs");
        assert_eq!(format_duration(36_000.9), "10:00 hrs");
    }

    #[test]
    fn inferred_group_title_lists_type_count_and_range() {
        let group = ShiftGroup {
            id: "2024-03-01-night".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 2),
            shift_type: ShiftType::Night,
            custom_name: None,
            measurements: vec![Measurement {
                measurement_start: Some("2024-03-01T22:00:00Z".into()),
                measurement_end: Some("2024-03-02T06:00:00Z".into()),
                ..Measurement::default()
            }],
        };

        assert_eq!(
            group_title(&group),
            "Fri, Mar 1, 2024 - Sat, Mar 2, 2024 Night Shift (1 measurements) 10:00 PM - 6:00 AM"
        );
    }

    #[test]
    fn custom_group_title_is_its_name() {
        let group = ShiftGroup {
            id: "combined-x".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: None,
            shift_type: ShiftType::Custom,
            custom_name: Some("Inventory week".into()),
            measurements: Vec::new(),
        };
        assert_eq!(group_title(&group), "Inventory week");
        assert_eq!(format_group_time_range(&group), "");
    }
}
