//! Newest-first ordering of shift groups

use std::cmp::Reverse;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use shiftboard_domain::ShiftGroup;

/// Matches the `"<weekday>, <Mon D, YYYY>"` prefix of a generated range suffix.
static LABEL_DAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+, (\w+ \d+, \d+)").expect("label day regex should compile - this is a bug")
});

/// Calendar day named inside a custom group's display name, if any.
pub fn parse_day_from_label(label: &str) -> Option<NaiveDate> {
    let captures = LABEL_DAY_REGEX.captures(label)?;
    NaiveDate::parse_from_str(captures.get(1)?.as_str(), "%b %d, %Y").ok()
}

/// Date a group sorts by.
///
/// Custom groups prefer the day embedded in their name and fall back to the
/// structured `date`; inferred groups always use `date`.
///
/// The key is per group, so a custom group's name day also applies when it
/// is compared with an inferred group. Groups built by `try_combine` name
/// the same UTC day they store in `date`, so the two only disagree for a
/// custom name written elsewhere.
pub fn effective_date(group: &ShiftGroup) -> NaiveDate {
    if group.is_custom() {
        if let Some(day) = group.custom_name.as_deref().and_then(parse_day_from_label) {
            return day;
        }
    }
    group.date
}

/// Sort newest first. Groups on the same day keep their relative order.
pub fn sort_groups(groups: &mut [ShiftGroup]) {
    groups.sort_by_cached_key(|group| Reverse(effective_date(group)));
}

#[cfg(test)]
mod tests {
    use shiftboard_domain::{Measurement, ShiftType};

    use super::*;

    fn group(id: &str, date: (i32, u32, u32), shift_type: ShiftType, name: Option<&str>) -> ShiftGroup {
        ShiftGroup {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            end_date: None,
            shift_type,
            custom_name: name.map(str::to_string),
            measurements: Vec::new(),
        }
    }

    #[test]
    fn parses_day_from_generated_suffix() {
        let day = parse_day_from_label("Week 9 (Fri, Mar 1, 2024 8:00 AM - Sat, Mar 2, 2024 6:00 AM)");
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(parse_day_from_label("Inventory"), None);
    }

    #[test]
    fn custom_name_overrides_structured_date() {
        let custom = group(
            "combined-1",
            (2024, 1, 1),
            ShiftType::Custom,
            Some("Combined Shift (Tue, Mar 5, 2024 8:00 AM - Tue, Mar 5, 2024 4:00 PM)"),
        );
        assert_eq!(effective_date(&custom), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

        let unnamed = group("combined-2", (2024, 1, 1), ShiftType::Custom, Some("Inventory"));
        assert_eq!(effective_date(&unnamed), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn inferred_groups_ignore_names() {
        let day = group("2024-01-01-day", (2024, 1, 1), ShiftType::Day, Some("Fri, Mar 1, 2024"));
        assert_eq!(effective_date(&day), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn generated_custom_names_agree_with_their_date() {
        let measurements = vec![
            Measurement {
                uuid: Some("m-1".into()),
                measurement_start: Some("2024-03-04T22:00:00Z".into()),
                measurement_end: Some("2024-03-05T06:00:00Z".into()),
                ..Measurement::default()
            },
            Measurement {
                uuid: Some("m-2".into()),
                measurement_start: Some("2024-03-05T22:00:00Z".into()),
                measurement_end: Some("2024-03-06T06:00:00Z".into()),
                ..Measurement::default()
            },
        ];
        let inferred = crate::shifts::partition(&measurements, &[]);
        let ids: Vec<_> = inferred.iter().map(|group| group.id.clone()).collect();
        let combined = crate::shifts::combine(&inferred, &ids, "Nights");

        let custom = &combined[0];
        assert!(custom.is_custom());
        assert_eq!(effective_date(custom), custom.date);
    }

    #[test]
    fn edited_custom_name_moves_group_past_inferred_ones() {
        let mut groups = vec![
            group("2024-03-03-day", (2024, 3, 3), ShiftType::Day, None),
            group("combined-1", (2024, 3, 1), ShiftType::Custom, Some("Audit (Mon, Mar 4, 2024)")),
        ];
        sort_groups(&mut groups);

        let ids: Vec<_> = groups.iter().map(|group| group.id.as_str()).collect();
        assert_eq!(ids, ["combined-1", "2024-03-03-day"]);
    }

    #[test]
    fn sorts_newest_first_and_keeps_ties_stable() {
        let mut groups = vec![
            group("a", (2024, 3, 1), ShiftType::Day, None),
            group("b", (2024, 3, 3), ShiftType::Day, None),
            group("c", (2024, 3, 1), ShiftType::Night, None),
            group("d", (2024, 3, 2), ShiftType::MultiDay, None),
        ];
        sort_groups(&mut groups);

        let ids: Vec<_> = groups.iter().map(|group| group.id.as_str()).collect();
        assert_eq!(ids, ["b", "d", "a", "c"]);
    }
}
