//! Inferred shift groups
//!
//! Each measurement with both a start and an end is classified by the UTC
//! calendar days it touches:
//!
//! | start vs. end day | shift type    | group id                  |
//! |-------------------|---------------|---------------------------|
//! | same day          | `Day Shift`   | `{date}-day`              |
//! | end = start + 1   | `Night Shift` | `{date}-night`            |
//! | anything else     | `Multi-day`   | `{start}-to-{end}`        |

use std::collections::{HashMap, HashSet};

use chrono::{Days, NaiveDate};
use shiftboard_domain::{calendar_day, Measurement, ShiftGroup, ShiftType};
use tracing::debug;

use super::ordering::sort_groups;

/// Shift type and group id for a measurement spanning `start..=end` days.
pub fn classify(start: NaiveDate, end: NaiveDate) -> (ShiftType, String) {
    if start == end {
        (ShiftType::Day, format!("{start}-day"))
    } else if start.checked_add_days(Days::new(1)) == Some(end) {
        (ShiftType::Night, format!("{start}-night"))
    } else {
        (ShiftType::MultiDay, format!("{start}-to-{end}"))
    }
}

/// Group measurements into inferred shifts, newest first.
///
/// Measurements without a parsable start or end are skipped. Measurements
/// already assigned to one of the custom groups in `existing_groups` are
/// left out so a measurement never sits in two groups. A measurement is
/// claimed when its uuid or its composite key matches a custom member, so
/// records the platform sent without a uuid are excluded too.
pub fn partition(measurements: &[Measurement], existing_groups: &[ShiftGroup]) -> Vec<ShiftGroup> {
    let claimed = Claimed::from_groups(existing_groups);

    let mut groups: Vec<ShiftGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for measurement in measurements {
        if claimed.contains(measurement) {
            continue;
        }

        let (Some(start), Some(end)) = (measurement.start(), measurement.end()) else {
            skipped += 1;
            continue;
        };

        let start_day = calendar_day(start);
        let end_day = calendar_day(end);
        let (shift_type, id) = classify(start_day, end_day);

        match positions.get(&id) {
            Some(&position) => groups[position].measurements.push(measurement.clone()),
            None => {
                positions.insert(id.clone(), groups.len());
                groups.push(ShiftGroup {
                    id,
                    date: start_day,
                    end_date: (end_day != start_day).then_some(end_day),
                    shift_type,
                    custom_name: None,
                    measurements: vec![measurement.clone()],
                });
            }
        }
    }

    if skipped > 0 {
        debug!(skipped, "Skipped measurements without start or end timestamps");
    }

    sort_groups(&mut groups);
    groups
}

/// Uuids and composite keys of every measurement held by a custom group.
struct Claimed<'a> {
    uuids: HashSet<&'a str>,
    keys: HashSet<String>,
}

impl<'a> Claimed<'a> {
    fn from_groups(groups: &'a [ShiftGroup]) -> Self {
        let members = groups
            .iter()
            .filter(|group| group.is_custom())
            .flat_map(|group| group.measurements.iter());

        let mut claimed = Self { uuids: HashSet::new(), keys: HashSet::new() };
        for member in members {
            if let Some(uuid) = member.uuid() {
                claimed.uuids.insert(uuid);
            }
            claimed.keys.insert(member.composite_key());
        }
        claimed
    }

    fn contains(&self, measurement: &Measurement) -> bool {
        measurement.uuid().is_some_and(|uuid| self.uuids.contains(uuid))
            || self.keys.contains(&measurement.composite_key())
    }
}
