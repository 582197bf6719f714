//! Merging selected groups into one custom group

use std::collections::HashSet;

use shiftboard_domain::constants::{
    CUSTOM_GROUP_ID_PREFIX, DEFAULT_CUSTOM_GROUP_NAME, MIN_GROUPS_TO_COMBINE,
};
use shiftboard_domain::{calendar_day, Measurement, ShiftGroup, ShiftType};
use tracing::{debug, warn};
use uuid::Uuid;

use super::ordering::sort_groups;
use crate::utils::format::format_range_suffix;

/// Fresh id for a custom group. Time-ordered, never reused.
pub fn new_custom_group_id() -> String {
    format!("{CUSTOM_GROUP_ID_PREFIX}{}", Uuid::now_v7())
}

/// Combine the groups named by `selected_ids` into a single custom group.
///
/// Returns `None` when the request is a no-op: fewer than two distinct ids,
/// or the selected groups hold no measurement with a usable start and end.
/// Otherwise the returned list has the originals removed and the new group
/// added, sorted newest first.
pub fn try_combine<S: AsRef<str>>(
    groups: &[ShiftGroup],
    selected_ids: &[S],
    custom_name: &str,
) -> Option<Vec<ShiftGroup>> {
    let selected: HashSet<&str> = selected_ids.iter().map(AsRef::as_ref).collect();
    if selected.len() < MIN_GROUPS_TO_COMBINE {
        debug!(selected = selected.len(), "Ignoring combine with fewer than two groups");
        return None;
    }

    let mut measurements: Vec<Measurement> = groups
        .iter()
        .filter(|group| selected.contains(group.id.as_str()))
        .flat_map(|group| group.measurements.iter().cloned())
        .collect();

    if measurements.is_empty() {
        warn!(selected = selected.len(), "Selected groups hold no measurements, nothing to combine");
        return None;
    }

    measurements.sort_by_cached_key(|measurement| {
        let start = measurement.start();
        (start.is_none(), start)
    });

    let earliest_start = measurements.iter().filter_map(Measurement::start).min();
    let latest_end = measurements.iter().filter_map(Measurement::end).max();
    let (Some(start), Some(end)) = (earliest_start, latest_end) else {
        warn!("Selected groups have no timed measurements, nothing to combine");
        return None;
    };

    let base_name = match custom_name.trim() {
        "" => DEFAULT_CUSTOM_GROUP_NAME,
        trimmed => trimmed,
    };

    let combined = ShiftGroup {
        id: new_custom_group_id(),
        date: calendar_day(start),
        end_date: Some(calendar_day(end)),
        shift_type: ShiftType::Custom,
        custom_name: Some(format!("{base_name}{}", format_range_suffix(start, end))),
        measurements,
    };

    debug!(
        group_id = %combined.id,
        merged_groups = selected.len(),
        measurements = combined.measurements.len(),
        "Combined shift groups"
    );

    let mut result = Vec::with_capacity(groups.len() + 1);
    result.push(combined);
    result.extend(groups.iter().filter(|group| !selected.contains(group.id.as_str())).cloned());
    sort_groups(&mut result);
    Some(result)
}

/// Like [`try_combine`], returning the input unchanged for a no-op.
pub fn combine<S: AsRef<str>>(
    groups: &[ShiftGroup],
    selected_ids: &[S],
    custom_name: &str,
) -> Vec<ShiftGroup> {
    try_combine(groups, selected_ids, custom_name).unwrap_or_else(|| groups.to_vec())
}
