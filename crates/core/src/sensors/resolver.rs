//! Missing-sensor detection for a measurement
//!
//! # Algorithm
//! 1. Parse the measurement's set identifier and derive the three expected
//!    sensors. Unknown or malformed sets resolve to an empty report.
//! 2. Try the correlation sources in priority order and stop at the first
//!    one that applies:
//!    - the platform's explicit `missing_fragment_ids` list
//!    - uploads sharing the measurement's `group_uuid`
//!    - uploads that reference the set by fragment list or file name
//! 3. With no correlation at all, every expected sensor counts as missing.

use std::collections::HashSet;

use shiftboard_domain::{Measurement, Sensor, SensorReport, SensorSet, Upload};
use tracing::debug;

use super::filename::{sensor_number_from_filename, set_marker};

/// Which piece of data decided a sensor report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationSource {
    /// Nothing to resolve (no set, unknown set or no uploads at all).
    Unresolvable,
    ExplicitMissingList,
    GroupUploads,
    SetUploads,
    /// No correlated uploads found; all sensors assumed missing.
    Default,
}

/// Resolve which expected sensors of `measurement`'s set are missing.
///
/// Pure function of its inputs. Never fails: anything it cannot make sense
/// of yields an empty report or the conservative "all missing" default.
pub fn resolve_sensors(measurement: &Measurement, uploads: &[Upload]) -> SensorReport {
    resolve_with_source(measurement, uploads).0
}

/// Like [`resolve_sensors`], also reporting which source decided.
pub fn resolve_with_source(
    measurement: &Measurement,
    uploads: &[Upload],
) -> (SensorReport, CorrelationSource) {
    let Some(set_name) = measurement.imu_set.as_deref().filter(|name| !name.is_empty()) else {
        return (SensorReport::empty(), CorrelationSource::Unresolvable);
    };
    if uploads.is_empty() {
        return (SensorReport::empty(), CorrelationSource::Unresolvable);
    }
    let Some(set) = SensorSet::parse(set_name) else {
        debug!(set = set_name, "unrecognised sensor set identifier");
        return (SensorReport::empty(), CorrelationSource::Unresolvable);
    };
    let expected = set.expected_sensors();

    if let Some(listed) = measurement.missing_fragment_ids.as_deref().filter(|ids| !ids.is_empty())
    {
        let missing_numbers = parse_sensor_numbers(listed);
        let report = partition_sensors(&expected, |sensor| !missing_numbers.contains(&sensor.number));
        return (report, CorrelationSource::ExplicitMissingList);
    }

    if let Some(group_uuid) = measurement.group_uuid.as_deref().filter(|uuid| !uuid.is_empty()) {
        let related: Vec<&Upload> = uploads
            .iter()
            .filter(|upload| upload.group_uuid.as_deref() == Some(group_uuid))
            .collect();
        if !related.is_empty() {
            return (classify_by_filenames(&expected, &related), CorrelationSource::GroupUploads);
        }
    }

    let marker = set_marker(set_name);
    let set_uploads: Vec<&Upload> = uploads
        .iter()
        .filter(|upload| {
            upload.contains_fragment(set_name) || upload.upload_file_name.contains(&marker)
        })
        .collect();
    if !set_uploads.is_empty() {
        return (classify_by_filenames(&expected, &set_uploads), CorrelationSource::SetUploads);
    }

    let report = SensorReport { missing: expected.to_vec(), uploaded: Vec::new() };
    (report, CorrelationSource::Default)
}

/// Parse a comma-separated list of sensor numbers.
///
/// Each entry is trimmed; entries with no leading digits are skipped and
/// trailing garbage after the digits is ignored (`"769x"` reads as 769).
fn parse_sensor_numbers(listed: &str) -> HashSet<u32> {
    listed
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let digits: String = entry.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        })
        .collect()
}

fn classify_by_filenames(expected: &[Sensor], uploads: &[&Upload]) -> SensorReport {
    let uploaded_numbers: HashSet<u32> = uploads
        .iter()
        .filter_map(|upload| sensor_number_from_filename(&upload.upload_file_name))
        .collect();
    partition_sensors(expected, |sensor| uploaded_numbers.contains(&sensor.number))
}

fn partition_sensors(expected: &[Sensor], is_uploaded: impl Fn(&Sensor) -> bool) -> SensorReport {
    let (uploaded, missing): (Vec<Sensor>, Vec<Sensor>) =
        expected.iter().copied().partition(|sensor| is_uploaded(sensor));
    SensorReport { missing, uploaded }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(set: &str) -> Measurement {
        Measurement { uuid: Some("m-1".into()), imu_set: Some(set.into()), ..Measurement::default() }
    }

    fn upload(file_name: &str) -> Upload {
        Upload { uuid: format!("u-{file_name}"), upload_file_name: file_name.into(), ..Upload::default() }
    }

    #[test]
    fn explicit_missing_list_wins() {
        let mut m = measurement("32-A");
        m.missing_fragment_ids = Some("769".into());
        // A group upload that would otherwise claim every sensor is ignored.
        m.group_uuid = Some("g1".into());
        let mut grouped = upload("Sensor_769.bin");
        grouped.group_uuid = Some("g1".into());

        let (report, source) = resolve_with_source(&m, &[grouped]);
        assert_eq!(source, CorrelationSource::ExplicitMissingList);
        assert_eq!(report.missing_labels(), vec!["Middle Sensor (769)"]);
        assert_eq!(report.uploaded_labels(), vec!["Left Sensor (768)", "Right Sensor (770)"]);
    }

    #[test]
    fn explicit_list_without_numbers_means_all_uploaded() {
        let mut m = measurement("32-A");
        m.missing_fragment_ids = Some(" , ,abc".into());

        let (report, source) = resolve_with_source(&m, &[upload("unrelated.bin")]);
        assert_eq!(source, CorrelationSource::ExplicitMissingList);
        assert!(report.missing.is_empty());
        assert_eq!(report.uploaded.len(), 3);
    }

    #[test]
    fn group_uploads_with_unparsable_names_yield_all_missing() {
        let mut m = measurement("32-A");
        m.group_uuid = Some("g1".into());
        let mut grouped = upload("archive.zip");
        grouped.group_uuid = Some("g1".into());
        // Would match the set fallback, but the group match returns first.
        let set_upload = upload("Set_32-A_Sensor_768.bin");

        let (report, source) = resolve_with_source(&m, &[grouped, set_upload]);
        assert_eq!(source, CorrelationSource::GroupUploads);
        assert_eq!(report.missing.len(), 3);
        assert!(report.uploaded.is_empty());
    }

    #[test]
    fn falls_back_to_set_references() {
        let m = measurement("5-C");
        let by_name = upload("Set_5-C_Sensor_774.bin");
        let mut by_fragment = upload("sensor_776.bin");
        by_fragment.contained_measurement_fragments = Some(vec!["5-C".into()]);
        let unrelated = upload("Set_6-C_Sensor_775.bin");

        let (report, source) = resolve_with_source(&m, &[by_name, by_fragment, unrelated]);
        assert_eq!(source, CorrelationSource::SetUploads);
        assert_eq!(report.uploaded_labels(), vec!["Left Sensor (774)", "Right Sensor (776)"]);
        assert_eq!(report.missing_labels(), vec!["Middle Sensor (775)"]);
    }

    #[test]
    fn group_without_matching_uploads_falls_through() {
        let mut m = measurement("5-C");
        m.group_uuid = Some("g-unknown".into());

        let (_, source) = resolve_with_source(&m, &[upload("Set_5-C_Sensor_774.bin")]);
        assert_eq!(source, CorrelationSource::SetUploads);
    }

    #[test]
    fn no_correlation_reports_everything_missing() {
        let (report, source) = resolve_with_source(&measurement("1-B"), &[upload("other.bin")]);
        assert_eq!(source, CorrelationSource::Default);
        assert_eq!(
            report.missing_labels(),
            vec!["Left Sensor (771)", "Middle Sensor (772)", "Right Sensor (773)"]
        );
    }

    #[test]
    fn unresolvable_inputs_give_empty_report() {
        let uploads = [upload("Sensor_768.bin")];
        assert!(resolve_sensors(&measurement("32-Z"), &uploads).is_empty());
        assert!(resolve_sensors(&measurement("32A"), &uploads).is_empty());
        assert!(resolve_sensors(&Measurement::default(), &uploads).is_empty());

        let mut m = measurement("32-A");
        m.missing_fragment_ids = Some("769".into());
        assert!(resolve_sensors(&m, &[]).is_empty());
    }

    #[test]
    fn parses_sensor_numbers_leniently() {
        let numbers = parse_sensor_numbers("768, 769x ,, x770, 771");
        assert!(numbers.contains(&768));
        assert!(numbers.contains(&769));
        assert!(!numbers.contains(&770));
        assert!(numbers.contains(&771));
    }
}
