//! Upload file naming convention
//!
//! Sensor files are uploaded with names like `Set_32-A_Sensor_768_0001.bin`.
//! Everything that depends on that convention goes through this module.

use once_cell::sync::Lazy;
use regex::Regex;

static SENSOR_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Sensor_(\d+)").expect("SENSOR_NUMBER_REGEX should compile - this is a bug")
});

/// Sensor number embedded in an upload file name (`Sensor_<digits>`,
/// case-insensitive). Only the first occurrence counts.
pub fn sensor_number_from_filename(file_name: &str) -> Option<u32> {
    SENSOR_NUMBER_REGEX
        .captures(file_name)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Marker an upload file name carries when it belongs to `set_name`.
pub fn set_marker(set_name: &str) -> String {
    format!("Set_{set_name}")
}
