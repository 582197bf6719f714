//! Shared test helpers for `shiftboard-core` integration tests.
//!
//! Lightweight in-memory implementations of the store ports plus record
//! builders, so store tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod feed;
pub mod repositories;

use shiftboard_domain::{Measurement, Upload};

pub fn measurement(uuid: &str, set: &str, start: &str, end: &str) -> Measurement {
    Measurement {
        uuid: Some(uuid.into()),
        imu_set: Some(set.into()),
        measurement_start: Some(start.into()),
        measurement_end: Some(end.into()),
        processing_finished: true,
        ..Measurement::default()
    }
}

pub fn upload(uuid: &str, file_name: &str, group_uuid: Option<&str>) -> Upload {
    Upload {
        uuid: uuid.into(),
        upload_file_name: file_name.into(),
        group_uuid: group_uuid.map(str::to_string),
        processing_finished: true,
        ..Upload::default()
    }
}
