//! Sensor resolution
//!
//! Works out which of the three sensors expected for a measurement's set
//! have been uploaded, using whatever correlation data the platform offers.

pub mod filename;
pub mod resolver;

pub use filename::sensor_number_from_filename;
pub use resolver::{resolve_sensors, CorrelationSource};
