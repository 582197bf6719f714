//! Domain types and models
//!
//! Feed records arrive from the measurement platform as JSON and keep the
//! platform's snake_case field names. Shift groups and persisted state use
//! the camelCase layout the dashboard has always stored.

pub mod feed;
pub mod measurement;
pub mod sensor;
pub mod shift;
pub mod state;
pub mod upload;

pub use feed::FeedPage;
pub use measurement::{Measurement, MeasurementStatus};
pub use sensor::{Sensor, SensorKind, SensorReport, SensorSet};
pub use shift::{ShiftGroup, ShiftType};
pub use state::PersistedState;
pub use upload::Upload;
