//! Shift grouping engine
//!
//! Pure transformations over already-fetched measurements: partitioning into
//! inferred day/night/multi-day groups, merging groups into custom ones, and
//! reconciling custom groups against a fresh feed. Nothing here performs I/O.

pub mod merge;
pub mod ordering;
pub mod partition;
pub mod reconcile;

pub use merge::{combine, try_combine};
pub use ordering::{effective_date, sort_groups};
pub use partition::partition;
pub use reconcile::{reconcile, MeasurementMatcher, Reconciler};
