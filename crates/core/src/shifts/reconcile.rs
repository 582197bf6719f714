//! Refreshing custom groups against a newly fetched feed
//!
//! Custom groups hold copies of measurements taken when they were created.
//! After every refetch each copy is swapped for its fresh counterpart, found
//! by trying a fixed list of matchers in order. A copy nothing matches stays
//! as it was, so a measurement that vanished upstream is kept rather than
//! dropped.

use std::collections::HashMap;

use shiftboard_domain::{Measurement, ShiftGroup};
use tracing::debug;

use super::ordering::sort_groups;
use super::partition::partition;

/// Fresh feed records plus a lookup by composite key and uuid.
pub struct FreshMeasurements<'a> {
    items: &'a [Measurement],
    index: HashMap<String, &'a Measurement>,
}

impl<'a> FreshMeasurements<'a> {
    pub fn new(items: &'a [Measurement]) -> Self {
        let mut index = HashMap::with_capacity(items.len() * 2);
        for measurement in items {
            index.insert(measurement.composite_key(), measurement);
            if let Some(uuid) = measurement.uuid() {
                index.insert(uuid.to_string(), measurement);
            }
        }
        Self { items, index }
    }

    pub fn items(&self) -> &'a [Measurement] {
        self.items
    }

    pub fn lookup(&self, key: &str) -> Option<&'a Measurement> {
        self.index.get(key).copied()
    }
}

/// One strategy for finding the fresh record behind a stale copy.
pub trait MeasurementMatcher: Send + Sync {
    fn name(&self) -> &'static str;

    fn find<'a>(&self, stale: &Measurement, fresh: &FreshMeasurements<'a>) -> Option<&'a Measurement>;
}

/// Lookup by `"{imu_set}:{start}:{end}"`.
pub struct CompositeKeyMatcher;

impl MeasurementMatcher for CompositeKeyMatcher {
    fn name(&self) -> &'static str {
        "composite_key"
    }

    fn find<'a>(&self, stale: &Measurement, fresh: &FreshMeasurements<'a>) -> Option<&'a Measurement> {
        fresh.lookup(&stale.composite_key())
    }
}

/// Lookup by uuid.
pub struct UuidMatcher;

impl MeasurementMatcher for UuidMatcher {
    fn name(&self) -> &'static str {
        "uuid"
    }

    fn find<'a>(&self, stale: &Measurement, fresh: &FreshMeasurements<'a>) -> Option<&'a Measurement> {
        stale.uuid().and_then(|uuid| fresh.lookup(uuid))
    }
}

/// Linear scan comparing set and recording window field by field.
pub struct WindowScanMatcher;

impl MeasurementMatcher for WindowScanMatcher {
    fn name(&self) -> &'static str {
        "window_scan"
    }

    fn find<'a>(&self, stale: &Measurement, fresh: &FreshMeasurements<'a>) -> Option<&'a Measurement> {
        fresh.items().iter().find(|candidate| candidate.same_window(stale))
    }
}

/// Composite key, then uuid, then a full scan.
pub fn default_matchers() -> Vec<Box<dyn MeasurementMatcher>> {
    vec![Box::new(CompositeKeyMatcher), Box::new(UuidMatcher), Box::new(WindowScanMatcher)]
}

pub struct Reconciler {
    matchers: Vec<Box<dyn MeasurementMatcher>>,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(default_matchers())
    }
}

impl Reconciler {
    pub fn new(matchers: Vec<Box<dyn MeasurementMatcher>>) -> Self {
        Self { matchers }
    }

    pub fn matcher_names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|matcher| matcher.name()).collect()
    }

    /// First fresh record any matcher finds, with the matcher's name.
    pub fn resolve<'a>(
        &self,
        stale: &Measurement,
        fresh: &FreshMeasurements<'a>,
    ) -> Option<(&'static str, &'a Measurement)> {
        self.matchers
            .iter()
            .find_map(|matcher| matcher.find(stale, fresh).map(|found| (matcher.name(), found)))
    }

    /// Rebuild the group list after a measurements refetch.
    ///
    /// Custom groups keep their identity and have their measurements
    /// refreshed. Inferred groups are recomputed from `fresh`, excluding
    /// anything the current custom groups already hold.
    pub fn reconcile(&self, fresh: &[Measurement], current: &[ShiftGroup]) -> Vec<ShiftGroup> {
        let lookup = FreshMeasurements::new(fresh);
        let mut retained = 0usize;

        let mut groups: Vec<ShiftGroup> = current
            .iter()
            .filter(|group| group.is_custom())
            .map(|group| {
                let measurements = group
                    .measurements
                    .iter()
                    .map(|stale| match self.resolve(stale, &lookup) {
                        Some((_, found)) => found.clone(),
                        None => {
                            retained += 1;
                            stale.clone()
                        }
                    })
                    .collect();
                ShiftGroup { measurements, ..group.clone() }
            })
            .collect();

        if retained > 0 {
            debug!(retained, "Kept stale measurements missing from the refreshed feed");
        }

        groups.extend(partition(fresh, current));
        sort_groups(&mut groups);
        groups
    }
}

/// [`Reconciler::reconcile`] with the default matchers.
pub fn reconcile(fresh: &[Measurement], current: &[ShiftGroup]) -> Vec<ShiftGroup> {
    Reconciler::default().reconcile(fresh, current)
}
