//! Physical sensors and sensor sets
//!
//! A set identifier such as `"32-A"` names a trio of sensors. The letter
//! selects a base number from [`SET_LETTER_BASES`]; the left, middle and
//! right sensors are `base`, `base + 1` and `base + 2`.
//!
//! [`SET_LETTER_BASES`]: crate::constants::SET_LETTER_BASES

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::set_letter_base;
use crate::impl_label_conversions;

/// Position of a sensor within its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    #[serde(rename = "Left Sensor")]
    Left,
    #[serde(rename = "Middle Sensor")]
    Middle,
    #[serde(rename = "Right Sensor")]
    Right,
}

impl_label_conversions!(SensorKind {
    Left => "Left Sensor",
    Middle => "Middle Sensor",
    Right => "Right Sensor",
});

impl SensorKind {
    /// Offset from the set's base sensor number.
    pub const fn offset(self) -> u32 {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }
}

/// A physical sensor; derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(rename = "type")]
    pub kind: SensorKind,
    pub number: u32,
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.number)
    }
}

/// A parsed `"<number>-<letter>"` set identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorSet {
    pub name: String,
    pub letter: char,
    pub base: u32,
}

impl SensorSet {
    /// Parse a set identifier.
    ///
    /// Returns `None` when the separator is missing, either half is empty,
    /// or the letter is not one of the known set letters. Anything after a
    /// second `-` is ignored.
    pub fn parse(name: &str) -> Option<Self> {
        let mut parts = name.split('-');
        let number = parts.next()?;
        let letter_part = parts.next()?;
        if number.is_empty() {
            return None;
        }

        let mut letters = letter_part.chars();
        let letter = letters.next()?;
        if letters.next().is_some() {
            return None;
        }

        let base = set_letter_base(letter)?;
        Some(Self { name: name.to_string(), letter, base })
    }

    /// The three sensors expected for this set, left to right.
    pub fn expected_sensors(&self) -> [Sensor; 3] {
        [SensorKind::Left, SensorKind::Middle, SensorKind::Right]
            .map(|kind| Sensor { kind, number: self.base + kind.offset() })
    }
}

/// Which expected sensors of a set have been uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SensorReport {
    pub missing: Vec<Sensor>,
    pub uploaded: Vec<Sensor>,
}

impl SensorReport {
    /// Report with nothing known either way.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.uploaded.is_empty()
    }

    pub fn missing_labels(&self) -> Vec<String> {
        self.missing.iter().map(ToString::to_string).collect()
    }

    pub fn uploaded_labels(&self) -> Vec<String> {
        self.uploaded.iter().map(ToString::to_string).collect()
    }
}
