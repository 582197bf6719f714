//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Sensor sets: each set letter names three consecutive sensor numbers
// starting at the listed base (left, middle, right).
pub const SET_LETTER_BASES: [(char, u32); 8] = [
    ('A', 768),
    ('B', 771),
    ('C', 774),
    ('D', 777),
    ('E', 780),
    ('F', 783),
    ('G', 786),
    ('H', 789),
];

// Shift grouping
pub const DEFAULT_CUSTOM_GROUP_NAME: &str = "Combined Shift";
pub const CUSTOM_GROUP_ID_PREFIX: &str = "combined-";
pub const MIN_GROUPS_TO_COMBINE: usize = 2;

// Vendor feed
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_MAX_ATTEMPTS: usize = 3;

// Persistence
pub const STORAGE_NAMESPACE: &str = "shiftboard-data";
pub const STORAGE_VERSION: u32 = 0;
pub const DEFAULT_STORAGE_DIR: &str = ".shiftboard";

// Server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// Look up the base sensor number for a set letter.
pub fn set_letter_base(letter: char) -> Option<u32> {
    SET_LETTER_BASES.iter().find(|(candidate, _)| *candidate == letter).map(|(_, base)| *base)
}
