//! Lenient decoding for feed fields the platform sometimes sends as `null`

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default instead of failing.
///
/// Pair with `#[serde(default)]` so a missing field behaves the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
