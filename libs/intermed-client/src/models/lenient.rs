//! Field deserializers for the loosely typed portal records.

use serde::{Deserialize, Deserializer};

/// Read `null` as the type's zero value (`""`, `0`, `false`).
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
