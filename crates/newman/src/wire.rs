//! Serde helpers for the JSON wire form.

use serde::{Deserialize, Deserializer};

/// Decodes a field, treating an explicit `null` the same as a missing value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
