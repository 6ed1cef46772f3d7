//! Shared serde helpers for wire types.

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field.
///
/// The server sends `null` rather than `{}` or `[]` for empty maps and lists
/// on some types.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
