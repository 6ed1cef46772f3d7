//! Resource and schema traits.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::types::ResourceBase;

/// Static wire description of a type: its type name and field keys.
///
/// Implemented by resources and by the plain input/output types of actions.
pub trait Schema {
    /// Wire type name, e.g. `cluster`.
    const TYPE: &'static str;

    /// Wire key of every field, in declaration order. Keys of the common
    /// [`ResourceBase`] are not included.
    const FIELDS: &'static [&'static str];

    /// Whether `key` is one of this type's wire fields.
    fn has_field(key: &str) -> bool {
        Self::FIELDS.contains(&key)
    }
}

/// A server-side resource type that can be driven by a
/// [`ResourceClient`](crate::ResourceClient).
pub trait Resource: Schema + Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Returns the embedded identity and routing data.
    fn base(&self) -> &ResourceBase;

    /// Returns the server-assigned id, if any.
    fn id(&self) -> Option<&str> {
        self.base().id()
    }
}
