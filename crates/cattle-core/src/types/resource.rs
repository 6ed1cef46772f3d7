//! Common resource base.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::serde_util::null_as_default;

/// Identity and routing data carried by every resource.
///
/// Each resource struct embeds this (flattened) so the dispatcher can find
/// the resource's `self` link for update/delete and its action URLs without
/// knowing anything else about the type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBase {
    /// Server-assigned opaque id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Wire type tag, e.g. `cluster`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// Named links (`self`, `remove`, `update`, sub-collections, ...).
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub links: BTreeMap<String, String>,

    /// Named actions currently available on this resource.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub actions: BTreeMap<String, String>,
}

impl ResourceBase {
    /// Create a base carrying only an id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Returns the server-assigned id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the wire type tag, if any.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Returns the URL of a named link.
    pub fn link(&self, name: &str) -> Option<&str> {
        self.links.get(name).map(String::as_str)
    }

    /// Returns the resource's canonical URL.
    pub fn self_link(&self) -> Option<&str> {
        self.link("self")
    }

    /// Returns the URL of a named action, if the server currently offers it.
    pub fn action_url(&self, name: &str) -> Option<&str> {
        self.actions.get(name).map(String::as_str)
    }
}
