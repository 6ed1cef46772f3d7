//! Paginated collections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::serde_util::null_as_default;

/// Pagination block of a collection page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    /// Cursor URL of the following page. Absent or empty on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default)]
    pub partial: bool,
}

/// Everything about a collection page except its items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMeta {
    /// Always `collection` on the wire.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// Type of the items in `data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub links: BTreeMap<String, String>,

    /// Collection-scoped actions.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub actions: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
}

impl CollectionMeta {
    /// Returns the next-page cursor, treating an empty string as absent.
    pub fn next_link(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.next.as_deref())
            .filter(|next| !next.is_empty())
    }

    /// Returns the URL of a collection action, if offered.
    pub fn action_url(&self, name: &str) -> Option<&str> {
        self.actions.get(name).map(String::as_str)
    }
}

/// One page of resources of a single type.
///
/// Collections are plain data: they keep no reference to the client that
/// fetched them. Continue paging with
/// [`ResourceClient::next`](crate::ResourceClient::next).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    #[serde(flatten)]
    pub meta: CollectionMeta,

    /// Items of this page, in server order.
    #[serde(
        default = "Vec::new",
        deserialize_with = "null_as_default",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub data: Vec<T>,
}

impl<T> Collection<T> {
    /// Returns the next-page cursor, if more pages exist.
    pub fn next_link(&self) -> Option<&str> {
        self.meta.next_link()
    }

    /// Number of items in this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            meta: CollectionMeta::default(),
            data: Vec::new(),
        }
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
