//! The server's published schema document.
//!
//! The API root advertises a collection of `schema` entries describing every
//! type: where its collection lives, which HTTP methods it accepts, which
//! list filters it understands and which actions it offers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Collection;
use super::serde_util::null_as_default;

/// Modifiers accepted by a collection filter (`eq`, `ne`, `prefix`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionFilter {
    #[serde(default, deserialize_with = "null_as_default")]
    pub modifiers: Vec<String>,
}

/// One entry of the schema document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSchema {
    /// Type id, e.g. `cluster`.
    pub id: String,

    /// Always `schema` for real entries.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural_name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub links: BTreeMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub collection_methods: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_methods: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub collection_filters: BTreeMap<String, CollectionFilter>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_actions: BTreeMap<String, Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub collection_actions: BTreeMap<String, Value>,
}

impl ApiSchema {
    /// URL of the type's collection endpoint.
    pub fn collection_url(&self) -> Option<&str> {
        self.links.get("collection").map(String::as_str)
    }

    pub fn creatable(&self) -> bool {
        has_method(&self.collection_methods, "POST")
    }

    pub fn listable(&self) -> bool {
        has_method(&self.collection_methods, "GET")
    }

    pub fn updatable(&self) -> bool {
        has_method(&self.resource_methods, "PUT")
    }

    pub fn deletable(&self) -> bool {
        has_method(&self.resource_methods, "DELETE")
    }

    /// Whether a list key names a declared filter, optionally with one of
    /// its modifiers (`name` or `name_ne`).
    pub fn accepts_filter(&self, key: &str) -> bool {
        if self.collection_filters.contains_key(key) {
            return true;
        }
        self.collection_filters.iter().any(|(name, filter)| {
            filter.modifiers.iter().any(|modifier| {
                key.strip_prefix(name.as_str())
                    .and_then(|rest| rest.strip_prefix('_'))
                    == Some(modifier.as_str())
            })
        })
    }
}

fn has_method(methods: &[String], method: &str) -> bool {
    methods.iter().any(|m| m.eq_ignore_ascii_case(method))
}

/// Lookup table of schema entries by type id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schemas {
    types: BTreeMap<String, ApiSchema>,
}

impl Schemas {
    /// Build the table from the schema collection, keeping only entries of
    /// type `schema`.
    pub fn from_collection(collection: Collection<ApiSchema>) -> Self {
        collection
            .data
            .into_iter()
            .filter(|s| s.type_name.as_deref().is_none_or(|t| t == "schema"))
            .collect()
    }

    pub fn get(&self, type_name: &str) -> Option<&ApiSchema> {
        self.types.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over entries in type-id order.
    pub fn iter(&self) -> impl Iterator<Item = &ApiSchema> {
        self.types.values()
    }
}

impl FromIterator<ApiSchema> for Schemas {
    fn from_iter<I: IntoIterator<Item = ApiSchema>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }
}
