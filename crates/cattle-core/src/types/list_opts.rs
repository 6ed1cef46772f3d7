//! Options for list requests.

use std::collections::BTreeMap;

/// Filters and paging parameters for a list request.
///
/// The client treats these as opaque key/value pairs; the dispatcher decides
/// how to put them on the wire. Filter keys may carry a modifier suffix,
/// e.g. `name_ne` or `state_prefix`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOpts {
    filters: BTreeMap<String, String>,
}

impl ListOpts {
    /// Paging and ordering keys that are not schema filters.
    pub const RESERVED: &'static [&'static str] = &["limit", "marker", "sort", "order"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter, replacing any previous value for the key.
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.insert(key.into(), value.to_string());
        self
    }

    /// Maximum page size.
    pub fn limit(self, limit: u32) -> Self {
        self.filter("limit", limit)
    }

    /// Resume listing after the given marker.
    pub fn marker(self, marker: impl Into<String>) -> Self {
        self.filter("marker", marker.into())
    }

    /// Sort by a field name.
    pub fn sort(self, field: impl Into<String>) -> Self {
        self.filter("sort", field.into())
    }

    /// Sort direction, `asc` or `desc`.
    pub fn order(self, order: impl Into<String>) -> Self {
        self.filter("order", order.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterate over all key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over the keys that are schema filters (not paging keys).
    pub fn filter_keys(&self) -> impl Iterator<Item = &str> {
        self.filters
            .keys()
            .map(String::as_str)
            .filter(|k| !Self::RESERVED.contains(k))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for ListOpts {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |opts, (k, v)| opts.filter(k, v))
    }
}
