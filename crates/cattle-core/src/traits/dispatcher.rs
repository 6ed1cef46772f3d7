//! Dispatcher trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;
use crate::types::{CollectionMeta, ListOpts, ResourceBase};

/// The transport behind every resource client.
///
/// A dispatcher executes one request per call: it resolves where a type
/// lives, applies authentication, sends the payload and returns the decoded
/// JSON response. Payloads are untyped [`Value`]s so that a single shared
/// dispatcher can serve every resource type; typing happens in
/// [`ResourceClient`](crate::ResourceClient).
///
/// Implementations must be safe to share between sub-clients.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Create a resource of `type_name` from `payload`.
    async fn create(&self, type_name: &str, payload: Value) -> Result<Value>;

    /// Apply a partial update to an existing resource.
    async fn update(
        &self,
        type_name: &str,
        existing: &ResourceBase,
        updates: Value,
    ) -> Result<Value>;

    /// Overwrite an existing resource with `payload`.
    async fn replace(
        &self,
        type_name: &str,
        existing: &ResourceBase,
        payload: Value,
    ) -> Result<Value>;

    /// Fetch the first page of a collection.
    async fn list(&self, type_name: &str, opts: &ListOpts) -> Result<Value>;

    /// Fetch the page behind a pagination cursor.
    async fn next(&self, next_url: &str) -> Result<Value>;

    /// Fetch an arbitrary server-provided URL, such as a resource link,
    /// with `opts` appended as query parameters.
    async fn get(&self, url: &str, opts: &ListOpts) -> Result<Value>;

    /// Fetch one resource by id.
    async fn by_id(&self, type_name: &str, id: &str) -> Result<Value>;

    /// Delete an existing resource.
    async fn delete(&self, type_name: &str, existing: &ResourceBase) -> Result<()>;

    /// Invoke a named action on one resource. Returns `Value::Null` when the
    /// action produces no output.
    async fn action(
        &self,
        type_name: &str,
        action: &str,
        existing: &ResourceBase,
        input: Option<Value>,
    ) -> Result<Value>;

    /// Invoke a named action on a whole collection.
    async fn collection_action(
        &self,
        type_name: &str,
        action: &str,
        collection: &CollectionMeta,
        input: Option<Value>,
    ) -> Result<Value>;
}
