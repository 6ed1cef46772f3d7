//! cattle-core - Core types, traits and the generic resource client.
//!
//! Every resource type exposed by the management API is driven through one
//! generic [`ResourceClient`], which forwards each call to a shared
//! [`Dispatcher`]. The dispatcher owns transport, authentication and
//! (de)serialization; the client only binds a resource type to it.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cattle_core::{Dispatcher, ListOpts, Resource, ResourceClient};
//!
//! # async fn example<T: Resource + std::fmt::Debug>(dispatcher: Arc<dyn Dispatcher>) -> cattle_core::Result<()> {
//! let client = ResourceClient::<T>::new(dispatcher);
//! let page = client.list(&ListOpts::new().limit(50)).await?;
//!
//! for item in &page.data {
//!     println!("{:?}", item.id());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::{DEFAULT_WAIT_TIMEOUT, ListAllError, NO_INPUT, ResourceClient};
pub use error::Error;
pub use traits::{Dispatcher, Resource, Schema};
pub use types::{
    ApiSchema, ApiUrl, Collection, CollectionFilter, CollectionMeta, ListOpts, Pagination,
    ResourceBase, Schemas,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
