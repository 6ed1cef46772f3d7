//! Core data model types.
//!
//! These are the wire shapes shared by every resource type: the common
//! resource base, paginated collections, list options and the server's
//! schema document.

mod api_url;
mod collection;
mod list_opts;
mod resource;
mod schema;
mod serde_util;

pub use api_url::ApiUrl;
pub use collection::{Collection, CollectionMeta, Pagination};
pub use list_opts::ListOpts;
pub use resource::ResourceBase;
pub use schema::{ApiSchema, CollectionFilter, Schemas};
