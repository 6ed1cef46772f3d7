//! cattle-mgmt - Typed management v3 resources for the cattle toolkit.
//!
//! Resource structs with their field constants, typed action extension
//! traits, and the root [`Client`] that wires a sub-client per resource
//! type to one shared dispatcher.
//!
//! # Example
//!
//! ```no_run
//! use cattle_http::{ApiUrl, ClientOpts};
//! use cattle_mgmt::prelude::*;
//!
//! # async fn example() -> cattle_core::Result<()> {
//! let opts = ClientOpts::new(ApiUrl::new("https://rancher.example.com/v3")?)
//!     .with_token("token-xyz:secret");
//! let client = Client::new(opts).await?;
//!
//! let clusters = client
//!     .cluster
//!     .list_all(&ListOpts::new().filter(Cluster::STATE, "active"))
//!     .await
//!     .map_err(|e| e.source)?;
//!
//! for cluster in &clusters {
//!     let kubeconfig = client.cluster.generate_kubeconfig(cluster).await?;
//!     println!("{:?}: {} bytes", cluster.name, kubeconfig.config.unwrap_or_default().len());
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod client;
pub mod types;

pub use client::Client;

/// Everything needed to drive the management API.
pub mod prelude {
    pub use cattle_core::{
        Collection, DEFAULT_WAIT_TIMEOUT, Error, ListOpts, NO_INPUT, Resource, ResourceClient,
        Result, Schema,
    };

    pub use crate::Client;
    pub use crate::types::*;
}
