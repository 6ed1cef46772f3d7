//! cattle-http - HTTP transport for the cattle management API toolkit.
//!
//! [`HttpDispatcher`] implements [`cattle_core::Dispatcher`] on top of
//! reqwest. On connect it reads the server's schema document and from then
//! on routes every call by it.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cattle_http::{ApiUrl, ClientOpts, HttpDispatcher};
//!
//! # async fn example() -> cattle_core::Result<()> {
//! let url = ApiUrl::new("https://rancher.example.com/v3")?;
//! let dispatcher = HttpDispatcher::connect(ClientOpts::new(url).with_token("token-xyz")).await?;
//!
//! for schema in dispatcher.schemas().iter() {
//!     println!("{}", schema.id);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod dispatcher;
mod opts;

pub use cattle_core::ApiUrl;
pub use dispatcher::HttpDispatcher;
pub use opts::{ClientOpts, Credentials, DEFAULT_TIMEOUT};
