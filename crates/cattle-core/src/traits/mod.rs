//! Core traits for dispatchers and resource types.

mod dispatcher;
mod resource;

pub use dispatcher::Dispatcher;
pub use resource::{Resource, Schema};
