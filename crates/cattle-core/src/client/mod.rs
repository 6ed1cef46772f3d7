//! The generic resource client.
//!
//! [`ResourceClient<T>`] binds one resource type to a shared dispatcher. It
//! encodes arguments, forwards exactly one dispatcher call per operation and
//! decodes the result. Dispatcher errors are returned unchanged.

pub mod paging;
pub mod wait;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

use crate::error::InvalidInputError;
use crate::{Error, Result};
use crate::traits::{Dispatcher, Resource};
use crate::types::{Collection, ListOpts};

pub use paging::{ListAllError, drain_pages, next_page};
pub use wait::DEFAULT_WAIT_TIMEOUT;

/// Pass as the input of an action that takes none.
///
/// ```ignore
/// client.action_discard(&node, "cordon", NO_INPUT).await?;
/// ```
pub const NO_INPUT: Option<&'static ()> = None;

/// Typed client for one resource type.
///
/// Cloning is cheap: every clone shares the same dispatcher.
pub struct ResourceClient<T> {
    dispatcher: Arc<dyn Dispatcher>,
    _type: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            _type: PhantomData,
        }
    }
}

impl<T: Resource> fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("type", &T::TYPE)
            .finish_non_exhaustive()
    }
}

impl<T: Resource> ResourceClient<T> {
    /// Bind `T` to a dispatcher.
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            dispatcher,
            _type: PhantomData,
        }
    }

    /// Wire type name this client operates on.
    pub fn type_name(&self) -> &'static str {
        T::TYPE
    }

    /// The shared dispatcher.
    pub fn dispatcher(&self) -> &Arc<dyn Dispatcher> {
        &self.dispatcher
    }

    /// Create a new resource.
    ///
    /// Returns the resource as the server stored it.
    #[instrument(skip_all, fields(type_name = T::TYPE))]
    pub async fn create(&self, resource: &T) -> Result<T> {
        let payload = serde_json::to_value(resource)?;
        let created = self.dispatcher.create(T::TYPE, payload).await?;
        decode(created)
    }

    /// Apply a partial update to `existing`.
    ///
    /// Only `existing`'s identity and links are sent to the dispatcher; the
    /// body comes from `updates`.
    #[instrument(skip_all, fields(type_name = T::TYPE, id = existing.id()))]
    pub async fn update<U>(&self, existing: &T, updates: &U) -> Result<T>
    where
        U: Serialize + Sync + ?Sized,
    {
        let updates = serde_json::to_value(updates)?;
        let updated = self
            .dispatcher
            .update(T::TYPE, existing.base(), updates)
            .await?;
        decode(updated)
    }

    /// Overwrite `resource` on the server with its full current body.
    #[instrument(skip_all, fields(type_name = T::TYPE, id = resource.id()))]
    pub async fn replace(&self, resource: &T) -> Result<T> {
        let payload = serde_json::to_value(resource)?;
        let replaced = self
            .dispatcher
            .replace(T::TYPE, resource.base(), payload)
            .await?;
        decode(replaced)
    }

    /// Fetch the first page matching `opts`.
    #[instrument(skip_all, fields(type_name = T::TYPE))]
    pub async fn list(&self, opts: &ListOpts) -> Result<Collection<T>> {
        let page = self.dispatcher.list(T::TYPE, opts).await?;
        decode(page)
    }

    /// Fetch the page after `collection`, or `None` on the last page.
    pub async fn next(&self, collection: &Collection<T>) -> Result<Option<Collection<T>>> {
        next_page(self.dispatcher.as_ref(), collection).await
    }

    /// Fetch every page matching `opts`, concatenated in page order.
    ///
    /// If a page fails to load, the error carries everything gathered
    /// before it.
    #[instrument(skip_all, fields(type_name = T::TYPE))]
    pub async fn list_all(
        &self,
        opts: &ListOpts,
    ) -> std::result::Result<Collection<T>, ListAllError<T>> {
        let first = match self.list(opts).await {
            Ok(first) => first,
            Err(source) => {
                return Err(ListAllError {
                    collected: Collection::default(),
                    source,
                });
            }
        };
        drain_pages(self.dispatcher.as_ref(), first).await
    }

    /// Fetch whatever `resource`'s named link points at, e.g. a cluster's
    /// `nodes` collection.
    ///
    /// Fails with [`Error::MissingLink`] when the resource carries no such
    /// link.
    #[instrument(skip(self, resource, opts), fields(type_name = T::TYPE, id = resource.id()))]
    pub async fn follow_link<O: DeserializeOwned>(
        &self,
        resource: &T,
        link: &str,
        opts: &ListOpts,
    ) -> Result<O> {
        let url = resource.base().link(link).ok_or_else(|| Error::MissingLink {
            type_name: T::TYPE.to_string(),
            link: link.to_string(),
        })?;
        let linked = self.dispatcher.get(url, opts).await?;
        decode(linked)
    }

    /// Fetch one resource by id.
    #[instrument(skip(self), fields(type_name = T::TYPE))]
    pub async fn by_id(&self, id: &str) -> Result<T> {
        let found = self.dispatcher.by_id(T::TYPE, id).await?;
        decode(found)
    }

    /// Delete `resource`.
    #[instrument(skip_all, fields(type_name = T::TYPE, id = resource.id()))]
    pub async fn delete(&self, resource: &T) -> Result<()> {
        self.dispatcher.delete(T::TYPE, resource.base()).await
    }

    /// Invoke a named action on `resource` and decode its output.
    #[instrument(skip(self, resource, input), fields(type_name = T::TYPE, id = resource.id()))]
    pub async fn action<I, O>(&self, resource: &T, action: &str, input: Option<&I>) -> Result<O>
    where
        I: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        let input = encode_input(input)?;
        let output = self
            .dispatcher
            .action(T::TYPE, action, resource.base(), input)
            .await?;
        decode(output)
    }

    /// Invoke a named action on `resource`, ignoring any output.
    pub async fn action_discard<I>(&self, resource: &T, action: &str, input: Option<&I>) -> Result<()>
    where
        I: Serialize + Sync + ?Sized,
    {
        self.action::<I, Value>(resource, action, input).await?;
        Ok(())
    }

    /// Invoke a named action on a whole collection and decode its output.
    #[instrument(skip(self, collection, input), fields(type_name = T::TYPE))]
    pub async fn collection_action<I, O>(
        &self,
        collection: &Collection<T>,
        action: &str,
        input: Option<&I>,
    ) -> Result<O>
    where
        I: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        let input = encode_input(input)?;
        let output = self
            .dispatcher
            .collection_action(T::TYPE, action, &collection.meta, input)
            .await?;
        decode(output)
    }

    /// Invoke a named collection action, ignoring any output.
    pub async fn collection_action_discard<I>(
        &self,
        collection: &Collection<T>,
        action: &str,
        input: Option<&I>,
    ) -> Result<()>
    where
        I: Serialize + Sync + ?Sized,
    {
        self.collection_action::<I, Value>(collection, action, input)
            .await?;
        Ok(())
    }

    /// Fetch the current server copy of `resource`.
    pub async fn reload(&self, resource: &T) -> Result<T> {
        let id = require_id::<T>(resource)?;
        self.by_id(id).await
    }

    /// Reload `resource` until it is no longer transitioning.
    ///
    /// Fails with [`Error::Timeout`](crate::Error::Timeout) once `timeout`
    /// has passed.
    #[instrument(skip(self, resource), fields(type_name = T::TYPE, id = resource.id()))]
    pub async fn wait_transitioning(&self, resource: &T, timeout: Duration) -> Result<T> {
        let id = require_id::<T>(resource)?;
        let settled = wait::wait_transitioning(self.dispatcher.as_ref(), T::TYPE, id, timeout).await?;
        decode(settled)
    }

    /// Like [`wait_transitioning`](Self::wait_transitioning), but a resource
    /// whose final `transitioning` is anything other than `no` is reported as
    /// [`Error::Transitioning`](crate::Error::Transitioning).
    #[instrument(skip(self, resource), fields(type_name = T::TYPE, id = resource.id()))]
    pub async fn wait_success(&self, resource: &T, timeout: Duration) -> Result<T> {
        let id = require_id::<T>(resource)?;
        let settled = wait::wait_success(self.dispatcher.as_ref(), T::TYPE, id, timeout).await?;
        decode(settled)
    }
}

fn decode<O: DeserializeOwned>(value: Value) -> Result<O> {
    Ok(serde_json::from_value(value)?)
}

fn encode_input<I: Serialize + ?Sized>(input: Option<&I>) -> Result<Option<Value>> {
    Ok(input.map(serde_json::to_value).transpose()?)
}

fn require_id<T: Resource>(resource: &T) -> Result<&str> {
    resource.id().ok_or_else(|| {
        InvalidInputError::MissingId {
            type_name: T::TYPE.to_string(),
        }
        .into()
    })
}
