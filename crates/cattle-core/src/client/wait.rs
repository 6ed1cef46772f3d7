//! Polling a resource until it settles.
//!
//! These work on raw JSON so callers without a concrete resource type can
//! use them; [`ResourceClient`](crate::ResourceClient) wraps them with
//! decoding.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tokio::time::{Instant, sleep};
use tracing::{debug, trace};

use crate::error::Error;
use crate::traits::Dispatcher;

/// Default time to wait for a resource to settle.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(45);

const INITIAL_DELAY: Duration = Duration::from_millis(10);
const MAX_DELAY: Duration = Duration::from_secs(2);

/// Lifecycle fields shared by stateful resources.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Lifecycle {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub transitioning: Option<String>,
    #[serde(default)]
    pub transitioning_message: Option<String>,
}

impl Lifecycle {
    pub(crate) fn of(value: &Value) -> Self {
        Lifecycle::deserialize(value).unwrap_or_default()
    }

    pub(crate) fn is_transitioning(&self) -> bool {
        self.transitioning.as_deref() == Some("yes")
    }

    /// Settled in anything but `no`. An absent field counts as success.
    pub(crate) fn is_failed(&self) -> bool {
        matches!(self.transitioning.as_deref(), Some(t) if t != "no")
    }
}

/// Reload `id` until its `transitioning` field is no longer `yes`.
///
/// The delay between reloads starts at 10ms and doubles up to 2s.
pub async fn wait_transitioning(
    dispatcher: &dyn Dispatcher,
    type_name: &str,
    id: &str,
    timeout: Duration,
) -> Result<Value, Error> {
    let start = Instant::now();
    let mut delay = INITIAL_DELAY;
    let mut current = dispatcher.by_id(type_name, id).await?;

    while Lifecycle::of(&current).is_transitioning() {
        trace!(?delay, "still transitioning");
        sleep(delay).await;
        delay = (delay * 2).min(MAX_DELAY);

        current = dispatcher.by_id(type_name, id).await?;

        let elapsed = start.elapsed();
        if elapsed > timeout && Lifecycle::of(&current).is_transitioning() {
            return Err(Error::Timeout {
                type_name: type_name.to_string(),
                id: id.to_string(),
                elapsed,
            });
        }
    }

    debug!(
        state = Lifecycle::of(&current).state.as_deref().unwrap_or(""),
        elapsed = ?start.elapsed(),
        "resource settled"
    );
    Ok(current)
}

/// Like [`wait_transitioning`], but a final `transitioning` other than `no`
/// (usually `error`) is a failure carrying the server's message. Resources
/// without a `transitioning` field succeed.
pub async fn wait_success(
    dispatcher: &dyn Dispatcher,
    type_name: &str,
    id: &str,
    timeout: Duration,
) -> Result<Value, Error> {
    let current = wait_transitioning(dispatcher, type_name, id, timeout).await?;
    let lifecycle = Lifecycle::of(&current);

    if lifecycle.is_failed() {
        return Err(Error::Transitioning {
            type_name: type_name.to_string(),
            id: id.to_string(),
            message: lifecycle.transitioning_message.unwrap_or_default(),
        });
    }

    Ok(current)
}
