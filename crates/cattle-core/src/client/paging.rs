//! Following pagination cursors.

use std::collections::HashSet;
use std::fmt;

use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::error::Error;
use crate::traits::Dispatcher;
use crate::types::Collection;

/// Listing every page failed part-way.
///
/// `collected` holds the items of every page fetched before the failure, in
/// page order, with the metadata of the last page that did load.
#[derive(Debug)]
pub struct ListAllError<T> {
    pub collected: Collection<T>,
    pub source: Error,
}

impl<T> ListAllError<T> {
    /// Split into the partial results and the error that stopped paging.
    pub fn into_parts(self) -> (Collection<T>, Error) {
        (self.collected, self.source)
    }
}

impl<T> fmt::Display for ListAllError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "listing stopped after {} items: {}",
            self.collected.data.len(),
            self.source
        )
    }
}

impl<T: fmt::Debug> std::error::Error for ListAllError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Fetch the page after `collection`.
///
/// Returns `Ok(None)` without calling the dispatcher when there is no
/// cursor. Running out of pages is not an error.
pub async fn next_page<T: DeserializeOwned>(
    dispatcher: &dyn Dispatcher,
    collection: &Collection<T>,
) -> Result<Option<Collection<T>>, Error> {
    let Some(next) = collection.next_link() else {
        trace!("no next cursor");
        return Ok(None);
    };

    debug!(next, "fetching next page");
    let value = dispatcher.next(next).await?;
    Ok(Some(serde_json::from_value(value)?))
}

/// Follow cursors from `first` until exhausted, concatenating page data.
///
/// Stops at the first failing page fetch and hands back what was gathered
/// so far together with the error. A cursor that was already followed ends
/// paging as if it were the last page.
pub async fn drain_pages<T: DeserializeOwned>(
    dispatcher: &dyn Dispatcher,
    mut first: Collection<T>,
) -> Result<Collection<T>, ListAllError<T>> {
    let mut data = std::mem::take(&mut first.data);
    let mut page = first;
    let mut pages = 1usize;
    let mut visited = HashSet::new();

    loop {
        if let Some(next) = page.next_link() {
            if !visited.insert(next.to_string()) {
                warn!(next, pages, "pagination cursor repeated, stopping");
                break;
            }
        }

        match next_page(dispatcher, &page).await {
            Ok(Some(mut next)) => {
                pages += 1;
                data.append(&mut next.data);
                page = next;
            }
            Ok(None) => break,
            Err(source) => {
                debug!(pages, items = data.len(), error = %source, "paging stopped early");
                page.data = data;
                return Err(ListAllError {
                    collected: page,
                    source,
                });
            }
        }
    }

    debug!(pages, items = data.len(), "listed all pages");
    page.data = data;
    Ok(page)
}
