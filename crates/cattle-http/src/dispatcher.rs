//! HTTP dispatcher.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, info, instrument};
use url::Url;

use cattle_core::error::InvalidInputError;
use cattle_core::{
    ApiSchema, ApiUrl, Collection, CollectionMeta, Dispatcher, Error, ListOpts, ResourceBase,
    Result, Schemas,
};

use crate::client::{RestClient, SCHEMAS_HEADER};
use crate::opts::ClientOpts;

/// A [`Dispatcher`] that talks to the management API over HTTP.
///
/// Requests are routed with the server's schema document: collection URLs
/// come from each type's schema, and existing resources are addressed
/// through their own `self` link and `actions` map.
pub struct HttpDispatcher {
    client: RestClient,
    schemas: RwLock<Arc<Schemas>>,
    strict: bool,
}

impl std::fmt::Debug for HttpDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDispatcher")
            .field("client", &self.client)
            .field("types", &self.schemas().len())
            .field("strict", &self.strict)
            .finish()
    }
}

impl HttpDispatcher {
    /// Build the HTTP client and load the schema document.
    ///
    /// Fails if the client cannot be built, the endpoint cannot be reached,
    /// or it publishes no schemas.
    #[instrument(skip(opts), fields(url = %opts.url))]
    pub async fn connect(opts: ClientOpts) -> Result<Self> {
        let client = RestClient::new(&opts)?;
        let schemas = load_schemas(&client).await?;
        info!(types = schemas.len(), "connected");

        Ok(Self {
            client,
            schemas: RwLock::new(Arc::new(schemas)),
            strict: opts.strict,
        })
    }

    /// The API endpoint this dispatcher talks to.
    pub fn url(&self) -> &ApiUrl {
        self.client.base()
    }

    /// The currently loaded schema table.
    pub fn schemas(&self) -> Arc<Schemas> {
        let guard = self.schemas.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Fetch the schema document again and swap it in.
    pub async fn reload_schemas(&self) -> Result<Arc<Schemas>> {
        let schemas = Arc::new(load_schemas(&self.client).await?);
        let mut guard = self.schemas.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&schemas);
        Ok(schemas)
    }

    /// Look up `type_name` and check that it supports `operation`.
    fn schema_for(
        &self,
        type_name: &str,
        operation: &'static str,
        allowed: fn(&ApiSchema) -> bool,
    ) -> Result<(Arc<Schemas>, String)> {
        let schemas = self.schemas();
        let schema = schemas
            .get(type_name)
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))?;

        if !allowed(schema) {
            return Err(Error::Unsupported {
                type_name: type_name.to_string(),
                operation,
            });
        }

        let collection = schema
            .collection_url()
            .ok_or_else(|| Error::MissingLink {
                type_name: type_name.to_string(),
                link: "collection".to_string(),
            })?
            .to_string();

        Ok((schemas, collection))
    }

    fn check_filters(&self, schema: &ApiSchema, opts: &ListOpts) -> Result<()> {
        if !self.strict {
            return Ok(());
        }
        match opts.filter_keys().find(|key| !schema.accepts_filter(key)) {
            Some(key) => Err(InvalidInputError::Filter {
                key: key.to_string(),
                type_name: schema.id.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    #[instrument(skip(self, payload))]
    async fn create(&self, type_name: &str, payload: Value) -> Result<Value> {
        let (_, collection) = self.schema_for(type_name, "creatable", ApiSchema::creatable)?;
        self.client.post(&collection, &payload).await
    }

    #[instrument(skip(self, existing, updates), fields(id = existing.id()))]
    async fn update(
        &self,
        type_name: &str,
        existing: &ResourceBase,
        updates: Value,
    ) -> Result<Value> {
        self.schema_for(type_name, "updatable", ApiSchema::updatable)?;
        let url = self_link(type_name, existing)?;
        self.client.put(url, &updates).await
    }

    #[instrument(skip(self, existing, payload), fields(id = existing.id()))]
    async fn replace(
        &self,
        type_name: &str,
        existing: &ResourceBase,
        payload: Value,
    ) -> Result<Value> {
        self.schema_for(type_name, "updatable", ApiSchema::updatable)?;
        let mut url = parse_url(self_link(type_name, existing)?)?;
        url.query_pairs_mut().append_pair("_replace", "true");
        self.client.put(url.as_str(), &payload).await
    }

    #[instrument(skip(self, opts))]
    async fn list(&self, type_name: &str, opts: &ListOpts) -> Result<Value> {
        let (schemas, collection) = self.schema_for(type_name, "listable", ApiSchema::listable)?;
        if let Some(schema) = schemas.get(type_name) {
            self.check_filters(schema, opts)?;
        }

        let query: Vec<(&str, &str)> = opts.iter().collect();
        self.client.get(&collection, &query).await
    }

    #[instrument(skip(self))]
    async fn next(&self, next_url: &str) -> Result<Value> {
        self.client.get(next_url, &[]).await
    }

    #[instrument(skip(self, opts))]
    async fn get(&self, url: &str, opts: &ListOpts) -> Result<Value> {
        let query: Vec<(&str, &str)> = opts.iter().collect();
        self.client.get(url, &query).await
    }

    #[instrument(skip(self))]
    async fn by_id(&self, type_name: &str, id: &str) -> Result<Value> {
        let (_, collection) = self.schema_for(type_name, "listable", ApiSchema::listable)?;
        let url = member_url(&collection, id)?;
        self.client.get(url.as_str(), &[]).await
    }

    #[instrument(skip(self, existing), fields(id = existing.id()))]
    async fn delete(&self, type_name: &str, existing: &ResourceBase) -> Result<()> {
        self.schema_for(type_name, "deletable", ApiSchema::deletable)?;
        let url = self_link(type_name, existing)?;
        self.client.delete(url).await?;
        Ok(())
    }

    #[instrument(skip(self, existing, input), fields(id = existing.id()))]
    async fn action(
        &self,
        type_name: &str,
        action: &str,
        existing: &ResourceBase,
        input: Option<Value>,
    ) -> Result<Value> {
        let url = existing
            .action_url(action)
            .ok_or_else(|| action_unavailable(type_name, action))?;
        self.client.post(url, &input.unwrap_or_else(|| json!({}))).await
    }

    #[instrument(skip(self, collection, input))]
    async fn collection_action(
        &self,
        type_name: &str,
        action: &str,
        collection: &CollectionMeta,
        input: Option<Value>,
    ) -> Result<Value> {
        let url = match collection.action_url(action) {
            Some(url) => url.to_string(),
            None => self.schema_collection_action(type_name, action)?,
        };
        self.client
            .post(&url, &input.unwrap_or_else(|| json!({})))
            .await
    }
}

impl HttpDispatcher {
    /// Build a collection action URL from the schema when the collection
    /// value carries no `actions` map.
    fn schema_collection_action(&self, type_name: &str, action: &str) -> Result<String> {
        let schemas = self.schemas();
        let schema = schemas
            .get(type_name)
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))?;

        let collection = schema
            .collection_url()
            .filter(|_| schema.collection_actions.contains_key(action))
            .ok_or_else(|| action_unavailable(type_name, action))?;

        let mut url = parse_url(collection)?;
        url.query_pairs_mut().append_pair("action", action);
        debug!(%url, "collection action from schema");
        Ok(url.into())
    }
}

/// Fetch the schema document from the API root.
///
/// The root response names the schema collection in the `X-API-Schemas`
/// header; when the header is absent or points back at the root, the root
/// body itself is the schema collection.
async fn load_schemas(client: &RestClient) -> Result<Schemas> {
    let root = client.base().as_str();
    let response = client.get_response(root).await?;

    let schemas_url = response
        .headers()
        .get(SCHEMAS_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_end_matches('/').to_string());

    let document: Value = match schemas_url {
        Some(url) if url != root => {
            debug!(%url, "following schema header");
            client.get(&url, &[]).await?
        }
        _ => {
            let text = response.text().await.map_err(crate::client::transport)?;
            serde_json::from_str(&text)?
        }
    };

    let collection: Collection<ApiSchema> = serde_json::from_value(document)?;
    let schemas = Schemas::from_collection(collection);

    if schemas.is_empty() {
        return Err(InvalidInputError::Other {
            message: format!("{root} does not publish any schemas"),
        }
        .into());
    }
    Ok(schemas)
}

fn self_link<'a>(type_name: &str, existing: &'a ResourceBase) -> Result<&'a str> {
    existing.self_link().ok_or_else(|| Error::MissingLink {
        type_name: type_name.to_string(),
        link: "self".to_string(),
    })
}

/// `<collection>/<id>`, with the id percent-encoded as one path segment.
fn member_url(collection: &str, id: &str) -> Result<Url> {
    let mut url = parse_url(collection)?;
    url.path_segments_mut()
        .map_err(|()| InvalidInputError::Url {
            value: collection.to_string(),
            reason: "cannot be a base URL".to_string(),
        })?
        .pop_if_empty()
        .push(id);
    Ok(url)
}

fn parse_url(value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| {
        InvalidInputError::Url {
            value: value.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

fn action_unavailable(type_name: &str, action: &str) -> Error {
    Error::ActionUnavailable {
        type_name: type_name.to_string(),
        action: action.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_url_appends_segment() {
        let url = member_url("https://rancher.test/v3/clusters", "c-abc12").unwrap();
        assert_eq!(url.as_str(), "https://rancher.test/v3/clusters/c-abc12");
    }

    #[test]
    fn member_url_handles_trailing_slash() {
        let url = member_url("https://rancher.test/v3/clusters/", "c-abc12").unwrap();
        assert_eq!(url.as_str(), "https://rancher.test/v3/clusters/c-abc12");
    }

    #[test]
    fn member_url_encodes_id() {
        let url = member_url("https://rancher.test/v3/projects", "c-abc12:p-x/y").unwrap();
        assert_eq!(
            url.as_str(),
            "https://rancher.test/v3/projects/c-abc12:p-x%2Fy"
        );
    }

    #[test]
    fn missing_self_link() {
        let err = self_link("cluster", &ResourceBase::with_id("c-1")).unwrap_err();
        assert!(matches!(err, Error::MissingLink { ref link, .. } if link == "self"));
    }
}
