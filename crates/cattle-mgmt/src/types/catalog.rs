//! Helm chart catalogs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use cattle_core::{Collection, NO_INPUT, ResourceClient, Result};
use serde_json::Value;

resource! {
    /// A chart repository the server syncs templates from.
    pub struct Catalog = "catalog" {
        ANNOTATIONS => annotations: BTreeMap<String, String> = "annotations",
        BRANCH => branch: String = "branch",
        CATALOG_KIND => catalog_kind: String = "catalogKind",
        COMMIT => commit: String = "commit",
        CONDITIONS => conditions: Vec<Value> = "conditions",
        CREATED => created: String = "created",
        CREATOR_ID => creator_id: String = "creatorId",
        CREDENTIAL_SECRET => credential_secret: String = "credentialSecret",
        DESCRIPTION => description: String = "description",
        HELM_VERSION => helm_version: String = "helmVersion",
        KIND => kind: String = "kind",
        LABELS => labels: BTreeMap<String, String> = "labels",
        LAST_REFRESH_TIMESTAMP => last_refresh_timestamp: String = "lastRefreshTimestamp",
        NAME => name: String = "name",
        PASSWORD => password: String = "password",
        REMOVED => removed: String = "removed",
        STATE => state: String = "state",
        TRANSITIONING => transitioning: String = "transitioning",
        TRANSITIONING_MESSAGE => transitioning_message: String = "transitioningMessage",
        URL => url: String = "url",
        USERNAME => username: String = "username",
        UUID => uuid: String = "uuid",
    }
}

schema! {
    /// Names of the catalogs a refresh was started for.
    pub struct CatalogRefresh = "catalogRefresh" {
        CATALOGS => catalogs: Vec<String> = "catalogs",
    }
}

#[async_trait]
pub trait CatalogActions {
    /// Refresh one catalog.
    async fn refresh(&self, catalog: &Catalog) -> Result<CatalogRefresh>;

    /// Refresh every catalog in the collection.
    async fn refresh_all(&self, catalogs: &Collection<Catalog>) -> Result<CatalogRefresh>;
}

#[async_trait]
impl CatalogActions for ResourceClient<Catalog> {
    async fn refresh(&self, catalog: &Catalog) -> Result<CatalogRefresh> {
        self.action(catalog, "refresh", NO_INPUT).await
    }

    async fn refresh_all(&self, catalogs: &Collection<Catalog>) -> Result<CatalogRefresh> {
        self.collection_action(catalogs, "refresh", NO_INPUT).await
    }
}
