//! Node and Kubernetes engine drivers.

use std::collections::BTreeMap;

use async_trait::async_trait;
use cattle_core::{Collection, NO_INPUT, ResourceClient, Result};
use serde_json::Value;

resource! {
    /// A docker-machine driver used to provision nodes.
    pub struct NodeDriver = "nodeDriver" {
        ACTIVE => active: bool = "active",
        ADD_CLOUD_CREDENTIAL => add_cloud_credential: bool = "addCloudCredential",
        ANNOTATIONS => annotations: BTreeMap<String, String> = "annotations",
        BUILTIN => builtin: bool = "builtin",
        CHECKSUM => checksum: String = "checksum",
        CREATED => created: String = "created",
        CREATOR_ID => creator_id: String = "creatorId",
        DESCRIPTION => description: String = "description",
        EXTERNAL_ID => external_id: String = "externalId",
        LABELS => labels: BTreeMap<String, String> = "labels",
        NAME => name: String = "name",
        REMOVED => removed: String = "removed",
        STATE => state: String = "state",
        TRANSITIONING => transitioning: String = "transitioning",
        TRANSITIONING_MESSAGE => transitioning_message: String = "transitioningMessage",
        UI_URL => ui_url: String = "uiUrl",
        URL => url: String = "url",
        UUID => uuid: String = "uuid",
        WHITELIST_DOMAINS => whitelist_domains: Vec<String> = "whitelistDomains",
    }
}

resource! {
    /// A hosted Kubernetes engine driver.
    pub struct KontainerDriver = "kontainerDriver" {
        ACTIVE => active: bool = "active",
        ACTUAL_URL => actual_url: String = "actualUrl",
        ANNOTATIONS => annotations: BTreeMap<String, String> = "annotations",
        BUILT_IN => built_in: bool = "builtIn",
        CHECKSUM => checksum: String = "checksum",
        CONDITIONS => conditions: Vec<Value> = "conditions",
        CREATED => created: String = "created",
        CREATOR_ID => creator_id: String = "creatorId",
        LABELS => labels: BTreeMap<String, String> = "labels",
        NAME => name: String = "name",
        REMOVED => removed: String = "removed",
        STATE => state: String = "state",
        TRANSITIONING => transitioning: String = "transitioning",
        TRANSITIONING_MESSAGE => transitioning_message: String = "transitioningMessage",
        UI_URL => ui_url: String = "uiUrl",
        URL => url: String = "url",
        UUID => uuid: String = "uuid",
        WHITELIST_DOMAINS => whitelist_domains: Vec<String> = "whitelistDomains",
    }
}

#[async_trait]
pub trait NodeDriverActions {
    async fn activate(&self, driver: &NodeDriver) -> Result<NodeDriver>;

    async fn deactivate(&self, driver: &NodeDriver) -> Result<NodeDriver>;
}

#[async_trait]
impl NodeDriverActions for ResourceClient<NodeDriver> {
    async fn activate(&self, driver: &NodeDriver) -> Result<NodeDriver> {
        self.action(driver, "activate", NO_INPUT).await
    }

    async fn deactivate(&self, driver: &NodeDriver) -> Result<NodeDriver> {
        self.action(driver, "deactivate", NO_INPUT).await
    }
}

#[async_trait]
pub trait KontainerDriverActions {
    async fn activate(&self, driver: &KontainerDriver) -> Result<()>;

    async fn deactivate(&self, driver: &KontainerDriver) -> Result<()>;

    /// Re-download every driver in the collection.
    async fn refresh(&self, drivers: &Collection<KontainerDriver>) -> Result<()>;
}

#[async_trait]
impl KontainerDriverActions for ResourceClient<KontainerDriver> {
    async fn activate(&self, driver: &KontainerDriver) -> Result<()> {
        self.action_discard(driver, "activate", NO_INPUT).await
    }

    async fn deactivate(&self, driver: &KontainerDriver) -> Result<()> {
        self.action_discard(driver, "deactivate", NO_INPUT).await
    }

    async fn refresh(&self, drivers: &Collection<KontainerDriver>) -> Result<()> {
        self.collection_action_discard(drivers, "refresh", NO_INPUT)
            .await
    }
}
