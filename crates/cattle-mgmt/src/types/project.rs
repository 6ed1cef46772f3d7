//! Projects.

use std::collections::BTreeMap;

use async_trait::async_trait;
use cattle_core::{NO_INPUT, ResourceClient, Result};
use serde_json::Value;

use super::ExportOutput;

resource! {
    /// A group of namespaces inside one cluster.
    pub struct Project = "project" {
        ANNOTATIONS => annotations: BTreeMap<String, String> = "annotations",
        CLUSTER_ID => cluster_id: String = "clusterId",
        CONDITIONS => conditions: Vec<Value> = "conditions",
        CONTAINER_DEFAULT_RESOURCE_LIMIT => container_default_resource_limit: Value = "containerDefaultResourceLimit",
        CREATED => created: String = "created",
        CREATOR_ID => creator_id: String = "creatorId",
        DESCRIPTION => description: String = "description",
        ENABLE_PROJECT_MONITORING => enable_project_monitoring: bool = "enableProjectMonitoring",
        LABELS => labels: BTreeMap<String, String> = "labels",
        NAME => name: String = "name",
        NAMESPACE_DEFAULT_RESOURCE_QUOTA => namespace_default_resource_quota: Value = "namespaceDefaultResourceQuota",
        NAMESPACE_ID => namespace_id: String = "namespaceId",
        REMOVED => removed: String = "removed",
        RESOURCE_QUOTA => resource_quota: Value = "resourceQuota",
        STATE => state: String = "state",
        TRANSITIONING => transitioning: String = "transitioning",
        TRANSITIONING_MESSAGE => transitioning_message: String = "transitioningMessage",
        UUID => uuid: String = "uuid",
    }
}

#[async_trait]
pub trait ProjectActions {
    async fn export_yaml(&self, project: &Project) -> Result<ExportOutput>;
}

#[async_trait]
impl ProjectActions for ResourceClient<Project> {
    async fn export_yaml(&self, project: &Project) -> Result<ExportOutput> {
        self.action(project, "exportYaml", NO_INPUT).await
    }
}
