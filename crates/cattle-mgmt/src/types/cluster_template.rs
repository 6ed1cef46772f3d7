//! Cluster templates and their revisions.

use std::collections::BTreeMap;

use async_trait::async_trait;
use cattle_core::{Collection, NO_INPUT, ResourceClient, Result};
use serde_json::Value;

resource! {
    /// A reusable, versioned cluster configuration.
    pub struct ClusterTemplate = "clusterTemplate" {
        ANNOTATIONS => annotations: BTreeMap<String, String> = "annotations",
        CREATED => created: String = "created",
        CREATOR_ID => creator_id: String = "creatorId",
        DEFAULT_REVISION_ID => default_revision_id: String = "defaultRevisionId",
        DESCRIPTION => description: String = "description",
        ENABLED => enabled: bool = "enabled",
        LABELS => labels: BTreeMap<String, String> = "labels",
        MEMBERS => members: Vec<Value> = "members",
        NAME => name: String = "name",
        REMOVED => removed: String = "removed",
        UUID => uuid: String = "uuid",
    }
}

resource! {
    /// One revision of a [`ClusterTemplate`].
    pub struct ClusterTemplateRevision = "clusterTemplateRevision" {
        ANNOTATIONS => annotations: BTreeMap<String, String> = "annotations",
        CLUSTER_CONFIG => cluster_config: Value = "clusterConfig",
        CLUSTER_TEMPLATE_ID => cluster_template_id: String = "clusterTemplateId",
        CREATED => created: String = "created",
        CREATOR_ID => creator_id: String = "creatorId",
        ENABLED => enabled: bool = "enabled",
        LABELS => labels: BTreeMap<String, String> = "labels",
        NAME => name: String = "name",
        QUESTIONS => questions: Vec<Value> = "questions",
        REMOVED => removed: String = "removed",
        STATE => state: String = "state",
        TRANSITIONING => transitioning: String = "transitioning",
        TRANSITIONING_MESSAGE => transitioning_message: String = "transitioningMessage",
        UUID => uuid: String = "uuid",
    }
}

schema! {
    /// Questions a template revision can ask when a cluster is created.
    pub struct ClusterTemplateQuestionsOutput = "clusterTemplateQuestionsOutput" {
        QUESTIONS => questions: Vec<Value> = "questions",
    }
}

#[async_trait]
pub trait ClusterTemplateRevisionActions {
    async fn disable(&self, revision: &ClusterTemplateRevision) -> Result<()>;

    async fn enable(&self, revision: &ClusterTemplateRevision) -> Result<()>;

    async fn list_questions(
        &self,
        revisions: &Collection<ClusterTemplateRevision>,
    ) -> Result<ClusterTemplateQuestionsOutput>;
}

#[async_trait]
impl ClusterTemplateRevisionActions for ResourceClient<ClusterTemplateRevision> {
    async fn disable(&self, revision: &ClusterTemplateRevision) -> Result<()> {
        self.action_discard(revision, "disable", NO_INPUT).await
    }

    async fn enable(&self, revision: &ClusterTemplateRevision) -> Result<()> {
        self.action_discard(revision, "enable", NO_INPUT).await
    }

    async fn list_questions(
        &self,
        revisions: &Collection<ClusterTemplateRevision>,
    ) -> Result<ClusterTemplateQuestionsOutput> {
        self.collection_action(revisions, "listquestions", NO_INPUT)
            .await
    }
}
