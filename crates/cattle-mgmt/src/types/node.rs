//! Cluster nodes.

use std::collections::BTreeMap;

use async_trait::async_trait;
use cattle_core::{NO_INPUT, ResourceClient, Result};
use serde_json::Value;

resource! {
    /// A machine registered in a cluster.
    pub struct Node = "node" {
        ALLOCATABLE => allocatable: BTreeMap<String, String> = "allocatable",
        ANNOTATIONS => annotations: BTreeMap<String, String> = "annotations",
        CAPACITY => capacity: BTreeMap<String, String> = "capacity",
        CLUSTER_ID => cluster_id: String = "clusterId",
        CONDITIONS => conditions: Vec<Value> = "conditions",
        CONTROL_PLANE => control_plane: bool = "controlPlane",
        CREATED => created: String = "created",
        CREATOR_ID => creator_id: String = "creatorId",
        CUSTOM_CONFIG => custom_config: Value = "customConfig",
        DESCRIPTION => description: String = "description",
        ETCD => etcd: bool = "etcd",
        EXTERNAL_IP_ADDRESS => external_ip_address: String = "externalIpAddress",
        HOSTNAME => hostname: String = "hostname",
        IMPORTED => imported: bool = "imported",
        INFO => info: Value = "info",
        IP_ADDRESS => ip_address: String = "ipAddress",
        LABELS => labels: BTreeMap<String, String> = "labels",
        NAME => name: String = "name",
        NAMESPACE_ID => namespace_id: String = "namespaceId",
        NODE_NAME => node_name: String = "nodeName",
        NODE_POOL_ID => node_pool_id: String = "nodePoolId",
        NODE_TEMPLATE_ID => node_template_id: String = "nodeTemplateId",
        POD_CIDR => pod_cidr: String = "podCidr",
        PROVIDER_ID => provider_id: String = "providerId",
        REMOVED => removed: String = "removed",
        REQUESTED => requested: BTreeMap<String, String> = "requested",
        REQUESTED_HOSTNAME => requested_hostname: String = "requestedHostname",
        STATE => state: String = "state",
        TAINTS => taints: Vec<Value> = "taints",
        TRANSITIONING => transitioning: String = "transitioning",
        TRANSITIONING_MESSAGE => transitioning_message: String = "transitioningMessage",
        UNSCHEDULABLE => unschedulable: bool = "unschedulable",
        UUID => uuid: String = "uuid",
        WORKER => worker: bool = "worker",
    }
}

schema! {
    /// Options for `drain`.
    pub struct NodeDrainInput = "nodeDrainInput" {
        DELETE_LOCAL_DATA => delete_local_data: bool = "deleteLocalData",
        FORCE => force: bool = "force",
        GRACE_PERIOD => grace_period: i64 = "gracePeriod",
        IGNORE_DAEMON_SETS => ignore_daemon_sets: bool = "ignoreDaemonSets",
        TIMEOUT => timeout: i64 = "timeout",
    }
}

#[async_trait]
pub trait NodeActions {
    async fn cordon(&self, node: &Node) -> Result<()>;

    async fn uncordon(&self, node: &Node) -> Result<()>;

    async fn drain(&self, node: &Node, input: &NodeDrainInput) -> Result<()>;

    async fn stop_drain(&self, node: &Node) -> Result<()>;

    async fn scaledown(&self, node: &Node) -> Result<()>;
}

#[async_trait]
impl NodeActions for ResourceClient<Node> {
    async fn cordon(&self, node: &Node) -> Result<()> {
        self.action_discard(node, "cordon", NO_INPUT).await
    }

    async fn uncordon(&self, node: &Node) -> Result<()> {
        self.action_discard(node, "uncordon", NO_INPUT).await
    }

    async fn drain(&self, node: &Node, input: &NodeDrainInput) -> Result<()> {
        self.action_discard(node, "drain", Some(input)).await
    }

    async fn stop_drain(&self, node: &Node) -> Result<()> {
        self.action_discard(node, "stopDrain", NO_INPUT).await
    }

    async fn scaledown(&self, node: &Node) -> Result<()> {
        self.action_discard(node, "scaledown", NO_INPUT).await
    }
}
