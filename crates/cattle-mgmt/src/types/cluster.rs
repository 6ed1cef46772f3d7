//! Clusters and their actions.

use std::collections::BTreeMap;

use async_trait::async_trait;
use cattle_core::{NO_INPUT, ResourceClient, Result};
use serde_json::Value;

resource! {
    /// A downstream Kubernetes cluster.
    ///
    /// Provider-specific configuration blocks (`eksConfig`, `rke2Config`,
    /// ...) and status blocks are carried as raw JSON.
    pub struct Cluster = "cluster" {
        AGENT_IMAGE => agent_image: String = "agentImage",
        AKS_CONFIG => aks_config: Value = "aksConfig",
        ALLOCATABLE => allocatable: BTreeMap<String, String> = "allocatable",
        ANNOTATIONS => annotations: BTreeMap<String, String> = "annotations",
        API_ENDPOINT => api_endpoint: String = "apiEndpoint",
        APPLIED_SPEC => applied_spec: Value = "appliedSpec",
        CA_CERT => ca_cert: String = "caCert",
        CAPACITY => capacity: BTreeMap<String, String> = "capacity",
        CLUSTER_TEMPLATE_ID => cluster_template_id: String = "clusterTemplateId",
        CLUSTER_TEMPLATE_REVISION_ID => cluster_template_revision_id: String = "clusterTemplateRevisionId",
        CONDITIONS => conditions: Vec<Value> = "conditions",
        CREATED => created: String = "created",
        CREATOR_ID => creator_id: String = "creatorId",
        DESCRIPTION => description: String = "description",
        DRIVER => driver: String = "driver",
        EKS_CONFIG => eks_config: Value = "eksConfig",
        ENABLE_NETWORK_POLICY => enable_network_policy: bool = "enableNetworkPolicy",
        FLEET_WORKSPACE_NAME => fleet_workspace_name: String = "fleetWorkspaceName",
        GKE_CONFIG => gke_config: Value = "gkeConfig",
        INTERNAL => internal: bool = "internal",
        K3S_CONFIG => k3s_config: Value = "k3sConfig",
        LABELS => labels: BTreeMap<String, String> = "labels",
        NAME => name: String = "name",
        NODE_COUNT => node_count: i64 = "nodeCount",
        PROVIDER => provider: String = "provider",
        RANCHER_KUBERNETES_ENGINE_CONFIG => rancher_kubernetes_engine_config: Value = "rancherKubernetesEngineConfig",
        REMOVED => removed: String = "removed",
        REQUESTED => requested: BTreeMap<String, String> = "requested",
        RKE2_CONFIG => rke2_config: Value = "rke2Config",
        STATE => state: String = "state",
        TRANSITIONING => transitioning: String = "transitioning",
        TRANSITIONING_MESSAGE => transitioning_message: String = "transitioningMessage",
        UUID => uuid: String = "uuid",
        VERSION => version: Value = "version",
    }
}

schema! {
    /// Output of `exportYaml`.
    pub struct ExportOutput = "exportOutput" {
        YAML_OUTPUT => yaml_output: String = "yamlOutput",
    }
}

schema! {
    /// Output of `generateKubeconfig`.
    pub struct GenerateKubeConfigOutput = "generateKubeConfigOutput" {
        CONFIG => config: String = "config",
    }
}

schema! {
    pub struct ImportClusterYamlInput = "importClusterYamlInput" {
        DEFAULT_NAMESPACE => default_namespace: String = "defaultNamespace",
        NAMESPACE => namespace: String = "namespace",
        PROJECT_ID => project_id: String = "projectId",
        YAML => yaml: String = "yaml",
    }
}

schema! {
    pub struct ImportYamlOutput = "importYamlOutput" {
        MESSAGE => message: String = "message",
    }
}

schema! {
    pub struct RestoreFromEtcdBackupInput = "restoreFromEtcdBackupInput" {
        ETCD_BACKUP_ID => etcd_backup_id: String = "etcdBackupId",
        RESTORE_RKE_CONFIG => restore_rke_config: String = "restoreRkeConfig",
    }
}

schema! {
    pub struct RotateCertificateInput = "rotateCertificateInput" {
        CA_CERTIFICATES => ca_certificates: bool = "caCertificates",
        SERVICES => services: String = "services",
    }
}

schema! {
    pub struct RotateCertificateOutput = "rotateCertificateOutput" {
        MESSAGE => message: String = "message",
    }
}

schema! {
    pub struct RotateEncryptionKeyOutput = "rotateEncryptionKeyOutput" {
        MESSAGE => message: String = "message",
    }
}

schema! {
    pub struct SaveAsTemplateInput = "saveAsTemplateInput" {
        CLUSTER_TEMPLATE_NAME => cluster_template_name: String = "clusterTemplateName",
        CLUSTER_TEMPLATE_REVISION_NAME => cluster_template_revision_name: String = "clusterTemplateRevisionName",
    }
}

schema! {
    pub struct SaveAsTemplateOutput = "saveAsTemplateOutput" {
        CLUSTER_TEMPLATE_NAME => cluster_template_name: String = "clusterTemplateName",
        CLUSTER_TEMPLATE_REVISION_NAME => cluster_template_revision_name: String = "clusterTemplateRevisionName",
    }
}

/// Typed cluster actions.
#[async_trait]
pub trait ClusterActions {
    async fn backup_etcd(&self, cluster: &Cluster) -> Result<()>;

    async fn export_yaml(&self, cluster: &Cluster) -> Result<ExportOutput>;

    async fn generate_kubeconfig(&self, cluster: &Cluster) -> Result<GenerateKubeConfigOutput>;

    async fn import_yaml(
        &self,
        cluster: &Cluster,
        input: &ImportClusterYamlInput,
    ) -> Result<ImportYamlOutput>;

    async fn restore_from_etcd_backup(
        &self,
        cluster: &Cluster,
        input: &RestoreFromEtcdBackupInput,
    ) -> Result<()>;

    async fn rotate_certificates(
        &self,
        cluster: &Cluster,
        input: &RotateCertificateInput,
    ) -> Result<RotateCertificateOutput>;

    async fn rotate_encryption_key(&self, cluster: &Cluster) -> Result<RotateEncryptionKeyOutput>;

    async fn save_as_template(
        &self,
        cluster: &Cluster,
        input: &SaveAsTemplateInput,
    ) -> Result<SaveAsTemplateOutput>;
}

#[async_trait]
impl ClusterActions for ResourceClient<Cluster> {
    async fn backup_etcd(&self, cluster: &Cluster) -> Result<()> {
        self.action_discard(cluster, "backupEtcd", NO_INPUT).await
    }

    async fn export_yaml(&self, cluster: &Cluster) -> Result<ExportOutput> {
        self.action(cluster, "exportYaml", NO_INPUT).await
    }

    async fn generate_kubeconfig(&self, cluster: &Cluster) -> Result<GenerateKubeConfigOutput> {
        self.action(cluster, "generateKubeconfig", NO_INPUT).await
    }

    async fn import_yaml(
        &self,
        cluster: &Cluster,
        input: &ImportClusterYamlInput,
    ) -> Result<ImportYamlOutput> {
        self.action(cluster, "importYaml", Some(input)).await
    }

    async fn restore_from_etcd_backup(
        &self,
        cluster: &Cluster,
        input: &RestoreFromEtcdBackupInput,
    ) -> Result<()> {
        self.action_discard(cluster, "restoreFromEtcdBackup", Some(input))
            .await
    }

    async fn rotate_certificates(
        &self,
        cluster: &Cluster,
        input: &RotateCertificateInput,
    ) -> Result<RotateCertificateOutput> {
        self.action(cluster, "rotateCertificates", Some(input)).await
    }

    async fn rotate_encryption_key(&self, cluster: &Cluster) -> Result<RotateEncryptionKeyOutput> {
        self.action(cluster, "rotateEncryptionKey", NO_INPUT).await
    }

    async fn save_as_template(
        &self,
        cluster: &Cluster,
        input: &SaveAsTemplateInput,
    ) -> Result<SaveAsTemplateOutput> {
        self.action(cluster, "saveAsTemplate", Some(input)).await
    }
}
