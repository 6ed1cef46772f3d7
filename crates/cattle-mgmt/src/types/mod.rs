//! Management v3 resource types.
//!
//! Every struct here is declared through `resource!` or `schema!`, so its
//! field constants, `FIELDS` table and serde keys come from one literal
//! per field.

mod catalog;
mod cluster;
mod cluster_template;
mod driver;
mod node;
mod project;
mod setting;
mod token;
mod user;

pub use catalog::{Catalog, CatalogActions, CatalogRefresh};
pub use cluster::{
    Cluster, ClusterActions, ExportOutput, GenerateKubeConfigOutput, ImportClusterYamlInput,
    ImportYamlOutput, RestoreFromEtcdBackupInput, RotateCertificateInput, RotateCertificateOutput,
    RotateEncryptionKeyOutput, SaveAsTemplateInput, SaveAsTemplateOutput,
};
pub use cluster_template::{
    ClusterTemplate, ClusterTemplateQuestionsOutput, ClusterTemplateRevision,
    ClusterTemplateRevisionActions,
};
pub use driver::{KontainerDriver, KontainerDriverActions, NodeDriver, NodeDriverActions};
pub use node::{Node, NodeActions, NodeDrainInput};
pub use project::{Project, ProjectActions};
pub use setting::Setting;
pub use token::Token;
pub use user::{ChangePasswordInput, SetPasswordInput, User, UserActions};

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use cattle_core::{Resource, Schema};
    use serde::Serialize;
    use serde_json::{Value, json};

    use super::*;

    /// The serialized keys of a fully populated value are exactly `FIELDS`.
    fn assert_fields_match<T: Schema + Serialize>(value: T) {
        let Value::Object(map) = serde_json::to_value(&value).unwrap() else {
            panic!("{} did not serialize to an object", T::TYPE);
        };
        let serialized: BTreeSet<&str> = map.keys().map(String::as_str).collect();
        let declared: BTreeSet<&str> = T::FIELDS.iter().copied().collect();

        assert_eq!(serialized, declared, "field table drift on {}", T::TYPE);
        assert_eq!(
            T::FIELDS.len(),
            declared.len(),
            "duplicate wire key on {}",
            T::TYPE
        );
    }

    #[test]
    fn resource_field_tables_match_wire_keys() {
        assert_fields_match(Cluster::populated());
        assert_fields_match(Project::populated());
        assert_fields_match(Node::populated());
        assert_fields_match(Token::populated());
        assert_fields_match(Catalog::populated());
        assert_fields_match(NodeDriver::populated());
        assert_fields_match(KontainerDriver::populated());
        assert_fields_match(ClusterTemplate::populated());
        assert_fields_match(ClusterTemplateRevision::populated());
        assert_fields_match(Setting::populated());
        assert_fields_match(User::populated());
    }

    #[test]
    fn action_type_field_tables_match_wire_keys() {
        assert_fields_match(ExportOutput::populated());
        assert_fields_match(GenerateKubeConfigOutput::populated());
        assert_fields_match(ImportClusterYamlInput::populated());
        assert_fields_match(ImportYamlOutput::populated());
        assert_fields_match(RestoreFromEtcdBackupInput::populated());
        assert_fields_match(RotateCertificateInput::populated());
        assert_fields_match(RotateCertificateOutput::populated());
        assert_fields_match(RotateEncryptionKeyOutput::populated());
        assert_fields_match(SaveAsTemplateInput::populated());
        assert_fields_match(SaveAsTemplateOutput::populated());
        assert_fields_match(NodeDrainInput::populated());
        assert_fields_match(CatalogRefresh::populated());
        assert_fields_match(ClusterTemplateQuestionsOutput::populated());
        assert_fields_match(SetPasswordInput::populated());
        assert_fields_match(ChangePasswordInput::populated());
    }

    #[test]
    fn field_constants_are_wire_keys() {
        assert_eq!(Cluster::NAME, "name");
        assert_eq!(Cluster::TRANSITIONING_MESSAGE, "transitioningMessage");
        assert_eq!(Node::NODE_POOL_ID, "nodePoolId");
        assert_eq!(Token::TTL_MILLIS, "ttl");
        assert_eq!(Cluster::TYPE, "cluster");
        assert_eq!(KontainerDriver::TYPE, "kontainerDriver");
        assert!(Cluster::has_field(Cluster::RKE2_CONFIG));
        assert!(!Cluster::has_field("id"));
    }

    #[test]
    fn unset_fields_are_omitted() {
        let catalog = Catalog {
            name: Some("library".into()),
            ..Catalog::default()
        };
        assert_eq!(serde_json::to_value(&catalog).unwrap(), json!({"name": "library"}));
    }

    #[test]
    fn decodes_server_resource() {
        let cluster: Cluster = serde_json::from_value(json!({
            "id": "c-m-abc12",
            "type": "cluster",
            "baseType": "cluster",
            "links": {
                "self": "https://rancher.test/v3/clusters/c-m-abc12",
                "nodes": "https://rancher.test/v3/nodes?clusterId=c-m-abc12"
            },
            "actions": {
                "generateKubeconfig": "https://rancher.test/v3/clusters/c-m-abc12?action=generateKubeconfig"
            },
            "name": "prod",
            "nodeCount": 3,
            "state": "active",
            "transitioning": "no",
            "rke2Config": {"kubernetesVersion": "v1.28.9+rke2r1"},
            "labels": {"env": "prod"}
        }))
        .unwrap();

        assert_eq!(cluster.id(), Some("c-m-abc12"));
        assert_eq!(cluster.node_count, Some(3));
        assert_eq!(cluster.labels.as_ref().unwrap()["env"], "prod");
        assert_eq!(
            cluster.rke2_config.as_ref().unwrap()["kubernetesVersion"],
            "v1.28.9+rke2r1"
        );
        assert!(cluster.base().action_url("generateKubeconfig").is_some());
        assert!(cluster.base().link("nodes").is_some());
    }

    #[test]
    fn null_fields_decode_as_unset() {
        let user: User = serde_json::from_value(json!({
            "id": "u-1",
            "description": null,
            "principalIds": ["local://u-1"]
        }))
        .unwrap();
        assert!(user.description.is_none());
        assert_eq!(user.principal_ids, Some(vec!["local://u-1".to_string()]));
    }
}
