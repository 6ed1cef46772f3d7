//! End-to-end tests of the root client against a mock management API.

use std::collections::BTreeMap;
use std::time::Duration;

use cattle_http::{ApiUrl, ClientOpts};
use cattle_mgmt::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn schema(server: &MockServer, id: &str, plural: &str) -> Value {
    json!({
        "id": id,
        "type": "schema",
        "links": {"collection": format!("{}/v3/{plural}", server.uri())},
        "collectionMethods": ["GET", "POST"],
        "resourceMethods": ["GET", "PUT", "DELETE"]
    })
}

async fn start() -> (MockServer, Client) {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "collection",
            "data": [
                schema(&server, "cluster", "clusters"),
                schema(&server, "setting", "settings"),
                schema(&server, "node", "nodes")
            ]
        })))
        .mount(&server)
        .await;

    let url = ApiUrl::new(format!("{}/v3", server.uri())).unwrap();
    let client = Client::new(ClientOpts::new(url).with_token("t0ken"))
        .await
        .unwrap();
    (server, client)
}

fn cluster_json(server: &MockServer, id: &str, transitioning: &str) -> Value {
    let state = if transitioning == "no" { "active" } else { "provisioning" };
    json!({
        "id": id,
        "type": "cluster",
        "links": {"self": format!("{}/v3/clusters/{id}", server.uri())},
        "name": "prod",
        "state": state,
        "transitioning": transitioning
    })
}

#[tokio::test]
async fn test_new_fails_without_client_on_bad_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "type": "error",
            "status": 401,
            "code": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let url = ApiUrl::new(format!("{}/v3", server.uri())).unwrap();
    let result = Client::new(ClientOpts::new(url).with_token("expired")).await;

    let err = result.unwrap_err();
    assert_eq!(err.as_api().map(|api| api.status), Some(401));
}

#[tokio::test]
async fn test_by_id_and_update() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path("/v3/settings/server-url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "server-url",
            "type": "setting",
            "links": {"self": format!("{}/v3/settings/server-url", server.uri())},
            "value": "",
            "default": "https://rancher.local"
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v3/settings/server-url"))
        .and(body_json(json!({"value": "https://rancher.test"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "server-url",
            "type": "setting",
            "value": "https://rancher.test"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let setting = client.setting.by_id("server-url").await.unwrap();
    assert_eq!(setting.effective_value(), Some("https://rancher.local"));

    let updated = client
        .setting
        .update(&setting, &BTreeMap::from([(Setting::VALUE, "https://rancher.test")]))
        .await
        .unwrap();
    assert_eq!(updated.effective_value(), Some("https://rancher.test"));
}

#[tokio::test]
async fn test_list_all_follows_pages() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path("/v3/nodes"))
        .and(query_param("marker", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "collection",
            "resourceType": "node",
            "pagination": {"limit": 2},
            "data": [{"id": "c-1:m-3", "nodeName": "worker-3"}]
        })))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "collection",
            "resourceType": "node",
            "pagination": {
                "limit": 2,
                "next": format!("{}/v3/nodes?limit=2&marker=page2", server.uri())
            },
            "data": [
                {"id": "c-1:m-1", "nodeName": "worker-1"},
                {"id": "c-1:m-2", "nodeName": "worker-2"}
            ]
        })))
        .with_priority(2)
        .mount(&server)
        .await;

    let nodes = client
        .node
        .list_all(&ListOpts::new().limit(2))
        .await
        .unwrap();

    let names: Vec<&str> = nodes.iter().filter_map(|n| n.node_name.as_deref()).collect();
    assert_eq!(names, vec!["worker-1", "worker-2", "worker-3"]);
}

#[tokio::test]
async fn test_wait_success_polls_until_active() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path("/v3/clusters/c-abc12"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(cluster_json(&server, "c-abc12", "yes")),
        )
        .up_to_n_times(2)
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/clusters/c-abc12"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(cluster_json(&server, "c-abc12", "no")),
        )
        .with_priority(2)
        .mount(&server)
        .await;

    let pending: Cluster = serde_json::from_value(cluster_json(&server, "c-abc12", "yes")).unwrap();
    let active = client
        .cluster
        .wait_success(&pending, Duration::from_secs(5))
        .await
        .unwrap();

    assert_eq!(active.state.as_deref(), Some("active"));
}

#[tokio::test]
async fn test_delete_missing_cluster_is_not_found() {
    let (server, client) = start().await;

    Mock::given(method("DELETE"))
        .and(path("/v3/clusters/c-gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "type": "error",
            "status": 404,
            "code": "NotFound"
        })))
        .mount(&server)
        .await;

    let gone: Cluster = serde_json::from_value(cluster_json(&server, "c-gone", "no")).unwrap();
    let err = client.cluster.delete(&gone).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_follow_cluster_nodes_link() {
    let (server, client) = start().await;

    let mut cluster = cluster_json(&server, "c-1", "no");
    cluster["links"]["nodes"] = json!(format!("{}/v3/nodes?clusterId=c-1", server.uri()));
    Mock::given(method("GET"))
        .and(path("/v3/clusters/c-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cluster))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/nodes"))
        .and(query_param("clusterId", "c-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "collection",
            "resourceType": "node",
            "links": null,
            "data": [
                {"id": "c-1:m-1", "type": "node", "clusterId": "c-1", "actions": null},
                {"id": "c-1:m-2", "type": "node", "clusterId": "c-1", "actions": null}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cluster = client.cluster.by_id("c-1").await.unwrap();
    let nodes: Collection<Node> = client
        .cluster
        .follow_link(&cluster, "nodes", &ListOpts::new())
        .await
        .unwrap();

    let ids: Vec<_> = nodes.iter().filter_map(|node| node.id()).collect();
    assert_eq!(ids, vec!["c-1:m-1", "c-1:m-2"]);

    let err = client
        .cluster
        .follow_link::<Collection<Node>>(&cluster, "projects", &ListOpts::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingLink { .. }));
}
