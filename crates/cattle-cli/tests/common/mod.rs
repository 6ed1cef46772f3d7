use std::path::{Path, PathBuf};
use std::process::Output;

use serde_json::{Value, json};
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary with an isolated HOME so stored configuration never
/// leaks between tests or into the developer's own.
pub async fn run_cli(args: &[&str], home: &Path) -> Output {
    run_cli_with_env(args, home, &[]).await
}

/// Run the CLI with an isolated HOME plus extra environment variables.
pub async fn run_cli_with_env(args: &[&str], home: &Path, env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cattle"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env_remove("CATTLE_URL");
    cmd.env_remove("CATTLE_TOKEN");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd.envs(env.iter().copied());
    cmd.output().await.expect("Failed to execute CLI")
}

/// Where the CLI stores its configuration under `home`.
pub fn config_file(home: &Path) -> PathBuf {
    home.join("data").join("cattle").join("config.json")
}

/// Log in to `server` with a bearer token.
pub async fn login(server: &MockServer, home: &Path) {
    run_cli_success(&["login", "--url", &api_url(server), "--token", "t0ken"], home).await;
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn api_url(server: &MockServer) -> String {
    format!("{}/v3", server.uri())
}

fn schema(server: &MockServer, id: &str, plural: &str) -> Value {
    let actions = if id == "cluster" {
        json!({"generateKubeconfig": {"output": "generateKubeConfigOutput"}})
    } else {
        Value::Null
    };
    json!({
        "id": id,
        "type": "schema",
        "links": {"collection": format!("{}/v3/{plural}", server.uri())},
        "collectionMethods": ["GET", "POST"],
        "resourceMethods": ["GET", "PUT", "DELETE"],
        "resourceActions": actions
    })
}

/// Start a server publishing a small schema document at `/v3`.
pub async fn start_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "collection",
            "data": [
                schema(&server, "cluster", "clusters"),
                schema(&server, "setting", "settings"),
                schema(&server, "token", "tokens")
            ]
        })))
        .mount(&server)
        .await;

    server
}

/// A cluster body as the server would return it.
pub fn cluster_json(server: &MockServer, id: &str, transitioning: &str) -> Value {
    let state = match transitioning {
        "no" => "active",
        "error" => "error",
        _ => "provisioning",
    };
    let message = if transitioning == "error" { "etcd unreachable" } else { "" };
    json!({
        "id": id,
        "type": "cluster",
        "links": {"self": format!("{}/v3/clusters/{id}", server.uri())},
        "actions": {
            "generateKubeconfig": format!("{}/v3/clusters/{id}?action=generateKubeconfig", server.uri())
        },
        "name": "prod",
        "state": state,
        "transitioning": transitioning,
        "transitioningMessage": message
    })
}
