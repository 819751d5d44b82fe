//! Integration tests for CLI functionality

use std::path::Path;
use std::process::{Command, Output};

use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CLEARED_ENV: &[&str] = &[
    "AZURE_ACCESS_TOKEN",
    "ARM_ACCESS_TOKEN",
    "AZURE_SUBSCRIPTION_ID",
    "ARM_SUBSCRIPTION_ID",
    "ARM_ENDPOINT",
    "ARMPAGER_CONTEXT",
];

/// Get path to compiled binary
fn armpager_bin() -> &'static Path {
    assert_cmd::cargo::cargo_bin!("armpager")
}

/// Command isolated from the caller's environment and home directory
fn armpager(home: &TempDir) -> Command {
    let mut cmd = Command::new(armpager_bin());
    cmd.env("HOME", home.path());
    for var in CLEARED_ENV {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    let output = armpager(&home).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("across all resource groups"));
    assert!(predicate::str::contains("get").eval(&stdout));
    assert!(predicate::str::contains("delete").eval(&stdout));
    assert!(predicate::str::contains("config").eval(&stdout));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    let output = armpager(&home).arg("--version").output().unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("armpager"));
}

/// Test invalid resource kind
#[test]
fn test_invalid_kind() {
    let home = TempDir::new().unwrap();
    let output = armpager(&home).args(["get", "vms"]).output().unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("vms"));
}

/// Test invalid output format
#[test]
fn test_invalid_format() {
    let home = TempDir::new().unwrap();
    let output = armpager(&home)
        .args(["get", "acr", "-o", "xml"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("xml"));
}

/// Test zero limit is rejected by the parser
#[test]
fn test_zero_limit_rejected() {
    let home = TempDir::new().unwrap();
    let output = armpager(&home)
        .args(["get", "lgw", "--limit", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}

/// Test that a missing token is reported with the places it was looked up
#[test]
fn test_missing_token() {
    let home = TempDir::new().unwrap();
    let output = armpager(&home)
        .args(["get", "acr", "-s", "sub-1", "--batch"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.starts_with("Error:"));
    assert!(stderr.contains("AZURE_ACCESS_TOKEN"));
}

/// Test that a missing subscription is reported
#[test]
fn test_missing_subscription() {
    let home = TempDir::new().unwrap();
    let output = armpager(&home)
        .args(["get", "acr", "-t", "token", "--batch"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).to_lowercase().contains("subscription"));
}

/// Test that getting by name requires a group
#[test]
fn test_get_by_name_requires_group() {
    let home = TempDir::new().unwrap();
    let output = armpager(&home)
        .args(["get", "acr", "acme", "-t", "token", "-s", "sub-1", "--batch"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--group is required"));
}

/// Test that batch mode refuses to delete without --yes
#[test]
fn test_batch_delete_without_yes_refused() {
    let home = TempDir::new().unwrap();
    let output = armpager(&home)
        .args([
            "delete", "acr", "acme", "-g", "rg-ci", "-t", "token", "-s", "sub-1", "--batch",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--yes"));
}

/// Test that delete rejects an ID of another resource kind before asking
#[test]
fn test_delete_rejects_foreign_id() {
    let home = TempDir::new().unwrap();
    let id = "/subscriptions/sub-1/resourceGroups/rg/providers/Microsoft.Network/localNetworkGateways/gw";
    let output = armpager(&home)
        .args(["delete", "acr", id, "-y", "-t", "token", "-s", "sub-1", "--batch"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("expected Microsoft.ContainerRegistry/registries"));
}

/// Test that delete rejects an ID of another subscription before asking
#[test]
fn test_delete_rejects_id_of_other_subscription() {
    let home = TempDir::new().unwrap();
    let id = "/subscriptions/sub-2/resourceGroups/rg/providers/Microsoft.ContainerRegistry/registries/acme";
    let output = armpager(&home)
        .args(["delete", "acr", id, "-t", "token", "-s", "sub-1", "--batch"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.contains("subscription 'sub-2'"));
    assert!(!stderr.contains("--yes"));
}

/// Test the context lifecycle: create, list, show, switch, delete
#[test]
fn test_context_lifecycle() {
    let home = TempDir::new().unwrap();

    let output = armpager(&home)
        .args([
            "config",
            "set-context",
            "dev",
            "--subscription",
            "sub-dev",
            "--token",
            "secret-token-9876",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created context 'dev'"));
    assert!(home.path().join(".armpager").join("config.json").exists());

    let output = armpager(&home)
        .args(["config", "set-context", "prod", "--subscription", "sub-prod"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = armpager(&home)
        .args(["config", "get-contexts"])
        .output()
        .unwrap();
    let listed = stdout(&output);
    assert!(output.status.success());
    assert!(listed.contains("sub-dev"));
    assert!(listed.contains("sub-prod"));
    assert!(listed.contains("****9876"));
    assert!(!listed.contains("secret-token-9876"));

    let output = armpager(&home)
        .args(["config", "current-context"])
        .output()
        .unwrap();
    assert!(stdout(&output).contains("Current context: dev"));

    let output = armpager(&home)
        .args(["config", "use-context", "prod"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = armpager(&home)
        .args(["config", "current-context"])
        .output()
        .unwrap();
    assert!(stdout(&output).contains("Current context: prod"));

    let output = armpager(&home)
        .args(["config", "delete-context", "prod"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = armpager(&home)
        .args(["config", "current-context"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

/// Test that a new context needs a subscription
#[test]
fn test_set_context_requires_subscription() {
    let home = TempDir::new().unwrap();
    let output = armpager(&home)
        .args(["config", "set-context", "dev"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--subscription is required"));
}

/// Test that naming an unknown context is an error
#[test]
fn test_unknown_context_flag() {
    let home = TempDir::new().unwrap();
    let output = armpager(&home)
        .args(["get", "acr", "--context", "ghost", "--batch"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("ghost"));
}

fn registry_json(group: &str, name: &str) -> serde_json::Value {
    json!({
        "id": format!(
            "/subscriptions/sub-1/resourceGroups/{}/providers/Microsoft.ContainerRegistry/registries/{}",
            group, name
        ),
        "name": name,
        "location": "westeurope",
        "sku": {"name": "Standard"},
        "properties": {"loginServer": format!("{}.azurecr.io", name), "provisioningState": "Succeeded"}
    })
}

async fn mock_subscription() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/subscriptions/sub-1/resourcegroups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {"id": "/subscriptions/sub-1/resourceGroups/rg-a", "name": "rg-a"},
                {"id": "/subscriptions/sub-1/resourceGroups/rg-b", "name": "rg-b"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-a/providers/Microsoft.ContainerRegistry/registries",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [registry_json("rg-a", "acr-one"), registry_json("rg-a", "acr-two")]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-b/providers/Microsoft.ContainerRegistry/registries",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [registry_json("rg-b", "acr-three")]
        })))
        .mount(&server)
        .await;
    server
}

async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

/// Test listing across groups through the binary, as CSV
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_get_lists_across_groups() {
    let server = mock_subscription().await;
    let home = TempDir::new().unwrap();
    let mut cmd = armpager(&home);
    cmd.args([
        "get",
        "acr",
        "-o",
        "csv",
        "--batch",
        "-t",
        "token",
        "-s",
        "sub-1",
        "--endpoint",
        server.uri().as_str(),
    ]);

    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(
        lines[0],
        "resource_group,name,location,provisioning_state,detail,id"
    );
    assert!(lines[1].starts_with("rg-a,acr-one,westeurope,Succeeded"));
    assert!(lines[2].starts_with("rg-a,acr-two,"));
    assert!(lines[3].starts_with("rg-b,acr-three,"));
    assert_eq!(lines.len(), 4);
}

/// Test that --limit stops the listing early
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_get_limit_stops_early() {
    let server = mock_subscription().await;
    let home = TempDir::new().unwrap();
    let mut cmd = armpager(&home);
    cmd.args([
        "get",
        "acr",
        "--limit",
        "2",
        "-o",
        "json",
        "--batch",
        "-t",
        "token",
        "-s",
        "sub-1",
        "--endpoint",
        server.uri().as_str(),
    ]);

    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["acr-one", "acr-two"]);

    // rg-b never listed
    let requests = server.received_requests().await.unwrap();
    assert!(!requests.iter().any(|r| r.url.path().contains("/rg-b/")));
}

/// Test that connection details come from the current context
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_get_uses_current_context() {
    let server = mock_subscription().await;
    let home = TempDir::new().unwrap();

    let mut set = armpager(&home);
    set.args([
        "config",
        "set-context",
        "mock",
        "--subscription",
        "sub-1",
        "--token",
        "ctx-token",
        "--endpoint",
        server.uri().as_str(),
    ]);
    assert!(run(set).await.status.success());

    let mut cmd = armpager(&home);
    cmd.args(["get", "acr", "-g", "rg-b", "-o", "json", "--batch"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed[0]["name"], "acr-three");

    let requests = server.received_requests().await.unwrap();
    let auth = requests[0].headers.get("authorization").unwrap();
    assert_eq!(auth.to_str().unwrap(), "Bearer ctx-token");
}

/// Test that a missing resource is an error exit
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_get_missing_resource() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-a/providers/Microsoft.ContainerRegistry/registries/nope",
        ))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let mut cmd = armpager(&home);
    cmd.args([
        "get",
        "acr",
        "nope",
        "-g",
        "rg-a",
        "--batch",
        "-t",
        "token",
        "-s",
        "sub-1",
        "--endpoint",
        server.uri().as_str(),
    ]);

    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not found"));
}
