//! GitHub client and discovery tests against a mock API server.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use httpmock::prelude::*;
use serde_json::json;

use sherpa::discovery;
use sherpa::github::GithubClient;
use sherpa::SherpaError;

const REPO: &str = "acme/monorepo";

fn client_for(server: &MockServer) -> GithubClient {
    GithubClient::with_base_url("test-token", REPO, server.base_url()).unwrap()
}

fn b64(text: &str) -> String {
    BASE64.encode(text)
}

fn dir_entry(name: &str) -> serde_json::Value {
    json!({ "name": name, "path": name, "type": "dir" })
}

fn file_entry(name: &str) -> serde_json::Value {
    json!({ "name": name, "path": name, "type": "file" })
}

#[test]
fn connect_succeeds_against_reachable_repo() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/repos/{}", REPO))
            .header("Authorization", "Bearer test-token");
        then.status(200).json_body(json!({ "full_name": REPO }));
    });

    let client = client_for(&server);
    client.connect().unwrap();
    mock.assert();
}

#[test]
fn connect_reports_remote_error_on_unauthorized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/repos/{}", REPO));
        then.status(401).json_body(json!({ "message": "Bad credentials" }));
    });

    let client = client_for(&server);
    let err = client.connect().unwrap_err();
    assert!(matches!(err, SherpaError::Remote { .. }));
    assert!(err.to_string().contains("401"));
}

#[test]
fn list_root_returns_entries_in_listing_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/repos/{}/contents/", REPO));
        then.status(200).json_body(json!([
            dir_entry("zeta"),
            file_entry("LICENSE"),
            dir_entry("alpha"),
        ]));
    });

    let client = client_for(&server);
    let entries = client.list_root().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].name, "zeta");
    assert_eq!(entries[1].name, "LICENSE");
    assert!(!entries[1].is_dir());
    assert_eq!(entries[2].name, "alpha");
    assert!(entries[2].is_dir());
}

#[test]
fn fetch_file_decodes_base64_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/repos/{}/contents/svc/README.md", REPO));
        then.status(200).json_body(json!({
            "content": b64("# Service\n\nHello.\n"),
            "encoding": "base64",
        }));
    });

    let client = client_for(&server);
    let text = client.fetch_file("svc/README.md").unwrap();
    assert_eq!(text, "# Service\n\nHello.\n");
}

#[test]
fn fetch_file_maps_404_to_file_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/repos/{}/contents/svc/README.md", REPO));
        then.status(404).json_body(json!({ "message": "Not Found" }));
    });

    let client = client_for(&server);
    let err = client.fetch_file("svc/README.md").unwrap_err();
    assert!(matches!(err, SherpaError::FileNotFound { .. }));
}

#[test]
fn discovery_keeps_only_directories_with_a_readme() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path(format!("/repos/{}/contents/", REPO));
        then.status(200).json_body(json!([
            dir_entry("billing"),
            dir_entry("frontend"),
            file_entry("README.md"),
            dir_entry("infra"),
            dir_entry("docs"),
            dir_entry("search"),
        ]));
    });

    for (dir, body) in [
        ("billing", "# Billing\n\n## Prerequisites\n\n- docker\n"),
        ("infra", "# Infra\n\nTerraform lives here.\n"),
        ("search", "# Search\n\n## Setup\n\n- run gradle build\n"),
    ] {
        server.mock(move |when, then| {
            when.method(GET)
                .path(format!("/repos/{}/contents/{}/README.md", REPO, dir));
            then.status(200).json_body(json!({
                "content": b64(body),
                "encoding": "base64",
            }));
        });
    }

    // frontend has no README, docs probe fails outright; both are skipped
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/repos/{}/contents/frontend/README.md", REPO));
        then.status(404).json_body(json!({ "message": "Not Found" }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/repos/{}/contents/docs/README.md", REPO));
        then.status(500).json_body(json!({ "message": "boom" }));
    });

    let client = client_for(&server);
    let projects = discovery::discover(&client).unwrap();

    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["billing", "infra", "search"]);
    assert!(projects[0].readme.contains("Prerequisites"));
    assert_eq!(projects[1].path, "infra");
}

#[test]
fn discovery_fails_when_root_listing_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/repos/{}/contents/", REPO));
        then.status(403).json_body(json!({ "message": "rate limited" }));
    });

    let client = client_for(&server);
    let err = discovery::discover(&client).unwrap_err();
    assert!(matches!(err, SherpaError::Remote { .. }));
}
