//! End-to-end tests for CLI commands against a mock registry.

use super::*;

use camino::Utf8PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::output::OutputHandler;
use sprig_core::error::SprigError;

fn record(name: &str, deps: &[&str], npm: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": format!("The {} component", name),
        "componentDependencies": deps,
        "npmDependencies": npm,
        "files": [{
            "relativePath": format!("{}.tsx", name),
            "content": format!("// {}", name),
            "fileType": "component"
        }]
    })
}

fn record_with_utils(name: &str) -> serde_json::Value {
    let mut value = record(name, &[], &[]);
    value["utils"] = serde_json::json!([{
        "relativePath": "cn.ts",
        "content": "export const cn = () => '';",
        "fileType": "utility"
    }]);
    value
}

async fn mock_registry(records: &[serde_json::Value]) -> MockServer {
    let server = MockServer::start().await;

    let mut catalog = serde_json::Map::new();
    for rec in records {
        let name = rec["name"].as_str().unwrap().to_string();

        Mock::given(method("GET"))
            .and(path(format!("/components/{}", name)))
            .respond_with(ResponseTemplate::new(200).set_body_json(rec))
            .mount(&server)
            .await;

        catalog.insert(name, rec.clone());
    }

    Mock::given(method("GET"))
        .and(path("/components"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::Value::Object(catalog)),
        )
        .mount(&server)
        .await;

    // Anything else is unknown to the registry
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    server
}

fn project_dir() -> (TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    (dir, path)
}

fn write_sprig_json(project: &Utf8PathBuf) {
    std::fs::write(
        project.join("sprig.json"),
        r#"{
            "componentsDir": "src/components/ui",
            "utilsDir": "src/lib",
            "cssFramework": "tailwind",
            "typescript": true
        }"#,
    )
    .unwrap();
}

fn context(project: &Utf8PathBuf, server: &MockServer) -> CommandContext {
    CommandContext {
        cwd: project.clone(),
        registry_url: server.uri(),
        output: OutputHandler::silent(),
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_add_with_no_names_is_invalid_command() {
    let server = mock_registry(&[]).await;
    let (_guard, project) = project_dir();
    write_sprig_json(&project);
    let ctx = context(&project, &server);

    let result = add::execute(Vec::new(), add::AddOptions::default(), &ctx).await;
    assert!(matches!(
        result.unwrap_err(),
        SprigError::InvalidCommand { .. }
    ));
}

#[tokio::test]
async fn test_add_without_config_is_invalid_project() {
    let server = mock_registry(&[record("button", &[], &[])]).await;
    let (_guard, project) = project_dir();
    let ctx = context(&project, &server);

    let result = add::execute(names(&["button"]), add::AddOptions::default(), &ctx).await;
    assert!(matches!(
        result.unwrap_err(),
        SprigError::InvalidProject { .. }
    ));
}

#[tokio::test]
async fn test_add_installs_dependency_closure() {
    let server = mock_registry(&[
        record("button", &[], &[]),
        record("card", &["button"], &[]),
    ])
    .await;
    let (_guard, project) = project_dir();
    write_sprig_json(&project);
    let ctx = context(&project, &server);

    add::execute(names(&["card"]), add::AddOptions::default(), &ctx)
        .await
        .unwrap();

    let ui = project.join("src/components/ui");
    assert_eq!(
        std::fs::read_to_string(ui.join("button.tsx")).unwrap(),
        "// button"
    );
    assert_eq!(
        std::fs::read_to_string(ui.join("card.tsx")).unwrap(),
        "// card"
    );
}

#[tokio::test]
async fn test_add_unknown_component_is_not_found() {
    let server = mock_registry(&[record("button", &[], &[])]).await;
    let (_guard, project) = project_dir();
    write_sprig_json(&project);
    let ctx = context(&project, &server);

    let result = add::execute(names(&["ghost"]), add::AddOptions::default(), &ctx).await;
    match result.unwrap_err() {
        SprigError::ComponentNotFound { name } => assert_eq!(name, "ghost"),
        other => panic!("Expected ComponentNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_skip_deps_never_invokes_the_npm_path() {
    let server = mock_registry(&[record("button", &[], &["clsx@2.0.0"])]).await;
    let (_guard, project) = project_dir();
    write_sprig_json(&project);
    // No package.json: any npm reconciliation would fail with InvalidProject
    let ctx = context(&project, &server);

    let options = add::AddOptions {
        skip_deps: true,
        ..Default::default()
    };
    add::execute(names(&["button"]), options, &ctx).await.unwrap();

    assert!(project.join("src/components/ui/button.tsx").exists());

    // Without --skip-deps the same install hits the manifest read and fails
    let result = add::execute(names(&["button"]), add::AddOptions::default(), &ctx).await;
    assert!(matches!(
        result.unwrap_err(),
        SprigError::InvalidProject { .. }
    ));
}

#[tokio::test]
async fn test_version_conflict_aborts_component_install() {
    let server = mock_registry(&[record("button", &[], &["existing-dep@2.0.0"])]).await;
    let (_guard, project) = project_dir();
    write_sprig_json(&project);
    std::fs::write(
        project.join("package.json"),
        r#"{"dependencies": {"existing-dep": "1.0.0"}}"#,
    )
    .unwrap();
    let ctx = context(&project, &server);

    let result = add::execute(names(&["button"]), add::AddOptions::default(), &ctx).await;

    match result.unwrap_err() {
        SprigError::DependencyConflict { conflicts } => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].name, "existing-dep");
            assert_eq!(conflicts[0].installed, "1.0.0");
            assert_eq!(conflicts[0].required, "2.0.0");
        }
        other => panic!("Expected DependencyConflict, got {:?}", other),
    }

    // Files written before the npm stage stay on disk; no rollback
    assert!(project.join("src/components/ui/button.tsx").exists());
}

#[tokio::test]
async fn test_force_proceeds_past_version_conflicts() {
    let server = mock_registry(&[record("button", &[], &["existing-dep@2.0.0"])]).await;
    let (_guard, project) = project_dir();
    write_sprig_json(&project);
    std::fs::write(
        project.join("package.json"),
        r#"{"dependencies": {"existing-dep": "1.0.0"}}"#,
    )
    .unwrap();
    let ctx = context(&project, &server);

    let options = add::AddOptions {
        force: true,
        ..Default::default()
    };
    // The conflicting package is already present, so nothing is missing
    // and no npm subprocess runs
    add::execute(names(&["button"]), options, &ctx).await.unwrap();
}

#[tokio::test]
async fn test_utils_are_written_to_the_utils_dir() {
    let server = mock_registry(&[record_with_utils("button")]).await;
    let (_guard, project) = project_dir();
    write_sprig_json(&project);
    let ctx = context(&project, &server);

    add::execute(names(&["button"]), add::AddOptions::default(), &ctx)
        .await
        .unwrap();

    assert!(project.join("src/components/ui/button.tsx").exists());
    assert_eq!(
        std::fs::read_to_string(project.join("src/lib/cn.ts")).unwrap(),
        "export const cn = () => '';"
    );
}

#[tokio::test]
async fn test_components_dir_override() {
    let server = mock_registry(&[record("button", &[], &[])]).await;
    let (_guard, project) = project_dir();
    write_sprig_json(&project);
    let ctx = context(&project, &server);

    let options = add::AddOptions {
        components_dir: Some(Utf8PathBuf::from("app/ui")),
        ..Default::default()
    };
    add::execute(names(&["button"]), options, &ctx).await.unwrap();

    assert!(project.join("app/ui/button.tsx").exists());
    assert!(!project.join("src/components/ui/button.tsx").exists());
}

#[tokio::test]
async fn test_batch_stops_at_first_failure() {
    let server = mock_registry(&[record("button", &[], &[])]).await;
    let (_guard, project) = project_dir();
    write_sprig_json(&project);
    let ctx = context(&project, &server);

    let result = add::execute(
        names(&["button", "ghost", "button"]),
        add::AddOptions::default(),
        &ctx,
    )
    .await;

    assert!(matches!(
        result.unwrap_err(),
        SprigError::ComponentNotFound { .. }
    ));
    // Work done before the failure stays in place
    assert!(project.join("src/components/ui/button.tsx").exists());
}

#[tokio::test]
async fn test_init_creates_config_and_directories() {
    let server = mock_registry(&[]).await;
    let (_guard, project) = project_dir();
    let ctx = context(&project, &server);

    init::execute(false, &ctx).await.unwrap();

    assert!(project.join("sprig.json").exists());
    assert!(project.join("src/components/ui").is_dir());
    assert!(project.join("src/lib").is_dir());
}

#[tokio::test]
async fn test_init_skips_existing_config() {
    let server = mock_registry(&[]).await;
    let (_guard, project) = project_dir();
    std::fs::write(project.join("sprig.json"), "custom").unwrap();
    let ctx = context(&project, &server);

    init::execute(false, &ctx).await.unwrap();
    assert_eq!(
        std::fs::read_to_string(project.join("sprig.json")).unwrap(),
        "custom"
    );

    init::execute(true, &ctx).await.unwrap();
    assert_ne!(
        std::fs::read_to_string(project.join("sprig.json")).unwrap(),
        "custom"
    );
}

#[tokio::test]
async fn test_list_degrades_to_empty_on_catalog_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (_guard, project) = project_dir();
    let ctx = context(&project, &server);

    // Fails all retries internally, but the command itself succeeds
    list::execute(&ctx).await.unwrap();
}

#[tokio::test]
async fn test_list_prints_available_components() {
    let server = mock_registry(&[record("button", &[], &[])]).await;
    let (_guard, project) = project_dir();
    let ctx = context(&project, &server);

    list::execute(&ctx).await.unwrap();
}
