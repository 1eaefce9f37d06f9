//! Document-level tests for project queries and mutations.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{execute, seed_organization, seed_project, seed_task};
use serde_json::{json, Value};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_applies_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_organization(&app, "Acme", "acme").await;

    let (status, envelope) = execute(
        &app,
        json!({ "mutation": { "create_project": {
            "organization_slug": "acme",
            "name": "Fresh Project",
        } } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let payload = &envelope["data"]["create_project"];
    assert_eq!(payload["success"], true);
    let project = &payload["project"];
    assert_eq!(project["status"], "ACTIVE");
    assert_eq!(project["description"], "");
    assert_matches!(project["due_date"], Value::Null);
    assert_eq!(project["task_count"], 0);
    assert_eq!(project["completion_rate"], 0.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_with_unknown_organization_fails(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (status, envelope) = execute(
        &app,
        json!({ "mutation": { "create_project": {
            "organization_slug": "does-not-exist",
            "name": "Orphan",
        } } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let payload = &envelope["data"]["create_project"];
    assert_eq!(payload["success"], false);
    assert_eq!(payload["errors"], json!(["Organization not found"]));
    assert_matches!(payload["project"], Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_rejects_unknown_status(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_organization(&app, "Acme", "acme").await;

    let (_, envelope) = execute(
        &app,
        json!({ "mutation": { "create_project": {
            "organization_slug": "acme",
            "name": "Bad Status",
            "status": "LAUNCHED",
        } } }),
    )
    .await;

    let payload = &envelope["data"]["create_project"];
    assert_eq!(payload["success"], false);
    assert_eq!(payload["errors"], json!(["Invalid project status: LAUNCHED"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn projects_are_isolated_by_organization(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_organization(&app, "Organization 1", "org-1").await;
    seed_organization(&app, "Organization 2", "org-2").await;
    seed_project(&app, "org-1", "Org1 Project").await;
    seed_project(&app, "org-2", "Org2 Project").await;

    let (_, envelope) = execute(
        &app,
        json!({ "query": { "projects": { "organization_slug": "org-1" } } }),
    )
    .await;
    let projects = envelope["data"]["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Org1 Project");

    let (_, envelope) = execute(
        &app,
        json!({ "query": { "projects": { "organization_slug": "org-2" } } }),
    )
    .await;
    let projects = envelope["data"]["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Org2 Project");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn projects_status_filter_and_unknown_values(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_organization(&app, "Acme", "acme").await;
    seed_project(&app, "acme", "Running").await;
    let (_, envelope) = execute(
        &app,
        json!({ "mutation": { "create_project": {
            "organization_slug": "acme",
            "name": "Shelved",
            "status": "ON_HOLD",
        } } }),
    )
    .await;
    assert_eq!(envelope["data"]["create_project"]["success"], true);

    let (_, active) = execute(
        &app,
        json!({ "query": { "projects": { "organization_slug": "acme", "status": "ACTIVE" } } }),
    )
    .await;
    let projects = active["data"]["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Running");

    // A status outside the fixed set matches nothing, silently.
    let (status, unknown) = execute(
        &app,
        json!({ "query": { "projects": { "organization_slug": "acme", "status": "LAUNCHED" } } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unknown["data"]["projects"], json!([]));
    assert_eq!(unknown["errors"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_payload_carries_task_aggregates(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_organization(&app, "Acme", "acme").await;
    let project = seed_project(&app, "acme", "Measured").await;
    let project_id = project["id"].as_i64().unwrap();

    seed_task(&app, project_id, "a", "DONE").await;
    seed_task(&app, project_id, "b", "DONE").await;
    seed_task(&app, project_id, "c", "TODO").await;
    seed_task(&app, project_id, "d", "IN_PROGRESS").await;

    let (_, envelope) = execute(&app, json!({ "query": { "project": { "id": project_id } } })).await;
    let fetched = &envelope["data"]["project"];
    assert_eq!(fetched["task_count"], 4);
    assert_eq!(fetched["completed_task_count"], 2);
    assert_eq!(fetched["completion_rate"], 50.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_project_applies_only_supplied_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_organization(&app, "Acme", "acme").await;
    let project = seed_project(&app, "acme", "Original Name").await;

    let (_, envelope) = execute(
        &app,
        json!({ "mutation": { "update_project": {
            "id": project["id"],
            "status": "COMPLETED",
        } } }),
    )
    .await;

    let updated = &envelope["data"]["update_project"]["project"];
    assert_eq!(updated["status"], "COMPLETED");
    assert_eq!(updated["name"], "Original Name");

    // An explicit empty description is applied, not ignored.
    let (_, envelope) = execute(
        &app,
        json!({ "mutation": { "update_project": {
            "id": project["id"],
            "description": "",
        } } }),
    )
    .await;
    assert_eq!(
        envelope["data"]["update_project"]["project"]["description"],
        ""
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_missing_project(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (_, updated) = execute(
        &app,
        json!({ "mutation": { "update_project": { "id": 999999, "name": "Ghost" } } }),
    )
    .await;
    assert_eq!(
        updated["data"]["update_project"]["errors"],
        json!(["Project not found"])
    );

    let (_, deleted) = execute(
        &app,
        json!({ "mutation": { "delete_project": { "id": 999999 } } }),
    )
    .await;
    let payload = &deleted["data"]["delete_project"];
    assert_eq!(payload["success"], false);
    assert_eq!(payload["errors"], json!(["Project not found"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_project_removes_it_from_queries(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_organization(&app, "Acme", "acme").await;
    let project = seed_project(&app, "acme", "Doomed").await;

    let (_, deleted) = execute(
        &app,
        json!({ "mutation": { "delete_project": { "id": project["id"] } } }),
    )
    .await;
    assert_eq!(deleted["data"]["delete_project"]["success"], true);

    let (_, fetched) = execute(
        &app,
        json!({ "query": { "project": { "id": project["id"] } } }),
    )
    .await;
    assert_matches!(fetched["data"]["project"], Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_project_name_in_organization_is_a_clean_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_organization(&app, "Acme", "acme").await;
    seed_project(&app, "acme", "Same Name").await;

    let (_, envelope) = execute(
        &app,
        json!({ "mutation": { "create_project": {
            "organization_slug": "acme",
            "name": "Same Name",
        } } }),
    )
    .await;

    let payload = &envelope["data"]["create_project"];
    assert_eq!(payload["success"], false);
    assert_eq!(
        payload["errors"],
        json!(["Project name already exists in this organization"])
    );
}
