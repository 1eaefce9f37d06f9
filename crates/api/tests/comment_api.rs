//! Document-level tests for task comment queries and mutations.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{execute, seed_organization, seed_project, seed_task};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn seed_task_for_comments(app: &axum::Router) -> i64 {
    seed_organization(app, "Acme", "acme").await;
    let project = seed_project(app, "acme", "Discussed").await;
    let task = seed_task(app, project["id"].as_i64().unwrap(), "Talk about me", "TODO").await;
    task["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_comment_and_list_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let task_id = seed_task_for_comments(&app).await;

    for content in ["first", "second", "third"] {
        let (status, envelope) = execute(
            &app,
            json!({ "mutation": { "add_task_comment": {
                "task_id": task_id,
                "content": content,
                "author_email": "author@example.com",
            } } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let payload = &envelope["data"]["add_task_comment"];
        assert_eq!(payload["success"], true);
        assert_eq!(payload["comment"]["content"], content);
    }

    let (_, envelope) = execute(
        &app,
        json!({ "query": { "task_comments": { "task_id": task_id } } }),
    )
    .await;
    let contents: Vec<&str> = envelope["data"]["task_comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, ["third", "second", "first"]);

    // The task payload reflects the comment count on the next read.
    let (_, envelope) = execute(&app, json!({ "query": { "task": { "id": task_id } } })).await;
    assert_eq!(envelope["data"]["task"]["comment_count"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_comment_to_unknown_task_fails(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (_, envelope) = execute(
        &app,
        json!({ "mutation": { "add_task_comment": {
            "task_id": 999999,
            "content": "hello?",
            "author_email": "author@example.com",
        } } }),
    )
    .await;

    let payload = &envelope["data"]["add_task_comment"];
    assert_eq!(payload["success"], false);
    assert_eq!(payload["errors"], json!(["Task not found"]));
    assert_matches!(payload["comment"], Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_comment_validates_content_and_author(pool: PgPool) {
    let app = common::build_test_app(pool);
    let task_id = seed_task_for_comments(&app).await;

    let (_, envelope) = execute(
        &app,
        json!({ "mutation": { "add_task_comment": {
            "task_id": task_id,
            "content": "",
            "author_email": "author@example.com",
        } } }),
    )
    .await;
    assert_eq!(
        envelope["data"]["add_task_comment"]["errors"],
        json!(["Comment content is required"])
    );

    let (_, envelope) = execute(
        &app,
        json!({ "mutation": { "add_task_comment": {
            "task_id": task_id,
            "content": "valid content",
            "author_email": "not-an-email",
        } } }),
    )
    .await;
    assert_eq!(
        envelope["data"]["add_task_comment"]["errors"],
        json!(["Invalid author email"])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_comment_replaces_content(pool: PgPool) {
    let app = common::build_test_app(pool);
    let task_id = seed_task_for_comments(&app).await;

    let (_, created) = execute(
        &app,
        json!({ "mutation": { "add_task_comment": {
            "task_id": task_id,
            "content": "typo here",
            "author_email": "author@example.com",
        } } }),
    )
    .await;
    let comment = &created["data"]["add_task_comment"]["comment"];

    let (_, envelope) = execute(
        &app,
        json!({ "mutation": { "update_task_comment": {
            "id": comment["id"],
            "content": "fixed",
        } } }),
    )
    .await;

    let payload = &envelope["data"]["update_task_comment"];
    assert_eq!(payload["success"], true);
    assert_eq!(payload["comment"]["content"], "fixed");
    assert_eq!(payload["comment"]["author_email"], "author@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_missing_comment(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (_, updated) = execute(
        &app,
        json!({ "mutation": { "update_task_comment": { "id": 999999, "content": "ghost" } } }),
    )
    .await;
    assert_eq!(
        updated["data"]["update_task_comment"]["errors"],
        json!(["Comment not found"])
    );

    let (_, deleted) = execute(
        &app,
        json!({ "mutation": { "delete_task_comment": { "id": 999999 } } }),
    )
    .await;
    assert_eq!(
        deleted["data"]["delete_task_comment"]["errors"],
        json!(["Comment not found"])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_comment_removes_it_from_listing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let task_id = seed_task_for_comments(&app).await;

    let (_, created) = execute(
        &app,
        json!({ "mutation": { "add_task_comment": {
            "task_id": task_id,
            "content": "short lived",
            "author_email": "author@example.com",
        } } }),
    )
    .await;
    let comment_id = created["data"]["add_task_comment"]["comment"]["id"].clone();

    let (_, deleted) = execute(
        &app,
        json!({ "mutation": { "delete_task_comment": { "id": comment_id } } }),
    )
    .await;
    assert_eq!(deleted["data"]["delete_task_comment"]["success"], true);

    let (_, envelope) = execute(
        &app,
        json!({ "query": { "task_comments": { "task_id": task_id } } }),
    )
    .await;
    assert_eq!(envelope["data"]["task_comments"], json!([]));
}
