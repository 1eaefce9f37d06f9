//! Task comment query and mutation resolvers.

use crewdeck_core::error::CoreError;
use crewdeck_core::types::DbId;
use crewdeck_db::models::task_comment::{CreateTaskComment, TaskComment};
use crewdeck_db::repositories::{TaskCommentRepo, TaskRepo};
use crewdeck_db::DbPool;
use serde::Serialize;

use crate::document::AddTaskCommentArgs;
use crate::error::classify_db_error;
use crate::resolvers::check;
use crate::response::DeletePayload;

/// Mutation payload for comment add/update.
#[derive(Debug, Serialize)]
pub struct CommentPayload {
    pub comment: Option<TaskComment>,
    pub success: bool,
    pub errors: Vec<String>,
}

impl CommentPayload {
    fn from_result(result: Result<TaskComment, CoreError>) -> Self {
        match result {
            Ok(comment) => Self {
                comment: Some(comment),
                success: true,
                errors: Vec::new(),
            },
            Err(err) => Self {
                comment: None,
                success: false,
                errors: vec![err.client_message()],
            },
        }
    }
}

/// All comments on one task, newest first. An unknown task id yields an
/// empty list.
pub async fn task_comments(pool: &DbPool, task_id: DbId) -> Result<Vec<TaskComment>, CoreError> {
    TaskCommentRepo::list_by_task(pool, task_id)
        .await
        .map_err(classify_db_error)
}

pub async fn add_task_comment(pool: &DbPool, args: AddTaskCommentArgs) -> CommentPayload {
    CommentPayload::from_result(try_add(pool, args).await)
}

async fn try_add(pool: &DbPool, args: AddTaskCommentArgs) -> Result<TaskComment, CoreError> {
    check(&args)?;
    let task = TaskRepo::find_by_id(pool, args.task_id)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound { entity: "Task" })?;
    let input = CreateTaskComment {
        task_id: task.id,
        content: args.content,
        author_email: args.author_email,
    };
    TaskCommentRepo::create(pool, &input)
        .await
        .map_err(classify_db_error)
}

pub async fn update_task_comment(pool: &DbPool, id: DbId, content: String) -> CommentPayload {
    let result = TaskCommentRepo::update_content(pool, id, &content)
        .await
        .map_err(classify_db_error)
        .and_then(|comment| comment.ok_or(CoreError::NotFound { entity: "Comment" }));
    CommentPayload::from_result(result)
}

pub async fn delete_task_comment(pool: &DbPool, id: DbId) -> DeletePayload {
    let result = match TaskCommentRepo::delete(pool, id)
        .await
        .map_err(classify_db_error)
    {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::NotFound { entity: "Comment" }),
        Err(err) => Err(err),
    };
    DeletePayload::from_result(result)
}
