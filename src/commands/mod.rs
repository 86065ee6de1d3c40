//! Remote Access
//!
//! Bindings to the `/todos` HTTP resource. One request per call: no retries,
//! no timeouts, no caching.

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewTodo, Todo, TodoId};

pub use http::HttpTodoBackend;

/// The three operations the client issues against the todo collection
#[async_trait(?Send)]
pub trait TodoBackend {
    /// `GET /todos`: the full ordered list
    async fn list_todos(&self) -> ApiResult<Vec<Todo>>;

    /// `POST /todos`: the created todo including its server-assigned id
    async fn create_todo(&self, todo: &NewTodo<'_>) -> ApiResult<Todo>;

    /// `DELETE /todos/{id}`: whatever confirmation body the server sends
    async fn delete_todo(&self, id: &TodoId) -> ApiResult<serde_json::Value>;
}
