//! HTTP Backend
//!
//! `reqwest` implementation of [`TodoBackend`]; compiles to `fetch` on wasm32.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use super::TodoBackend;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTodo, Todo, TodoId};

pub struct HttpTodoBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpTodoBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Send a request and parse the JSON body of a 2xx response
    async fn send<T: DeserializeOwned>(&self, url: Url, request: RequestBuilder) -> ApiResult<T> {
        let body = self.send_raw(&url, request).await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::parse(url.as_str(), e))
    }

    async fn send_raw(&self, url: &Url, request: RequestBuilder) -> ApiResult<Vec<u8>> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map(|body| body.to_vec())
            .map_err(|e| ApiError::network(url.as_str(), e))
    }
}

#[async_trait(?Send)]
impl TodoBackend for HttpTodoBackend {
    async fn list_todos(&self) -> ApiResult<Vec<Todo>> {
        let url = self.config.collection_url();
        self.send(url.clone(), self.client.get(url)).await
    }

    async fn create_todo(&self, todo: &NewTodo<'_>) -> ApiResult<Todo> {
        let url = self.config.collection_url();
        // .json() sets Content-Type: application/json
        self.send(url.clone(), self.client.post(url).json(todo)).await
    }

    async fn delete_todo(&self, id: &TodoId) -> ApiResult<serde_json::Value> {
        let url = self.config.item_url(id.as_str())?;
        let body = self.send_raw(&url, self.client.delete(url.clone())).await?;
        // Some servers answer 200/204 with no body at all
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_slice(&body).map_err(|e| ApiError::parse(url.as_str(), e))
    }
}
