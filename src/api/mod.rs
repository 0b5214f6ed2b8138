//! REST API Client
//!
//! One generic client shared by every feature controller: authenticated
//! GET/POST/PUT/DELETE against the backend, with success judged by HTTP
//! status. Response `message` fields are display-only.

pub mod auth;
mod error;

pub use error::ApiError;

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::ApiMessage;
use crate::session::{bearer_header, SessionCtx};

/// Backend base URL, overridable at build time.
pub fn api_base() -> &'static str {
    option_env!("STUDYDASH_API").unwrap_or("http://localhost:5000")
}

/// Single-item responses arrive either as a bare object or as an array the
/// item has to be picked out of; both wire shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn resolve(self, matches: impl Fn(&T) -> bool) -> Option<T> {
        match self {
            OneOrMany::One(item) => Some(item),
            OneOrMany::Many(items) => items.into_iter().find(|item| matches(item)),
        }
    }
}

/// Entities addressable by id through `fetch_one`.
pub trait Identified {
    fn id(&self) -> u32;
}

impl Identified for crate::models::Task {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Identified for crate::models::Note {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Thin, copyable handle over the session context. All methods take `self`
/// by value so the returned futures are `'static`.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: SessionCtx,
}

impl ApiClient {
    pub fn new(session: SessionCtx) -> Self {
        Self { session }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", api_base(), path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match bearer_header(self.session.token().as_deref()) {
            Some((name, value)) => builder.header(name, &value),
            None => builder,
        }
    }

    /// Authenticated GET of a full list.
    pub async fn list<T: DeserializeOwned>(self, path: &'static str) -> Result<Vec<T>, ApiError> {
        let resp = self
            .authorize(gloo_net::http::Request::get(&self.url(path)))
            .send()
            .await
            .map_err(ApiError::network)?;
        let resp = ok_or_server_error(resp).await?;
        resp.json::<Vec<T>>().await.map_err(ApiError::decode)
    }

    /// Authenticated GET of a single item, tolerating both wire shapes.
    pub async fn fetch_one<T>(self, path: &'static str, id: u32) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Identified,
    {
        let resp = self
            .authorize(gloo_net::http::Request::get(&format!(
                "{}/{id}",
                self.url(path)
            )))
            .send()
            .await
            .map_err(ApiError::network)?;
        let resp = ok_or_server_error(resp).await?;
        let body = resp.json::<OneOrMany<T>>().await.map_err(ApiError::decode)?;
        body.resolve(|item| item.id() == id)
            .ok_or_else(|| ApiError::Decode(format!("no item with id {id} in response")))
    }

    pub async fn create<B: Serialize>(
        self,
        path: &'static str,
        body: B,
    ) -> Result<ApiMessage, ApiError> {
        let req = self
            .authorize(gloo_net::http::Request::post(&self.url(path)))
            .json(&body)
            .map_err(ApiError::decode)?;
        let resp = req.send().await.map_err(ApiError::network)?;
        message_body(resp).await
    }

    pub async fn update<B: Serialize>(
        self,
        path: &'static str,
        id: u32,
        body: B,
    ) -> Result<ApiMessage, ApiError> {
        let req = self
            .authorize(gloo_net::http::Request::put(&format!(
                "{}/{id}",
                self.url(path)
            )))
            .json(&body)
            .map_err(ApiError::decode)?;
        let resp = req.send().await.map_err(ApiError::network)?;
        message_body(resp).await
    }

    pub async fn remove(self, path: &'static str, id: u32) -> Result<ApiMessage, ApiError> {
        let resp = self
            .authorize(gloo_net::http::Request::delete(&format!(
                "{}/{id}",
                self.url(path)
            )))
            .send()
            .await
            .map_err(ApiError::network)?;
        message_body(resp).await
    }
}

/// Get the shared client from Leptos context.
pub fn use_api() -> ApiClient {
    leptos::prelude::expect_context::<ApiClient>()
}

async fn ok_or_server_error(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp
        .json::<ApiMessage>()
        .await
        .map(|m| m.message)
        .unwrap_or_default();
    Err(ApiError::Server { status, message })
}

async fn message_body(resp: Response) -> Result<ApiMessage, ApiError> {
    let resp = ok_or_server_error(resp).await?;
    // Missing or malformed bodies are fine on success; the message is only
    // ever displayed.
    Ok(resp.json::<ApiMessage>().await.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Note;

    #[test]
    fn single_item_accepts_bare_object() {
        let json = r#"{"id":7,"title":"t","content":"c","updated_at":"2026-01-01T00:00:00"}"#;
        let body: OneOrMany<Note> = serde_json::from_str(json).unwrap();
        let note = body.resolve(|n| n.id == 7).unwrap();
        assert_eq!(note.title, "t");
    }

    #[test]
    fn single_item_accepts_array_shape() {
        let json = r#"[
            {"id":1,"title":"a","content":"","updated_at":""},
            {"id":2,"title":"b","content":"","updated_at":""}
        ]"#;
        let body: OneOrMany<Note> = serde_json::from_str(json).unwrap();
        let note = body.resolve(|n| n.id == 2).unwrap();
        assert_eq!(note.title, "b");
    }

    #[test]
    fn missing_id_in_array_is_an_error() {
        let json = r#"[{"id":1,"title":"a","content":"","updated_at":""}]"#;
        let body: OneOrMany<Note> = serde_json::from_str(json).unwrap();
        assert!(body.resolve(|n| n.id == 9).is_none());
    }
}
