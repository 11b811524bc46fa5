//! HTTP client for the notes service

pub mod endpoint;
mod error;

pub use error::{Error, Result};

use crate::constants::{HELLO_PATH, NOTES_PATH};
use crate::types::{ErrorBody, Greeting, Note, NotePayload};
use reqwest::header::{CACHE_CONTROL, HeaderValue};
use reqwest::{Client, Response, Url};
use tracing::debug;

/// Thin wrapper over `reqwest::Client` bound to one API base URL.
///
/// Cheap to clone; components hold their own copy.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self { http: Client::new(), base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), path)
    }

    fn note_url(&self, id: i64) -> String {
        self.url(&format!("{}/{}", NOTES_PATH, id))
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        let url = self.url(NOTES_PATH);
        debug!(%url, "GET notes");
        let response = self
            .http
            .get(&url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .send()
            .await?;
        let notes = check(response).await?.json::<Vec<Note>>().await?;
        Ok(notes)
    }

    /// Returns the created note when the success body decodes as one.
    pub async fn create_note(&self, payload: &NotePayload) -> Result<Option<Note>> {
        let url = self.url(NOTES_PATH);
        debug!(%url, "POST note");
        let response = self.http.post(&url).json(payload).send().await?;
        let response = check(response).await?;
        Ok(response.json::<Note>().await.ok())
    }

    /// Full replacement of note `id`.
    pub async fn update_note(&self, id: i64, payload: &NotePayload) -> Result<Option<Note>> {
        let url = self.note_url(id);
        debug!(%url, "PUT note");
        let response = self.http.put(&url).json(payload).send().await?;
        let response = check(response).await?;
        Ok(response.json::<Note>().await.ok())
    }

    pub async fn delete_note(&self, id: i64) -> Result<()> {
        let url = self.note_url(id);
        debug!(%url, "DELETE note");
        let response = self.http.delete(&url).send().await?;
        check(response).await?;
        Ok(())
    }

    pub async fn hello(&self) -> Result<String> {
        let url = self.url(HELLO_PATH);
        debug!(%url, "GET hello");
        let response = self.http.get(&url).send().await?;
        let greeting = check(response).await?.json::<Greeting>().await?;
        Ok(greeting.message)
    }
}

/// Pass through 2xx responses; turn anything else into `Error::Status`,
/// picking up `{"detail": ...}` when the body carries one.
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail_text());
    debug!(status = status.as_u16(), detail = ?detail, "Request failed");

    Err(Error::Status { status: status.as_u16(), detail })
}
