//! Bookmark backend client.
//!
//! `BookmarkApi` is the seam between the application shell and the REST
//! backend; `HttpBookmarkApi` is the production implementation on `reqwest`.
//! Every failure (transport, non-2xx status, undecodable body) surfaces as an
//! [`ApiError`]; callers decide how much of that detail to show.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::types::bookmark::{Bookmark, DraftBookmark};
use crate::types::errors::ApiError;

/// Operations the application shell needs from the backend.
#[async_trait]
pub trait BookmarkApi: Send + Sync {
    /// `GET /api/bookmarks`
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, ApiError>;
    /// `POST /api/bookmarks`
    async fn create_bookmark(&self, draft: &DraftBookmark) -> Result<Bookmark, ApiError>;
    /// `DELETE /api/bookmarks/{id}`
    async fn delete_bookmark(&self, id: &str) -> Result<(), ApiError>;
}

/// REST client for a backend rooted at `base_url`.
#[derive(Debug, Clone)]
pub struct HttpBookmarkApi {
    client: Client,
    base_url: Url,
}

impl HttpBookmarkApi {
    /// Creates a client for the backend at `base_url` (e.g. `http://localhost:3000`).
    ///
    /// # Errors
    /// Returns `ApiError::InvalidBaseUrl` unless `base_url` is an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let parsed =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Builds `<base>/api/bookmarks[/<id>]`, percent-encoding the id.
    pub fn endpoint(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", "bookmarks"]);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait]
impl BookmarkApi for HttpBookmarkApi {
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, ApiError> {
        let url = self.endpoint(None);
        tracing::debug!(%url, "fetching bookmarks");
        let response = self.send(self.client.get(url)).await?;
        response
            .json::<Vec<Bookmark>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_bookmark(&self, draft: &DraftBookmark) -> Result<Bookmark, ApiError> {
        let url = self.endpoint(None);
        tracing::debug!(%url, title = %draft.title, "creating bookmark");
        let response = self.send(self.client.post(url).json(draft)).await?;
        response
            .json::<Bookmark>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn delete_bookmark(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(Some(id));
        tracing::debug!(%url, "deleting bookmark");
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
