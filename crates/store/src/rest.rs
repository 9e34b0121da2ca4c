//! HTTP client for the remote document-collection API.
//!
//! [`RestStore`] speaks a small JSON dialect against a single named
//! collection:
//!
//! | Operation        | Request                                            |
//! |------------------|----------------------------------------------------|
//! | list all         | `GET {base}/v1/{collection}`                       |
//! | existence check  | `GET {base}/v1/{collection}?nombre=X&apellido=Y`   |
//! | insert           | `POST {base}/v1/{collection}` → `{"id": "…"}`      |
//! | update           | `PATCH {base}/v1/{collection}/{id}`                |
//! | delete           | `DELETE {base}/v1/{collection}/{id}`               |
//!
//! No client-side timeout is configured; the transport default applies.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Deserialize;

use padron_core::error::StoreError;
use padron_core::types::RecordId;

use crate::models::{UserFields, UserRecord};
use crate::UserStore;

/// Client for one document collection on a hosted store.
pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    collection: String,
    token: Option<String>,
}

/// Response shape for list and query requests.
#[derive(Debug, Deserialize)]
struct DocumentList {
    documents: Vec<UserRecord>,
}

/// Response shape for a create request.
#[derive(Debug, Deserialize)]
struct CreatedDocument {
    id: RecordId,
}

impl RestStore {
    /// Create a client targeting `collection` under `base_url`.
    ///
    /// `token`, when present, is sent as a bearer credential on every
    /// request.
    pub fn new(
        base_url: impl Into<String>,
        collection: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            collection: collection.into(),
            token,
        }
    }

    /// Base HTTP URL of the store (e.g. `https://store.example.com`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Name of the collection this client reads and writes.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn collection_url(&self) -> String {
        format!("{}/v1/{}", self.base_url, self.collection)
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/v1/{}/{}", self.base_url, self.collection, id)
    }

    fn request(&self, method: Method, url: String) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Map a transport-level failure onto the store taxonomy. Auth errors
/// arrive as HTTP statuses and go through [`status_error`] instead.
fn transport_error(err: reqwest::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

fn status_error(status: StatusCode) -> StoreError {
    StoreError::Unavailable(format!("store returned HTTP {status}"))
}

#[async_trait]
impl UserStore for RestStore {
    async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        tracing::debug!(collection = %self.collection, "Fetching all documents");

        let response = self
            .request(Method::GET, self.collection_url())
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }

        let list: DocumentList = response.json().await.map_err(transport_error)?;
        Ok(list.documents)
    }

    async fn exists_by_name(&self, nombre: &str, apellido: &str) -> Result<bool, StoreError> {
        tracing::debug!(collection = %self.collection, "Querying documents by name");

        let response = self
            .request(Method::GET, self.collection_url())
            .query(&[("nombre", nombre), ("apellido", apellido)])
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }

        let list: DocumentList = response.json().await.map_err(transport_error)?;
        Ok(!list.documents.is_empty())
    }

    async fn insert(&self, fields: &UserFields) -> Result<RecordId, StoreError> {
        tracing::debug!(collection = %self.collection, "Creating document");

        let response = self
            .request(Method::POST, self.collection_url())
            .json(fields)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }

        let created: CreatedDocument = response.json().await.map_err(transport_error)?;
        tracing::debug!(collection = %self.collection, id = %created.id, "Document created");
        Ok(created.id)
    }

    async fn update(&self, id: &str, fields: &UserFields) -> Result<(), StoreError> {
        tracing::debug!(collection = %self.collection, id, "Updating document");

        let response = self
            .request(Method::PATCH, self.document_url(id))
            .json(fields)
            .send()
            .await
            .map_err(transport_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        tracing::debug!(collection = %self.collection, id, "Deleting document");

        let response = self
            .request(Method::DELETE, self.document_url(id))
            .send()
            .await
            .map_err(transport_error)?;
        // A document that is already gone counts as deleted.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        Ok(())
    }
}
