//! REST backend access.
//!
//! The controller talks to the backend through the [`Backend`] trait; the
//! real implementation is [`RestBackend`], a thin wrapper around a blocking
//! reqwest client. Calls are issued from worker threads, never from the UI
//! thread, so blocking I/O is fine here.
//!
//! Wire contract, per resource:
//! - `GET    /api/{resource}`      → JSON list
//! - `POST   /api/{resource}`      → create from a draft body
//! - `PUT    /api/{resource}/{id}` → full replace from a draft body
//! - `DELETE /api/{resource}/{id}` → no content
//!
//! Paths are sent unmodified under the `/api` prefix; the base URL points at
//! whatever answers there (by default the Spring backend on localhost:8009).
//! POST and PUT response bodies are discarded: the list refresh that follows
//! every successful mutation supplies the authoritative state.

use thiserror::Error;

use crate::model::Entity;

// =============================================================================
// Errors
// =============================================================================

/// A backend call failure.
///
/// Transport and JSON decode failures surface as [`ApiError::Http`]; an
/// answered request with a non-2xx status as [`ApiError::Status`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned HTTP {0}")]
    Status(u16),
}

// =============================================================================
// Backend trait
// =============================================================================

/// The four operations the controller needs per record kind.
///
/// `Send + Sync` because calls run on detached worker threads.
pub trait Backend<E: Entity>: Send + Sync {
    fn list(&self) -> Result<Vec<E>, ApiError>;
    fn create(&self, draft: &E::Draft) -> Result<(), ApiError>;
    fn update(&self, id: u64, draft: &E::Draft) -> Result<(), ApiError>;
    fn delete(&self, id: u64) -> Result<(), ApiError>;
}

// =============================================================================
// RestBackend
// =============================================================================

/// Blocking HTTP client for the registry REST API.
///
/// One instance serves every record kind; the resource name comes from the
/// [`Entity`] implementation.
pub struct RestBackend {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RestBackend {
    /// Build a client for the given base URL.
    ///
    /// `insecure` disables TLS certificate verification, matching the
    /// development proxy this tool replaces.
    pub fn new(base_url: &str, insecure: bool) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(insecure)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self, resource: &str) -> String {
        format!("{}/api/{}", self.base_url, resource)
    }

    fn item_url(&self, resource: &str, id: u64) -> String {
        format!("{}/api/{}/{}", self.base_url, resource, id)
    }

    fn check(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }
}

impl<E: Entity> Backend<E> for RestBackend {
    fn list(&self) -> Result<Vec<E>, ApiError> {
        let response = self.client.get(self.collection_url(E::RESOURCE)).send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn create(&self, draft: &E::Draft) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.collection_url(E::RESOURCE))
            .json(draft)
            .send()?;
        Self::check(response)?;
        Ok(())
    }

    fn update(&self, id: u64, draft: &E::Draft) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.item_url(E::RESOURCE, id))
            .json(draft)
            .send()?;
        Self::check(response)?;
        Ok(())
    }

    fn delete(&self, id: u64) -> Result<(), ApiError> {
        let response = self.client.delete(self.item_url(E::RESOURCE, id)).send()?;
        Self::check(response)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_keep_the_api_prefix() {
        let backend = RestBackend::new("http://localhost:8009", false).unwrap();
        assert_eq!(
            backend.collection_url("escuelas"),
            "http://localhost:8009/api/escuelas"
        );
        assert_eq!(
            backend.item_url("estudiantes", 7),
            "http://localhost:8009/api/estudiantes/7"
        );
    }

    #[test]
    fn test_trailing_slash_in_base_url_is_dropped() {
        let backend = RestBackend::new("http://localhost:8009/", false).unwrap();
        assert_eq!(
            backend.collection_url("escuelas"),
            "http://localhost:8009/api/escuelas"
        );
    }
}
