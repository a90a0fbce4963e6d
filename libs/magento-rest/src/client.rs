//! The REST transport seam.
//!
//! Transport mechanics (connection handling, TLS, auth headers, retries)
//! are an external collaborator; repositories only depend on this trait.

use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by a [`RestClient`] implementation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClientError {
    /// Transport error (network, connection, TLS, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// HTTP non-2xx status.
    #[error("HTTP {status}: {body_preview}")]
    HttpStatus {
        status: StatusCode,
        body_preview: String,
    },

    /// JSON parsing of the response body failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// The HTTP status, when this error carries one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::HttpStatus { status, .. } => Some(*status),
            ClientError::Transport(_) | ClientError::Json(_) => None,
        }
    }
}

/// Asynchronous JSON-over-REST client.
///
/// URLs are absolute; query strings are encoded into the URL by the caller.
/// Implementations are expected to be cheap to share (`Send + Sync`).
#[async_trait]
pub trait RestClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value, ClientError>;

    async fn post(&self, url: &str, body: Value) -> Result<Value, ClientError>;

    async fn put(&self, url: &str, body: Value) -> Result<Value, ClientError>;

    async fn delete(&self, url: &str) -> Result<Value, ClientError>;
}

// One shared transport can back many repositories.
#[async_trait]
impl<T: RestClient + ?Sized> RestClient for std::sync::Arc<T> {
    async fn get(&self, url: &str) -> Result<Value, ClientError> {
        (**self).get(url).await
    }

    async fn post(&self, url: &str, body: Value) -> Result<Value, ClientError> {
        (**self).post(url, body).await
    }

    async fn put(&self, url: &str, body: Value) -> Result<Value, ClientError> {
        (**self).put(url, body).await
    }

    async fn delete(&self, url: &str) -> Result<Value, ClientError> {
        (**self).delete(url).await
    }
}
