//! Repository-boundary error taxonomy.

use thiserror::Error;

use crate::client::ClientError;
use crate::image::ImageError;

/// A captured failure of one repository operation.
///
/// Repository methods never propagate these as `Err`; they are carried
/// inside an [`Outcome`](crate::outcome::Outcome) so callers branch on
/// success/failure without unwinding.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RepoError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Search(#[from] magento_search::SearchError),

    #[error(transparent)]
    Image(#[from] ImageError),

    /// The entity carries no identifier but the operation needs one.
    #[error("entity has no identifier")]
    MissingId,
}
