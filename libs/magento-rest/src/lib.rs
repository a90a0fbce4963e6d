//! Magento REST data-access repositories.
//!
//! This crate carries everything above the search grammar of
//! [`magento_search`]: the dynamic custom-attribute bag, serde models for
//! the entities moved over the wire, the REST transport seam, and the
//! generic [`MagentoRepository`] wrapping CRUD and search operations.
//!
//! Repository operations never return `Err`: every downstream failure is
//! captured into an [`Outcome`], so callers branch on success/failure
//! without `match`-on-`Result` pyramids at each call site.
//!
//! ```ignore
//! let repo: MagentoRepository<HttpClient, Product> =
//!     MagentoRepository::new(client, config);
//!
//! match repo.by_field("status", "1").await {
//!     Outcome::Success(products) => render(products),
//!     Outcome::Failure(e) => tracing::warn!(error = ?e, "listing failed"),
//! }
//! ```

pub mod attributes;
pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod model;
pub mod outcome;
pub mod repository;
pub mod secret;

pub use attributes::{CustomAttribute, MagentoCustomAttributeCollection};
pub use client::{ClientError, RestClient};
pub use config::{ConfigError, MagentoConfig};
pub use error::RepoError;
pub use image::{ImageContent, ImageError};
pub use model::{Customer, MagentoEntity, MediaGalleryEntry, Product, SearchResults};
pub use outcome::Outcome;
pub use repository::MagentoRepository;
pub use secret::SecretString;
