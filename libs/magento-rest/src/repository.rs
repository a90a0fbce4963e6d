//! Generic CRUD/search repository over a Magento REST resource.

use std::marker::PhantomData;

use http::StatusCode;
use magento_search::{ConditionType, SearchCriteria, SearchError};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::client::RestClient;
use crate::config::MagentoConfig;
use crate::error::RepoError;
use crate::model::{MagentoEntity, SearchResults};
use crate::outcome::Outcome;

/// Data-access repository for one entity type against one Magento instance.
///
/// Every operation is a single round trip whose failure is captured into the
/// returned [`Outcome`]; nothing is rethrown past this boundary and nothing
/// is retried.
pub struct MagentoRepository<C, E> {
    client: C,
    config: MagentoConfig,
    _entity: PhantomData<E>,
}

impl<C: RestClient, E: MagentoEntity> MagentoRepository<C, E> {
    pub fn new(client: C, config: MagentoConfig) -> Self {
        Self {
            client,
            config,
            _entity: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        self.config.endpoint(E::RESOURCE)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{id}", self.collection_url())
    }

    fn decode<T: DeserializeOwned>(value: Value) -> Result<T, RepoError> {
        serde_json::from_value(value).map_err(RepoError::Decode)
    }

    fn wrap_body(entity: &E) -> Result<Value, RepoError> {
        let value = serde_json::to_value(entity).map_err(RepoError::Encode)?;
        Ok(json!({ E::WRAPPER: value }))
    }

    /// Fetch one entity by its path identifier. HTTP 404 is not a failure:
    /// it yields `Success(None)`.
    pub async fn by_id(&self, id: &str) -> Outcome<Option<E>> {
        tracing::debug!(resource = E::RESOURCE, id, "get by id");
        match self.client.get(&self.item_url(id)).await {
            Ok(value) => Self::decode::<E>(value).map(Some).into(),
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => Outcome::success(None),
            Err(e) => {
                tracing::warn!(error = ?e, resource = E::RESOURCE, "get by id failed");
                Outcome::failure(e)
            }
        }
    }

    /// Fetch every entity of the resource, using the shared match-all
    /// criteria.
    pub async fn all(&self) -> Outcome<Vec<E>> {
        self.search(SearchCriteria::all()).await
    }

    /// Fetch all entities whose `field` equals `value`.
    pub async fn by_field(&self, field: &str, value: &str) -> Outcome<Vec<E>> {
        let mut criteria = SearchCriteria::new();
        if let Err(e) = criteria.add_criterion(field, value, ConditionType::equals()) {
            return Outcome::failure(e);
        }
        self.search(&criteria).await
    }

    /// Run a search, appending the rendered criteria querystring to the
    /// resource URL. Empty non-match-all criteria are rejected rather than
    /// sent (they have no querystring rendering).
    pub async fn search(&self, criteria: &SearchCriteria) -> Outcome<Vec<E>> {
        if !criteria.is_match_all() && criteria.is_empty() {
            return Outcome::failure(SearchError::InvalidArgument(
                "search criteria has no entries".to_owned(),
            ));
        }
        let url = format!("{}{}", self.collection_url(), criteria.to_query_string(true));
        tracing::debug!(resource = E::RESOURCE, query = %criteria, "search");
        match self.client.get(&url).await {
            Ok(value) => Self::decode::<SearchResults<E>>(value)
                .map(|results| results.items)
                .into(),
            Err(e) => {
                tracing::warn!(error = ?e, resource = E::RESOURCE, "search failed");
                Outcome::failure(e)
            }
        }
    }

    pub async fn create(&self, entity: &E) -> Outcome<E> {
        let body = match Self::wrap_body(entity) {
            Ok(body) => body,
            Err(e) => return Outcome::failure(e),
        };
        tracing::debug!(resource = E::RESOURCE, "create");
        match self.client.post(&self.collection_url(), body).await {
            Ok(value) => Self::decode::<E>(value).into(),
            Err(e) => {
                tracing::warn!(error = ?e, resource = E::RESOURCE, "create failed");
                Outcome::failure(e)
            }
        }
    }

    /// Update an existing entity; the entity must carry its identifier.
    pub async fn update(&self, entity: &E) -> Outcome<E> {
        let Some(id) = entity.entity_id() else {
            return Outcome::failure(RepoError::MissingId);
        };
        let body = match Self::wrap_body(entity) {
            Ok(body) => body,
            Err(e) => return Outcome::failure(e),
        };
        tracing::debug!(resource = E::RESOURCE, id, "update");
        match self.client.put(&self.item_url(&id), body).await {
            Ok(value) => Self::decode::<E>(value).into(),
            Err(e) => {
                tracing::warn!(error = ?e, resource = E::RESOURCE, "update failed");
                Outcome::failure(e)
            }
        }
    }

    /// Delete by path identifier. Magento answers with a bare boolean;
    /// HTTP 404 yields `Success(false)`.
    pub async fn delete(&self, id: &str) -> Outcome<bool> {
        tracing::debug!(resource = E::RESOURCE, id, "delete");
        match self.client.delete(&self.item_url(id)).await {
            Ok(value) => Self::decode::<bool>(value).into(),
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => Outcome::success(false),
            Err(e) => {
                tracing::warn!(error = ?e, resource = E::RESOURCE, "delete failed");
                Outcome::failure(e)
            }
        }
    }
}
