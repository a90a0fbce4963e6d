//! Magento search-criteria querystring grammar.
//!
//! The Magento REST search endpoint takes its filter predicates as a
//! bracketed querystring:
//!
//! ```text
//! searchCriteria[filter_groups][<group>][filters][<index>][field]=<field>
//! &searchCriteria[filter_groups][<group>][filters][<index>][value]=<value>
//! &searchCriteria[filter_groups][<group>][filters][<index>][condition_type]=<op>
//! ```
//!
//! Filters inside one group are combined with AND; distinct groups are
//! combined with OR. This crate models that grammar with three types:
//!
//! - [`ConditionType`]: one comparison operator (or a literal field name /
//!   search value), constructed only through factories so the wire token is
//!   always one of the known Magento codes
//! - [`SearchCriteriaEntry`]: one `(field, value, condition)` predicate bound
//!   to a filter group and an index within that group
//! - [`SearchCriteria`]: the ordered group/index container that renders the
//!   full querystring
//!
//! # Example
//!
//! ```
//! use magento_search::{ConditionType, SearchCriteria};
//!
//! let mut criteria = SearchCriteria::new();
//! criteria.add_criterion("sku", "WS-01", ConditionType::equals())?;
//! criteria.add_and_criterion("status", "1", ConditionType::equals())?;
//!
//! let qs = criteria.to_query_string(true);
//! assert!(qs.starts_with("?searchCriteria[filter_groups][0][filters][0][field]=sku"));
//! # Ok::<(), magento_search::SearchError>(())
//! ```

pub mod condition;
pub mod criteria;
pub mod entry;

pub use condition::{ConditionKind, ConditionType};
pub use criteria::SearchCriteria;
pub use entry::SearchCriteriaEntry;

/// Unified error type for search-criteria construction.
///
/// Both variants are raised immediately at the call boundary; nothing in
/// this crate suppresses or defers them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A required argument was empty or used in a position it cannot occupy
    /// (for example a `field`/`value` literal passed where an operator is
    /// expected).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A supplied filter group skips more than one group number ahead of the
    /// current maximum.
    #[error("filter group {group} out of range (must not exceed {bound})")]
    GroupOutOfRange { group: u32, bound: u32 },
}

pub type SearchResult<T> = Result<T, SearchError>;
