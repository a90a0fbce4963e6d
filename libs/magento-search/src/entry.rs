//! A single filter predicate bound to its filter group and index.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::condition::{ConditionKind, ConditionType};
use crate::{SearchError, SearchResult};

/// One `(field, value, condition)` predicate at a fixed `(group, index)`
/// slot of the search criteria.
///
/// Entries are immutable once constructed. ANDed predicates share a group;
/// predicates in distinct groups are ORed by Magento.
///
/// Equality and hashing are computed on the full rendered querystring
/// fragment, so the group/index numbering is part of an entry's identity.
#[derive(Clone, Debug)]
pub struct SearchCriteriaEntry {
    field: ConditionType,
    value: ConditionType,
    condition: ConditionType,
    group: u32,
    index: u32,
}

impl SearchCriteriaEntry {
    /// Build an entry, validating the condition roles.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] when `field` is not a field
    /// literal, `value` is not a search-value literal, or `condition` is one
    /// of the two literals instead of an operator.
    pub fn new(
        field: ConditionType,
        value: ConditionType,
        condition: ConditionType,
        group: u32,
        index: u32,
    ) -> SearchResult<Self> {
        if field.kind() != ConditionKind::Field {
            return Err(SearchError::InvalidArgument(
                "field must be a field literal".to_owned(),
            ));
        }
        if value.kind() != ConditionKind::SearchValue {
            return Err(SearchError::InvalidArgument(
                "value must be a search-value literal".to_owned(),
            ));
        }
        if !condition.is_operator() {
            return Err(SearchError::InvalidArgument(
                "condition must be an operator, not a field/value literal".to_owned(),
            ));
        }
        Ok(Self {
            field,
            value,
            condition,
            group,
            index,
        })
    }

    #[must_use]
    pub fn field(&self) -> &ConditionType {
        &self.field
    }

    #[must_use]
    pub fn value(&self) -> &ConditionType {
        &self.value
    }

    #[must_use]
    pub fn condition(&self) -> &ConditionType {
        &self.condition
    }

    #[must_use]
    pub fn group(&self) -> u32 {
        self.group
    }

    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Common path prefix of the three parameter assignments.
    fn path(&self) -> String {
        format!(
            "searchCriteria[filter_groups][{}][filters][{}]",
            self.group, self.index
        )
    }
}

impl fmt::Display for SearchCriteriaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path();
        write!(
            f,
            "{path}{}&{path}{}&{path}{}",
            self.field.render(true),
            self.value.render(true),
            self.condition.render(true)
        )
    }
}

impl PartialEq for SearchCriteriaEntry {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for SearchCriteriaEntry {}

impl Hash for SearchCriteriaEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}
