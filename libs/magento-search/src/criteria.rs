//! The search-criteria container: ordered filter groups of ordered entries.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::condition::ConditionType;
use crate::entry::SearchCriteriaEntry;
use crate::{SearchError, SearchResult};

/// The process-wide match-all instance. Constructed once, never mutated.
static ALL: LazyLock<SearchCriteria> = LazyLock::new(|| SearchCriteria {
    groups: BTreeMap::new(),
    match_all: true,
});

/// Ordered multi-map of filter groups to filter entries, rendered as the
/// Magento search querystring.
///
/// Magento ANDs the filters inside one group and ORs the groups, so
/// [`add_criterion`](Self::add_criterion) (new group) composes with OR and
/// [`add_and_criterion`](Self::add_and_criterion) (same group) with AND.
///
/// Growth is monotonic: entries are only ever appended, never removed or
/// mutated in place. Rendering walks groups in ascending numeric order and
/// entries in ascending index order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    groups: BTreeMap<u32, BTreeMap<u32, SearchCriteriaEntry>>,
    match_all: bool,
}

impl SearchCriteria {
    /// An empty criteria set ready to receive entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared "no filtering, return everything" instance. Renders as the
    /// literal `searchCriteria=all` and accepts no entries. This is the sole
    /// way to express "no criteria".
    #[must_use]
    pub fn all() -> &'static SearchCriteria {
        &ALL
    }

    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.match_all
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(BTreeMap::is_empty)
    }

    /// Total number of entries across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    /// Highest group number currently holding at least one entry.
    fn max_group(&self) -> Option<u32> {
        self.groups
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(group, _)| *group)
            .next_back()
    }

    /// Append a predicate into group 0, escalating to a fresh group if
    /// group 0 is already occupied. See
    /// [`add_criterion_in_group`](Self::add_criterion_in_group).
    ///
    /// # Errors
    ///
    /// See [`add_criterion_in_group`](Self::add_criterion_in_group).
    pub fn add_criterion(
        &mut self,
        field: &str,
        value: &str,
        condition: ConditionType,
    ) -> SearchResult<()> {
        self.add_criterion_in_group(field, value, condition, 0)
    }

    /// Append a predicate as an OR branch.
    ///
    /// If the target group is absent or empty the entry lands there at
    /// index 0. If the group already holds an entry, this method does NOT
    /// append alongside it: it retries with `max existing group + 1`, so an
    /// occupied target always escalates to a fresh group. Use
    /// [`add_and_criterion_in_group`](Self::add_and_criterion_in_group) to
    /// extend an existing group.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidArgument`] when `condition` is a field/value
    /// literal; [`SearchError::GroupOutOfRange`] when `group` skips more
    /// than one group number past the current maximum.
    pub fn add_criterion_in_group(
        &mut self,
        field: &str,
        value: &str,
        condition: ConditionType,
        group: u32,
    ) -> SearchResult<()> {
        self.check_arguments(&condition, group)?;
        let target = match self.groups.get(&group) {
            None => group,
            Some(entries) if entries.is_empty() => group,
            // Occupied: retry with the next free group number.
            Some(_) => self.max_group().map_or(0, |max| max + 1),
        };
        self.insert_entry(field, value, condition, target, 0)
    }

    /// Append a predicate into group 0 as a logical AND. See
    /// [`add_and_criterion_in_group`](Self::add_and_criterion_in_group).
    ///
    /// # Errors
    ///
    /// See [`add_and_criterion_in_group`](Self::add_and_criterion_in_group).
    pub fn add_and_criterion(
        &mut self,
        field: &str,
        value: &str,
        condition: ConditionType,
    ) -> SearchResult<()> {
        self.add_and_criterion_in_group(field, value, condition, 0)
    }

    /// Append a predicate into an existing group as a logical AND, at
    /// `max index in group + 1`. Falls back to
    /// [`add_criterion_in_group`](Self::add_criterion_in_group) when the
    /// group does not exist yet.
    ///
    /// # Errors
    ///
    /// Same conditions as [`add_criterion_in_group`](Self::add_criterion_in_group).
    pub fn add_and_criterion_in_group(
        &mut self,
        field: &str,
        value: &str,
        condition: ConditionType,
        group: u32,
    ) -> SearchResult<()> {
        self.check_arguments(&condition, group)?;
        let next_index = match self.groups.get(&group) {
            None => return self.add_criterion_in_group(field, value, condition, group),
            Some(entries) => entries.keys().next_back().map_or(0, |max| max + 1),
        };
        self.insert_entry(field, value, condition, group, next_index)
    }

    fn insert_entry(
        &mut self,
        field: &str,
        value: &str,
        condition: ConditionType,
        group: u32,
        index: u32,
    ) -> SearchResult<()> {
        let entry = SearchCriteriaEntry::new(
            ConditionType::field(field),
            ConditionType::search_value(value),
            condition,
            group,
            index,
        )?;
        self.groups.entry(group).or_default().insert(index, entry);
        Ok(())
    }

    /// Validate a condition/group pair before any mutation happens.
    ///
    /// A supplied group may skip at most one group number ahead of the
    /// current maximum (`group > max + 2` is rejected; with no groups yet
    /// the bound is 1).
    fn check_arguments(&self, condition: &ConditionType, group: u32) -> SearchResult<()> {
        if !condition.is_operator() {
            return Err(SearchError::InvalidArgument(
                "condition must be an operator, not a field/value literal".to_owned(),
            ));
        }
        let bound = self.max_group().map_or(1, |max| max + 2);
        if group > bound {
            return Err(SearchError::GroupOutOfRange { group, bound });
        }
        Ok(())
    }

    /// Iterate `(group, entries)` pairs, groups ascending, entries in index
    /// order. Lazy and restartable: each call walks the current state.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (u32, impl Iterator<Item = &SearchCriteriaEntry>)> + '_ {
        self.groups
            .iter()
            .map(|(group, entries)| (*group, entries.values()))
    }

    /// Iterate all entries in rendering order.
    pub fn entries(&self) -> impl Iterator<Item = &SearchCriteriaEntry> + '_ {
        self.groups.values().flat_map(BTreeMap::values)
    }

    /// Render the criteria querystring, optionally prefixed with `?`.
    ///
    /// The match-all instance renders as the fixed literal
    /// `searchCriteria=all`. An empty, non-match-all instance renders as the
    /// bare type name — callers should treat that as "nothing to send", not
    /// as a usable querystring.
    #[must_use]
    pub fn to_query_string(&self, prepend_querystring: bool) -> String {
        let prefix = if prepend_querystring { "?" } else { "" };
        if self.match_all {
            return format!("{prefix}searchCriteria=all");
        }
        if self.is_empty() {
            return "SearchCriteria".to_owned();
        }
        let joined = self
            .entries()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("&");
        format!("{prefix}{joined}")
    }
}

impl fmt::Display for SearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_string(false))
    }
}
