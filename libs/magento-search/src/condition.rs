//! Condition types of the Magento search grammar.
//!
//! Every comparison operator the Magento REST API understands is represented
//! by one [`ConditionType`] instance carrying its fixed wire code. Instances
//! are only obtainable through the factory functions, so a constructed
//! condition always holds one of the known codes. Two special variants,
//! [`ConditionType::field`] and [`ConditionType::search_value`], carry the
//! literal field name and comparison value of a predicate; they render the
//! same way (`token=value`) but are structurally distinguished so they are
//! rejected wherever an operator is expected.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Rendering key shared by all operator conditions.
const CONDITION_TOKEN: &str = "condition_type";
/// Rendering key of the field-name literal.
const FIELD_TOKEN: &str = "field";
/// Rendering key of the search-value literal.
const VALUE_TOKEN: &str = "value";

/// Discriminant of a [`ConditionType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    Equals,
    FindsInSet,
    From,
    GreaterThan,
    GreaterOrEqual,
    In,
    LessThan,
    LessOrEqual,
    Like,
    MoreOrEqual,
    NotEquals,
    NotIn,
    NotInSet,
    NotLike,
    NotNull,
    Null,
    To,
    /// Literal field name, not an operator.
    Field,
    /// Literal comparison value, not an operator.
    SearchValue,
}

/// One token/value pair of the Magento search grammar.
///
/// Renders as `token=value` (or `[token]=value` when bracketed). Equality
/// and hashing are computed on the rendered form, ASCII-case-insensitively.
#[derive(Clone, Debug)]
pub struct ConditionType {
    kind: ConditionKind,
    token: &'static str,
    value: String,
}

impl ConditionType {
    fn operator(kind: ConditionKind, code: &'static str) -> Self {
        Self {
            kind,
            token: CONDITION_TOKEN,
            value: code.to_owned(),
        }
    }

    /// `eq` — equality.
    #[must_use]
    pub fn equals() -> Self {
        Self::operator(ConditionKind::Equals, "eq")
    }

    /// `finset` — value is found in a comma-separated set.
    #[must_use]
    pub fn finds_in_set() -> Self {
        Self::operator(ConditionKind::FindsInSet, "finset")
    }

    /// `gt` — greater than.
    #[must_use]
    pub fn greater_than() -> Self {
        Self::operator(ConditionKind::GreaterThan, "gt")
    }

    /// `gteq` — greater than or equal.
    #[must_use]
    pub fn greater_or_equal() -> Self {
        Self::operator(ConditionKind::GreaterOrEqual, "gteq")
    }

    /// `in` — value is in a comma-separated list.
    #[must_use]
    pub fn is_in() -> Self {
        Self::operator(ConditionKind::In, "in")
    }

    /// `lt` — less than.
    #[must_use]
    pub fn less_than() -> Self {
        Self::operator(ConditionKind::LessThan, "lt")
    }

    /// `lteq` — less than or equal.
    #[must_use]
    pub fn less_or_equal() -> Self {
        Self::operator(ConditionKind::LessOrEqual, "lteq")
    }

    /// `like` — SQL LIKE pattern match.
    #[must_use]
    pub fn like() -> Self {
        Self::operator(ConditionKind::Like, "like")
    }

    /// `moreq` — more or equal (legacy alias Magento still accepts).
    #[must_use]
    pub fn more_or_equal() -> Self {
        Self::operator(ConditionKind::MoreOrEqual, "moreq")
    }

    /// `neq` — not equal.
    #[must_use]
    pub fn not_equals() -> Self {
        Self::operator(ConditionKind::NotEquals, "neq")
    }

    /// `nin` — value is not in a comma-separated list.
    #[must_use]
    pub fn not_in() -> Self {
        Self::operator(ConditionKind::NotIn, "nin")
    }

    /// `nfinset` — value is not found in a comma-separated set.
    #[must_use]
    pub fn not_in_set() -> Self {
        Self::operator(ConditionKind::NotInSet, "nfinset")
    }

    /// `nlike` — negated LIKE pattern match.
    #[must_use]
    pub fn not_like() -> Self {
        Self::operator(ConditionKind::NotLike, "nlike")
    }

    /// `notnull` — field is not null.
    #[must_use]
    pub fn not_null() -> Self {
        Self::operator(ConditionKind::NotNull, "notnull")
    }

    /// `null` — field is null.
    #[must_use]
    pub fn null() -> Self {
        Self::operator(ConditionKind::Null, "null")
    }

    /// Range bounds. The only factory producing a *pair*: the lower bound
    /// renders as `from`, the upper as `to`. Each goes into its own entry
    /// together with the respective bound as the search value.
    #[must_use]
    pub fn range() -> (Self, Self) {
        (
            Self::operator(ConditionKind::From, "from"),
            Self::operator(ConditionKind::To, "to"),
        )
    }

    /// Literal field name of a predicate; renders under the `field` key.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            kind: ConditionKind::Field,
            token: FIELD_TOKEN,
            value: name.into(),
        }
    }

    /// Literal comparison value of a predicate; renders under the `value` key.
    pub fn search_value(value: impl Into<String>) -> Self {
        Self {
            kind: ConditionKind::SearchValue,
            token: VALUE_TOKEN,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ConditionKind {
        self.kind
    }

    /// The rendering key: `condition_type` for operators, `field`/`value`
    /// for the literals.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token
    }

    /// The rendered value: the operator wire code, or the carried literal.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this condition may stand in operator position. False for the
    /// `field` and `value` literals.
    #[must_use]
    pub fn is_operator(&self) -> bool {
        !matches!(
            self.kind,
            ConditionKind::Field | ConditionKind::SearchValue
        )
    }

    /// Render as `token=value`, or `[token]=value` when `bracketed`.
    ///
    /// An instance with an empty token or value renders as the bare type
    /// name; callers should treat that as "uninitialized", not as a usable
    /// querystring fragment.
    #[must_use]
    pub fn render(&self, bracketed: bool) -> String {
        if self.token.is_empty() || self.value.is_empty() {
            return "ConditionType".to_owned();
        }
        if bracketed {
            format!("[{}]={}", self.token, self.value)
        } else {
            format!("{}={}", self.token, self.value)
        }
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}

impl PartialEq for ConditionType {
    fn eq(&self, other: &Self) -> bool {
        self.render(false).eq_ignore_ascii_case(&other.render(false))
    }
}

impl Eq for ConditionType {}

impl Hash for ConditionType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.render(false).to_ascii_lowercase().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_wire_codes_are_exact() {
        let cases = [
            (ConditionType::equals(), "eq"),
            (ConditionType::finds_in_set(), "finset"),
            (ConditionType::greater_than(), "gt"),
            (ConditionType::greater_or_equal(), "gteq"),
            (ConditionType::is_in(), "in"),
            (ConditionType::less_than(), "lt"),
            (ConditionType::less_or_equal(), "lteq"),
            (ConditionType::like(), "like"),
            (ConditionType::more_or_equal(), "moreq"),
            (ConditionType::not_equals(), "neq"),
            (ConditionType::not_in(), "nin"),
            (ConditionType::not_in_set(), "nfinset"),
            (ConditionType::not_like(), "nlike"),
            (ConditionType::not_null(), "notnull"),
            (ConditionType::null(), "null"),
        ];
        for (cond, code) in cases {
            assert_eq!(cond.token(), "condition_type");
            assert_eq!(cond.value(), code);
            assert!(cond.is_operator());
        }
    }

    #[test]
    fn range_produces_from_to_pair() {
        let (from, to) = ConditionType::range();
        assert_eq!(from.value(), "from");
        assert_eq!(to.value(), "to");
        assert_eq!(from.kind(), ConditionKind::From);
        assert_eq!(to.kind(), ConditionKind::To);
        assert!(from.is_operator());
        assert!(to.is_operator());
    }

    #[test]
    fn literals_render_under_their_own_keys() {
        let field = ConditionType::field("sku");
        let value = ConditionType::search_value("WS-01");
        assert_eq!(field.to_string(), "field=sku");
        assert_eq!(value.to_string(), "value=WS-01");
        assert!(!field.is_operator());
        assert!(!value.is_operator());
    }

    #[test]
    fn bracketed_rendering() {
        assert_eq!(ConditionType::equals().render(true), "[condition_type]=eq");
        assert_eq!(ConditionType::field("sku").render(true), "[field]=sku");
    }

    #[test]
    fn empty_value_falls_back_to_type_name() {
        let field = ConditionType::field("");
        assert_eq!(field.render(false), "ConditionType");
        assert_eq!(field.render(true), "ConditionType");
    }

    #[test]
    fn equality_is_case_insensitive_on_rendered_form() {
        assert_eq!(
            ConditionType::field("SKU"),
            ConditionType::field("sku")
        );
        assert_ne!(ConditionType::equals(), ConditionType::not_equals());
    }

    #[test]
    fn equal_conditions_hash_alike() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |c: &ConditionType| {
            let mut h = DefaultHasher::new();
            c.hash(&mut h);
            h.finish()
        };
        assert_eq!(
            hash(&ConditionType::field("Color")),
            hash(&ConditionType::field("color"))
        );
    }
}
