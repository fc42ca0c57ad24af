//! Inert value objects for object queries.
//!
//! These types describe filters and orderings by shape only; building and
//! evaluating queries against the service is out of scope for this crate.

use serde::{Deserialize, Serialize};

/// Comparison operator of a [`PropertyFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterTerm {
    /// Property contains the value.
    Contains,
    /// Property equals the value.
    #[serde(rename = "eq")]
    Equal,
    /// Property is less than the value.
    #[serde(rename = "lt")]
    LessThan,
    /// Property is less than or equal to the value.
    #[serde(rename = "lte")]
    LessThanOrEqual,
    /// Property is greater than the value.
    #[serde(rename = "gt")]
    GreaterThan,
    /// Property is greater than or equal to the value.
    #[serde(rename = "gte")]
    GreaterThanOrEqual,
    /// Property is null.
    #[serde(rename = "is")]
    IsNull,
}

impl FilterTerm {
    /// The wire token of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterTerm::Contains => "contains",
            FilterTerm::Equal => "eq",
            FilterTerm::LessThan => "lt",
            FilterTerm::LessThanOrEqual => "lte",
            FilterTerm::GreaterThan => "gt",
            FilterTerm::GreaterThanOrEqual => "gte",
            FilterTerm::IsNull => "is",
        }
    }
}

/// Sort direction of an ordering term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderTerm {
    /// Ascending order.
    #[serde(rename = ":asc")]
    Ascending,
    /// Descending order.
    #[serde(rename = ":desc")]
    Descending,
}

impl OrderTerm {
    /// The wire suffix of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderTerm::Ascending => ":asc",
            OrderTerm::Descending => ":desc",
        }
    }
}

/// One property comparison in an object query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    /// Property name the comparison applies to.
    pub property: String,
    /// Comparison operator.
    pub filter: FilterTerm,
    /// Comparison operand.
    pub value: serde_json::Value,
}

impl PropertyFilter {
    /// Creates a filter comparing `property` against `value`.
    pub fn new(
        property: impl Into<String>,
        filter: FilterTerm,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            property: property.into(),
            filter,
            value: value.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_term_tokens() {
        assert_eq!(FilterTerm::Contains.as_str(), "contains");
        assert_eq!(FilterTerm::Equal.as_str(), "eq");
        assert_eq!(FilterTerm::IsNull.as_str(), "is");
    }

    #[test]
    fn test_order_term_tokens() {
        assert_eq!(OrderTerm::Ascending.as_str(), ":asc");
        assert_eq!(OrderTerm::Descending.as_str(), ":desc");
    }

    #[test]
    fn test_property_filter_value_object() {
        let a = PropertyFilter::new("capacity", FilterTerm::GreaterThan, 100);
        let b = PropertyFilter::new("capacity", FilterTerm::GreaterThan, 100);
        assert_eq!(a, b);

        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["filter"], "gt");
    }
}
