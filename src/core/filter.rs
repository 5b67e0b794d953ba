//! Filter criteria applied to record collections
//!
//! A criteria set is an ordered list of predicates over named text fields.
//! Every predicate is independently optional: an empty selection or an
//! "All ..." sentinel disables it instead of matching nothing.

use crate::core::Record;
use serde::{Deserialize, Serialize};

/// A single constraint over one text field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Predicate {
    /// Field must equal the value exactly
    Equals { field: String, value: String },
    /// Field must contain the text, ignoring case
    Contains { field: String, text: String },
}

impl Predicate {
    pub fn field(&self) -> &str {
        match self {
            Predicate::Equals { field, .. } | Predicate::Contains { field, .. } => field,
        }
    }

    /// Whether this predicate constrains anything at all
    pub fn is_active(&self) -> bool {
        match self {
            Predicate::Equals { value, .. } => !is_match_all(value),
            Predicate::Contains { text, .. } => !text.trim().is_empty(),
        }
    }

    /// Test a record against this predicate
    ///
    /// Inactive predicates and fields the record does not expose never reject.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(actual) = record.field(self.field()) else {
            return true;
        };

        match self {
            Predicate::Equals { value, .. } => actual == value,
            Predicate::Contains { text, .. } => actual
                .to_lowercase()
                .contains(&text.trim().to_lowercase()),
        }
    }
}

/// Selection values meaning "no constraint"
///
/// Covers the empty option, "all", and dropdown labels such as
/// "All Categories" or "All Brands".
pub fn is_match_all(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return true;
    }
    let lower = value.to_lowercase();
    lower == "all" || lower.starts_with("all ")
}

/// The set of active predicates narrowing a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    predicates: Vec<Predicate>,
}

impl FilterCriteria {
    /// Criteria that match every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality predicate
    pub fn equals(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.predicates.push(Predicate::Equals {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Add a case-insensitive substring predicate
    pub fn contains(mut self, field: impl Into<String>, text: impl Into<String>) -> Self {
        self.predicates.push(Predicate::Contains {
            field: field.into(),
            text: text.into(),
        });
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Predicates that actually constrain the result
    pub fn active(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter().filter(|p| p.is_active())
    }

    /// True when no predicate constrains anything
    pub fn is_unconstrained(&self) -> bool {
        self.active().next().is_none()
    }

    /// Test a record against every predicate
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Apply to a collection, preserving source order
    pub fn apply<'a, R: Record>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Car, Hotel, cars};

    #[test]
    fn test_sentinels_are_match_all() {
        assert!(is_match_all(""));
        assert!(is_match_all("  "));
        assert!(is_match_all("all"));
        assert!(is_match_all("All Categories"));
        assert!(is_match_all("ALL BRANDS"));
        assert!(!is_match_all("SUV"));
        assert!(!is_match_all("Allroad"));
    }

    #[test]
    fn test_equals_is_exact() {
        let car = Car::new("BMW XM", 200, 5.0, "SUV", "BMW");
        assert!(FilterCriteria::new().equals("category", "SUV").matches(&car));
        assert!(!FilterCriteria::new().equals("category", "suv").matches(&car));
    }

    #[test]
    fn test_contains_ignores_case() {
        let hotel = Hotel::new("Comfort Suites", 100.0, 4.0);
        assert!(FilterCriteria::new().contains("name", "suite").matches(&hotel));
        assert!(FilterCriteria::new().contains("name", " COMFORT ").matches(&hotel));
        assert!(!FilterCriteria::new().contains("name", "palace").matches(&hotel));
    }

    #[test]
    fn test_unknown_field_does_not_reject() {
        let hotel = Hotel::new("Luxury Inn", 200.0, 4.5);
        let criteria = FilterCriteria::new().equals("brand", "BMW");
        assert!(criteria.matches(&hotel));
    }

    #[test]
    fn test_all_predicates_must_hold() {
        let criteria = FilterCriteria::new()
            .equals("category", "SUV")
            .equals("brand", "Mercedes");
        let fleet = cars();
        let matched = criteria.apply(&fleet);
        let models: Vec<&str> = matched.iter().map(|c| c.label()).collect();
        assert_eq!(models, vec!["Mercedes G63", "Mercedes GLE53"]);
    }

    #[test]
    fn test_sentinel_selection_keeps_everything() {
        let criteria = FilterCriteria::new()
            .equals("category", "All Categories")
            .equals("brand", "")
            .contains("model", "");
        assert!(criteria.is_unconstrained());
        assert_eq!(criteria.apply(&cars()).len(), 25);
    }
}
