//! Built-in datasets
//!
//! Everything here is hard-coded and rebuilt whenever a presenter is
//! constructed; nothing is ever added or removed at runtime.

pub mod cars;
pub mod hotels;

pub use cars::{Car, cars};
pub use hotels::{Hotel, hotels};

use crate::core::Record;
use indexmap::IndexSet;

/// Distinct values of a text field in first-seen order
///
/// Used to build the category/brand dropdowns. Records that do not expose the
/// field are skipped.
pub fn distinct_values<R: Record>(records: &[R], field: &str) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.field(field))
        .map(str::to_string)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_categories_keep_first_seen_order() {
        let categories = distinct_values(&cars(), "category");
        assert_eq!(categories, vec!["Sedan", "SUV", "Electric", "Sports", "Van"]);
    }

    #[test]
    fn test_distinct_values_unknown_field_is_empty() {
        assert!(distinct_values(&hotels(), "brand").is_empty());
    }
}
