//! Record trait shared by every listable dataset

use serde::Serialize;

/// A listable, immutable catalog entry (a hotel, a car, ...)
///
/// The presenter only ever reads records through this trait, so one pipeline
/// serves every dataset. `field` exposes the text fields that filter
/// predicates may target; fields a record does not expose return `None`.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Singular record kind, used in logs and templates (e.g. "hotel")
    const KIND: &'static str;

    /// Nightly / daily price
    fn price(&self) -> f64;

    /// Rating out of 5
    fn rating(&self) -> f64;

    /// Display label: the hotel name or the car model
    fn label(&self) -> &str;

    /// Look up a named text field
    fn field(&self, name: &str) -> Option<&str>;

    /// Extra `(name, value)` facts shown on the card below the label
    fn facts(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
