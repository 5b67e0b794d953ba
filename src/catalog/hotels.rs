//! Hotel records and the built-in hotel dataset

use crate::core::Record;
use serde::{Deserialize, Serialize};

/// A hotel listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    /// Price per night
    pub price: f64,
    pub rating: f64,
}

impl Hotel {
    pub fn new(name: impl Into<String>, price: f64, rating: f64) -> Self {
        Self {
            name: name.into(),
            price,
            rating,
        }
    }
}

impl Record for Hotel {
    const KIND: &'static str = "hotel";

    fn price(&self) -> f64 {
        self.price
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            _ => None,
        }
    }
}

/// The hotels shown on the hotel page, in display order
///
/// The first three are the reference hotels; the rest are sample entries so
/// the list spans more than one page.
pub fn hotels() -> Vec<Hotel> {
    vec![
        Hotel::new("Luxury Inn", 200.0, 4.5),
        Hotel::new("Economy Stay", 50.0, 3.5),
        Hotel::new("Comfort Suites", 100.0, 4.0),
        Hotel::new("Grand Palace", 350.0, 4.9),
        Hotel::new("Budget Lodge", 40.0, 3.0),
        Hotel::new("Seaside Resort", 180.0, 4.6),
        Hotel::new("City Center Hotel", 120.0, 4.2),
        Hotel::new("Mountain View Inn", 90.0, 4.0),
    ]
}
