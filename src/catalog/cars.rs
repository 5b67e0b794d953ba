//! Car records and the built-in rental fleet

use crate::core::Record;
use serde::{Deserialize, Serialize};

/// A rental car listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub model: String,
    /// Price per day
    pub price: u32,
    pub rating: f64,
    pub category: String,
    pub brand: String,
}

impl Car {
    pub fn new(model: &str, price: u32, rating: f64, category: &str, brand: &str) -> Self {
        Self {
            model: model.to_string(),
            price,
            rating,
            category: category.to_string(),
            brand: brand.to_string(),
        }
    }
}

impl Record for Car {
    const KIND: &'static str = "car";

    fn price(&self) -> f64 {
        f64::from(self.price)
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn label(&self) -> &str {
        &self.model
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "model" => Some(&self.model),
            "category" => Some(&self.category),
            "brand" => Some(&self.brand),
            _ => None,
        }
    }

    fn facts(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Category", self.category.clone()),
            ("Brand", self.brand.clone()),
        ]
    }
}

/// The rental fleet, in display order
///
/// "Tesla Model 3" is listed twice on purpose: the fleet has two of them.
pub fn cars() -> Vec<Car> {
    vec![
        Car::new("Toyota Corolla", 50, 4.5, "Sedan", "Toyota"),
        Car::new("Ford Explorer", 80, 4.0, "SUV", "Ford"),
        Car::new("Tesla Model 3", 120, 5.0, "Electric", "Tesla"),
        Car::new("Honda Civic", 40, 4.2, "Sedan", "Honda"),
        Car::new("BMW XM", 200, 5.0, "SUV", "BMW"),
        Car::new("Cadillac Escalade", 150, 4.8, "SUV", "Cadillac"),
        Car::new("Rolls Royce Cullinan", 5000, 5.0, "SUV", "Rolls Royce"),
        Car::new("Mercedes G63", 300, 4.9, "SUV", "Mercedes"),
        Car::new("Mercedes GLE53", 150, 4.5, "SUV", "Mercedes"),
        Car::new("GMC SLT", 100, 4.0, "SUV", "GMC"),
        Car::new("Porsche Macan", 300, 4.7, "SUV", "Porsche"),
        Car::new("Nissan Patrol", 100, 4.2, "SUV", "Nissan"),
        Car::new("BMW M4 Competition", 200, 4.8, "Sedan", "BMW"),
        Car::new("Audi RS3", 220, 4.6, "Sedan", "Audi"),
        Car::new("Audi RS5", 270, 4.7, "Sedan", "Audi"),
        Car::new("Audi S8", 300, 4.9, "Sedan", "Audi"),
        Car::new("BMW 730LI", 290, 4.6, "Sedan", "BMW"),
        Car::new("Mercedes EQE 350", 120, 4.5, "Electric", "Mercedes"),
        Car::new("Tesla Model 3", 120, 5.0, "Electric", "Tesla"),
        Car::new("Porsche 718", 4718, 4.9, "Sports", "Porsche"),
        Car::new("Porsche 911 Turbo S", 9000, 5.0, "Sports", "Porsche"),
        Car::new("Ferrari F8 Tributo", 9999, 5.0, "Sports", "Ferrari"),
        Car::new("Audi R8", 2000, 4.8, "Sports", "Audi"),
        Car::new("Audi RS6", 300, 4.7, "Sports", "Audi"),
        Car::new("Mercedes V250", 2500, 4.6, "Van", "Mercedes"),
    ]
}
