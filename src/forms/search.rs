//! Hotel and car search forms
//!
//! These forms do not query anything; submitting shows a summary of the
//! search. The car form can also narrow the car list by its selected type.

use super::ui::FormUi;
use crate::core::FilterCriteria;
use serde::{Deserialize, Serialize};

/// Hotel search: destination, stay dates and party size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelSearchForm {
    pub destination: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
}

impl HotelSearchForm {
    pub fn summary(&self) -> String {
        format!(
            "Searching hotels in {} from {} to {} for {} guests.",
            self.destination, self.check_in, self.check_out, self.guests
        )
    }

    pub fn submit<U: FormUi>(&self, ui: &mut U) {
        ui.alert(&self.summary());
    }
}

/// Car search: pickup place, rental dates and car type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarSearchForm {
    pub pickup: String,
    pub pickup_date: String,
    pub dropoff_date: String,
    pub car_type: String,
}

impl CarSearchForm {
    pub fn summary(&self) -> String {
        format!(
            "Searching {} cars for pickup at {} from {} to {}.",
            self.car_type, self.pickup, self.pickup_date, self.dropoff_date
        )
    }

    pub fn submit<U: FormUi>(&self, ui: &mut U) {
        ui.alert(&self.summary());
    }

    /// Category filter for the car list matching the selected type
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new().equals("category", self.car_type.clone())
    }
}
