//! Contact form payload

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::Validate;

/// The three fields of the "Contact Us" form
///
/// All three are required; whitespace-only input counts as filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// The single line the backend stores: `"<name>: <email> - <message>"`
    pub fn flattened(&self) -> String {
        format!("{}: {} - {}", self.name, self.email, self.message)
    }

    /// Request body for the contact endpoint
    pub fn body(&self) -> Value {
        json!({ "message": self.flattened() })
    }
}
