//! Login form payload and backend answer

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status value the backend sends for a successful login
pub const STATUS_SUCCESS: &str = "success";

/// Credentials posted to the login endpoint as `{"email", "password"}`
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// The part of the login answer the form looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginResponse {
    pub status: String,
    pub message: String,
}

impl LoginResponse {
    /// Read the answer leniently: fields that are missing or not strings are empty
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            status: text("status"),
            message: text("message"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
