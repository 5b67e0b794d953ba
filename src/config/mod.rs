//! Configuration loading and management

use crate::core::PagePolicy;
use crate::core::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Page sizes of the listing presenters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub hotels_per_page: usize,
    pub cars_per_page: usize,

    /// What a filter change does to the current page
    pub page_policy: PagePolicy,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            hotels_per_page: 3,
            cars_per_page: 3,
            page_policy: PagePolicy::ResetToFirst,
        }
    }
}

/// Backend endpoints and user-facing form messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Origin the form endpoints are resolved against
    pub backend_url: String,
    pub contact_path: String,
    pub login_path: String,

    /// Where a successful login navigates to
    pub profile_path: String,

    /// Alert shown when a required contact field is empty
    pub missing_fields_alert: String,

    /// Text shown in the response region when a contact submission fails
    pub contact_error_text: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8080".to_string(),
            contact_path: "/contact".to_string(),
            login_path: "/login".to_string(),
            profile_path: "/profile".to_string(),
            missing_fields_alert: "All form fields must be filled in.".to_string(),
            contact_error_text: "An error occurred while sending the data.".to_string(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Complete front-end configuration
///
/// Every key is optional; missing sections and fields take their defaults.
///
/// ```yaml
/// listing:
///   cars_per_page: 6
///   page_policy: preserve
/// forms:
///   backend_url: "http://localhost:9000"
/// server:
///   bind: "0.0.0.0:3000"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub listing: ListingConfig,
    pub forms: FormsConfig,
    pub server: ServerConfig,
}

impl FrontendConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the front end unusable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listing.hotels_per_page == 0 {
            return Err(invalid("listing.hotels_per_page", "must be at least 1"));
        }
        if self.listing.cars_per_page == 0 {
            return Err(invalid("listing.cars_per_page", "must be at least 1"));
        }
        for (field, path) in [
            ("forms.contact_path", &self.forms.contact_path),
            ("forms.login_path", &self.forms.login_path),
            ("forms.profile_path", &self.forms.profile_path),
        ] {
            if !path.starts_with('/') {
                return Err(invalid(field, "must start with '/'"));
            }
        }
        Ok(())
    }

    /// Absolute URL of a backend path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.forms.backend_url.trim_end_matches('/'), path)
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FrontendConfig::default();
        assert_eq!(config.listing.cars_per_page, 3);
        assert_eq!(config.forms.profile_path, "/profile");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = FrontendConfig::from_yaml_str(
            "listing:\n  cars_per_page: 6\n  page_policy: preserve\n",
        )
        .unwrap();
        assert_eq!(config.listing.cars_per_page, 6);
        assert_eq!(config.listing.hotels_per_page, 3);
        assert_eq!(config.listing.page_policy, PagePolicy::Preserve);
        assert_eq!(config.forms, FormsConfig::default());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = FrontendConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = FrontendConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = FrontendConfig::from_yaml_str("listing:\n  hotels_per_page: 0\n").unwrap_err();
        assert!(err.to_string().contains("listing.hotels_per_page"));
    }

    #[test]
    fn test_relative_path_rejected() {
        let err = FrontendConfig::from_yaml_str("forms:\n  login_path: login\n").unwrap_err();
        assert!(err.to_string().contains("forms.login_path"));
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let mut config = FrontendConfig::default();
        config.forms.backend_url = "http://example.test/".to_string();
        assert_eq!(config.endpoint("/contact"), "http://example.test/contact");
    }
}
