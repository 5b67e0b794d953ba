//! Shared state behind the HTTP exposure
//!
//! The host owns the datasets, the compiled templates and the configuration.
//! Handlers build a fresh presenter per request over the shared collections,
//! so requests never share filter, sort or page state.

use crate::catalog::{Car, Hotel, cars, hotels};
use crate::config::FrontendConfig;
use crate::core::error::Result;
use crate::view::html::Templates;
use std::sync::Arc;

/// Host context shared by every handler
#[derive(Debug, Clone)]
pub struct ServerHost {
    pub config: Arc<FrontendConfig>,
    pub hotels: Arc<[Hotel]>,
    pub cars: Arc<[Car]>,
    pub templates: Templates,
}

impl ServerHost {
    /// Build the host over the built-in datasets
    pub fn new(config: FrontendConfig) -> Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            hotels: hotels().into(),
            cars: cars().into(),
            templates: Templates::new()?,
        })
    }
}
