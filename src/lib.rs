//! # BookEasy
//!
//! Front end of the BookEasy travel-booking demo: hotel and car listings with
//! filtering, sorting and pagination, a star-rating widget, a details toggle,
//! search forms, a contact form and a login form.
//!
//! ## Features
//!
//! - **One generic pipeline**: [`ListPresenter`](core::ListPresenter) filters,
//!   sorts, paginates and redraws any [`Record`](core::Record) collection
//! - **Explicit presenters**: each list/region pair owns its filter, sort and
//!   page state; nothing lives in globals
//! - **Escaped rendering**: cards and pagination go through tera templates
//! - **Headless forms**: contact and login flows run over a
//!   [`Transport`](forms::Transport) and a [`FormUi`](forms::FormUi)
//! - **Server-side listings**: the same pipeline exposed as HTML pages and a
//!   JSON API with axum
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookeasy::prelude::*;
//!
//! let mut presenter = ListPresenter::new(cars(), 3, MemoryView::new());
//! presenter.set_filter(FilterCriteria::new().equals("category", "SUV"));
//! presenter.set_sort(SortKey::PriceAsc);
//! presenter.render(None);
//!
//! for card in &presenter.view().cards {
//!     println!("{} - ${}", card.title, card.price);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod forms;
pub mod server;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        BookEasyError, DetailsToggle, FilterCriteria, ListPresenter, ListQuery, PagePolicy,
        PageState, PaginatedResponse, PaginationMeta, Predicate, Record, RenderOutcome, SortKey,
        StarRating, ToggleState,
    };

    // === Catalog ===
    pub use crate::catalog::{Car, Hotel, cars, hotels};

    // === Views ===
    pub use crate::view::html::Templates;
    pub use crate::view::{Card, HtmlView, ListView, MemoryView, PageControl};

    // === Forms ===
    pub use crate::forms::{
        CarSearchForm, ContactForm, ContactOutcome, FormClient, FormUi, HotelSearchForm,
        HttpTransport, LoginForm, LoginOutcome, RecordingUi, Transport,
    };

    // === Config ===
    pub use crate::config::FrontendConfig;

    // === Server ===
    pub use crate::server::{ServerBuilder, ServerHost};
}
