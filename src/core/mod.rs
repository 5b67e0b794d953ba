//! Core module: records, the list pipeline and widgets

pub mod error;
pub mod filter;
pub mod presenter;
pub mod query;
pub mod record;
pub mod sort;
pub mod widgets;

pub use error::{BookEasyError, ConfigError, FormError, RenderError, TransportError};
pub use filter::{FilterCriteria, Predicate};
pub use presenter::{ListPresenter, PageSlice, RenderOutcome, page_controls};
pub use query::{ListQuery, PagePolicy, PageState, PaginatedResponse, PaginationMeta};
pub use record::Record;
pub use sort::SortKey;
pub use widgets::{DetailsToggle, StarRating, ToggleState};
