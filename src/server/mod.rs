//! HTTP exposure of the listings
//!
//! Serves the hotel and car listings as server-rendered pages and as a JSON
//! API. Both go through the same presenter pipeline as the in-page lists.

pub mod builder;
pub mod handlers;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use host::ServerHost;
