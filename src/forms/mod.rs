//! Forms: search summaries, the contact form and the login form

pub mod client;
pub mod contact;
pub mod login;
pub mod search;
pub mod transport;
pub mod ui;

pub use client::{ContactOutcome, FormClient, LoginOutcome};
pub use contact::ContactForm;
pub use login::{LoginForm, LoginResponse};
pub use search::{CarSearchForm, HotelSearchForm};
pub use transport::{HttpTransport, Transport};
pub use ui::{FormUi, RecordingUi};
