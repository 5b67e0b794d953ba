//! Submission flows of the contact and login forms
//!
//! The two flows surface failures differently: a failed contact submission
//! shows a fixed text in the response region, while a failed login is only
//! logged. Both flows log every failure.
//!
//! Neither flow guards against double submission, retries, or cancels: each
//! call is one independent request.

use super::contact::ContactForm;
use super::login::{LoginForm, LoginResponse};
use super::transport::Transport;
use super::ui::FormUi;
use crate::config::FrontendConfig;
use crate::core::FormError;
use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

/// What a contact submission ended in
#[derive(Debug, Clone, PartialEq)]
pub enum ContactOutcome {
    /// A required field was empty; nothing was sent
    Rejected(FormError),
    /// The backend answered with this JSON
    Responded(Value),
    /// No usable answer; the error text was shown
    Failed,
}

/// What a login submission ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Navigated to the profile page
    LoggedIn,
    /// The backend refused; its message was alerted
    Refused { message: String },
    /// No usable answer; logged only
    Failed,
}

/// Posts forms to the backend and applies the results to the page
#[derive(Clone)]
pub struct FormClient {
    transport: Arc<dyn Transport>,
    config: Arc<FrontendConfig>,
}

impl FormClient {
    pub fn new(transport: Arc<dyn Transport>, config: Arc<FrontendConfig>) -> Self {
        Self { transport, config }
    }

    /// Validate, post and show the answer of the contact form
    pub async fn submit_contact<U: FormUi>(&self, form: &ContactForm, ui: &mut U) -> ContactOutcome {
        if let Err(errors) = form.validate() {
            let error = FormError::from(errors);
            tracing::debug!(error = %error, "contact form incomplete");
            ui.alert(&self.config.forms.missing_fields_alert);
            return ContactOutcome::Rejected(error);
        }

        let url = self.config.endpoint(&self.config.forms.contact_path);
        match self.transport.post_json(&url, &form.body()).await {
            Ok(value) => {
                // serde_json pretty output uses two-space indentation
                match serde_json::to_string_pretty(&value) {
                    Ok(text) => {
                        ui.set_response_text(&text);
                        ContactOutcome::Responded(value)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to format contact response");
                        ui.set_response_text(&self.config.forms.contact_error_text);
                        ContactOutcome::Failed
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "contact submission failed");
                ui.set_response_text(&self.config.forms.contact_error_text);
                ContactOutcome::Failed
            }
        }
    }

    /// Post credentials; navigate on success, alert the backend message otherwise
    pub async fn submit_login<U: FormUi>(&self, form: &LoginForm, ui: &mut U) -> LoginOutcome {
        let url = self.config.endpoint(&self.config.forms.login_path);
        let body = match serde_json::to_value(form) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "failed to encode login form");
                return LoginOutcome::Failed;
            }
        };

        match self.transport.post_json(&url, &body).await {
            Ok(value) => {
                let response = LoginResponse::from_value(&value);
                if response.is_success() {
                    tracing::info!(email = %form.email, "login succeeded");
                    ui.navigate(&self.config.forms.profile_path);
                    LoginOutcome::LoggedIn
                } else {
                    tracing::info!(email = %form.email, status = %response.status, "login refused");
                    ui.alert(&response.message);
                    LoginOutcome::Refused {
                        message: response.message,
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "login submission failed");
                LoginOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransportError;
    use crate::forms::RecordingUi;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Transport answering with a fixed result and recording requests
    struct StubTransport {
        answer: Result<Value, String>,
        requests: Mutex<Vec<(String, Value)>>,
    }

    impl StubTransport {
        fn answering(answer: Result<Value, String>) -> Arc<Self> {
            Arc::new(Self {
                answer,
                requests: Mutex::new(Vec::new()),
            })
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), body.clone()));
            self.answer.clone().map_err(|message| TransportError::Network {
                url: url.to_string(),
                message,
            })
        }
    }

    fn client(transport: Arc<StubTransport>) -> FormClient {
        FormClient::new(transport, Arc::new(FrontendConfig::default()))
    }

    #[tokio::test]
    async fn test_contact_posts_flattened_message() {
        let transport = StubTransport::answering(Ok(json!({"status": "success"})));
        let mut ui = RecordingUi::new();

        let outcome = client(transport.clone())
            .submit_contact(&ContactForm::new("Ann", "ann@x.io", "Hi"), &mut ui)
            .await;

        assert_eq!(outcome, ContactOutcome::Responded(json!({"status": "success"})));
        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].0, "http://localhost:8080/contact");
        assert_eq!(requests[0].1, json!({"message": "Ann: ann@x.io - Hi"}));
        assert_eq!(
            ui.response_text.as_deref(),
            Some("{\n  \"status\": \"success\"\n}")
        );
    }

    #[tokio::test]
    async fn test_contact_failure_shows_error_text() {
        let transport = StubTransport::answering(Err("connection refused".to_string()));
        let mut ui = RecordingUi::new();

        let outcome = client(transport)
            .submit_contact(&ContactForm::new("Ann", "ann@x.io", "Hi"), &mut ui)
            .await;

        assert_eq!(outcome, ContactOutcome::Failed);
        assert_eq!(
            ui.response_text.as_deref(),
            Some("An error occurred while sending the data.")
        );
        assert!(ui.alerts.is_empty());
    }

    #[tokio::test]
    async fn test_login_failure_is_silent() {
        let transport = StubTransport::answering(Err("timeout".to_string()));
        let mut ui = RecordingUi::new();

        let outcome = client(transport.clone())
            .submit_login(&LoginForm::new("a@b.c", "pw"), &mut ui)
            .await;

        assert_eq!(outcome, LoginOutcome::Failed);
        assert_eq!(transport.request_count(), 1);
        assert_eq!(ui, RecordingUi::new());
    }

    #[tokio::test]
    async fn test_rejected_contact_carries_missing_fields() {
        let transport = StubTransport::answering(Ok(json!({})));
        let mut ui = RecordingUi::new();

        let outcome = client(transport.clone())
            .submit_contact(&ContactForm::default(), &mut ui)
            .await;

        let ContactOutcome::Rejected(error) = outcome else {
            panic!("expected a rejected submission, got {outcome:?}");
        };
        assert_eq!(
            error,
            FormError::MissingFields {
                fields: vec!["email".to_string(), "message".to_string(), "name".to_string()]
            }
        );
        let error = crate::core::BookEasyError::from(error);
        assert_eq!(error.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_contact_resubmission_sends_again() {
        let transport = StubTransport::answering(Ok(json!({})));
        let client = client(transport.clone());
        let form = ContactForm::new("Ann", "ann@x.io", "Hi");
        let mut ui = RecordingUi::new();

        tokio_test::block_on(client.submit_contact(&form, &mut ui));
        tokio_test::block_on(client.submit_contact(&form, &mut ui));

        assert_eq!(transport.request_count(), 2);
    }
}
