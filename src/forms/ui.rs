//! Browser-side effects a form can trigger

/// Page surface the forms write to
pub trait FormUi {
    /// Blocking modal alert
    fn alert(&mut self, message: &str);

    /// Replace the text of the contact response region
    fn set_response_text(&mut self, text: &str);

    /// Client-side navigation
    fn navigate(&mut self, path: &str);
}

/// [`FormUi`] that records every effect, for headless use and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingUi {
    pub alerts: Vec<String>,
    pub response_text: Option<String>,
    pub navigations: Vec<String>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl FormUi for RecordingUi {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn set_response_text(&mut self, text: &str) {
        self.response_text = Some(text.to_string());
    }

    fn navigate(&mut self, path: &str) {
        self.navigations.push(path.to_string());
    }
}
