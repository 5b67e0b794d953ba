//! HTML rendering of list regions with tera
//!
//! Templates are embedded and registered under `.html` names so tera
//! autoescapes every record field. Region contents are plain strings that a
//! page template (or a DOM binding) drops in verbatim.

use super::{Card, ListView, PageControl};
use crate::core::BookEasyError;
use crate::core::error::Result;
use serde::Serialize;
use std::sync::Arc;
use tera::{Context, Tera};

const CARD_TEMPLATE: &str = r#"<div class="card {{ card.kind }}-card">
  <h3>{{ card.title }}</h3>
  <p class="price">Price: ${{ card.price }}</p>
  <p class="rating">Rating: {{ card.rating }}/5</p>
{%- for fact in card.facts %}
  <p class="fact">{{ fact.label }}: {{ fact.value }}</p>
{%- endfor %}
</div>
"#;

const PAGINATION_TEMPLATE: &str = r#"{% for control in controls -%}
<a class="page-link{% if control.active %} active{% endif %}" href="{{ control.href }}">{{ control.page }}</a>
{% endfor -%}"#;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>BookEasy - {{ heading }}</title>
</head>
<body>
  <h1>{{ heading }}</h1>
  <form method="get" action="{{ action }}" class="filters">
    <input type="text" name="{{ text_field }}" value="{{ text_value }}" placeholder="Search">
{%- for select in selects %}
    <select name="{{ select.name }}">
{%- for option in select.options %}
      <option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>
{%- endfor %}
    </select>
{%- endfor %}
    <button type="submit">Apply</button>
  </form>
  <p class="summary">{{ total }} result(s), page {{ page }} of {{ total_pages }}</p>
  <div id="list">
{{ display | safe }}
  </div>
  <div id="pagination">
{{ pagination | safe }}
  </div>
</body>
</html>
"#;

/// Compiled templates, shared between views
#[derive(Debug, Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl Templates {
    /// Compile the embedded templates
    pub fn new() -> Result<Self> {
        Self::from_sources(CARD_TEMPLATE, PAGINATION_TEMPLATE, PAGE_TEMPLATE)
    }

    /// Compile custom card, pagination and page templates
    ///
    /// The templates see the same context as the embedded ones: `card`,
    /// `controls` and the fields of [`PageContext`].
    pub fn from_sources(card: &str, pagination: &str, page: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("card.html", card),
            ("pagination.html", pagination),
            ("page.html", page),
        ])?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    pub fn render_card(&self, card: &Card) -> Result<String> {
        let mut context = Context::new();
        context.insert("card", card);
        Ok(self.tera.render("card.html", &context)?)
    }

    pub fn render_pagination(&self, controls: &[LinkedControl]) -> Result<String> {
        let mut context = Context::new();
        context.insert("controls", controls);
        Ok(self.tera.render("pagination.html", &context)?)
    }

    /// Render a full listing page around already rendered regions
    pub fn render_page(&self, page: &PageContext) -> Result<String> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render("page.html", &context)?)
    }
}

/// A pagination control with its target link
#[derive(Debug, Clone, Serialize)]
pub struct LinkedControl {
    pub page: usize,
    pub active: bool,
    pub href: String,
}

/// One `<option>` of a filter dropdown
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A filter dropdown
#[derive(Debug, Clone, Serialize)]
pub struct Select {
    pub name: String,
    pub options: Vec<SelectOption>,
}

/// Everything the page template needs
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub heading: String,
    pub action: String,
    pub text_field: String,
    pub text_value: String,
    pub selects: Vec<Select>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub display: String,
    pub pagination: String,
}

type LinkFn = Box<dyn Fn(usize) -> String + Send + Sync>;

/// [`ListView`] producing HTML for the display and pagination regions
pub struct HtmlView {
    templates: Templates,
    link: LinkFn,
    display: String,
    pagination: String,
    /// First template failure since the last `clear_display`
    error: Option<BookEasyError>,
}

impl HtmlView {
    /// Pagination links default to `?page=N`
    pub fn new(templates: Templates) -> Self {
        Self {
            templates,
            link: Box::new(|page| format!("?page={page}")),
            display: String::new(),
            pagination: String::new(),
            error: None,
        }
    }

    /// Use a custom link for each pagination control
    pub fn with_link(mut self, link: impl Fn(usize) -> String + Send + Sync + 'static) -> Self {
        self.link = Box::new(link);
        self
    }

    /// Current display region markup
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current pagination region markup
    pub fn pagination(&self) -> &str {
        &self.pagination
    }

    /// Fail if any card or the pagination of the last redraw did not render
    pub fn check(&mut self) -> Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn record_error(&mut self, error: BookEasyError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

impl ListView for HtmlView {
    fn clear_display(&mut self) {
        self.display.clear();
        self.error = None;
    }

    fn show_card(&mut self, card: Card) {
        match self.templates.render_card(&card) {
            Ok(html) => self.display.push_str(&html),
            Err(e) => {
                tracing::error!(error = %e, title = %card.title, "failed to render card");
                self.record_error(e);
            }
        }
    }

    fn show_pagination(&mut self, controls: &[PageControl]) {
        let linked: Vec<LinkedControl> = controls
            .iter()
            .map(|c| LinkedControl {
                page: c.page,
                active: c.active,
                href: (self.link)(c.page),
            })
            .collect();

        self.pagination = match self.templates.render_pagination(&linked) {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(error = %e, "failed to render pagination");
                self.record_error(e);
                String::new()
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Hotel;

    fn view() -> HtmlView {
        HtmlView::new(Templates::new().expect("templates should compile"))
    }

    #[test]
    fn test_card_escapes_record_text() {
        let mut view = view();
        view.show_card(Card::from_record(&Hotel::new("<b>Inn</b> & Co", 10.0, 3.0)));
        assert!(view.display().contains("&lt;b&gt;Inn&lt;&#x2F;b&gt; &amp; Co"));
        assert!(!view.display().contains("<b>"));
    }

    #[test]
    fn test_clear_then_redraw_replaces_content() {
        let mut view = view();
        view.show_card(Card::from_record(&Hotel::new("Old", 10.0, 3.0)));
        view.clear_display();
        view.show_card(Card::from_record(&Hotel::new("New", 10.0, 3.0)));
        assert!(view.display().contains("New"));
        assert!(!view.display().contains("Old"));
    }

    #[test]
    fn test_pagination_marks_active_and_uses_links() {
        let mut view = view().with_link(|page| format!("/cars?page={page}"));
        view.show_pagination(&[
            PageControl { page: 1, active: false },
            PageControl { page: 2, active: true },
        ]);
        assert!(view.pagination().contains(r#"href="&#x2F;cars?page=1""#));
        assert!(view.pagination().contains(r#"class="page-link active""#));
        assert_eq!(view.pagination().matches("page-link").count(), 2);
    }

    #[test]
    fn test_failed_card_is_reported_by_check() {
        let templates = Templates::from_sources(
            "{{ card.missing_field }}",
            "",
            "",
        )
        .expect("templates should compile");
        let mut view = HtmlView::new(templates);

        view.clear_display();
        view.show_card(Card::from_record(&Hotel::new("Inn", 10.0, 3.0)));
        assert!(view.display().is_empty());
        assert!(matches!(view.check(), Err(BookEasyError::Render(_))));

        // a new redraw starts clean
        view.clear_display();
        assert!(view.check().is_ok());
    }

    #[test]
    fn test_successful_redraw_checks_ok() {
        let mut view = view();
        view.clear_display();
        view.show_card(Card::from_record(&Hotel::new("Inn", 10.0, 3.0)));
        view.show_pagination(&[]);
        assert!(view.check().is_ok());
    }

    #[test]
    fn test_empty_pagination_clears_region() {
        let mut view = view();
        view.show_pagination(&[PageControl { page: 1, active: true }]);
        view.show_pagination(&[]);
        assert!(view.pagination().trim().is_empty());
    }
}
