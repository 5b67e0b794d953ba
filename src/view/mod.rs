//! Display-region bindings for presenters
//!
//! A presenter never builds markup itself. It maps each record to a [`Card`]
//! view-model and hands cards and [`PageControl`]s to a [`ListView`], which
//! owns the display region and the pagination region. Every render fully
//! replaces both regions.

pub mod html;

pub use html::HtmlView;

use crate::core::Record;
use serde::Serialize;

/// View-model of one record on screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    /// Record kind ("hotel", "car")
    pub kind: &'static str,
    pub title: String,
    pub price: f64,
    pub rating: f64,
    /// Extra labelled facts (category, brand, ...)
    pub facts: Vec<Fact>,
}

/// A labelled value shown on a card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

impl Card {
    pub fn from_record<R: Record>(record: &R) -> Self {
        Self {
            kind: R::KIND,
            title: record.label().to_string(),
            price: record.price(),
            rating: record.rating(),
            facts: record
                .facts()
                .into_iter()
                .map(|(label, value)| Fact { label, value })
                .collect(),
        }
    }
}

/// One pagination button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageControl {
    pub page: usize,
    /// Matches the rendered page
    pub active: bool,
}

/// Owner of a display region and its pagination region
pub trait ListView {
    /// Empty the display region
    fn clear_display(&mut self);

    /// Append one card to the display region
    fn show_card(&mut self, card: Card);

    /// Replace the pagination region; an empty slice clears it
    fn show_pagination(&mut self, controls: &[PageControl]);
}

/// Headless view keeping the regions in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    pub cards: Vec<Card>,
    pub controls: Vec<PageControl>,
    /// Number of full redraws so far
    pub redraws: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.title.as_str()).collect()
    }

    pub fn active_page(&self) -> Option<usize> {
        self.controls.iter().find(|c| c.active).map(|c| c.page)
    }
}

impl ListView for MemoryView {
    fn clear_display(&mut self) {
        self.cards.clear();
        self.redraws += 1;
    }

    fn show_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    fn show_pagination(&mut self, controls: &[PageControl]) {
        self.controls = controls.to_vec();
    }
}
