//! The filter → sort → paginate → render pipeline
//!
//! A [`ListPresenter`] owns one record collection, the active
//! [`FilterCriteria`] and [`SortKey`], the [`PageState`], and the view it
//! draws into. Changing criteria or sort never renders by itself; callers run
//! [`ListPresenter::render`] after every change, and each render recomputes
//! the whole pipeline and fully redraws both regions.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut presenter = ListPresenter::new(cars(), 3, MemoryView::new());
//! presenter.set_filter(FilterCriteria::new().equals("category", "SUV"));
//! presenter.set_sort(SortKey::PriceAsc);
//! let outcome = presenter.render(None);
//! assert_eq!(outcome.page, 1);
//! ```

use crate::core::{FilterCriteria, PagePolicy, PageState, PaginationMeta, Record, SortKey};
use crate::view::{Card, ListView, PageControl};
use std::sync::Arc;

/// Result of the pure part of the pipeline for one page
#[derive(Debug, Clone)]
pub struct PageSlice<'a, R> {
    /// Records on the page, in display order
    pub records: Vec<&'a R>,
    pub meta: PaginationMeta,
}

/// Summary of one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOutcome {
    pub page: usize,
    pub total_pages: usize,
    /// Records left after filtering
    pub total_items: usize,
    /// Cards drawn for this page
    pub shown: usize,
}

/// Pagination controls for a result set
///
/// No controls at all when everything fits on one page.
pub fn page_controls(page: usize, total_pages: usize) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }
    (1..=total_pages)
        .map(|p| PageControl {
            page: p,
            active: p == page,
        })
        .collect()
}

/// Presenter for one list/region pair
pub struct ListPresenter<R: Record, V: ListView> {
    records: Arc<[R]>,
    criteria: FilterCriteria,
    sort: SortKey,
    state: PageState,
    policy: PagePolicy,
    view: V,
}

impl<R: Record, V: ListView> ListPresenter<R, V> {
    /// Create a presenter over a fixed collection
    pub fn new(records: impl Into<Arc<[R]>>, page_size: usize, view: V) -> Self {
        Self {
            records: records.into(),
            criteria: FilterCriteria::new(),
            sort: SortKey::None,
            state: PageState::new(page_size),
            policy: PagePolicy::default(),
            view,
        }
    }

    /// Choose what a filter change does to the current page
    pub fn with_page_policy(mut self, policy: PagePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the active filter; call `render` afterwards
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        tracing::debug!(kind = R::KIND, ?criteria, "filter changed");
        self.criteria = criteria;
        if self.policy == PagePolicy::ResetToFirst {
            self.state.reset();
        }
    }

    /// Replace the active sort key; call `render` afterwards
    pub fn set_sort(&mut self, key: SortKey) {
        tracing::debug!(kind = R::KIND, sort = %key, "sort changed");
        self.sort = key;
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Filter, sort and slice without touching the view
    pub fn slice(&self, page: usize) -> PageSlice<'_, R> {
        let mut filtered = self.criteria.apply(&self.records);
        self.sort.sort(&mut filtered);

        let total = filtered.len();
        let (start, end) = self.state.bounds(page, total);
        let records = filtered[start..end].to_vec();

        PageSlice {
            records,
            meta: PaginationMeta::new(page, self.state.page_size(), total),
        }
    }

    /// Run the full pipeline and redraw the view
    ///
    /// With no page given, the persisted current page is used (clamped into
    /// range when the result shrank under [`PagePolicy::Preserve`]). A page
    /// past the end draws an empty region; it is not an error.
    pub fn render(&mut self, page: Option<usize>) -> RenderOutcome {
        let page = match page {
            Some(p) => p.max(1),
            None => {
                let total = self.criteria.apply(&self.records).len();
                self.state.clamp_to(self.state.total_pages(total));
                self.state.current_page()
            }
        };
        self.state.go_to(page);

        // Collect cards first so the borrow of `records` ends before drawing.
        let (cards, meta) = {
            let slice = self.slice(page);
            let cards: Vec<Card> = slice.records.iter().map(|r| Card::from_record(*r)).collect();
            (cards, slice.meta)
        };
        let shown = cards.len();

        self.view.clear_display();
        for card in cards {
            self.view.show_card(card);
        }
        self.view
            .show_pagination(&page_controls(page, meta.total_pages));

        tracing::debug!(
            kind = R::KIND,
            page,
            total_pages = meta.total_pages,
            total_items = meta.total,
            shown,
            "rendered list"
        );

        RenderOutcome {
            page,
            total_pages: meta.total_pages,
            total_items: meta.total,
            shown,
        }
    }

    /// Activate a pagination control
    pub fn activate(&mut self, control: PageControl) -> RenderOutcome {
        self.render(Some(control.page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Hotel, cars};
    use crate::view::MemoryView;

    fn reference_hotels() -> Vec<Hotel> {
        vec![
            Hotel::new("Luxury Inn", 200.0, 4.5),
            Hotel::new("Economy Stay", 50.0, 3.5),
            Hotel::new("Comfort Suites", 100.0, 4.0),
        ]
    }

    #[test]
    fn test_price_sort_reference_example() {
        let mut presenter = ListPresenter::new(reference_hotels(), 10, MemoryView::new());
        presenter.set_sort(SortKey::PriceAsc);
        presenter.render(None);
        assert_eq!(
            presenter.view().titles(),
            vec!["Economy Stay", "Comfort Suites", "Luxury Inn"]
        );
    }

    #[test]
    fn test_single_page_has_no_controls() {
        let mut presenter = ListPresenter::new(reference_hotels(), 3, MemoryView::new());
        let outcome = presenter.render(None);
        assert_eq!(outcome.total_pages, 1);
        assert!(presenter.view().controls.is_empty());
    }

    #[test]
    fn test_controls_mark_rendered_page() {
        let mut presenter = ListPresenter::new(cars(), 3, MemoryView::new());
        presenter.render(Some(4));
        assert_eq!(presenter.view().controls.len(), 9);
        assert_eq!(presenter.view().active_page(), Some(4));
        assert_eq!(presenter.current_page(), 4);
    }

    #[test]
    fn test_activate_renders_that_page() {
        let mut presenter = ListPresenter::new(cars(), 3, MemoryView::new());
        presenter.render(None);
        let third = presenter.view().controls[2];
        let outcome = presenter.activate(third);
        assert_eq!(outcome.page, 3);
        assert_eq!(
            presenter.view().titles(),
            vec!["Rolls Royce Cullinan", "Mercedes G63", "Mercedes GLE53"]
        );
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let mut presenter = ListPresenter::new(cars(), 3, MemoryView::new());
        let outcome = presenter.render(Some(42));
        assert_eq!(outcome.shown, 0);
        assert!(presenter.view().cards.is_empty());
        assert_eq!(presenter.view().controls.len(), 9);
        assert_eq!(presenter.view().active_page(), None);
    }

    #[test]
    fn test_largest_page_number_is_empty() {
        let mut presenter = ListPresenter::new(cars(), 3, MemoryView::new());
        let outcome = presenter.render(Some(usize::MAX));
        assert_eq!(outcome.page, usize::MAX);
        assert_eq!(outcome.total_pages, 9);
        assert_eq!(outcome.shown, 0);
        assert!(presenter.view().cards.is_empty());

        let slice = presenter.slice(usize::MAX);
        assert!(slice.records.is_empty());
        assert!(!slice.meta.has_next);
    }

    #[test]
    fn test_empty_result_draws_nothing() {
        let mut presenter = ListPresenter::new(cars(), 3, MemoryView::new());
        presenter.set_filter(FilterCriteria::new().equals("category", "Boat"));
        let outcome = presenter.render(None);
        assert_eq!(outcome.total_items, 0);
        assert_eq!(outcome.total_pages, 0);
        assert!(presenter.view().cards.is_empty());
        assert!(presenter.view().controls.is_empty());
    }

    #[test]
    fn test_filter_change_resets_page_by_default() {
        let mut presenter = ListPresenter::new(cars(), 3, MemoryView::new());
        presenter.render(Some(3));
        presenter.set_filter(FilterCriteria::new().equals("category", "All Categories"));
        assert_eq!(presenter.render(None).page, 1);
    }

    #[test]
    fn test_preserve_policy_keeps_then_clamps_page() {
        let mut presenter = ListPresenter::new(cars(), 3, MemoryView::new())
            .with_page_policy(PagePolicy::Preserve);
        presenter.render(Some(3));

        presenter.set_filter(FilterCriteria::new().equals("category", "SUV"));
        assert_eq!(presenter.render(None).page, 3);

        presenter.set_filter(FilterCriteria::new().equals("category", "Sports"));
        let outcome = presenter.render(None);
        assert_eq!(outcome.total_pages, 2);
        assert_eq!(outcome.page, 2);
    }

    #[test]
    fn test_set_sort_does_not_render() {
        let mut presenter = ListPresenter::new(reference_hotels(), 3, MemoryView::new());
        presenter.set_sort(SortKey::NameAsc);
        presenter.set_filter(FilterCriteria::new().contains("name", "inn"));
        assert_eq!(presenter.view().redraws, 0);
        presenter.render(None);
        assert_eq!(presenter.view().redraws, 1);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let mut presenter = ListPresenter::new(cars(), 3, MemoryView::new());
        assert_eq!(presenter.render(Some(0)).page, 1);
    }
}
