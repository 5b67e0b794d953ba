//! Stand-alone UI widgets: the star rating and the details toggle
//!
//! Neither widget is coupled to a presenter; both are plain state machines
//! whose state a view reads back after each event.

/// Number of stars in the rating control
pub const MAX_STARS: u8 = 5;

/// Five-star rating picker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarRating {
    value: u8,
}

impl StarRating {
    pub fn new() -> Self {
        Self::default()
    }

    /// A star was clicked
    ///
    /// Values are clamped to `1..=5`, the only stars the control offers.
    pub fn select(&mut self, value: u8) {
        self.value = value.clamp(1, MAX_STARS);
    }

    /// Selected value, 0 before any click
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Whether star `index` (1-based) is highlighted
    pub fn is_selected(&self, index: u8) -> bool {
        index >= 1 && index <= self.value
    }

    /// Selection state of every star, first star first
    pub fn stars(&self) -> [bool; MAX_STARS as usize] {
        std::array::from_fn(|i| self.is_selected(i as u8 + 1))
    }

    /// Text next to the stars, e.g. "4/5"
    pub fn label(&self) -> String {
        format!("{}/{}", self.value, MAX_STARS)
    }
}

/// Toggle button state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleState {
    #[default]
    Collapsed,
    Expanded,
}

/// "Show details" button controlling a sibling content block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailsToggle {
    state: ToggleState,
}

impl DetailsToggle {
    pub const SHOW_LABEL: &'static str = "Show details";
    pub const HIDE_LABEL: &'static str = "Hide details";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn click(&mut self) -> ToggleState {
        self.state = match self.state {
            ToggleState::Collapsed => ToggleState::Expanded,
            ToggleState::Expanded => ToggleState::Collapsed,
        };
        self.state
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_content_visible(&self) -> bool {
        self.state == ToggleState::Expanded
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            ToggleState::Collapsed => Self::SHOW_LABEL,
            ToggleState::Expanded => Self::HIDE_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_rating_initial_state() {
        let rating = StarRating::new();
        assert_eq!(rating.value(), 0);
        assert_eq!(rating.label(), "0/5");
        assert_eq!(rating.stars(), [false; 5]);
    }

    #[test]
    fn test_select_highlights_up_to_value() {
        let mut rating = StarRating::new();
        rating.select(3);
        assert_eq!(rating.stars(), [true, true, true, false, false]);
        assert_eq!(rating.label(), "3/5");
    }

    #[test]
    fn test_lower_selection_clears_higher_stars() {
        let mut rating = StarRating::new();
        rating.select(5);
        rating.select(2);
        assert_eq!(rating.stars(), [true, true, false, false, false]);
        assert!(!rating.is_selected(3));
    }

    #[test]
    fn test_select_clamps_out_of_range() {
        let mut rating = StarRating::new();
        rating.select(9);
        assert_eq!(rating.value(), 5);
        rating.select(0);
        assert_eq!(rating.value(), 1);
    }

    #[test]
    fn test_details_toggle_cycles() {
        let mut toggle = DetailsToggle::new();
        assert!(!toggle.is_content_visible());
        assert_eq!(toggle.button_label(), "Show details");

        assert_eq!(toggle.click(), ToggleState::Expanded);
        assert!(toggle.is_content_visible());
        assert_eq!(toggle.button_label(), "Hide details");

        assert_eq!(toggle.click(), ToggleState::Collapsed);
        assert_eq!(toggle.button_label(), "Show details");
    }
}
