//! Navigation — active section tracking, anchor offsets and the mobile menu.

/// A page section as seen from the navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Offset of the section's top edge from the document top, in pixels.
    pub top: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Id of the section currently in view.
///
/// A section qualifies once `scroll_y` reaches its top minus `lookahead`.
/// Sections are scanned in document order and the last qualifying one wins.
#[must_use]
pub fn active_section(sections: &[Section], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - lookahead)
        .map(|section| section.id.as_str())
}

/// Section id an in-page link points to (`"#about"` → `"about"`).
///
/// Returns `None` for a bare `#` and for links that are not fragments.
#[must_use]
pub fn link_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that brings a target below the fixed navbar.
#[must_use]
pub fn anchor_scroll_top(target_top: f64, navbar_offset: f64) -> f64 {
    target_top - navbar_offset
}

/// Open/closed state of the collapsible mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("home", 0.0),
            Section::new("about", 800.0),
            Section::new("portfolio", 1600.0),
            Section::new("contact", 2400.0),
        ]
    }

    #[test]
    fn should_activate_first_section_at_top() {
        assert_eq!(active_section(&sections(), 0.0, 200.0), Some("home"));
    }

    #[test]
    fn should_activate_section_within_lookahead() {
        assert_eq!(active_section(&sections(), 600.0, 200.0), Some("about"));
        assert_eq!(active_section(&sections(), 599.0, 200.0), Some("home"));
    }

    #[test]
    fn should_pick_lowest_qualifying_section() {
        assert_eq!(active_section(&sections(), 5000.0, 200.0), Some("contact"));
    }

    #[test]
    fn should_return_none_when_no_section_qualifies() {
        let sections = vec![Section::new("about", 900.0)];
        assert_eq!(active_section(&sections, 0.0, 200.0), None);
    }

    #[test]
    fn should_break_ties_by_document_order() {
        let sections = vec![Section::new("a", 100.0), Section::new("b", 100.0)];
        assert_eq!(active_section(&sections, 0.0, 200.0), Some("b"));
    }

    #[test]
    fn should_strip_fragment_marker() {
        assert_eq!(link_target("#about"), Some("about"));
    }

    #[test]
    fn should_reject_bare_fragment_and_external_links() {
        assert_eq!(link_target("#"), None);
        assert_eq!(link_target("https://example.com"), None);
    }

    #[test]
    fn should_offset_anchor_by_navbar_height() {
        assert!((anchor_scroll_top(1600.0, 80.0) - 1520.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_toggle_and_close_menu() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
