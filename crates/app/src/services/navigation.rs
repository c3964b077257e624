//! Navigation controller — mobile menu, active link and anchor scrolling.

use tracing::debug;

use folio_domain::navigation::{MenuState, active_section, anchor_scroll_top, link_target};

use crate::config::ScrollConfig;
use crate::ports::NavigationSurface;

/// Application service for the navigation bar.
pub struct NavigationController<D> {
    surface: D,
    menu: MenuState,
    section_lookahead: f64,
    anchor_offset: f64,
    active: Option<String>,
}

impl<D: NavigationSurface> NavigationController<D> {
    pub fn new(surface: D, config: &ScrollConfig) -> Self {
        Self {
            surface,
            menu: MenuState::default(),
            section_lookahead: config.section_lookahead,
            anchor_offset: config.anchor_offset,
            active: None,
        }
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Id of the section highlighted by the last update.
    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Hamburger click: flip the menu open/closed.
    pub fn toggle_menu(&mut self) -> bool {
        let open = self.menu.toggle();
        self.surface.set_menu_open(open);
        open
    }

    /// Nav link click: close the menu.
    pub fn close_menu(&mut self) {
        self.menu.close();
        self.surface.set_menu_open(false);
    }

    /// Recompute the active section for `scroll_y` and highlight its link.
    ///
    /// Every link is rewritten on each call, so repeated scroll events
    /// converge on the same classes.
    pub fn update_active_link(&mut self, scroll_y: f64) -> Option<&str> {
        let sections = self.surface.sections();
        let active = active_section(&sections, scroll_y, self.section_lookahead).map(str::to_owned);

        for (index, href) in self.surface.nav_link_hrefs().iter().enumerate() {
            let target = href.as_deref().and_then(link_target);
            let is_active = target.is_some() && target == active.as_deref();
            self.surface.set_nav_link_active(index, is_active);
        }

        if active != self.active {
            debug!(section = ?active, "active section changed");
        }
        self.active = active;
        self.active.as_deref()
    }

    /// Scroll position for an in-page link, if it points at an existing element.
    #[must_use]
    pub fn anchor_target(&self, href: &str) -> Option<f64> {
        let id = link_target(href)?;
        let top = self.surface.element_top(id)?;
        Some(anchor_scroll_top(top, self.anchor_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::navigation::Section;
    use std::cell::{Cell, RefCell};

    struct FakeSurface {
        sections: Vec<Section>,
        links: Vec<Option<String>>,
        active: RefCell<Vec<bool>>,
        menu_open: Cell<bool>,
    }

    impl FakeSurface {
        fn new() -> Self {
            let links = vec![
                Some("#home".to_string()),
                Some("#about".to_string()),
                Some("#contact".to_string()),
                None,
            ];
            Self {
                sections: vec![
                    Section::new("home", 0.0),
                    Section::new("about", 900.0),
                    Section::new("contact", 1800.0),
                ],
                active: RefCell::new(vec![false; links.len()]),
                links,
                menu_open: Cell::new(false),
            }
        }

        fn active_links(&self) -> Vec<usize> {
            self.active
                .borrow()
                .iter()
                .enumerate()
                .filter_map(|(i, a)| a.then_some(i))
                .collect()
        }
    }

    impl NavigationSurface for FakeSurface {
        fn sections(&self) -> Vec<Section> {
            self.sections.clone()
        }

        fn nav_link_hrefs(&self) -> Vec<Option<String>> {
            self.links.clone()
        }

        fn set_nav_link_active(&self, index: usize, active: bool) {
            self.active.borrow_mut()[index] = active;
        }

        fn set_menu_open(&self, open: bool) {
            self.menu_open.set(open);
        }

        fn element_top(&self, id: &str) -> Option<f64> {
            self.sections.iter().find(|s| s.id == id).map(|s| s.top)
        }
    }

    fn make_controller() -> NavigationController<FakeSurface> {
        NavigationController::new(FakeSurface::new(), &ScrollConfig::default())
    }

    #[test]
    fn should_highlight_link_of_section_in_view() {
        let mut nav = make_controller();
        assert_eq!(nav.update_active_link(750.0), Some("about"));
        assert_eq!(nav.surface().active_links(), vec![1]);
    }

    #[test]
    fn should_move_highlight_when_scrolling_further() {
        let mut nav = make_controller();
        nav.update_active_link(750.0);
        nav.update_active_link(1700.0);
        assert_eq!(nav.surface().active_links(), vec![2]);
        assert_eq!(nav.active_section(), Some("contact"));
    }

    #[test]
    fn should_clear_links_when_no_section_qualifies() {
        let mut surface = FakeSurface::new();
        surface.sections.remove(0);
        let mut nav = NavigationController::new(surface, &ScrollConfig::default());
        assert_eq!(nav.update_active_link(0.0), None);
        assert!(nav.surface().active_links().is_empty());
    }

    #[test]
    fn should_converge_under_repeated_scroll_events() {
        let mut nav = make_controller();
        for _ in 0..3 {
            nav.update_active_link(0.0);
        }
        assert_eq!(nav.surface().active_links(), vec![0]);
    }

    #[test]
    fn should_toggle_and_close_menu() {
        let mut nav = make_controller();
        assert!(nav.toggle_menu());
        assert!(nav.surface().menu_open.get());
        nav.close_menu();
        assert!(!nav.is_menu_open());
        assert!(!nav.surface().menu_open.get());
        assert!(nav.toggle_menu());
        assert!(!nav.toggle_menu());
    }

    #[test]
    fn should_offset_anchor_target_by_navbar() {
        let nav = make_controller();
        let top = nav.anchor_target("#contact").unwrap();
        assert!((top - 1720.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_ignore_bare_and_unknown_anchors() {
        let nav = make_controller();
        assert_eq!(nav.anchor_target("#"), None);
        assert_eq!(nav.anchor_target("#missing"), None);
    }
}
