//! Scroll effects — navbar shadow, back-to-top, skill bars and reveal.

use tracing::debug;

use folio_domain::scroll::{
    OnceLatch, back_to_top_visible, entered_viewport, navbar_scrolled, reveal_due, skill_width,
};

use crate::config::ScrollConfig;
use crate::ports::ScrollSurface;

/// What a scroll event asks the adapter to do next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOutcome {
    /// Targets revealed by this event.
    pub revealed: usize,
    /// The skills section just came into view; fill the bars after the
    /// configured delay.
    pub skills_due: bool,
}

/// Application service for scroll-driven page chrome.
pub struct ScrollEffects<D> {
    surface: D,
    config: ScrollConfig,
    skills: OnceLatch,
}

impl<D: ScrollSurface> ScrollEffects<D> {
    pub fn new(surface: D, config: ScrollConfig) -> Self {
        Self {
            surface,
            config,
            skills: OnceLatch::default(),
        }
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Handle one scroll event.
    pub fn on_scroll(&mut self, scroll_y: f64) -> ScrollOutcome {
        self.update_chrome(scroll_y);
        ScrollOutcome {
            revealed: self.reveal_visible(),
            skills_due: self.check_skills(),
        }
    }

    /// Navbar shadow and back-to-top visibility.
    pub fn update_chrome(&self, scroll_y: f64) {
        self.surface
            .set_navbar_scrolled(navbar_scrolled(scroll_y, self.config.navbar_threshold));
        self.surface.set_back_to_top_visible(back_to_top_visible(
            scroll_y,
            self.config.back_to_top_threshold,
        ));
    }

    /// Whether the skill bars should start filling. `true` at most once.
    pub fn check_skills(&mut self) -> bool {
        if self.skills.has_fired() {
            return false;
        }
        let Some(top) = self.surface.skills_top() else {
            return false;
        };
        let viewport = self.surface.viewport_height();
        entered_viewport(top, viewport, self.config.skills_viewport_fraction) && self.skills.fire()
    }

    /// Set every valid skill bar to its target width. Returns how many were set.
    pub fn fill_skills(&self) -> usize {
        let mut filled = 0;
        for (index, data_width) in self.surface.skill_widths().iter().enumerate() {
            match skill_width(data_width.as_deref()) {
                Some(width) => {
                    self.surface.set_skill_width(index, &width);
                    filled += 1;
                }
                None => debug!(index, value = ?data_width, "skipping skill bar without valid width"),
            }
        }
        filled
    }

    /// Reveal every target that has scrolled far enough into view.
    ///
    /// Revealed targets stay revealed.
    pub fn reveal_visible(&self) -> usize {
        let viewport = self.surface.viewport_height();
        let mut revealed = 0;
        for (index, target) in self.surface.reveal_targets().iter().enumerate() {
            if !target.revealed && reveal_due(target.top, viewport, self.config.reveal_offset) {
                self.surface.mark_revealed(index);
                revealed += 1;
            }
        }
        revealed
    }
}
