//! Scroll-driven effects — navbar shadow, back-to-top, skill bars, reveal.

/// Whether the navbar carries its `scrolled` shadow.
#[must_use]
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Whether the back-to-top button is shown.
#[must_use]
pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Whether an element whose viewport-relative top is `top` has entered the
/// upper `fraction` of the viewport.
#[must_use]
pub fn entered_viewport(top: f64, viewport_height: f64, fraction: f64) -> bool {
    top < viewport_height * fraction
}

/// Whether a reveal target is at least `offset` pixels inside the viewport.
#[must_use]
pub fn reveal_due(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

/// CSS width for a skill bar from its `data-width` percentage.
///
/// Returns `None` unless the attribute is a number within `0..=100`.
#[must_use]
pub fn skill_width(data_width: Option<&str>) -> Option<String> {
    let value: f64 = data_width?.trim().parse().ok()?;
    // `abs` folds `-0` into `0`.
    (0.0..=100.0)
        .contains(&value)
        .then(|| format!("{}%", value.abs()))
}

/// Latch that lets a one-shot effect fire a single time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnceLatch {
    fired: bool,
}

impl OnceLatch {
    /// Returns `true` the first time only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    #[must_use]
    pub fn has_fired(self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_add_navbar_shadow_past_threshold_only() {
        assert!(!navbar_scrolled(50.0, 50.0));
        assert!(navbar_scrolled(51.0, 50.0));
    }

    #[test]
    fn should_show_back_to_top_past_threshold_only() {
        assert!(!back_to_top_visible(500.0, 500.0));
        assert!(back_to_top_visible(500.5, 500.0));
    }

    #[test]
    fn should_detect_entry_into_upper_viewport() {
        assert!(entered_viewport(599.0, 800.0, 0.75));
        assert!(!entered_viewport(600.0, 800.0, 0.75));
    }

    #[test]
    fn should_reveal_once_offset_inside_viewport() {
        assert!(reveal_due(699.0, 800.0, 100.0));
        assert!(!reveal_due(700.0, 800.0, 100.0));
    }

    #[test]
    fn should_format_skill_width_as_percentage() {
        assert_eq!(skill_width(Some("85")), Some("85%".to_string()));
        assert_eq!(skill_width(Some(" 72.5 ")), Some("72.5%".to_string()));
    }

    #[test]
    fn should_normalise_skill_width_notation() {
        assert_eq!(skill_width(Some("1e2")), Some("100%".to_string()));
        assert_eq!(skill_width(Some("+50")), Some("50%".to_string()));
        assert_eq!(skill_width(Some("050.0")), Some("50%".to_string()));
        assert_eq!(skill_width(Some("-0")), Some("0%".to_string()));
    }

    #[test]
    fn should_skip_invalid_skill_width() {
        assert_eq!(skill_width(None), None);
        assert_eq!(skill_width(Some("wide")), None);
        assert_eq!(skill_width(Some("120")), None);
        assert_eq!(skill_width(Some("-5")), None);
    }

    #[test]
    fn should_fire_latch_once() {
        let mut latch = OnceLatch::default();
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(latch.has_fired());
    }
}
