//! Typewriter effect — types the hero heading one character per tick.

use tracing::debug;

use folio_domain::error::{FolioError, MissingElementError};
use folio_domain::typewriter::Typewriter;

use crate::ports::HeroSurface;

/// Application service animating the hero heading.
pub struct TypewriterEffect<D> {
    surface: D,
    selector: String,
    writer: Option<Typewriter>,
}

impl<D: HeroSurface> TypewriterEffect<D> {
    /// `selector` only names the heading in errors; the surface locates it.
    pub fn new(surface: D, selector: impl Into<String>) -> Self {
        Self {
            surface,
            selector: selector.into(),
            writer: None,
        }
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.writer.is_some()
    }

    /// Capture the heading text and clear it.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::MissingElement`] when there is no heading.
    pub fn start(&mut self) -> Result<(), FolioError> {
        let text = self
            .surface
            .heading_text()
            .ok_or_else(|| MissingElementError::new(self.selector.clone()))?;
        self.surface.set_heading_text("");
        debug!(chars = text.chars().count(), "typewriter started");
        self.writer = Some(Typewriter::new(text));
        Ok(())
    }

    /// Type the next character. Returns `false` once the text is complete.
    pub fn tick(&mut self) -> bool {
        let Some(writer) = self.writer.as_mut() else {
            return false;
        };
        if let Some(visible) = writer.advance() {
            self.surface.set_heading_text(visible);
            true
        } else {
            self.writer = None;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeHero {
        text: RefCell<Option<String>>,
    }

    impl FakeHero {
        fn with(text: Option<&str>) -> Self {
            Self {
                text: RefCell::new(text.map(str::to_string)),
            }
        }
    }

    impl HeroSurface for FakeHero {
        fn heading_text(&self) -> Option<String> {
            self.text.borrow().clone()
        }

        fn set_heading_text(&self, text: &str) {
            *self.text.borrow_mut() = Some(text.to_string());
        }
    }

    #[test]
    fn should_clear_heading_on_start() {
        let mut effect = TypewriterEffect::new(FakeHero::with(Some("Hello")), ".hero h1");
        effect.start().unwrap();
        assert_eq!(effect.surface().heading_text().as_deref(), Some(""));
        assert!(effect.is_running());
    }

    #[test]
    fn should_type_full_text_then_stop() {
        let mut effect = TypewriterEffect::new(FakeHero::with(Some("Hi!")), ".hero h1");
        effect.start().unwrap();

        let mut ticks = 0;
        while effect.tick() {
            ticks += 1;
        }

        assert_eq!(ticks, 3);
        assert_eq!(effect.surface().heading_text().as_deref(), Some("Hi!"));
        assert!(!effect.is_running());
        assert!(!effect.tick());
    }

    #[test]
    fn should_fail_start_without_heading() {
        let mut effect = TypewriterEffect::new(FakeHero::with(None), "#headline");
        let err = effect.start().unwrap_err();
        assert!(matches!(err, FolioError::MissingElement(e) if e.selector == "#headline"));
    }

    #[test]
    fn should_finish_immediately_for_empty_heading() {
        let mut effect = TypewriterEffect::new(FakeHero::with(Some("")), ".hero h1");
        effect.start().unwrap();
        assert!(!effect.tick());
    }
}
