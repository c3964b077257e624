//! Typewriter — reveals a text one character at a time.

/// Progressive reveal of a fixed text.
///
/// Characters are Unicode scalar values, so multi-byte text never splits
/// mid-character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    /// Full text being typed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Part of the text typed so far.
    #[must_use]
    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.shown == self.text.len()
    }

    /// Type one more character and return the new visible prefix.
    ///
    /// Returns `None` once the whole text is visible.
    pub fn advance(&mut self) -> Option<&str> {
        let next = self.text[self.shown..].chars().next()?;
        self.shown += next.len_utf8();
        Some(self.visible())
    }
}
