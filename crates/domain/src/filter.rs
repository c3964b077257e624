//! Portfolio filter — category selection and the show/hide plan it implies.

/// Literal `data-filter` value that matches every item.
pub const ALL: &str = "all";

/// Category currently selected by the filter buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    /// Every item matches.
    #[default]
    All,
    /// Only items tagged with this category match.
    Category(String),
    /// The clicked button carried no `data-filter`; nothing matches.
    Unset,
}

impl FilterSelection {
    /// Build a selection from a button's `data-filter` attribute.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            None => Self::Unset,
            Some(ALL) => Self::All,
            Some(category) => Self::Category(category.to_string()),
        }
    }

    /// Whether an item with the given `data-category` is visible.
    ///
    /// Items without a category only show under [`All`](Self::All).
    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => category == Some(selected.as_str()),
            Self::Unset => false,
        }
    }

    /// The `data-filter` value that produces this selection.
    #[must_use]
    pub fn as_attribute(&self) -> Option<&str> {
        match self {
            Self::All => Some(ALL),
            Self::Category(category) => Some(category),
            Self::Unset => None,
        }
    }
}

/// Inline style phases a portfolio item goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStyle {
    /// Removed from layout immediately, no transition.
    Hidden,
    /// In layout but transparent and shrunk, ready to animate in.
    Entering,
    /// Fully visible.
    Shown,
}

impl ItemStyle {
    /// CSS property/value pairs to set on the item.
    #[must_use]
    pub fn declarations(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Hidden => &[("display", "none")],
            Self::Entering => &[
                ("display", "block"),
                ("opacity", "0"),
                ("transform", "scale(0.8)"),
            ],
            Self::Shown => &[("opacity", "1"), ("transform", "scale(1)")],
        }
    }
}

/// Session state of the filter.
///
/// Every application bumps `generation`, so deferred work scheduled by an
/// older click can tell it has been superseded.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    selected: FilterSelection,
    generation: u64,
}

impl FilterState {
    #[must_use]
    pub fn selected(&self) -> &FilterSelection {
        &self.selected
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Select a category and plan the resulting page changes.
    ///
    /// `buttons` and `items` hold the `data-filter` / `data-category`
    /// attributes in document order. `clicked` is the index of the button
    /// that triggered the change; without one, the first button whose filter
    /// equals the selection is marked active.
    pub fn select(
        &mut self,
        selection: FilterSelection,
        clicked: Option<usize>,
        buttons: &[Option<String>],
        items: &[Option<String>],
    ) -> FilterPlan {
        self.selected = selection;
        self.generation += 1;

        let active_button = clicked.filter(|&i| i < buttons.len()).or_else(|| {
            buttons
                .iter()
                .position(|filter| filter.as_deref() == self.selected.as_attribute())
        });

        let (revealed, hidden): (Vec<usize>, Vec<usize>) = (0..items.len())
            .partition(|&i| self.selected.matches(items[i].as_deref()));

        FilterPlan {
            generation: self.generation,
            button_count: buttons.len(),
            active_button,
            hidden,
            revealed,
        }
    }
}

/// Page changes produced by one filter application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPlan {
    pub generation: u64,
    pub button_count: usize,
    /// Button that ends up marked active.
    pub active_button: Option<usize>,
    /// Items to hide, applied first.
    pub hidden: Vec<usize>,
    /// Items to animate in, applied after every hide.
    pub revealed: Vec<usize>,
}
