//! Portfolio filter — applies a category selection to the buttons and items.
//!
//! An application runs in two passes: every non-matching item is hidden
//! first, then matching items are put in their entering style. The adapter
//! calls [`PortfolioFilter::settle`] after a short delay to finish the
//! reveal. A settle belonging to an older click is discarded.

use tracing::debug;

use folio_domain::filter::{FilterPlan, FilterSelection, FilterState, ItemStyle};

use crate::ports::FilterSurface;

/// Application service owning the filter state.
pub struct PortfolioFilter<D> {
    surface: D,
    state: FilterState,
    entering: Vec<usize>,
}

impl<D: FilterSurface> PortfolioFilter<D> {
    /// Create a filter in its page-load state (`all` selected).
    pub fn new(surface: D) -> Self {
        Self {
            surface,
            state: FilterState::default(),
            entering: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Handle a click on the filter button at `index`.
    pub fn click(&mut self, index: usize) -> FilterPlan {
        let buttons = self.surface.filter_buttons();
        let selection =
            FilterSelection::from_attribute(buttons.get(index).and_then(Option::as_deref));
        self.run(selection, Some(index), &buttons)
    }

    /// Apply a selection without a button click.
    pub fn apply(&mut self, selection: FilterSelection) -> FilterPlan {
        let buttons = self.surface.filter_buttons();
        self.run(selection, None, &buttons)
    }

    /// Finish the reveal started by the application numbered `generation`.
    ///
    /// Returns `false` (and changes nothing) when a newer application has
    /// happened since.
    pub fn settle(&mut self, generation: u64) -> bool {
        if !self.state.is_current(generation) {
            debug!(generation, "discarding stale filter settle");
            return false;
        }
        for index in std::mem::take(&mut self.entering) {
            self.surface.set_item_style(index, ItemStyle::Shown);
        }
        true
    }

    fn run(
        &mut self,
        selection: FilterSelection,
        clicked: Option<usize>,
        buttons: &[Option<String>],
    ) -> FilterPlan {
        let items = self.surface.portfolio_items();
        let plan = self.state.select(selection, clicked, buttons, &items);

        for index in 0..plan.button_count {
            self.surface.set_button_active(index, false);
        }
        if let Some(index) = plan.active_button {
            self.surface.set_button_active(index, true);
        }

        for &index in &plan.hidden {
            self.surface.set_item_style(index, ItemStyle::Hidden);
        }
        for &index in &plan.revealed {
            self.surface.set_item_style(index, ItemStyle::Entering);
        }
        self.entering.clone_from(&plan.revealed);

        debug!(
            selection = ?self.state.selected(),
            generation = plan.generation,
            shown = plan.revealed.len(),
            hidden = plan.hidden.len(),
            "portfolio filter applied"
        );
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeSurface {
        buttons: Vec<Option<String>>,
        active: RefCell<Vec<bool>>,
        items: Vec<Option<String>>,
        styles: RefCell<Vec<Vec<ItemStyle>>>,
    }

    impl FakeSurface {
        fn new(buttons: &[Option<&str>], items: &[Option<&str>]) -> Self {
            Self {
                buttons: buttons.iter().map(|b| b.map(str::to_string)).collect(),
                active: RefCell::new(vec![false; buttons.len()]),
                items: items.iter().map(|i| i.map(str::to_string)).collect(),
                styles: RefCell::new(vec![Vec::new(); items.len()]),
            }
        }

        fn last_style(&self, index: usize) -> Option<ItemStyle> {
            self.styles.borrow()[index].last().copied()
        }

        fn visible(&self, index: usize) -> bool {
            !matches!(self.last_style(index), Some(ItemStyle::Hidden))
        }

        fn active_count(&self) -> usize {
            self.active.borrow().iter().filter(|a| **a).count()
        }
    }

    impl FilterSurface for FakeSurface {
        fn filter_buttons(&self) -> Vec<Option<String>> {
            self.buttons.clone()
        }

        fn set_button_active(&self, index: usize, active: bool) {
            self.active.borrow_mut()[index] = active;
        }

        fn portfolio_items(&self) -> Vec<Option<String>> {
            self.items.clone()
        }

        fn set_item_style(&self, index: usize, style: ItemStyle) {
            self.styles.borrow_mut()[index].push(style);
        }
    }

    fn make_filter() -> PortfolioFilter<FakeSurface> {
        PortfolioFilter::new(FakeSurface::new(
            &[Some("all"), Some("web"), Some("security")],
            &[Some("web"), Some("security")],
        ))
    }

    #[test]
    fn should_start_with_all_selected() {
        let filter = make_filter();
        assert_eq!(filter.state().selected(), &FilterSelection::All);
    }

    #[test]
    fn should_show_only_selected_category_then_all() {
        let mut filter = make_filter();

        let plan = filter.click(2);
        filter.settle(plan.generation);
        assert!(!filter.surface().visible(0));
        assert!(filter.surface().visible(1));

        let plan = filter.click(0);
        filter.settle(plan.generation);
        assert!(filter.surface().visible(0));
        assert!(filter.surface().visible(1));
        assert_eq!(filter.surface().last_style(0), Some(ItemStyle::Shown));
    }

    #[test]
    fn should_hide_before_revealing() {
        let mut filter = make_filter();
        filter.click(1);
        assert_eq!(
            filter.surface().styles.borrow()[1],
            vec![ItemStyle::Hidden]
        );
        assert_eq!(
            filter.surface().styles.borrow()[0],
            vec![ItemStyle::Entering]
        );
    }

    #[test]
    fn should_keep_exactly_one_active_button() {
        let mut filter = make_filter();
        for index in [1, 2, 2, 0, 1] {
            filter.click(index);
            assert_eq!(filter.surface().active_count(), 1);
            assert!(filter.surface().active.borrow()[index]);
        }
    }

    #[test]
    fn should_discard_stale_settle() {
        let mut filter = make_filter();
        let web = filter.click(1);
        let security = filter.click(2);

        assert!(!filter.settle(web.generation));
        assert_eq!(filter.surface().last_style(0), Some(ItemStyle::Hidden));

        assert!(filter.settle(security.generation));
        assert_eq!(filter.surface().last_style(1), Some(ItemStyle::Shown));
        assert_eq!(filter.surface().last_style(0), Some(ItemStyle::Hidden));
    }

    #[test]
    fn should_settle_only_once() {
        let mut filter = make_filter();
        let plan = filter.click(0);
        assert!(filter.settle(plan.generation));
        assert!(filter.settle(plan.generation));
        assert_eq!(
            filter.surface().styles.borrow()[0],
            vec![ItemStyle::Entering, ItemStyle::Shown]
        );
    }

    #[test]
    fn should_hide_everything_when_button_has_no_filter() {
        let mut filter = PortfolioFilter::new(FakeSurface::new(
            &[Some("all"), None],
            &[Some("web"), None],
        ));
        let plan = filter.click(1);
        assert_eq!(plan.hidden, vec![0, 1]);
        assert_eq!(filter.state().selected(), &FilterSelection::Unset);
        assert_eq!(filter.surface().active_count(), 1);
    }

    #[test]
    fn should_hide_uncategorised_items_for_specific_category() {
        let mut filter = PortfolioFilter::new(FakeSurface::new(
            &[Some("all"), Some("web")],
            &[None, Some("web")],
        ));
        filter.click(1);
        assert!(!filter.surface().visible(0));
        filter.click(0);
        assert!(filter.surface().visible(0));
    }

    #[test]
    fn should_mark_matching_button_on_programmatic_apply() {
        let mut filter = make_filter();
        filter.apply(FilterSelection::Category("security".to_string()));
        assert!(filter.surface().active.borrow()[2]);
        assert_eq!(filter.surface().active_count(), 1);
    }
}
