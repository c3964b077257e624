//! In-memory page implementing every page port.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use tracing::trace;

use folio_app::ports::page::RevealTarget;
use folio_app::ports::{
    ConsoleSurface, ContactSurface, FilterSurface, HeroSurface, NavigationSurface, ScrollSurface,
    ThemeSurface,
};
use folio_domain::contact::FIELD_IDS;
use folio_domain::error::{FolioError, MissingElementError};
use folio_domain::filter::ItemStyle;
use folio_domain::navigation::Section;

#[derive(Debug, Clone)]
struct Toggle {
    checked: bool,
}

#[derive(Debug, Clone)]
struct Button {
    filter: Option<String>,
    active: bool,
}

#[derive(Debug, Clone)]
struct Item {
    category: Option<String>,
    style: Option<ItemStyle>,
}

#[derive(Debug, Clone)]
struct Link {
    href: Option<String>,
    active: bool,
}

#[derive(Debug, Clone)]
struct SkillBar {
    data_width: Option<String>,
    width: Option<String>,
}

#[derive(Debug, Clone)]
struct Reveal {
    /// Document offset.
    top: f64,
    revealed: bool,
}

#[derive(Debug)]
struct PageState {
    root_classes: BTreeSet<String>,
    has_head: bool,
    styles: Vec<(String, String)>,
    toggle: Option<Toggle>,
    icon: Option<String>,
    buttons: Vec<Button>,
    items: Vec<Item>,
    sections: Vec<Section>,
    links: Vec<Link>,
    menu_open: Option<bool>,
    navbar_scrolled: bool,
    back_to_top_visible: bool,
    scroll_y: f64,
    viewport_height: f64,
    skills_top: Option<f64>,
    skill_bars: Vec<SkillBar>,
    reveals: Vec<Reveal>,
    heading: Option<String>,
    form: Option<BTreeMap<String, String>>,
    alerts: Vec<String>,
    console: Vec<(String, String)>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            root_classes: BTreeSet::new(),
            has_head: true,
            styles: Vec::new(),
            toggle: None,
            icon: None,
            buttons: Vec::new(),
            items: Vec::new(),
            sections: Vec::new(),
            links: Vec::new(),
            menu_open: None,
            navbar_scrolled: false,
            back_to_top_visible: false,
            scroll_y: 0.0,
            viewport_height: 800.0,
            skills_top: None,
            skill_bars: Vec::new(),
            reveals: Vec::new(),
            heading: None,
            form: None,
            alerts: Vec::new(),
            console: Vec::new(),
        }
    }
}

/// Shared handle to an in-memory page.
///
/// Clones observe the same page, so a test can keep one handle for
/// assertions while the controllers own the others. Starts empty apart
/// from a `<head>` and an 800 px viewport; use the `with_*` builders or
/// [`VirtualPage::portfolio`] to populate it.
#[derive(Debug, Clone, Default)]
pub struct VirtualPage {
    inner: Rc<RefCell<PageState>>,
}

impl VirtualPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A one-page portfolio: five sections, nav links, theme toggle,
    /// filterable projects, skill bars, reveal targets, hero and contact form.
    #[must_use]
    pub fn portfolio() -> Self {
        Self::new()
            .with_theme_toggle()
            .with_sections(&[
                ("home", 0.0),
                ("about", 900.0),
                ("skills", 1800.0),
                ("portfolio", 2700.0),
                ("contact", 3600.0),
            ])
            .with_nav_links(&[
                Some("#home"),
                Some("#about"),
                Some("#skills"),
                Some("#portfolio"),
                Some("#contact"),
            ])
            .with_menu()
            .with_filter_buttons(&[Some("all"), Some("web"), Some("security"), Some("tools")])
            .with_items(&[Some("web"), Some("security"), Some("tools"), Some("web")])
            .with_skills(1900.0, &[Some("90"), Some("75"), Some("60")])
            .with_reveal_targets(&[900.0, 1800.0, 2700.0])
            .with_heading("Hi, I'm a security engineer")
            .with_contact_form()
    }

    fn with(self, f: impl FnOnce(&mut PageState)) -> Self {
        f(&mut self.inner.borrow_mut());
        self
    }

    #[must_use]
    pub fn without_head(self) -> Self {
        self.with(|s| s.has_head = false)
    }

    /// Theme toggle checkbox and its icon.
    #[must_use]
    pub fn with_theme_toggle(self) -> Self {
        self.with(|s| {
            s.toggle = Some(Toggle { checked: false });
            s.icon = Some(String::new());
        })
    }

    /// Sections as `(id, document offset)`.
    #[must_use]
    pub fn with_sections(self, sections: &[(&str, f64)]) -> Self {
        self.with(|s| {
            s.sections = sections
                .iter()
                .map(|&(id, top)| Section::new(id, top))
                .collect();
        })
    }

    #[must_use]
    pub fn with_nav_links(self, hrefs: &[Option<&str>]) -> Self {
        self.with(|s| {
            s.links = hrefs
                .iter()
                .map(|href| Link {
                    href: href.map(str::to_string),
                    active: false,
                })
                .collect();
        })
    }

    /// Hamburger and menu list.
    #[must_use]
    pub fn with_menu(self) -> Self {
        self.with(|s| s.menu_open = Some(false))
    }

    /// Filter buttons by `data-filter`.
    #[must_use]
    pub fn with_filter_buttons(self, filters: &[Option<&str>]) -> Self {
        self.with(|s| {
            s.buttons = filters
                .iter()
                .map(|filter| Button {
                    filter: filter.map(str::to_string),
                    active: false,
                })
                .collect();
            if let Some(first) = s.buttons.first_mut() {
                first.active = true;
            }
        })
    }

    /// Portfolio items by `data-category`.
    #[must_use]
    pub fn with_items(self, categories: &[Option<&str>]) -> Self {
        self.with(|s| {
            s.items = categories
                .iter()
                .map(|category| Item {
                    category: category.map(str::to_string),
                    style: None,
                })
                .collect();
        })
    }

    /// Skills container at document offset `top` and bars by `data-width`.
    #[must_use]
    pub fn with_skills(self, top: f64, widths: &[Option<&str>]) -> Self {
        self.with(|s| {
            s.skills_top = Some(top);
            s.skill_bars = widths
                .iter()
                .map(|w| SkillBar {
                    data_width: w.map(str::to_string),
                    width: None,
                })
                .collect();
        })
    }

    /// `[data-aos]` elements at these document offsets.
    #[must_use]
    pub fn with_reveal_targets(self, tops: &[f64]) -> Self {
        self.with(|s| {
            s.reveals = tops
                .iter()
                .map(|&top| Reveal {
                    top,
                    revealed: false,
                })
                .collect();
        })
    }

    #[must_use]
    pub fn with_heading(self, text: &str) -> Self {
        let text = text.to_string();
        self.with(|s| s.heading = Some(text))
    }

    /// Contact form with its four empty fields.
    #[must_use]
    pub fn with_contact_form(self) -> Self {
        self.with(|s| {
            s.form = Some(
                FIELD_IDS
                    .into_iter()
                    .map(|id| (id.to_string(), String::new()))
                    .collect(),
            );
        })
    }

    #[must_use]
    pub fn with_viewport_height(self, height: f64) -> Self {
        self.with(|s| s.viewport_height = height)
    }

    /// Move the window; the caller forwards the scroll event.
    pub fn scroll_to(&self, y: f64) {
        self.inner.borrow_mut().scroll_y = y;
    }

    /// Type into a form field. Ignored without a form.
    pub fn fill_field(&self, id: &str, value: &str) {
        if let Some(form) = self.inner.borrow_mut().form.as_mut() {
            form.insert(id.to_string(), value.to_string());
        }
    }

    #[must_use]
    pub fn root_classes(&self) -> Vec<String> {
        self.inner.borrow().root_classes.iter().cloned().collect()
    }

    #[must_use]
    pub fn toggle_checked(&self) -> Option<bool> {
        self.inner.borrow().toggle.as_ref().map(|t| t.checked)
    }

    #[must_use]
    pub fn icon_class(&self) -> Option<String> {
        self.inner.borrow().icon.clone()
    }

    /// Ids of the injected stylesheets, in insertion order.
    #[must_use]
    pub fn style_ids(&self) -> Vec<String> {
        self.inner
            .borrow()
            .styles
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }

    #[must_use]
    pub fn active_buttons(&self) -> Vec<usize> {
        indices(self.inner.borrow().buttons.iter().map(|b| b.active))
    }

    #[must_use]
    pub fn item_style(&self, index: usize) -> Option<ItemStyle> {
        self.inner.borrow().items.get(index).and_then(|i| i.style)
    }

    /// Items not hidden; an item never styled counts as visible.
    #[must_use]
    pub fn visible_items(&self) -> Vec<usize> {
        indices(
            self.inner
                .borrow()
                .items
                .iter()
                .map(|i| i.style != Some(ItemStyle::Hidden)),
        )
    }

    #[must_use]
    pub fn active_links(&self) -> Vec<usize> {
        indices(self.inner.borrow().links.iter().map(|l| l.active))
    }

    #[must_use]
    pub fn menu_open(&self) -> Option<bool> {
        self.inner.borrow().menu_open
    }

    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.inner.borrow().navbar_scrolled
    }

    #[must_use]
    pub fn back_to_top_visible(&self) -> bool {
        self.inner.borrow().back_to_top_visible
    }

    /// Applied widths of the skill bars.
    #[must_use]
    pub fn skill_bar_widths(&self) -> Vec<Option<String>> {
        self.inner
            .borrow()
            .skill_bars
            .iter()
            .map(|b| b.width.clone())
            .collect()
    }

    #[must_use]
    pub fn revealed(&self) -> Vec<usize> {
        indices(self.inner.borrow().reveals.iter().map(|r| r.revealed))
    }

    #[must_use]
    pub fn heading(&self) -> Option<String> {
        self.inner.borrow().heading.clone()
    }

    #[must_use]
    pub fn field(&self, id: &str) -> Option<String> {
        self.inner
            .borrow()
            .form
            .as_ref()
            .and_then(|f| f.get(id).cloned())
    }

    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.inner.borrow().alerts.clone()
    }

    /// `(format, style)` pairs logged to the console.
    #[must_use]
    pub fn console_lines(&self) -> Vec<(String, String)> {
        self.inner.borrow().console.clone()
    }
}

fn indices(flags: impl Iterator<Item = bool>) -> Vec<usize> {
    flags
        .enumerate()
        .filter_map(|(i, flag)| flag.then_some(i))
        .collect()
}

impl ThemeSurface for VirtualPage {
    fn set_root_class(&self, class: &str, present: bool) {
        let mut state = self.inner.borrow_mut();
        if present {
            state.root_classes.insert(class.to_string());
        } else {
            state.root_classes.remove(class);
        }
    }

    fn set_toggle_checked(&self, checked: bool) {
        match self.inner.borrow_mut().toggle.as_mut() {
            Some(toggle) => toggle.checked = checked,
            None => trace!("no theme toggle"),
        }
    }

    fn set_icon_class(&self, class: &str) {
        if let Some(icon) = self.inner.borrow_mut().icon.as_mut() {
            class.clone_into(icon);
        }
    }

    fn has_style(&self, id: &str) -> bool {
        self.inner.borrow().styles.iter().any(|(s, _)| s == id)
    }

    fn insert_style(&self, id: &str, css: &str) -> Result<(), FolioError> {
        let mut state = self.inner.borrow_mut();
        if !state.has_head {
            return Err(MissingElementError::new("head").into());
        }
        state.styles.push((id.to_string(), css.to_string()));
        Ok(())
    }

    fn remove_style(&self, id: &str) {
        self.inner.borrow_mut().styles.retain(|(s, _)| s != id);
    }
}

impl FilterSurface for VirtualPage {
    fn filter_buttons(&self) -> Vec<Option<String>> {
        self.inner
            .borrow()
            .buttons
            .iter()
            .map(|b| b.filter.clone())
            .collect()
    }

    fn set_button_active(&self, index: usize, active: bool) {
        if let Some(button) = self.inner.borrow_mut().buttons.get_mut(index) {
            button.active = active;
        }
    }

    fn portfolio_items(&self) -> Vec<Option<String>> {
        self.inner
            .borrow()
            .items
            .iter()
            .map(|i| i.category.clone())
            .collect()
    }

    fn set_item_style(&self, index: usize, style: ItemStyle) {
        if let Some(item) = self.inner.borrow_mut().items.get_mut(index) {
            item.style = Some(style);
        }
    }
}

impl NavigationSurface for VirtualPage {
    fn sections(&self) -> Vec<Section> {
        self.inner.borrow().sections.clone()
    }

    fn nav_link_hrefs(&self) -> Vec<Option<String>> {
        self.inner
            .borrow()
            .links
            .iter()
            .map(|l| l.href.clone())
            .collect()
    }

    fn set_nav_link_active(&self, index: usize, active: bool) {
        if let Some(link) = self.inner.borrow_mut().links.get_mut(index) {
            link.active = active;
        }
    }

    fn set_menu_open(&self, open: bool) {
        if let Some(menu) = self.inner.borrow_mut().menu_open.as_mut() {
            *menu = open;
        }
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.inner
            .borrow()
            .sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.top)
    }
}

impl ScrollSurface for VirtualPage {
    fn scroll_y(&self) -> f64 {
        self.inner.borrow().scroll_y
    }

    fn set_navbar_scrolled(&self, scrolled: bool) {
        self.inner.borrow_mut().navbar_scrolled = scrolled;
    }

    fn set_back_to_top_visible(&self, visible: bool) {
        self.inner.borrow_mut().back_to_top_visible = visible;
    }

    fn viewport_height(&self) -> f64 {
        self.inner.borrow().viewport_height
    }

    fn skills_top(&self) -> Option<f64> {
        let state = self.inner.borrow();
        state.skills_top.map(|top| top - state.scroll_y)
    }

    fn skill_widths(&self) -> Vec<Option<String>> {
        self.inner
            .borrow()
            .skill_bars
            .iter()
            .map(|b| b.data_width.clone())
            .collect()
    }

    fn set_skill_width(&self, index: usize, width: &str) {
        if let Some(bar) = self.inner.borrow_mut().skill_bars.get_mut(index) {
            bar.width = Some(width.to_string());
        }
    }

    fn reveal_targets(&self) -> Vec<RevealTarget> {
        let state = self.inner.borrow();
        state
            .reveals
            .iter()
            .map(|r| RevealTarget {
                top: r.top - state.scroll_y,
                revealed: r.revealed,
            })
            .collect()
    }

    fn mark_revealed(&self, index: usize) {
        if let Some(target) = self.inner.borrow_mut().reveals.get_mut(index) {
            target.revealed = true;
        }
    }
}

impl HeroSurface for VirtualPage {
    fn heading_text(&self) -> Option<String> {
        self.inner.borrow().heading.clone()
    }

    fn set_heading_text(&self, text: &str) {
        if let Some(heading) = self.inner.borrow_mut().heading.as_mut() {
            text.clone_into(heading);
        }
    }
}

impl ContactSurface for VirtualPage {
    fn has_form(&self) -> bool {
        self.inner.borrow().form.is_some()
    }

    fn field_value(&self, id: &str) -> Option<String> {
        self.field(id)
    }

    fn alert(&self, message: &str) {
        self.inner.borrow_mut().alerts.push(message.to_string());
    }

    fn reset_form(&self) {
        if let Some(form) = self.inner.borrow_mut().form.as_mut() {
            form.values_mut().for_each(String::clear);
        }
    }
}

impl ConsoleSurface for VirtualPage {
    fn log_styled(&self, format: &str, style: &str) {
        self.inner
            .borrow_mut()
            .console
            .push((format.to_string(), style.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_share_state_between_clones() {
        let page = VirtualPage::new().with_heading("Hello");
        let handle = page.clone();
        page.set_heading_text("Bye");
        assert_eq!(handle.heading().as_deref(), Some("Bye"));
    }

    #[test]
    fn should_report_viewport_relative_tops() {
        let page = VirtualPage::new()
            .with_skills(1000.0, &[])
            .with_reveal_targets(&[500.0]);
        page.scroll_to(400.0);
        assert!(page.skills_top().is_some_and(|top| (top - 600.0).abs() < f64::EPSILON));
        assert!((page.reveal_targets()[0].top - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_skip_writes_to_missing_elements() {
        let page = VirtualPage::new();
        page.set_toggle_checked(true);
        page.set_icon_class("fas fa-sun");
        page.set_menu_open(true);
        page.set_item_style(3, ItemStyle::Shown);
        assert_eq!(page.toggle_checked(), None);
        assert_eq!(page.icon_class(), None);
        assert_eq!(page.menu_open(), None);
    }

    #[test]
    fn should_clear_fields_on_reset() {
        let page = VirtualPage::new().with_contact_form();
        page.fill_field("name", "Ada");
        page.reset_form();
        assert_eq!(page.field("name").as_deref(), Some(""));
    }

    #[test]
    fn should_fail_style_insert_without_head() {
        let page = VirtualPage::new().without_head();
        assert!(page.insert_style("x", "").is_err());
        assert!(page.style_ids().is_empty());
    }
}
