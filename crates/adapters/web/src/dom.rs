//! `web-sys` implementation of the page ports.
//!
//! Every lookup tolerates absent elements: reads come back empty and
//! writes are skipped.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollToOptions, Window,
};

use folio_app::ports::page::RevealTarget;
use folio_app::ports::{
    ConsoleSurface, ContactSurface, FilterSurface, HeroSurface, NavigationSurface, ScrollSurface,
    ThemeSurface,
};
use folio_domain::error::{FolioError, MissingElementError};
use folio_domain::filter::ItemStyle;
use folio_domain::navigation::Section;
use folio_domain::theme::{ICON_SELECTOR, TOGGLE_ID};

pub const CONFIG_BLOCK_ID: &str = "folio-config";
pub const FILTER_BUTTONS: &str = ".filter-btn";
pub const PORTFOLIO_ITEMS: &str = ".portfolio-item[data-category], .portfolio-link[data-category]";
pub const SECTIONS: &str = "section[id]";
pub const NAV_LINKS: &str = ".nav-link, .nav-links a";
pub const ANCHORS: &str = "a[href^=\"#\"]";
pub const HAMBURGER: &str = "#hamburger, .hamburger";
pub const NAV_MENU: &str = "#navMenu, .nav-links";
pub const NAVBAR: &str = "#navbar";
pub const BACK_TO_TOP: &str = "#backToTop, .back-to-top";
pub const SKILLS: &str = ".skills-content";
pub const SKILL_BARS: &str = ".skill-fill";
pub const REVEAL_TARGETS: &str = "[data-aos]";
pub const CONTACT_FORM_ID: &str = "contactForm";

const ACTIVE: &str = "active";
const SCROLLED: &str = "scrolled";
const SHOW: &str = "show";
const REVEALED: &str = "aos-animate";

/// Handle to the live document.
#[derive(Clone)]
pub struct WebDocument {
    window: Window,
    document: Document,
    hero_selector: Rc<str>,
}

impl WebDocument {
    /// # Errors
    ///
    /// Returns [`FolioError::MissingElement`] outside a browser window.
    pub fn current() -> Result<Self, FolioError> {
        let window = web_sys::window().ok_or_else(|| MissingElementError::new("window"))?;
        let document = window
            .document()
            .ok_or_else(|| MissingElementError::new("document"))?;
        Ok(Self {
            window,
            document,
            hero_selector: Rc::from(".hero h1"),
        })
    }

    /// Use `selector` to locate the typewriter heading.
    #[must_use]
    pub fn with_hero_selector(mut self, selector: &str) -> Self {
        self.hero_selector = Rc::from(selector);
        self
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    /// All matches in document order; an invalid selector matches nothing.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    /// Text of the inline TOML configuration block, if present.
    pub fn config_block(&self) -> Option<String> {
        self.document
            .get_element_by_id(CONFIG_BLOCK_ID)
            .and_then(|el| el.text_content())
    }

    /// Smoothly scroll the window to `top`.
    pub fn scroll_smoothly_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn set_class_on_all(&self, selector: &str, class: &str, present: bool) {
        for element in self.query_all(selector) {
            set_class(&element, class, present);
        }
    }

    fn nth(&self, selector: &str, index: usize) -> Option<Element> {
        self.query_all(selector).into_iter().nth(index)
    }

    fn form(&self) -> Option<HtmlFormElement> {
        self.document
            .get_element_by_id(CONTACT_FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    }
}

fn set_class(element: &Element, class: &str, present: bool) {
    let _ = element
        .class_list()
        .toggle_with_force(class, present);
}

fn set_style(element: &Element, declarations: &[(&str, &str)]) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let style = html.style();
        for (property, value) in declarations {
            let _ = style.set_property(property, value);
        }
    }
}

fn offset_top(element: &Element) -> Option<f64> {
    element
        .dyn_ref::<HtmlElement>()
        .map(|html| f64::from(html.offset_top()))
}

impl ThemeSurface for WebDocument {
    fn set_root_class(&self, class: &str, present: bool) {
        if let Some(root) = self.document.document_element() {
            set_class(&root, class, present);
        }
    }

    fn set_toggle_checked(&self, checked: bool) {
        if let Some(toggle) = self
            .document
            .get_element_by_id(TOGGLE_ID)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            toggle.set_checked(checked);
        }
    }

    fn set_icon_class(&self, class: &str) {
        if let Some(icon) = self.query(ICON_SELECTOR) {
            icon.set_class_name(class);
        }
    }

    fn has_style(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn insert_style(&self, id: &str, css: &str) -> Result<(), FolioError> {
        let head = self
            .document
            .head()
            .ok_or_else(|| MissingElementError::new("head"))?;
        let style = self
            .document
            .create_element("style")
            .map_err(|_| MissingElementError::new("style"))?;
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style)
            .map_err(|_| MissingElementError::new("head"))?;
        Ok(())
    }

    fn remove_style(&self, id: &str) {
        if let Some(style) = self.document.get_element_by_id(id) {
            style.remove();
        }
    }
}

impl FilterSurface for WebDocument {
    fn filter_buttons(&self) -> Vec<Option<String>> {
        self.query_all(FILTER_BUTTONS)
            .iter()
            .map(|b| b.get_attribute("data-filter"))
            .collect()
    }

    fn set_button_active(&self, index: usize, active: bool) {
        if let Some(button) = self.nth(FILTER_BUTTONS, index) {
            set_class(&button, ACTIVE, active);
        }
    }

    fn portfolio_items(&self) -> Vec<Option<String>> {
        self.query_all(PORTFOLIO_ITEMS)
            .iter()
            .map(|i| i.get_attribute("data-category"))
            .collect()
    }

    fn set_item_style(&self, index: usize, style: ItemStyle) {
        if let Some(item) = self.nth(PORTFOLIO_ITEMS, index) {
            set_style(&item, style.declarations());
        }
    }
}

impl NavigationSurface for WebDocument {
    fn sections(&self) -> Vec<Section> {
        self.query_all(SECTIONS)
            .iter()
            .filter_map(|s| Some(Section::new(s.id(), offset_top(s)?)))
            .collect()
    }

    fn nav_link_hrefs(&self) -> Vec<Option<String>> {
        self.query_all(NAV_LINKS)
            .iter()
            .map(|l| l.get_attribute("href"))
            .collect()
    }

    fn set_nav_link_active(&self, index: usize, active: bool) {
        if let Some(link) = self.nth(NAV_LINKS, index) {
            set_class(&link, ACTIVE, active);
        }
    }

    fn set_menu_open(&self, open: bool) {
        self.set_class_on_all(HAMBURGER, ACTIVE, open);
        self.set_class_on_all(NAV_MENU, ACTIVE, open);
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .as_ref()
            .and_then(offset_top)
    }
}

impl ScrollSurface for WebDocument {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn set_navbar_scrolled(&self, scrolled: bool) {
        self.set_class_on_all(NAVBAR, SCROLLED, scrolled);
    }

    fn set_back_to_top_visible(&self, visible: bool) {
        self.set_class_on_all(BACK_TO_TOP, SHOW, visible);
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default()
    }

    fn skills_top(&self) -> Option<f64> {
        self.query(SKILLS)
            .map(|s| s.get_bounding_client_rect().top())
    }

    fn skill_widths(&self) -> Vec<Option<String>> {
        self.query_all(SKILL_BARS)
            .iter()
            .map(|b| b.get_attribute("data-width"))
            .collect()
    }

    fn set_skill_width(&self, index: usize, width: &str) {
        if let Some(bar) = self.nth(SKILL_BARS, index) {
            set_style(&bar, &[("width", width)]);
        }
    }

    fn reveal_targets(&self) -> Vec<RevealTarget> {
        self.query_all(REVEAL_TARGETS)
            .iter()
            .map(|t| RevealTarget {
                top: t.get_bounding_client_rect().top(),
                revealed: t.class_list().contains(REVEALED),
            })
            .collect()
    }

    fn mark_revealed(&self, index: usize) {
        if let Some(target) = self.nth(REVEAL_TARGETS, index) {
            set_class(&target, REVEALED, true);
        }
    }
}

impl HeroSurface for WebDocument {
    fn heading_text(&self) -> Option<String> {
        self.query(&self.hero_selector)
            .map(|h| h.text_content().unwrap_or_default())
    }

    fn set_heading_text(&self, text: &str) {
        if let Some(heading) = self.query(&self.hero_selector) {
            heading.set_text_content(Some(text));
        }
    }
}

impl ContactSurface for WebDocument {
    fn has_form(&self) -> bool {
        self.form().is_some()
    }

    fn field_value(&self, id: &str) -> Option<String> {
        let field = self.document.get_element_by_id(id)?;
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
            return Some(area.value());
        }
        field
            .dyn_ref::<HtmlSelectElement>()
            .map(HtmlSelectElement::value)
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn reset_form(&self) {
        if let Some(form) = self.form() {
            form.reset();
        }
    }
}

impl ConsoleSurface for WebDocument {
    fn log_styled(&self, format: &str, style: &str) {
        web_sys::console::log_2(&JsValue::from_str(format), &JsValue::from_str(style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_select_only_categorised_portfolio_items() {
        for part in PORTFOLIO_ITEMS.split(',') {
            assert!(part.trim().ends_with("[data-category]"), "{part}");
        }
    }
}
