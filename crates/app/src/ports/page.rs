//! Page ports — the slices of the DOM each feature reads and writes.
//!
//! Element lists are addressed by their index in document order, matching
//! the order in which the adapter queried them.

use folio_domain::error::FolioError;
use folio_domain::filter::ItemStyle;
use folio_domain::navigation::Section;

/// Root element classes, theme toggle, icon and injected stylesheets.
pub trait ThemeSurface {
    /// Add (`present == true`) or remove a class on the root `<html>` element.
    fn set_root_class(&self, class: &str, present: bool);

    /// Set the theme toggle checkbox state. No-op without a toggle.
    fn set_toggle_checked(&self, checked: bool);

    /// Replace the class attribute of the theme icon. No-op without an icon.
    fn set_icon_class(&self, class: &str);

    /// Whether an element with this id exists.
    fn has_style(&self, id: &str) -> bool;

    /// Append a `<style>` element with the given id and CSS text.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::MissingElement`] when the document has no head.
    fn insert_style(&self, id: &str, css: &str) -> Result<(), FolioError>;

    /// Remove the element with this id, if any.
    fn remove_style(&self, id: &str);
}

/// Filter buttons and portfolio items.
pub trait FilterSurface {
    /// `data-filter` of every filter button.
    fn filter_buttons(&self) -> Vec<Option<String>>;

    fn set_button_active(&self, index: usize, active: bool);

    /// `data-category` of every portfolio item.
    fn portfolio_items(&self) -> Vec<Option<String>>;

    fn set_item_style(&self, index: usize, style: ItemStyle);
}

/// Sections, nav links and the mobile menu.
pub trait NavigationSurface {
    /// Sections with an id, with their document offsets.
    fn sections(&self) -> Vec<Section>;

    /// `href` of every nav link.
    fn nav_link_hrefs(&self) -> Vec<Option<String>>;

    fn set_nav_link_active(&self, index: usize, active: bool);

    /// Open or close the menu (hamburger and menu list together).
    fn set_menu_open(&self, open: bool);

    /// Document offset of the element with this id.
    fn element_top(&self, id: &str) -> Option<f64>;
}

/// A reveal-on-scroll target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTarget {
    /// Viewport-relative top edge.
    pub top: f64,
    pub revealed: bool,
}

/// Scroll-dependent chrome and one-shot scroll animations.
pub trait ScrollSurface {
    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;

    fn set_navbar_scrolled(&self, scrolled: bool);

    fn set_back_to_top_visible(&self, visible: bool);

    fn viewport_height(&self) -> f64;

    /// Viewport-relative top of the skills container.
    fn skills_top(&self) -> Option<f64>;

    /// `data-width` of every skill bar.
    fn skill_widths(&self) -> Vec<Option<String>>;

    fn set_skill_width(&self, index: usize, width: &str);

    fn reveal_targets(&self) -> Vec<RevealTarget>;

    fn mark_revealed(&self, index: usize);
}

/// The hero heading animated by the typewriter.
pub trait HeroSurface {
    fn heading_text(&self) -> Option<String>;

    fn set_heading_text(&self, text: &str);
}

/// The contact form and the browser's alert dialog.
pub trait ContactSurface {
    fn has_form(&self) -> bool;

    /// Current value of the form field with this id.
    fn field_value(&self, id: &str) -> Option<String>;

    fn alert(&self, message: &str);

    fn reset_form(&self);
}

/// The developer console.
pub trait ConsoleSurface {
    /// `console.log(format, style)`.
    fn log_styled(&self, format: &str, style: &str);
}

/// A whole page: every surface, behind a cheap-clone handle.
pub trait Page:
    ThemeSurface
    + FilterSurface
    + NavigationSurface
    + ScrollSurface
    + HeroSurface
    + ContactSurface
    + ConsoleSurface
    + Clone
{
}

impl<T> Page for T where
    T: ThemeSurface
        + FilterSurface
        + NavigationSurface
        + ScrollSurface
        + HeroSurface
        + ContactSurface
        + ConsoleSurface
        + Clone
{
}
