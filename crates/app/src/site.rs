//! Site — every feature controller over one page, plus the bootstrap pass
//! that sets them up.
//!
//! Adapters own the event sources (listeners, timers) and forward each
//! event to the matching method here.

use tracing::warn;

use folio_domain::contact::{ContactError, ContactSubmission};
use folio_domain::error::{FolioError, MissingElementError};
use folio_domain::filter::FilterPlan;
use folio_domain::theme::ThemeMode;

use crate::bootstrap::{BootReport, Bootstrap, Feature, SetupGuard};
use crate::config::SiteConfig;
use crate::ports::{KeyValueStore, Page, ScrollSurface};
use crate::services::banner::print_banner;
use crate::services::contact_form::ContactForm;
use crate::services::navigation::NavigationController;
use crate::services::portfolio_filter::PortfolioFilter;
use crate::services::scroll_effects::{ScrollEffects, ScrollOutcome};
use crate::services::theme_controller::ThemeController;
use crate::services::typewriter::TypewriterEffect;

/// Selector reported when the page has no skills section.
pub const SKILLS_SELECTOR: &str = ".skills-content";

pub struct Site<P, S> {
    config: SiteConfig,
    page: P,
    theme: ThemeController<P, S>,
    navigation: NavigationController<P>,
    scroll: ScrollEffects<P>,
    filter: PortfolioFilter<P>,
    typewriter: TypewriterEffect<P>,
    contact: ContactForm<P>,
    skills_pending: bool,
}

impl<P: Page, S: KeyValueStore> Site<P, S> {
    pub fn new(page: P, store: S, config: SiteConfig) -> Self {
        Self {
            theme: ThemeController::new(page.clone(), store),
            navigation: NavigationController::new(page.clone(), &config.scroll),
            scroll: ScrollEffects::new(page.clone(), config.scroll.clone()),
            filter: PortfolioFilter::new(page.clone()),
            typewriter: TypewriterEffect::new(page.clone(), config.typewriter.selector.clone()),
            contact: ContactForm::new(page.clone()),
            skills_pending: false,
            page,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.navigation.is_menu_open()
    }

    /// Set up `features` in order, calling `attach` to register each one's
    /// listeners once its own setup succeeded.
    ///
    /// Features already registered with `guard` are skipped.
    pub fn boot(
        &mut self,
        guard: &mut SetupGuard,
        features: &[Feature],
        mut attach: impl FnMut(Feature) -> Result<(), FolioError>,
    ) -> BootReport {
        let mut boot = Bootstrap::new(guard);
        for &feature in features {
            boot.run(feature, || {
                self.setup(feature)?;
                attach(feature)
            });
        }
        boot.finish()
    }

    fn setup(&mut self, feature: Feature) -> Result<(), FolioError> {
        match feature {
            Feature::Banner => {
                print_banner(&self.page, &self.config.banner);
            }
            Feature::Theme => {
                self.theme.initialize(self.config.theme.default)?;
            }
            Feature::Navigation => {
                self.navigation.update_active_link(self.page.scroll_y());
            }
            Feature::ScrollEffects => self.scroll.update_chrome(self.page.scroll_y()),
            Feature::Skills => {
                if self.page.skills_top().is_none() {
                    return Err(MissingElementError::new(SKILLS_SELECTOR).into());
                }
                self.skills_pending = self.scroll.check_skills();
            }
            Feature::Reveal => {
                self.scroll.reveal_visible();
            }
            Feature::Typewriter => self.typewriter.start()?,
            Feature::Contact => self.contact.ensure_present()?,
            Feature::Filter => {}
        }
        Ok(())
    }

    /// Scroll event: active link, chrome, reveal and the skills trigger.
    pub fn on_scroll(&mut self, scroll_y: f64) -> ScrollOutcome {
        self.navigation.update_active_link(scroll_y);
        self.scroll.on_scroll(scroll_y)
    }

    /// Deferred skill bar fill, after [`ScrollOutcome::skills_due`].
    pub fn fill_skills(&self) -> usize {
        self.scroll.fill_skills()
    }

    /// Whether the skills section was already in view at boot and still
    /// waits for [`fill_pending_skills`](Self::fill_pending_skills).
    #[must_use]
    pub fn skills_pending(&self) -> bool {
        self.skills_pending
    }

    /// Deferred skill bar fill for a section in view at boot. Fills at most
    /// once; returns the number of bars set.
    pub fn fill_pending_skills(&mut self) -> usize {
        if !std::mem::take(&mut self.skills_pending) {
            return 0;
        }
        self.scroll.fill_skills()
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.navigation.toggle_menu()
    }

    pub fn close_menu(&mut self) {
        self.navigation.close_menu();
    }

    /// Scroll position for an in-page link click, if any.
    #[must_use]
    pub fn anchor_target(&self, href: &str) -> Option<f64> {
        self.navigation.anchor_target(href)
    }

    /// Theme checkbox `change`. Storage failures are logged; the page still
    /// switches.
    pub fn on_theme_toggle(&mut self, checked: bool) -> ThemeMode {
        if let Err(err) = self.theme.on_toggle_changed(checked) {
            warn!(error = %err, "theme change not fully applied");
        }
        self.theme.mode()
    }

    /// Filter button click; schedule [`settle_filter`](Self::settle_filter)
    /// with the returned generation.
    pub fn click_filter(&mut self, index: usize) -> FilterPlan {
        self.filter.click(index)
    }

    pub fn settle_filter(&mut self, generation: u64) -> bool {
        self.filter.settle(generation)
    }

    /// One typewriter step. `false` once the heading is complete.
    pub fn tick_typewriter(&mut self) -> bool {
        self.typewriter.tick()
    }

    /// Contact form `submit`.
    ///
    /// # Errors
    ///
    /// See [`ContactForm::submit`].
    pub fn submit_contact(&self) -> Result<ContactSubmission, ContactError> {
        self.contact.submit()
    }
}
