//! Browser runtime — readiness signals, event listeners and timers around
//! one shared [`Site`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::{Executor, spawn_local};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, EventTarget, HtmlInputElement};

use folio_app::bootstrap::{Feature, SetupGuard};
use folio_app::config::SiteConfig;
use folio_app::ports::{KeyValueStore, ScrollSurface};
use folio_app::readiness::{Readiness, ReadinessGate};
use folio_app::site::Site;
use folio_domain::error::{FolioError, MissingElementError};
use folio_domain::theme::TOGGLE_ID;

use crate::dom::{
    ANCHORS, BACK_TO_TOP, CONTACT_FORM_ID, FILTER_BUTTONS, HAMBURGER, NAV_LINKS, WebDocument,
};
use crate::logging;
use crate::storage::LocalStorage;

type SharedSite = Rc<RefCell<Site<WebDocument, LocalStorage>>>;
type SharedGate = Rc<RefCell<ReadinessGate<Feature>>>;

thread_local! {
    static GUARD: RefCell<SetupGuard> = RefCell::new(SetupGuard::new());
}

/// Delays copied out of the config so listeners never borrow the site to
/// read them.
#[derive(Debug, Clone, Copy)]
struct Timings {
    settle_ms: u32,
    skill_fill_ms: u32,
    char_ms: u32,
}

impl From<&SiteConfig> for Timings {
    fn from(config: &SiteConfig) -> Self {
        Self {
            settle_ms: config.filter.settle_delay_ms,
            skill_fill_ms: config.scroll.skill_fill_delay_ms,
            char_ms: config.typewriter.char_delay_ms,
        }
    }
}

/// Load the config, install logging and queue every feature behind its
/// readiness signal.
///
/// # Errors
///
/// Returns [`FolioError::MissingElement`] outside a browser document.
pub fn start() -> Result<(), FolioError> {
    // `spawn_local` panics until an executor is installed. A second init
    // only reports that one already exists.
    let _ = Executor::init_wasm_bindgen();

    let document = WebDocument::current()?;
    let store = LocalStorage::new(document.window().clone());

    let loaded = SiteConfig::load(document.config_block().as_deref(), |key| {
        store.get(key).ok().flatten()
    });
    let config = match loaded {
        Ok(config) => {
            logging::init(&config.logging.filter);
            config
        }
        Err(err) => {
            let config = SiteConfig::default();
            logging::init(&config.logging.filter);
            warn!(error = %err, "invalid site config, using defaults");
            config
        }
    };

    let document = document.with_hero_selector(&config.typewriter.selector);
    let timings = Timings::from(&config);
    let site: SharedSite = Rc::new(RefCell::new(Site::new(document.clone(), store, config)));
    let gate: SharedGate = Rc::new(RefCell::new(ReadinessGate::new()));

    for feature in Feature::ALL {
        // Nothing is marked yet, so every feature is queued.
        let _ = gate.borrow_mut().when(&[feature.readiness()], feature);
    }

    let state = document.document().ready_state();
    debug!(%state, "document ready state");
    match state.as_str() {
        "loading" => {
            let (site, gate) = (site.clone(), gate.clone());
            listen(document.document(), "DOMContentLoaded", "document", move |_| {
                mark(&site, &gate, timings, Readiness::DomReady);
            })?;
        }
        "interactive" => mark(&site, &gate, timings, Readiness::DomReady),
        _ => {
            mark(&site, &gate, timings, Readiness::DomReady);
            mark(&site, &gate, timings, Readiness::PageLoaded);
            return Ok(());
        }
    }

    listen(document.window(), "load", "window", move |_| {
        mark(&site, &gate, timings, Readiness::PageLoaded);
    })
}

fn mark(site: &SharedSite, gate: &SharedGate, timings: Timings, signal: Readiness) {
    let ready = gate.borrow_mut().mark(signal);
    if ready.is_empty() {
        return;
    }
    let document = site.borrow().page().clone();
    let report = GUARD.with_borrow_mut(|guard| {
        site.borrow_mut()
            .boot(guard, &ready, |feature| attach(site, &document, timings, feature))
    });
    info!(?signal, started = report.started.len(), "features ready");
}

/// Register the listeners and timers `feature` needs.
fn attach(
    site: &SharedSite,
    document: &WebDocument,
    timings: Timings,
    feature: Feature,
) -> Result<(), FolioError> {
    match feature {
        Feature::Banner | Feature::Reveal => Ok(()),
        Feature::Skills => {
            fill_skills_in_view(site, timings);
            Ok(())
        }
        Feature::Theme => attach_theme(site, document),
        Feature::Navigation => attach_navigation(site, document),
        Feature::ScrollEffects => attach_scroll(site, document, timings),
        Feature::Typewriter => {
            start_typewriter(site, timings);
            Ok(())
        }
        Feature::Contact => attach_contact(site, document),
        Feature::Filter => attach_filter(site, document, timings),
    }
}

fn attach_theme(site: &SharedSite, document: &WebDocument) -> Result<(), FolioError> {
    let Some(toggle) = document.document().get_element_by_id(TOGGLE_ID) else {
        debug!("no theme toggle, theme stays fixed");
        return Ok(());
    };
    let site = site.clone();
    listen(&toggle, "change", TOGGLE_ID, move |event| {
        let checked = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .is_some_and(|input| input.checked());
        site.borrow_mut().on_theme_toggle(checked);
    })
}

fn attach_navigation(site: &SharedSite, document: &WebDocument) -> Result<(), FolioError> {
    for hamburger in document.query_all(HAMBURGER) {
        let site = site.clone();
        listen(&hamburger, "click", HAMBURGER, move |_| {
            site.borrow_mut().toggle_menu();
        })?;
    }

    for link in document.query_all(NAV_LINKS) {
        let site = site.clone();
        listen(&link, "click", NAV_LINKS, move |_| {
            site.borrow_mut().close_menu();
        })?;
    }

    for anchor in document.query_all(ANCHORS) {
        let (site, doc) = (site.clone(), document.clone());
        listen(&anchor, "click", ANCHORS, move |event| {
            event.prevent_default();
            let href = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("href"));
            let target = href.and_then(|href| site.borrow().anchor_target(&href));
            if let Some(top) = target {
                doc.scroll_smoothly_to(top);
            }
        })?;
    }
    Ok(())
}

fn attach_scroll(
    site: &SharedSite,
    document: &WebDocument,
    timings: Timings,
) -> Result<(), FolioError> {
    let (scroll_site, doc) = (site.clone(), document.clone());
    listen(document.window(), "scroll", "window", move |_| {
        let outcome = scroll_site.borrow_mut().on_scroll(doc.scroll_y());
        if outcome.skills_due {
            let site = scroll_site.clone();
            spawn_local(async move {
                TimeoutFuture::new(timings.skill_fill_ms).await;
                let filled = site.borrow().fill_skills();
                debug!(filled, "skill bars filled");
            });
        }
    })?;

    for button in document.query_all(BACK_TO_TOP) {
        let doc = document.clone();
        listen(&button, "click", BACK_TO_TOP, move |event| {
            event.prevent_default();
            doc.scroll_smoothly_to(0.0);
        })?;
    }
    Ok(())
}

/// The skills section may already be in view before any scroll.
fn fill_skills_in_view(site: &SharedSite, timings: Timings) {
    let site = site.clone();
    spawn_local(async move {
        TimeoutFuture::new(timings.skill_fill_ms).await;
        let filled = site.borrow_mut().fill_pending_skills();
        debug!(filled, "skill bars filled on load");
    });
}

fn start_typewriter(site: &SharedSite, timings: Timings) {
    let site = site.clone();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(timings.char_ms).await;
            if !site.borrow_mut().tick_typewriter() {
                break;
            }
        }
    });
}

fn attach_contact(site: &SharedSite, document: &WebDocument) -> Result<(), FolioError> {
    let form = document
        .document()
        .get_element_by_id(CONTACT_FORM_ID)
        .ok_or_else(|| MissingElementError::new(CONTACT_FORM_ID))?;
    let site = site.clone();
    listen(&form, "submit", CONTACT_FORM_ID, move |event| {
        event.prevent_default();
        // Both outcomes are already shown to the visitor as alerts.
        let _ = site.borrow().submit_contact();
    })
}

fn attach_filter(
    site: &SharedSite,
    document: &WebDocument,
    timings: Timings,
) -> Result<(), FolioError> {
    for (index, button) in document.query_all(FILTER_BUTTONS).into_iter().enumerate() {
        let site = site.clone();
        listen(&button, "click", FILTER_BUTTONS, move |_| {
            let plan = site.borrow_mut().click_filter(index);
            let site = site.clone();
            spawn_local(async move {
                TimeoutFuture::new(timings.settle_ms).await;
                site.borrow_mut().settle_filter(plan.generation);
            });
        })?;
    }
    Ok(())
}

/// Attach `handler` to `target` for the page's lifetime.
fn listen(
    target: &EventTarget,
    event: &str,
    selector: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), FolioError> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| MissingElementError::new(selector))?;
    closure.forget();
    Ok(())
}
