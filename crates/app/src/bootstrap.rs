//! Fault-isolated feature bootstrap.
//!
//! Each feature is set up independently: a failure is logged and recorded
//! in the [`BootReport`] while the remaining features still start. A
//! [`SetupGuard`] remembers which features registered their listeners so a
//! second bootstrap pass never doubles them.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{info, warn};

use folio_domain::error::FolioError;

use crate::readiness::Readiness;

/// An independently initialized page feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Banner,
    Theme,
    Navigation,
    ScrollEffects,
    Skills,
    Reveal,
    Typewriter,
    Contact,
    Filter,
}

impl Feature {
    /// Every feature, in bootstrap order.
    pub const ALL: [Self; 9] = [
        Self::Banner,
        Self::Theme,
        Self::Navigation,
        Self::ScrollEffects,
        Self::Skills,
        Self::Reveal,
        Self::Typewriter,
        Self::Contact,
        Self::Filter,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::Theme => "theme",
            Self::Navigation => "navigation",
            Self::ScrollEffects => "scroll_effects",
            Self::Skills => "skills",
            Self::Reveal => "reveal",
            Self::Typewriter => "typewriter",
            Self::Contact => "contact",
            Self::Filter => "filter",
        }
    }

    /// Signal the feature waits for before it is set up.
    #[must_use]
    pub fn readiness(self) -> Readiness {
        match self {
            Self::Filter => Readiness::PageLoaded,
            _ => Readiness::DomReady,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Features whose listeners are currently registered.
#[derive(Debug, Default)]
pub struct SetupGuard {
    registered: BTreeSet<Feature>,
}

impl SetupGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `feature`. Returns `false` if it was already registered.
    pub fn register(&mut self, feature: Feature) -> bool {
        self.registered.insert(feature)
    }

    /// Forget `feature` so a later pass may set it up again.
    pub fn release(&mut self, feature: Feature) {
        self.registered.remove(&feature);
    }

    #[must_use]
    pub fn is_registered(&self, feature: Feature) -> bool {
        self.registered.contains(&feature)
    }
}

/// Outcome of one bootstrap pass.
#[derive(Debug, Default)]
pub struct BootReport {
    pub started: Vec<Feature>,
    /// Already registered by an earlier pass.
    pub skipped: Vec<Feature>,
    pub failed: Vec<(Feature, FolioError)>,
}

impl BootReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// One bootstrap pass over a shared [`SetupGuard`].
pub struct Bootstrap<'a> {
    guard: &'a mut SetupGuard,
    report: BootReport,
}

impl<'a> Bootstrap<'a> {
    pub fn new(guard: &'a mut SetupGuard) -> Self {
        Self {
            guard,
            report: BootReport::default(),
        }
    }

    /// Set up `feature` with `setup` unless it is already registered.
    ///
    /// A failing setup releases the guard so the feature can be retried.
    pub fn run(
        &mut self,
        feature: Feature,
        setup: impl FnOnce() -> Result<(), FolioError>,
    ) -> &mut Self {
        if !self.guard.register(feature) {
            self.report.skipped.push(feature);
            return self;
        }
        match setup() {
            Ok(()) => self.report.started.push(feature),
            Err(err) => {
                warn!(%feature, error = %err, "feature setup failed");
                self.guard.release(feature);
                self.report.failed.push((feature, err));
            }
        }
        self
    }

    /// Close the pass and return its report.
    #[must_use]
    pub fn finish(self) -> BootReport {
        info!(
            started = self.report.started.len(),
            skipped = self.report.skipped.len(),
            failed = self.report.failed.len(),
            "bootstrap finished"
        );
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::error::MissingElementError;

    fn missing(selector: &str) -> Result<(), FolioError> {
        Err(MissingElementError::new(selector).into())
    }

    #[test]
    fn should_start_remaining_features_when_one_fails() {
        let mut guard = SetupGuard::new();
        let mut boot = Bootstrap::new(&mut guard);
        boot.run(Feature::Theme, || Ok(()))
            .run(Feature::Contact, || missing(".contact-form"))
            .run(Feature::Filter, || Ok(()));
        let report = boot.finish();

        assert_eq!(report.started, vec![Feature::Theme, Feature::Filter]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, Feature::Contact);
        assert!(!report.is_clean());
    }

    #[test]
    fn should_skip_features_registered_by_earlier_pass() {
        let mut guard = SetupGuard::new();
        let mut calls = 0;

        for _ in 0..2 {
            let mut boot = Bootstrap::new(&mut guard);
            boot.run(Feature::Navigation, || {
                calls += 1;
                Ok(())
            });
            boot.finish();
        }

        assert_eq!(calls, 1);
        assert!(guard.is_registered(Feature::Navigation));
    }

    #[test]
    fn should_release_guard_after_failure() {
        let mut guard = SetupGuard::new();
        let mut boot = Bootstrap::new(&mut guard);
        boot.run(Feature::Typewriter, || missing(".hero h1"));
        let report = boot.finish();

        assert!(report.skipped.is_empty());
        assert!(!guard.is_registered(Feature::Typewriter));

        let mut retry = Bootstrap::new(&mut guard);
        retry.run(Feature::Typewriter, || Ok(()));
        assert_eq!(retry.finish().started, vec![Feature::Typewriter]);
    }

    #[test]
    fn should_list_every_feature_once() {
        let names: BTreeSet<_> = Feature::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), Feature::ALL.len());
        assert_eq!(Feature::ScrollEffects.to_string(), "scroll_effects");
    }

    #[test]
    fn should_wait_for_page_load_only_for_filter() {
        assert_eq!(Feature::Filter.readiness(), Readiness::PageLoaded);
        assert_eq!(Feature::Typewriter.readiness(), Readiness::DomReady);
    }
}
