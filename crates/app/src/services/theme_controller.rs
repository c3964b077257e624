//! Theme controller — keeps the page, the toggle and the stored preference
//! in line with the current [`ThemeMode`].

use tracing::{debug, warn};

use folio_domain::error::FolioError;
use folio_domain::theme::{FORCE_DARK_CSS, OVERRIDE_STYLE_ID, STORAGE_KEY, ThemeMode};

use crate::ports::{KeyValueStore, ThemeSurface};

/// Application service owning the theme state.
pub struct ThemeController<D, S> {
    surface: D,
    store: S,
    mode: ThemeMode,
}

impl<D: ThemeSurface, S: KeyValueStore> ThemeController<D, S> {
    /// Create a controller. Nothing is applied until [`initialize`](Self::initialize).
    pub fn new(surface: D, store: S) -> Self {
        Self {
            surface,
            store,
            mode: ThemeMode::default(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply the stored preference (or `fallback`) without writing it back.
    ///
    /// An unreadable store is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::MissingElement`] when the override stylesheet
    /// cannot be inserted; every other change is still applied.
    pub fn initialize(&mut self, fallback: ThemeMode) -> Result<ThemeMode, FolioError> {
        let stored = self.store.get(STORAGE_KEY).unwrap_or_else(|err| {
            warn!(error = %err, "failed to read stored theme, using fallback");
            None
        });
        let mode = ThemeMode::resolve(stored.as_deref(), fallback);
        self.reconcile(mode)?;
        Ok(mode)
    }

    /// Switch to `mode` and persist it.
    ///
    /// The page is reconciled before the preference is written, so a failing
    /// store never blocks the visual change.
    ///
    /// # Errors
    ///
    /// Returns the reconciliation error if any, otherwise the storage error.
    pub fn set_theme(&mut self, mode: ThemeMode) -> Result<(), FolioError> {
        let applied = self.reconcile(mode);
        let persisted = self.store.set(STORAGE_KEY, mode.as_str());
        applied.and(persisted)
    }

    /// Switch to the other mode.
    ///
    /// # Errors
    ///
    /// See [`set_theme`](Self::set_theme).
    pub fn toggle(&mut self) -> Result<ThemeMode, FolioError> {
        let next = self.mode.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Handle a `change` of the toggle checkbox.
    ///
    /// # Errors
    ///
    /// See [`set_theme`](Self::set_theme).
    pub fn on_toggle_changed(&mut self, checked: bool) -> Result<ThemeMode, FolioError> {
        let mode = ThemeMode::from_checked(checked);
        self.set_theme(mode)?;
        Ok(mode)
    }

    fn reconcile(&mut self, mode: ThemeMode) -> Result<(), FolioError> {
        let view = mode.view();
        self.mode = mode;

        self.surface.set_root_class(view.remove_class, false);
        self.surface.set_root_class(view.add_class, true);
        self.surface.set_toggle_checked(view.toggle_checked);
        self.surface.set_icon_class(view.icon_class);

        if view.override_stylesheet {
            if !self.surface.has_style(OVERRIDE_STYLE_ID) {
                self.surface.insert_style(OVERRIDE_STYLE_ID, FORCE_DARK_CSS)?;
            }
        } else {
            self.surface.remove_style(OVERRIDE_STYLE_ID);
        }

        debug!(theme = %mode, "theme applied");
        Ok(())
    }
}
