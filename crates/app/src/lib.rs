//! # folio-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `KeyValueStore` — the persisted theme preference
//!   - `ThemeSurface`, `FilterSurface`, `NavigationSurface`, `ScrollSurface`,
//!     `HeroSurface`, `ContactSurface`, `ConsoleSurface` — the page elements
//!     each feature reads and writes
//! - Define **driving/inbound ports** as controller structs:
//!   - `ThemeController` — initialize, set, toggle the theme
//!   - `PortfolioFilter` — apply a category, settle the reveal animation
//!   - `NavigationController` — menu, active link, anchor targets
//!   - `ScrollEffects` — navbar shadow, back-to-top, skill bars, reveal
//!   - `TypewriterEffect`, `ContactForm`, `print_banner`
//! - Provide **in-process infrastructure** that doesn't need IO: fault-isolated
//!   bootstrap, readiness gate, site configuration
//! - Compose every controller over one page in [`site::Site`], which adapters
//!   drive from their event sources
//!
//! ## Dependency rule
//! Depends on `folio-domain` only (plus `toml`/`serde` for configuration).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod bootstrap;
pub mod config;
pub mod ports;
pub mod readiness;
pub mod services;
pub mod site;
