//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the page.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Every page port is infallible for lookups: an absent element reads as
//! empty and writes to it are skipped. That keeps each feature null-safe
//! without threading `Option` through every controller.

pub mod page;
pub mod storage;

pub use page::{
    ConsoleSurface, ContactSurface, FilterSurface, HeroSurface, NavigationSurface, Page,
    ScrollSurface, ThemeSurface,
};
pub use storage::KeyValueStore;
