//! # folio-adapter-virtual
//!
//! In-memory implementations of every folio port, for scenario tests and
//! demos without a browser.
//!
//! | Type | Port(s) | Notes |
//! |------|---------|-------|
//! | [`VirtualPage`] | all page surfaces | Shared handle; element lookups of absent elements read as empty |
//! | [`VirtualStore`] | `KeyValueStore` | Counts writes; can be made to fail |
//!
//! ## Dependency rule
//!
//! Depends on `folio-app` (port traits) and `folio-domain` only.

mod page;
mod store;

pub use page::VirtualPage;
pub use store::VirtualStore;
