//! # folio-domain
//!
//! Pure domain model for the folio portfolio site behaviors.
//!
//! ## Responsibilities
//! - Foundational types: error conventions
//! - Define the **theme** model (light/dark mode, the desired DOM view of a mode,
//!   the dark override stylesheet)
//! - Define the **portfolio filter** model (selection, matching, two-pass plans)
//! - Define **navigation** rules (active section, anchor offsets, mobile menu)
//! - Define **scroll** rules (navbar shadow, back-to-top, skill bars, reveal)
//! - Define the **typewriter**, **contact form** and **console banner** models
//! - Define the **study tracker** markup rewrite used by the `folio-hours` tool
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, `web-sys` or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod banner;
pub mod contact;
pub mod filter;
pub mod navigation;
pub mod scroll;
pub mod study_tracker;
pub mod theme;
pub mod typewriter;
