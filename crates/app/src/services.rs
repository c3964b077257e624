//! Application services — use-case implementations.
//!
//! Each controller accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod banner;
pub mod contact_form;
pub mod navigation;
pub mod portfolio_filter;
pub mod scroll_effects;
pub mod theme_controller;
pub mod typewriter;
