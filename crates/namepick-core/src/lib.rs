//! # namepick-core
//!
//! Picks the best display name for a map feature given a requested language.
//! A [`Picker`] is built once per locale; each feature gets its own
//! [`Resolver`] that accumulates `(tag, value)` pairs and returns one value.

pub mod config;
pub mod error;
pub mod keys;
pub mod picker;
pub mod script;

pub use config::{LanguageFallback, PickerConfig};
pub use error::NamepickError;
pub use keys::KeyScheme;
pub use picker::{Picker, Resolution, Resolver, Tier};
pub use script::{script_of, Script};
