//! Keyboard layout engine for a Chinese/English input method.
//!
//! The crate turns a [`models::KeyboardContext`] into rows of sized keys and
//! decides how the keyboard type changes in response to gestures:
//!
//! - [`models`]: key actions, keyboard variants, width units, layouts and
//!   the device geometry table
//! - [`parser`]: custom keyboard definitions and their attribute expressions
//! - [`services`]: layout builders, the builder router, the behavior policy
//!   and context transitions
//! - [`config`]: layout toggles and behavior thresholds
//!
//! The library logs through `tracing` and never installs a subscriber.

// Module declarations
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
