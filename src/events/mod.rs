//! Event types and observers.
//!
//! Submodules:
//! - [`collision`] – player/obstacle overlap notifications
//! - [`outcome`] – terminal outcome notification and its logging observer
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod collision;
pub mod outcome;
pub mod switchdebug;
