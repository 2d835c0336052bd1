//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window and asset settings from the INI file
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `obstaclefield` – shared obstacle velocity and finish marker
//! - `outcome` – latched win/lose state
//! - `screensize` – world dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod obstaclefield;
pub mod outcome;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
