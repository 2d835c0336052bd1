//! Game systems.
//!
//! Submodules overview, in tick order
//! - [`time`] – advance simulation time with the measured frame delta
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`scroll`] – slide the parallax layers
//! - [`kinematics`] – ground test, gravity, jump and horizontal step
//! - [`obstaclefield`] – move the obstacles and the finish marker
//! - [`movement`] – integrate positions from rigid body velocities
//! - [`animation`] – advance sprite-sheet frames
//! - [`collision`] – player/obstacle overlap and the lose latch
//! - [`outcome`] – win check against the finish marker
//! - [`render`] – build and draw the frame with Raylib

pub mod animation;
pub mod collision;
pub mod input;
pub mod kinematics;
pub mod movement;
pub mod obstaclefield;
pub mod outcome;
pub mod render;
pub mod scroll;
pub mod time;
