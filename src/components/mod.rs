//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – fixed-cadence sprite-sheet frame animation
//! - [`boxcollider`] – axis-aligned rectangular collider, optionally inset
//! - [`inputcontrolled`] – per-tick horizontal step driven by the keyboard
//! - [`jumper`] – jump impulse and airborne flag
//! - [`mapposition`] – world-space top-left position
//! - [`obstacle`] – `Player` and `Obstacle` markers
//! - [`rigidbody`] – velocity and named acceleration forces
//! - [`scrolllayer`] – looping parallax background layer
//! - [`sprite`] – texture key and current frame rectangle
//! - [`zindex`] – rendering order hint for background layers

pub mod animation;
pub mod boxcollider;
pub mod inputcontrolled;
pub mod jumper;
pub mod mapposition;
pub mod obstacle;
pub mod rigidbody;
pub mod scrolllayer;
pub mod sprite;
pub mod zindex;
