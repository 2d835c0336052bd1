//! Kinematic body component with named acceleration forces.
//!
//! The [`RigidBody`] component stores velocity and named acceleration forces
//! for an entity. Forces can be toggled individually, which is how the
//! character's gravity is switched off while grounded.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

/// A named acceleration force that can be toggled on/off.
#[derive(Clone, Copy, Debug)]
pub struct AccelerationForce {
    /// The acceleration vector in pixels per second squared.
    pub value: Vector2,
    /// Whether this force is currently active.
    pub enabled: bool,
}

impl AccelerationForce {
    pub fn new(value: Vector2) -> Self {
        Self {
            value,
            enabled: true,
        }
    }
}

/// Kinematic body storing velocity and named acceleration forces.
///
/// Kinematics writes the velocity; the
/// [`movement`](crate::systems::movement::movement) system integrates it into
/// [`MapPosition`](super::mapposition::MapPosition).
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new();
/// rb.add_force("gravity", Vector2 { x: 0.0, y: 1500.0 });
/// rb.set_force_enabled("gravity", false); // grounded
/// ```
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Current velocity in pixels per second.
    pub velocity: Vector2,
    /// Named acceleration forces. The total acceleration is the sum of all enabled forces.
    pub forces: FxHashMap<String, AccelerationForce>,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no forces.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            forces: FxHashMap::default(),
        }
    }

    /// Add or update a named acceleration force (enabled by default).
    pub fn add_force(&mut self, name: &str, value: Vector2) {
        self.forces
            .insert(name.to_string(), AccelerationForce::new(value));
    }

    /// Builder form of [`RigidBody::add_force`].
    pub fn with_force(mut self, name: &str, value: Vector2) -> Self {
        self.add_force(name, value);
        self
    }

    /// Enable or disable a specific force by name.
    /// Returns false if the force doesn't exist.
    pub fn set_force_enabled(&mut self, name: &str, enabled: bool) -> bool {
        if let Some(force) = self.forces.get_mut(name) {
            force.enabled = enabled;
            true
        } else {
            false
        }
    }

    /// Check if a force exists and is enabled.
    pub fn is_force_enabled(&self, name: &str) -> bool {
        self.forces.get(name).map(|f| f.enabled).unwrap_or(false)
    }

    /// Calculate the total acceleration from all enabled forces.
    pub fn total_acceleration(&self) -> Vector2 {
        let mut total = Vector2 { x: 0.0, y: 0.0 };
        for force in self.forces.values() {
            if force.enabled {
                total += force.value;
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody::new();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
        assert!(rb.forces.is_empty());
    }

    #[test]
    fn test_add_force_overwrites() {
        let mut rb = RigidBody::new();
        rb.add_force("gravity", Vector2 { x: 0.0, y: 100.0 });
        rb.add_force("gravity", Vector2 { x: 0.0, y: 200.0 });
        assert_eq!(rb.forces.len(), 1);
        assert!(approx_eq(rb.total_acceleration().y, 200.0));
    }

    #[test]
    fn test_set_force_enabled() {
        let mut rb = RigidBody::new().with_force("gravity", Vector2 { x: 0.0, y: 1500.0 });
        assert!(rb.is_force_enabled("gravity"));
        assert!(rb.set_force_enabled("gravity", false));
        assert!(!rb.is_force_enabled("gravity"));
        assert!(approx_eq(rb.total_acceleration().y, 0.0));
    }

    #[test]
    fn test_set_force_enabled_nonexistent() {
        let mut rb = RigidBody::new();
        assert!(!rb.set_force_enabled("nonexistent", true));
        assert!(!rb.is_force_enabled("nonexistent"));
    }

    #[test]
    fn test_total_acceleration_sums_enabled_forces() {
        let mut rb = RigidBody::new();
        rb.add_force("gravity", Vector2 { x: 0.0, y: 100.0 });
        rb.add_force("wind", Vector2 { x: 50.0, y: 0.0 });
        rb.add_force("thrust", Vector2 { x: 0.0, y: -30.0 });
        rb.set_force_enabled("thrust", false);
        let total = rb.total_acceleration();
        assert!(approx_eq(total.x, 50.0));
        assert!(approx_eq(total.y, 100.0));
    }
}
