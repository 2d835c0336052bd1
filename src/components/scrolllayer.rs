//! Parallax background layer component.
//!
//! A [`ScrollLayer`] repeats one texture horizontally and slides it left at a
//! fixed speed. Several layers at different speeds give the parallax effect;
//! draw order comes from the entity's [`ZIndex`](super::zindex::ZIndex).

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct ScrollLayer {
    pub tex_key: String,
    /// Leftward speed in pixels per second.
    pub speed: f32,
    /// Unscaled texture width in pixels.
    pub texture_width: f32,
    /// Display scale of the texture.
    pub scale: f32,
    /// Current horizontal offset, in `(-scale * texture_width, 0]`.
    pub offset: f32,
}

impl ScrollLayer {
    pub fn new(tex_key: impl Into<String>, speed: f32, texture_width: f32, scale: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            speed,
            texture_width,
            scale,
            offset: 0.0,
        }
    }

    /// Width of one drawn copy of the texture.
    pub fn span(&self) -> f32 {
        self.texture_width * self.scale
    }

    /// Slide the layer left by `speed * delta`, snapping back to zero once a
    /// full copy has scrolled off.
    pub fn scroll(&mut self, delta: f32) {
        self.offset -= self.speed * delta;
        if self.offset <= -self.span() {
            self.offset = 0.0;
        }
    }

    /// X positions of the two copies that together cover the viewport.
    pub fn copy_positions(&self) -> [f32; 2] {
        [self.offset, self.offset + self.span()]
    }
}
