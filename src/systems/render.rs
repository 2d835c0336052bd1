//! Rendering.
//!
//! A frame is first described as a list of [`DrawCommand`]s built from the
//! world ([`build_draw_list`]), then replayed against Raylib
//! ([`render_system`]). Keeping the list as plain data lets tests inspect a
//! frame without opening a window.
//!
//! Frame layout: clear to white, parallax layers back to front (two copies
//! each), then either every obstacle and the character, or the end-of-game
//! text once the outcome is decided.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::{Obstacle, Player};
use crate::components::scrolllayer::ScrollLayer;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::outcome::GameOutcome;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

pub const OUTCOME_FONT_SIZE: i32 = 40;
pub const LOST_TEXT: &str = "Game Over!";
pub const WON_TEXT: &str = "You Win!";

#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear(Color),
    /// Whole texture at `position`, scaled uniformly.
    Layer {
        tex_key: String,
        position: Vector2,
        scale: f32,
        tint: Color,
    },
    /// One frame of a spritesheet at `position`.
    Sprite {
        tex_key: String,
        source: Rectangle,
        position: Vector2,
        tint: Color,
    },
    Text {
        text: &'static str,
        x: i32,
        y: i32,
        font_size: i32,
        color: Color,
    },
    RectLines {
        rect: Rectangle,
        color: Color,
    },
    Fps {
        x: i32,
        y: i32,
    },
}

/// Describe the current frame.
pub fn build_draw_list(world: &mut World) -> Vec<DrawCommand> {
    let mut list = vec![DrawCommand::Clear(Color::WHITE)];

    let mut layers: Vec<(ScrollLayer, ZIndex)> = {
        let mut q = world.query::<(&ScrollLayer, &ZIndex)>();
        q.iter(world).map(|(l, z)| (l.clone(), *z)).collect()
    };
    layers.sort_by_key(|(_, z)| *z);
    for (layer, _) in layers.iter() {
        for x in layer.copy_positions() {
            list.push(DrawCommand::Layer {
                tex_key: layer.tex_key.clone(),
                position: Vector2 { x, y: 0.0 },
                scale: layer.scale,
                tint: Color::WHITE,
            });
        }
    }

    let screen = *world.resource::<ScreenSize>();
    match *world.resource::<GameOutcome>() {
        GameOutcome::InProgress => {
            let mut obstacles: Vec<(usize, Sprite, MapPosition)> = {
                let mut q = world.query::<(&Obstacle, &Sprite, &MapPosition)>();
                q.iter(world)
                    .map(|(o, s, p)| (o.index, s.clone(), *p))
                    .collect()
            };
            obstacles.sort_by_key(|(index, _, _)| *index);

            let players: Vec<(Sprite, MapPosition)> = {
                let mut q = world.query_filtered::<(&Sprite, &MapPosition), With<Player>>();
                q.iter(world).map(|(s, p)| (s.clone(), *p)).collect()
            };

            let sprites = obstacles.into_iter().map(|(_, s, p)| (s, p)).chain(players);
            for (sprite, pos) in sprites {
                list.push(DrawCommand::Sprite {
                    source: sprite.frame_rect(),
                    tex_key: sprite.tex_key,
                    position: pos.pos,
                    tint: Color::WHITE,
                });
            }
        }
        GameOutcome::Lost => list.push(outcome_text(LOST_TEXT, Color::RED, screen)),
        GameOutcome::Won => list.push(outcome_text(WON_TEXT, Color::GREEN, screen)),
    }

    if world.contains_resource::<DebugMode>() {
        let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
        for (collider, position) in colliders.iter(world) {
            list.push(DrawCommand::RectLines {
                rect: collider.rect(position.pos),
                color: Color::RED,
            });
        }
        list.push(DrawCommand::Fps { x: 10, y: 10 });
    }

    list
}

fn outcome_text(text: &'static str, color: Color, screen: ScreenSize) -> DrawCommand {
    DrawCommand::Text {
        text,
        x: screen.w / 4,
        y: screen.h / 2,
        font_size: OUTCOME_FONT_SIZE,
        color,
    }
}

/// Replay a draw list on an open drawing scope.
pub fn execute_draw_list(d: &mut RaylibDrawHandle, textures: &TextureStore, list: &[DrawCommand]) {
    for command in list {
        match command {
            DrawCommand::Clear(color) => d.clear_background(*color),
            DrawCommand::Layer {
                tex_key,
                position,
                scale,
                tint,
            } => match textures.get(tex_key) {
                Some(tex) => d.draw_texture_ex(tex, *position, 0.0, *scale, *tint),
                None => log::warn!("Texture '{}' not found", tex_key),
            },
            DrawCommand::Sprite {
                tex_key,
                source,
                position,
                tint,
            } => match textures.get(tex_key) {
                Some(tex) => d.draw_texture_rec(tex, *source, *position, *tint),
                None => log::warn!("Texture '{}' not found", tex_key),
            },
            DrawCommand::Text {
                text,
                x,
                y,
                font_size,
                color,
            } => d.draw_text(text, *x, *y, *font_size, *color),
            DrawCommand::RectLines { rect, color } => d.draw_rectangle_lines(
                rect.x as i32,
                rect.y as i32,
                rect.width as i32,
                rect.height as i32,
                *color,
            ),
            DrawCommand::Fps { x, y } => d.draw_fps(*x, *y),
        }
    }
}

/// Draw the current frame to the window.
pub fn render_system(world: &mut World) {
    let list = build_draw_list(world);

    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    {
        let th = world.non_send_resource::<RaylibThread>();
        let textures = world.resource::<TextureStore>();
        let mut d = rl.begin_drawing(th);
        execute_draw_list(&mut d, textures, &list);
    }
    world.insert_non_send_resource(rl);
}
