//! Level setup and schedule wiring.
//!
//! All gameplay tuning lives here as constants. [`load_textures`] is the only
//! part that needs a live Raylib context; [`spawn_level`] only needs the
//! texture sizes, so tests can build a full level without a window.

use std::path::Path;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::InputControlled;
use crate::components::jumper::Jumper;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::{Obstacle, Player};
use crate::components::rigidbody::RigidBody;
use crate::components::scrolllayer::ScrollLayer;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::outcome::log_outcome_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::input::InputState;
use crate::resources::obstaclefield::ObstacleField;
use crate::resources::outcome::GameOutcome;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::collision::{collision_detector, collision_observer};
use crate::systems::kinematics::{GRAVITY_FORCE, player_kinematics};
use crate::systems::movement::movement;
use crate::systems::obstaclefield::obstacle_field;
use crate::systems::outcome::update_outcome;
use crate::systems::scroll::scroll_layers;

pub const WORLD_WIDTH: i32 = 512;
pub const WORLD_HEIGHT: i32 = 380;

pub const GRAVITY: f32 = 1500.0;
pub const JUMP_VELOCITY: f32 = -800.0;
/// Pixels per tick while a movement key is held.
pub const PLAYER_STEP: f32 = 10.0;

pub const PLAYER_FRAMES: usize = 6;
pub const PLAYER_FRAME_INTERVAL: f32 = 1.0 / 12.0;

pub const OBSTACLE_COUNT: usize = 10;
const _: () = assert!(OBSTACLE_COUNT > 0, "obstacle field must not be empty");
pub const OBSTACLE_SPACING: f32 = 300.0;
pub const OBSTACLE_VELOCITY: f32 = -200.0;
pub const OBSTACLE_GRID: usize = 8;
pub const OBSTACLE_FRAMES: usize = 60;
pub const OBSTACLE_FRAME_INTERVAL: f32 = 0.05;
/// Inset applied to every side of an obstacle before collision tests.
pub const OBSTACLE_PAD: f32 = 50.0;

pub const LAYER_SCALE: f32 = 2.0;

pub const TEX_PLAYER: &str = "scarfy";
pub const TEX_OBSTACLE: &str = "nebula";
pub const TEX_FAR: &str = "far-buildings";
pub const TEX_BACK: &str = "back-buildings";
pub const TEX_FORE: &str = "foreground";

/// Texture key, file name, scroll speed (px/s) and draw order of each
/// background layer.
pub const LAYERS: [(&str, &str, f32, i32); 3] = [
    (TEX_FAR, "far-buildings.png", 20.0, 0),
    (TEX_BACK, "back-buildings.png", 40.0, 1),
    (TEX_FORE, "foreground.png", 80.0, 2),
];

const SPRITE_FILES: [(&str, &str); 2] = [
    (TEX_PLAYER, "scarfy.png"),
    (TEX_OBSTACLE, "12_nebula_spritesheet.png"),
];

/// Pixel size of a loaded texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetSize {
    pub width: f32,
    pub height: f32,
}

impl SheetSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn of(texture: &Texture2D) -> Self {
        Self::new(texture.width as f32, texture.height as f32)
    }
}

/// Sizes of every texture the level is built from.
#[derive(Debug, Clone, Copy)]
pub struct LevelSheets {
    pub player: SheetSize,
    pub obstacle: SheetSize,
    /// Far, back and foreground layers, in [`LAYERS`] order.
    pub layers: [SheetSize; 3],
}

impl LevelSheets {
    /// Read the sizes from a store filled by [`load_textures`].
    pub fn from_store(textures: &TextureStore) -> Result<Self, String> {
        let size = |key: &str| {
            textures
                .get(key)
                .map(SheetSize::of)
                .ok_or_else(|| format!("texture '{}' not loaded", key))
        };
        Ok(Self {
            player: size(TEX_PLAYER)?,
            obstacle: size(TEX_OBSTACLE)?,
            layers: [size(TEX_FAR)?, size(TEX_BACK)?, size(TEX_FORE)?],
        })
    }
}

/// Load every texture of the level from `dir`.
pub fn load_textures(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    dir: &Path,
) -> Result<TextureStore, String> {
    let files = SPRITE_FILES
        .iter()
        .copied()
        .chain(LAYERS.iter().map(|(key, file, _, _)| (*key, *file)));

    let mut store = TextureStore::new();
    for (key, file) in files {
        let path = dir.join(file);
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("non UTF-8 texture path {:?}", path))?;
        let texture = rl
            .load_texture(th, path_str)
            .map_err(|e| format!("failed to load {}: {}", path.display(), e))?;
        log::info!(
            "Loaded texture '{}' ({}x{}) from {}",
            key,
            texture.width,
            texture.height,
            path.display()
        );
        store.insert(key, texture);
    }
    Ok(store)
}

/// Insert the per-run resources and spawn the character, the obstacle field
/// and the background layers.
pub fn spawn_level(world: &mut World, sheets: &LevelSheets) {
    let world_w = WORLD_WIDTH as f32;
    let world_h = WORLD_HEIGHT as f32;

    world.insert_resource(ScreenSize {
        w: WORLD_WIDTH,
        h: WORLD_HEIGHT,
    });
    world.init_resource::<WorldTime>();
    world.init_resource::<InputState>();
    world.insert_resource(GameOutcome::InProgress);

    for (i, (key, _, speed, z)) in LAYERS.iter().enumerate() {
        world.spawn((
            ScrollLayer::new(*key, *speed, sheets.layers[i].width, LAYER_SCALE),
            ZIndex(*z),
        ));
    }

    let obstacle_sprite = Sprite::from_sheet(
        TEX_OBSTACLE,
        sheets.obstacle.width,
        sheets.obstacle.height,
        OBSTACLE_GRID,
        OBSTACLE_GRID,
    );
    for index in 0..OBSTACLE_COUNT {
        let x = world_w + index as f32 * OBSTACLE_SPACING;
        world.spawn((
            Obstacle { index },
            MapPosition::new(x, world_h - obstacle_sprite.height),
            BoxCollider::inset(obstacle_sprite.width, obstacle_sprite.height, OBSTACLE_PAD),
            Animation::new(OBSTACLE_FRAMES, OBSTACLE_GRID, OBSTACLE_FRAME_INTERVAL),
            obstacle_sprite.clone(),
        ));
    }
    // the level ends once the last obstacle reaches the left edge
    let finish_line = world_w + (OBSTACLE_COUNT - 1) as f32 * OBSTACLE_SPACING;
    world.insert_resource(ObstacleField::new(OBSTACLE_VELOCITY, finish_line));

    let player_sprite = Sprite::from_sheet(
        TEX_PLAYER,
        sheets.player.width,
        sheets.player.height,
        PLAYER_FRAMES,
        1,
    );
    world.spawn((
        Player,
        MapPosition::new(
            world_w / 2.0 - player_sprite.width / 2.0,
            world_h - player_sprite.height,
        ),
        BoxCollider::new(player_sprite.width, player_sprite.height),
        RigidBody::new().with_force(GRAVITY_FORCE, Vector2 { x: 0.0, y: GRAVITY }),
        Jumper::new(JUMP_VELOCITY),
        InputControlled::new(PLAYER_STEP),
        Animation::new(PLAYER_FRAMES, PLAYER_FRAMES, PLAYER_FRAME_INTERVAL),
        player_sprite,
    ));

    log::info!(
        "Level spawned: {} obstacles, finish line at {}",
        OBSTACLE_COUNT,
        finish_line
    );
}

/// Register the gameplay observers. Call once before running any schedule.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(collision_observer));
    world.spawn(Observer::new(log_outcome_observer));
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();
}

/// Add the simulation systems to `schedule`, in tick order.
///
/// Input polling goes before [`scroll_layers`] and rendering after
/// [`update_outcome`]; both need a window and are added by the binary.
pub fn add_gameplay_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            scroll_layers,
            player_kinematics,
            obstacle_field,
            movement,
            animation,
            collision_detector,
            update_outcome,
        )
            .chain(),
    );
}
