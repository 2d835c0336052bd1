//! Dapper Dasher main entry point.
//!
//! A small side-scroller written in Rust using:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Dodge the nebulae with Space (jump) and A/D (move) until the last one has
//! scrolled past. F11 toggles the debug overlay.
//!
//! # Main Loop
//!
//! 1. Load config, open the window, load textures
//! 2. Spawn the level and register observers
//! 3. Every frame: advance time with the measured delta, then run input,
//!    simulation and rendering in one chained schedule
//! 4. Textures and the window are released when the world is dropped
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --assets ./textures
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;

use dapperdasher::game::{
    LevelSheets, WORLD_HEIGHT, WORLD_WIDTH, add_gameplay_systems, load_textures,
    register_observers, spawn_level,
};
use dapperdasher::resources::debugmode::DebugMode;
use dapperdasher::resources::gameconfig::GameConfig;
use dapperdasher::resources::texturestore::TextureStore;
use dapperdasher::resources::worldtime::WorldTime;
use dapperdasher::systems::input::update_input_state;
use dapperdasher::systems::outcome::update_outcome;
use dapperdasher::systems::render::render_system;
use dapperdasher::systems::scroll::scroll_layers;
use dapperdasher::systems::time::update_world_time;

/// Dapper Dasher
#[derive(Parser)]
#[command(version, about = "A tiny parallax side-scroller: jump over the nebulae.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Directory holding the textures (overrides the config file).
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(assets) = cli.assets {
        config.textures_dir = assets;
    }

    // --------------- Raylib window & assets ---------------
    let mut builder = raylib::init();
    builder.size(WORLD_WIDTH, WORLD_HEIGHT).title(&config.title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    let textures = match load_textures(&mut rl, &thread, &config.textures_dir) {
        Ok(textures) => textures,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let sheets = match LevelSheets::from_store(&textures) {
        Ok(sheets) => sheets,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.init_resource::<WorldTime>();
    world.insert_resource(textures);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    spawn_level(&mut world, &sheets);
    register_observers(&mut world);

    let mut update = Schedule::default();
    update.add_systems(update_input_state.before(scroll_layers));
    add_gameplay_systems(&mut update);
    update.add_systems(render_system.after(update_outcome));

    update.initialize(&mut world).expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);
    }

    // Textures must be unloaded while the GL context is still alive.
    world.remove_resource::<TextureStore>();
    log::info!("Goodbye");
}
