mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod enemies;
mod input;
mod level;
mod map;
mod movement;
mod player;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Glutton".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // Config first: later plugins read the tuning resources it inserts
    .add_plugins(config::ConfigPlugin)
    .add_plugins((
        core::CorePlugin,
        input::InputPlugin,
        movement::MovementPlugin,
        enemies::EnemiesPlugin,
        player::PlayerPlugin,
        level::LevelPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
