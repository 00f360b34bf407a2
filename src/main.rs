mod boss;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod feedback;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::BossDesignRegistry;

/// Boss placed in the arena at startup when bosses.ron defines it
const ARENA_BOSS_ID: &str = "crypt_warden";

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Boss Arena".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::ZERO))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        boss::BossPlugin,
        feedback::FeedbackPlugin,
    ))
    .add_systems(Startup, spawn_arena_boss);

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}

fn spawn_arena_boss(mut commands: Commands, registry: Res<BossDesignRegistry>) {
    let design = registry.resolve(ARENA_BOSS_ID);
    boss::spawn_boss(&mut commands, design, Vec2::new(0.0, 150.0), 1);
}
