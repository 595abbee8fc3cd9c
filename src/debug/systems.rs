//! Debug domain: overlay toggle, level hotkeys and the info readout.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{ExitReachedEvent, GameState, RestartLevelEvent, RestartReason};
use crate::debug::state::DebugState;
use crate::enemies::{Enemy, Inhalable};
use crate::input::{Action, ActionState};
use crate::level::{LevelCatalog, LevelSession};
use crate::movement::Facing;
use crate::player::{DamageFlash, JumpCharges, Player, PlayerAnimation, PlayerState};

/// Marker for the info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Toggle the info overlay with F1
pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Info overlay {}", if debug_state.show_info { "on" } else { "off" });
    }
}

/// F2 restarts the current level, F3 skips to the next one.
pub(crate) fn handle_level_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut restarts: MessageWriter<RestartLevelEvent>,
    mut exits: MessageWriter<ExitReachedEvent>,
) {
    if keyboard.just_pressed(KeyCode::F2) {
        info!("[DEBUG] Forcing level restart");
        restarts.write(RestartLevelEvent {
            reason: RestartReason::Died,
        });
    }
    if keyboard.just_pressed(KeyCode::F3) {
        info!("[DEBUG] Skipping to next level");
        exits.write(ExitReachedEvent);
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    game_state: Res<State<GameState>>,
    session: Res<LevelSession>,
    catalog: Res<LevelCatalog>,
    actions: Res<ActionState>,
    player_query: Query<
        (
            &Transform,
            &LinearVelocity,
            &Facing,
            &PlayerState,
            &JumpCharges,
            &DamageFlash,
            &PlayerAnimation,
        ),
        With<Player>,
    >,
    enemy_query: Query<&Inhalable, With<Enemy>>,
    mut overlay_query: Query<(Entity, &mut Text), With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for (entity, _) in &overlay_query {
            commands.entity(entity).despawn();
        }
        return;
    }

    let Ok((_, mut text)) = overlay_query.single_mut() else {
        spawn_debug_info_overlay(&mut commands);
        return;
    };

    let level_name = catalog
        .get(session.index)
        .map(|def| def.name.as_str())
        .unwrap_or("-");
    let enemies = enemy_query.iter().count();
    let inhalable = enemy_query.iter().filter(|i| i.0).count();

    let held: Vec<_> = Action::ALL
        .iter()
        .filter(|action| actions.is_held(**action))
        .map(|action| format!("{:?}", action))
        .collect();

    let player_info = match player_query.single() {
        Ok((transform, velocity, facing, state, charges, flash, animation)) => format!(
            "Pos: ({:.0}, {:.0})  Vel: ({:.0}, {:.0})\nFacing: {:?}  Anim: {:?}\nHP: {}  Jumps: {}/{}  Flashes: {}\nInhaling: {}  Full: {}",
            transform.translation.x,
            transform.translation.y,
            velocity.x,
            velocity.y,
            facing,
            animation,
            state.health,
            charges.remaining,
            charges.max,
            flash.active(),
            state.is_inhaling,
            state.is_full,
        ),
        Err(_) => "No player".to_string(),
    };

    **text = format!(
        "State: {:?}  Level {}: {}\n{}\nHeld: [{}]\nEnemies: {} ({} inhalable)",
        game_state.get(),
        session.index,
        level_name,
        player_info,
        held.join(", "),
        enemies,
        inhalable,
    );
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
