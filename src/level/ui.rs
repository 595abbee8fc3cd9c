//! Level domain: blocking error screen when a level cannot be loaded.

use bevy::prelude::*;

use crate::level::components::LoadErrorUI;
use crate::level::resources::{LevelCatalog, LevelSession};

pub(crate) fn spawn_load_error_ui(
    mut commands: Commands,
    session: Res<LevelSession>,
    catalog: Res<LevelCatalog>,
) {
    let bg_color = Color::srgba(0.1, 0.02, 0.02, 0.98);
    let title_color = Color::srgb(0.95, 0.4, 0.4);
    let text_color = Color::srgb(0.9, 0.9, 0.9);

    let level_name = catalog
        .get(session.index)
        .map(|def| def.name.as_str())
        .unwrap_or("unknown level");
    let message = session
        .last_error
        .as_deref()
        .unwrap_or("Unknown error");

    commands
        .spawn((
            LoadErrorUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(bg_color),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Could not load {}", level_name)),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(message.to_string()),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(text_color),
                TextLayout::new_with_justify(Justify::Center),
            ));
        });
}
