//! Level domain: horizontal camera follow.

/// Camera x for this frame. The camera tracks the player, offset so the
/// player sits left of centre, until the player passes `left_edge + limit`;
/// past that it holds its current x.
pub fn camera_follow_x(
    player_x: f32,
    camera_x: f32,
    left_edge: f32,
    limit: f32,
    offset: f32,
) -> f32 {
    if player_x <= left_edge + limit {
        player_x + offset
    } else {
        camera_x
    }
}
