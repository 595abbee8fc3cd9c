//! Helpers for reading collision pairs.

use bevy::prelude::*;

/// Order an unordered collision pair so that the first entity satisfies
/// `is_first` and the second `is_second`. `None` if neither order matches.
pub fn ordered_pair(
    a: Entity,
    b: Entity,
    is_first: impl Fn(Entity) -> bool,
    is_second: impl Fn(Entity) -> bool,
) -> Option<(Entity, Entity)> {
    if is_first(a) && is_second(b) {
        Some((a, b))
    } else if is_first(b) && is_second(a) {
        Some((b, a))
    } else {
        None
    }
}
