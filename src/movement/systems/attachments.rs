//! Movement domain: positional children and sprite facing.

use bevy::prelude::*;

use crate::movement::{Attached, Facing};

/// Re-place every attached entity relative to its owner. The owner handle is
/// generation-checked, so an attachment whose owner is gone is despawned
/// instead of following a recycled entity.
pub(crate) fn sync_attachments(
    mut commands: Commands,
    owners: Query<(&Transform, Option<&Facing>), Without<Attached>>,
    mut attached: Query<(Entity, &Attached, &mut Transform)>,
) {
    for (entity, attachment, mut transform) in &mut attached {
        let Ok((owner_transform, facing)) = owners.get(attachment.owner) else {
            debug!("Owner of {:?} is gone, despawning attachment", entity);
            commands.entity(entity).despawn();
            continue;
        };

        let offset = attachment.offset_for(facing.copied().unwrap_or_default());
        transform.translation.x = owner_transform.translation.x + offset.x;
        transform.translation.y = owner_transform.translation.y + offset.y;
    }
}

pub(crate) fn sync_sprite_facing(mut query: Query<(&Facing, &mut Sprite), Changed<Facing>>) {
    for (facing, mut sprite) in &mut query {
        sprite.flip_x = *facing == Facing::Left;
    }
}
