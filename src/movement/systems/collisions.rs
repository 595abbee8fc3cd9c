//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Grounded, PhysicsTuning};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<PhysicsTuning>,
    mut query: Query<(Entity, &Transform, &Collider, &mut Grounded)>,
) {
    // Only terrain counts as ground, not enemies or the exit trigger
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Platform);

    for (entity, transform, collider, mut grounded) in &mut query {
        let was_grounded = grounded.0;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_probe_distance,
            true,
            &ground_filter,
        );

        grounded.0 = hit.is_some();

        if grounded.0 != was_grounded {
            trace!("{:?} grounded={}", entity, grounded.0);
        }
    }
}
