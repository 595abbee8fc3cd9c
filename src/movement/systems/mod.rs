//! Movement domain: system modules for ground probes and attachments.

pub(crate) mod attachments;
pub(crate) mod collisions;

pub(crate) use attachments::{sync_attachments, sync_sprite_facing};
pub(crate) use collisions::detect_ground;
