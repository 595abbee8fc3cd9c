//! Delayed continuations bound to a target entity.
//!
//! A task stores the target's `Entity`, which carries a generation. A task
//! whose target was despawned (or despawned and its index reused) resolves
//! to a failed lookup when it fires, and the runner drops it.

use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DeferredTask<A> {
    pub target: Entity,
    pub remaining: f32,
    pub action: A,
}

/// Queue of "wait N seconds, then apply `A` to an entity".
#[derive(Resource, Debug)]
pub struct DeferredTasks<A: Send + Sync + 'static> {
    tasks: Vec<DeferredTask<A>>,
}

impl<A: Send + Sync + 'static> Default for DeferredTasks<A> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

impl<A: Send + Sync + 'static> DeferredTasks<A> {
    pub fn schedule(&mut self, target: Entity, delay_secs: f32, action: A) {
        self.tasks.push(DeferredTask {
            target,
            remaining: delay_secs,
            action,
        });
    }

    /// Advance all timers and return the tasks that came due, in the order
    /// they were scheduled.
    pub fn tick(&mut self, dt: f32) -> Vec<DeferredTask<A>> {
        let mut due = Vec::new();
        let mut pending = Vec::with_capacity(self.tasks.len());

        for mut task in self.tasks.drain(..) {
            task.remaining -= dt;
            if task.remaining <= 0.0 {
                due.push(task);
            } else {
                pending.push(task);
            }
        }

        self.tasks = pending;
        due
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
