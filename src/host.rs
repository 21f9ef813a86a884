//! Collaborators the gesture controller drives but does not own the implementation of.

use crate::config::DraggableDescriptor;
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProxyId(pub u64);

/// Owns the visual duplicates spawned while an item is being dragged.
pub trait ProxyHost {
    /// Creates a copy of `item` in the item's own container, centred on `position`.
    fn spawn_proxy(&mut self, index: usize, item: &DraggableDescriptor, position: Point) -> ProxyId;
    fn move_proxy(&mut self, id: ProxyId, position: Point);
    fn destroy_proxy(&mut self, id: ProxyId);
}

pub trait ScoreTracker {
    fn increment(&mut self);
    fn get(&self) -> u32;
    fn reset(&mut self);
}

/// Reveals the game-over view. Called at most once per game.
pub trait GameOverSignal {
    fn show(&mut self);
}
