/// Unique identifier for a shooting-star event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeteorId(pub u64);

/// A change notification drained by the render layer. The snapshot is the
/// source of truth; these exist so a consumer can poll cheaply and only
/// re-read when something actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyEvent {
    MeteorSpawned(MeteorId),
    MeteorRetired(MeteorId),
}
