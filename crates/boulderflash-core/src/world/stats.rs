//! Simulation statistics collection trait

/// Trait for collecting simulation statistics
///
/// Lets the engine report activity without knowing how (or whether) it is
/// aggregated by the caller.
pub trait SimStats {
    /// Record that a falling object moved (fall, rise or slide)
    fn record_object_moved(&mut self);

    /// Record that an enemy moved one cell
    fn record_enemy_moved(&mut self);

    /// Record that a bomb went off
    fn record_detonation(&mut self);

    /// Record that an empty cell turned into sludge
    fn record_sludge_growth(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_object_moved(&mut self) {}
    fn record_enemy_moved(&mut self) {}
    fn record_detonation(&mut self) {}
    fn record_sludge_growth(&mut self) {}
}
