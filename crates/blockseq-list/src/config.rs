//! Sequence configuration parameters.

/// Configuration for a [`BlockSequence`](crate::BlockSequence).
///
/// Controls how the node arena is sized and whether vacated slots are
/// recycled. Fixed for the lifetime of the sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of node slots reserved at construction.
    ///
    /// Default: 16. The arena grows past this on demand.
    pub initial_capacity: usize,

    /// Whether slots vacated by removal are reused by later insertions.
    ///
    /// Default: `true`. With `false` the arena only grows, so every
    /// handle ever issued keeps pointing at a dead slot instead of a
    /// recycled one. Useful when chasing stale-handle bugs.
    pub reuse_slots: bool,
}

impl SequenceConfig {
    /// Default number of reserved slots.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

    /// Create a config with the given initial capacity.
    ///
    /// Uses default values for all other parameters.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            reuse_slots: true,
        }
    }

    /// Disable slot reuse.
    pub fn without_slot_reuse(mut self) -> Self {
        self.reuse_slots = false;
        self
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
