//! Growth policy configuration.

use crate::error::VlistError;

/// Growth policy for a [`ChunkedArray`](crate::ChunkedArray).
///
/// Controls how large each new chunk is. Validated at construction;
/// immutable once the array exists, so arrays with different policies
/// can coexist freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VlistConfig {
    /// Multiplier applied to the current head's capacity when a new chunk
    /// is needed.
    ///
    /// Default: 4. Must be at least 1; a factor of 1 gives equal-sized
    /// chunks.
    pub growth_factor: usize,

    /// Capacity of the first chunk an empty array allocates.
    ///
    /// Default: 1. Must be at least 1.
    pub first_chunk_capacity: usize,

    /// Upper bound on the capacity of any single chunk.
    ///
    /// Default: `None` (unbounded). Large single allocations are the ones
    /// most likely to be refused, so long-lived arrays on constrained
    /// systems should set this. Once set, total length can no longer be
    /// derived from the newest chunk alone.
    pub max_chunk_capacity: Option<usize>,
}

impl VlistConfig {
    /// Default growth factor.
    pub const DEFAULT_GROWTH_FACTOR: usize = 4;

    /// Default capacity of the first chunk.
    ///
    /// The first chunk really holds one slot; it is not pre-multiplied by
    /// the growth factor, so a fresh array grows 1, 4, 16, ... rather
    /// than starting at 4.
    pub const DEFAULT_FIRST_CHUNK_CAPACITY: usize = 1;

    /// Create a config with the default growth policy and no ceiling.
    pub fn new() -> Self {
        Self {
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            first_chunk_capacity: Self::DEFAULT_FIRST_CHUNK_CAPACITY,
            max_chunk_capacity: None,
        }
    }

    /// Set the chunk capacity ceiling.
    pub fn with_max_chunk_capacity(mut self, max: usize) -> Self {
        self.max_chunk_capacity = Some(max);
        self
    }

    /// Check every field against its constraint.
    pub fn validate(&self) -> Result<(), VlistError> {
        if self.growth_factor == 0 {
            return Err(VlistError::InvalidConfig {
                reason: "growth_factor must be at least 1".into(),
            });
        }
        if self.first_chunk_capacity == 0 {
            return Err(VlistError::InvalidConfig {
                reason: "first_chunk_capacity must be at least 1".into(),
            });
        }
        if self.max_chunk_capacity == Some(0) {
            return Err(VlistError::InvalidConfig {
                reason: "max_chunk_capacity must be at least 1 when set".into(),
            });
        }
        Ok(())
    }

    /// Capacity of the chunk that follows a head of capacity `head`.
    ///
    /// `None` means the array has no chunk yet. The result is clamped to
    /// `max_chunk_capacity` and saturates instead of overflowing; an
    /// absurd request then fails in the allocator, not here.
    pub fn next_capacity(&self, head: Option<usize>) -> usize {
        let proposed = match head {
            Some(capacity) => capacity.saturating_mul(self.growth_factor),
            None => self.first_chunk_capacity,
        };
        match self.max_chunk_capacity {
            Some(max) => proposed.min(max),
            None => proposed,
        }
    }
}

impl Default for VlistConfig {
    fn default() -> Self {
        Self::new()
    }
}
