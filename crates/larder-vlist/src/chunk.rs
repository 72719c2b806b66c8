//! Fixed-capacity chunks and their owning links.
//!
//! A [`Chunk`] is one allocation of slot storage plus exclusive ownership
//! of the next-older chunk. Both the slot vector and the node holding it
//! come from the array's allocator. The slot vector is sized exactly once,
//! when the chunk is created, and never pushed past that length again, so
//! the elements inside never move.

use allocator_api2::alloc::Allocator;
use allocator_api2::boxed::Box;
use allocator_api2::vec::Vec;

use crate::error::VlistError;

/// One block of slots in the chain.
///
/// Slot `0` is the *top* of the chunk: pushes fill a chunk from its last
/// slot downwards, so the newest element of a full chunk sits at slot `0`.
pub(crate) struct Chunk<T, A: Allocator> {
    /// Slot storage. `slots.len()` is the chunk's capacity.
    slots: Vec<Option<T>, A>,
    /// The next-older chunk, if any.
    pub(crate) next: Option<Box<Chunk<T, A>, A>>,
}

impl<T, A: Allocator + Clone> Chunk<T, A> {
    /// Allocate an unlinked chunk with `capacity` vacant slots.
    ///
    /// Storage is requested first, then the node. Either refusal is
    /// reported as an allocation failure for `capacity` slots, and the
    /// storage is handed back if only the node was refused.
    pub(crate) fn allocate(alloc: &A, capacity: usize) -> Result<Box<Self, A>, VlistError> {
        let refused = || VlistError::AllocationFailure {
            requested: capacity,
        };
        let mut slots = Vec::new_in(alloc.clone());
        slots.try_reserve_exact(capacity).map_err(|_| refused())?;
        // Exactly `capacity` is reserved, so this never reallocates.
        slots.resize_with(capacity, || None);
        Box::try_new_in(Self { slots, next: None }, alloc.clone()).map_err(|_| refused())
    }
}

impl<T, A: Allocator> Chunk<T, A> {
    /// Number of slots in this chunk.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn slot(&self, pos: usize) -> &Option<T> {
        &self.slots[pos]
    }

    pub(crate) fn slot_mut(&mut self, pos: usize) -> &mut Option<T> {
        &mut self.slots[pos]
    }

    /// Write `value` into slot `pos`, which must be free.
    pub(crate) fn put(&mut self, pos: usize, value: T) {
        debug_assert!(self.slots[pos].is_none(), "slot {pos} is not free");
        self.slots[pos] = Some(value);
    }

    /// Move the content of slot `pos` out, leaving it vacant.
    pub(crate) fn take(&mut self, pos: usize) -> Option<T> {
        self.slots[pos].take()
    }

    /// Turn the slots in `lo..hi` into live slots.
    ///
    /// With a fill hook each slot receives a fresh value; without one the
    /// slots stay vacant.
    pub(crate) fn fill(&mut self, lo: usize, hi: usize, fill: Option<fn() -> T>) {
        if let Some(fill) = fill {
            for slot in &mut self.slots[lo..hi] {
                *slot = Some(fill());
            }
        }
    }
}

/// Drop a chain one chunk at a time.
///
/// Letting the head box drop on its own recurses once per link, which a
/// long chain under a capacity ceiling turns into a stack overflow.
pub(crate) fn release_chain<T, A: Allocator>(mut chunk: Option<Box<Chunk<T, A>, A>>) {
    while let Some(mut c) = chunk {
        chunk = c.next.take();
    }
}
