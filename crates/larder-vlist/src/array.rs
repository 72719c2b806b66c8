//! The chunked array: an owned chain of geometrically growing chunks.
//!
//! # Layout
//!
//! ```text
//! ChunkedArray { len, offset, head } ─▶ Chunk(cap 16) ─▶ Chunk(cap 4) ─▶ Chunk(cap 1)
//!                                        newest                              oldest
//! ```
//!
//! Only the head chunk can be partially used. `offset` counts its unused
//! slots, which are always the low-numbered ones: the head's live elements
//! occupy `offset..capacity`, with the newest at `offset`. Every other
//! chunk is full.
//!
//! # Addressing
//!
//! Logical index `i` (0 = oldest) is translated to a distance from the
//! top of the head chunk, `pos = len + offset - i - 1`. Walking the chain
//! and subtracting each chunk's capacity until `pos` fits lands on the
//! slot. The newest element (`i = len - 1`) maps to `pos = offset`; the
//! oldest element of a chunk is its last slot, and the next element back
//! is slot `0` of the following chunk. Cost is one step per chunk, which
//! is `O(log len)` under geometric growth.

use std::fmt;

use allocator_api2::alloc::{Allocator, Global};
use allocator_api2::boxed::Box;

use crate::chunk::{release_chain, Chunk};
use crate::config::VlistConfig;
use crate::error::VlistError;

/// A growable array whose elements never move once written.
///
/// Growth links a new, larger chunk in front of the existing ones instead
/// of reallocating, so a push never copies earlier elements. Pushes and
/// pops work at the logical end in amortized `O(1)`; indexed access walks
/// the chunk chain.
///
/// Slots reserved by [`ensure`](ChunkedArray::ensure) without a fill hook
/// are *vacant*: they count towards [`len`](ChunkedArray::len) but hold no
/// value until [`set`](ChunkedArray::set) writes one. Reads of a vacant
/// slot succeed with `None`.
///
/// Every chunk, both its slot storage and the node linking it, is
/// obtained from `A`. A refused request surfaces as
/// [`VlistError::AllocationFailure`] instead of aborting.
pub struct ChunkedArray<T, A: Allocator + Clone = Global> {
    head: Option<Box<Chunk<T, A>, A>>,
    /// Live elements across all chunks.
    len: usize,
    /// Unused slots at the low end of the head chunk.
    offset: usize,
    chunk_count: usize,
    /// Sum of all chunk capacities.
    capacity: usize,
    config: VlistConfig,
    fill: Option<fn() -> T>,
    alloc: A,
}

impl<T> ChunkedArray<T> {
    /// Create an empty array with the default growth policy.
    ///
    /// No chunk is allocated until the first push.
    pub fn new() -> Self {
        Self::empty(VlistConfig::default(), Global)
    }

    /// Create an empty array with a custom growth policy.
    pub fn with_config(config: VlistConfig) -> Result<Self, VlistError> {
        Self::with_config_in(config, Global)
    }

    /// Create an array holding `len` vacant slots, using the default policy.
    pub fn with_len(len: usize) -> Result<Self, VlistError> {
        Self::with_len_in(len, VlistConfig::default(), Global, None)
    }
}

impl<T: Default> ChunkedArray<T> {
    /// Create an array holding `len` default-valued elements.
    pub fn zeroed_with_len(len: usize) -> Result<Self, VlistError> {
        Self::with_len_in(len, VlistConfig::default(), Global, Some(T::default))
    }
}

impl<T> Default for ChunkedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator + Clone> ChunkedArray<T, A> {
    fn empty(config: VlistConfig, alloc: A) -> Self {
        Self {
            head: None,
            len: 0,
            offset: 0,
            chunk_count: 0,
            capacity: 0,
            config,
            fill: None,
            alloc,
        }
    }

    /// Create an empty array with a custom growth policy and allocator.
    pub fn with_config_in(config: VlistConfig, alloc: A) -> Result<Self, VlistError> {
        config.validate()?;
        Ok(Self::empty(config, alloc))
    }

    /// Create an array that already holds `len` live slots.
    ///
    /// The slots are filled with `fill` when given and left vacant
    /// otherwise. If any chunk cannot be allocated the error is returned
    /// and everything obtained so far is released.
    pub fn with_len_in(
        len: usize,
        config: VlistConfig,
        alloc: A,
        fill: Option<fn() -> T>,
    ) -> Result<Self, VlistError> {
        let mut array = Self::with_config_in(config, alloc)?;
        array.fill = fill;
        array.ensure(len)?;
        Ok(array)
    }

    /// Install a fill hook for slots reserved by [`ensure`](Self::ensure).
    pub fn with_fill(mut self, fill: fn() -> T) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Fill slots reserved by [`ensure`](Self::ensure) with `T::default()`.
    pub fn zeroed(self) -> Self
    where
        T: Default,
    {
        self.with_fill(T::default)
    }

    /// Number of live elements. `O(1)`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array has no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slots across all chunks, live or free.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of chunks currently allocated.
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// Capacities of every chunk, newest first.
    pub fn chunk_capacities(&self) -> Vec<usize> {
        let mut capacities = Vec::with_capacity(self.chunk_count);
        let mut chunk = self.head.as_deref();
        while let Some(c) = chunk {
            capacities.push(c.capacity());
            chunk = c.next.as_deref();
        }
        capacities
    }

    /// The growth policy this array was built with.
    pub fn config(&self) -> &VlistConfig {
        &self.config
    }

    /// The allocator chunks are obtained from.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Append `value` as the new last element.
    ///
    /// Allocates a new head chunk when the current one is full. If that
    /// allocation fails the array is unchanged and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<(), VlistError> {
        if self.offset == 0 {
            self.grow()?;
        }
        let Some(head) = self.head.as_deref_mut() else {
            unreachable!("grow leaves a head chunk with free slots");
        };
        self.offset -= 1;
        head.put(self.offset, value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element.
    ///
    /// Returns `Ok(None)` when the removed slot was vacant. A head chunk
    /// emptied by earlier pops is released here, once the pop has to move
    /// past it; a push in between reuses it instead.
    pub fn pop(&mut self) -> Result<Option<T>, VlistError> {
        if self.len == 0 {
            return Err(VlistError::Underflow);
        }
        if self
            .head
            .as_deref()
            .is_some_and(|head| self.offset == head.capacity())
        {
            self.release_head();
        }
        let Some(head) = self.head.as_deref_mut() else {
            unreachable!("a non-empty array has a head chunk");
        };
        let value = head.take(self.offset);
        self.offset += 1;
        self.len -= 1;
        Ok(value)
    }

    /// Borrow the element at `index` (0 = oldest).
    ///
    /// Returns `Ok(None)` for a vacant slot.
    pub fn get(&self, index: usize) -> Result<Option<&T>, VlistError> {
        self.slot(index).map(Option::as_ref)
    }

    /// Mutably borrow the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, VlistError> {
        self.slot_mut(index).map(Option::as_mut)
    }

    /// Overwrite the element at `index`, returning what the slot held.
    ///
    /// The length is unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, VlistError> {
        self.slot_mut(index).map(|slot| slot.replace(value))
    }

    /// Grow the array to exactly `target` live elements.
    ///
    /// Free slots in the head are used first, then new chunks are linked
    /// following the growth policy. New slots are filled by the fill hook,
    /// or left vacant without one. Excess capacity in the last chunk stays
    /// free for later pushes. Existing elements are never touched.
    ///
    /// A `target` at or below the current length is a no-op: shrinking is
    /// done with [`pop`](Self::pop), which lets the caller see exactly what
    /// is discarded. Returns the resulting length.
    ///
    /// All chunks the call needs are allocated before any slot is filled.
    /// A refused allocation unlinks the chunks obtained so far and leaves
    /// the array as it was.
    pub fn ensure(&mut self, target: usize) -> Result<usize, VlistError> {
        if target <= self.len {
            return Ok(self.len);
        }
        let needed = target - self.len;
        let old_offset = self.offset;

        // New chunks are linked as they arrive; a refusal unlinks them.
        let mut linked = 0usize;
        let mut reserved = self.offset;
        while reserved < needed {
            let capacity = self
                .config
                .next_capacity(self.head.as_deref().map(Chunk::capacity));
            match Chunk::allocate(&self.alloc, capacity) {
                Ok(chunk) => self.link_head(chunk),
                Err(err) => {
                    for _ in 0..linked {
                        self.release_head();
                    }
                    self.offset = old_offset;
                    return Err(err);
                }
            }
            linked += 1;
            reserved = reserved.saturating_add(capacity);
        }

        // Free slots left over in whichever chunk ends up as head.
        let overshoot = reserved - needed;
        let fill = self.fill;
        let mut chunk = self.head.as_deref_mut();
        let mut depth = 0usize;
        while let Some(c) = chunk {
            if depth == linked {
                // The old head: only its previously free slots are new.
                let lo = if linked == 0 { overshoot } else { 0 };
                c.fill(lo, old_offset, fill);
                break;
            }
            let lo = if depth == 0 { overshoot } else { 0 };
            let capacity = c.capacity();
            c.fill(lo, capacity, fill);
            depth += 1;
            chunk = c.next.as_deref_mut();
        }

        self.offset = overshoot;
        self.len = target;
        Ok(self.len)
    }

    /// Link a freshly allocated head chunk with all slots free.
    fn grow(&mut self) -> Result<(), VlistError> {
        let capacity = self
            .config
            .next_capacity(self.head.as_deref().map(Chunk::capacity));
        let chunk = Chunk::allocate(&self.alloc, capacity)?;
        self.link_head(chunk);
        self.offset = capacity;
        Ok(())
    }

    fn link_head(&mut self, mut chunk: Box<Chunk<T, A>, A>) {
        self.chunk_count += 1;
        self.capacity += chunk.capacity();
        chunk.next = self.head.take();
        self.head = Some(chunk);
    }

    /// Release the head chunk and promote the next one, which is full.
    fn release_head(&mut self) {
        if let Some(mut head) = self.head.take() {
            self.chunk_count -= 1;
            self.capacity -= head.capacity();
            self.head = head.next.take();
            self.offset = 0;
        }
    }

    fn out_of_bounds(&self, index: usize) -> VlistError {
        VlistError::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }

    fn slot(&self, index: usize) -> Result<&Option<T>, VlistError> {
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        let mut pos = self.len + self.offset - index - 1;
        let mut chunk = self.head.as_deref();
        while let Some(c) = chunk {
            let capacity = c.capacity();
            if pos < capacity {
                return Ok(c.slot(pos));
            }
            pos -= capacity;
            chunk = c.next.as_deref();
        }
        Err(self.out_of_bounds(index))
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<T>, VlistError> {
        let len = self.len;
        if index >= len {
            return Err(VlistError::IndexOutOfBounds { index, len });
        }
        let mut pos = len + self.offset - index - 1;
        let mut chunk = self.head.as_deref_mut();
        while let Some(c) = chunk {
            let capacity = c.capacity();
            if pos < capacity {
                return Ok(c.slot_mut(pos));
            }
            pos -= capacity;
            chunk = c.next.as_deref_mut();
        }
        Err(VlistError::IndexOutOfBounds { index, len })
    }

    /// Check every structural invariant, panicking on the first violation.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let capacities = self.chunk_capacities();
        assert_eq!(capacities.len(), self.chunk_count, "chunk_count drifted");
        assert_eq!(
            capacities.iter().sum::<usize>(),
            self.capacity,
            "capacity drifted"
        );
        assert!(
            capacities.windows(2).all(|w| w[0] >= w[1]),
            "capacities not non-increasing: {capacities:?}"
        );
        match capacities.first() {
            Some(&head) => {
                assert!(self.offset <= head, "offset {} > head {head}", self.offset);
                let live = head - self.offset + capacities[1..].iter().sum::<usize>();
                assert_eq!(live, self.len, "len disagrees with chunk occupancy");
            }
            None => {
                assert_eq!(self.offset, 0);
                assert_eq!(self.len, 0);
            }
        }
        if let Some(head) = self.head.as_deref() {
            for pos in 0..self.offset {
                assert!(head.slot(pos).is_none(), "free slot {pos} holds a value");
            }
        }
    }
}

impl<T, A: Allocator + Clone> Drop for ChunkedArray<T, A> {
    fn drop(&mut self) {
        release_chain(self.head.take());
    }
}

impl<T, A: Allocator + Clone> fmt::Debug for ChunkedArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkedArray")
            .field("len", &self.len)
            .field("offset", &self.offset)
            .field("chunks", &self.chunk_capacities())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pushed(values: impl IntoIterator<Item = i32>) -> ChunkedArray<i32> {
        let mut array = ChunkedArray::new();
        for v in values {
            array.push(v).unwrap();
        }
        array
    }

    #[test]
    fn push_five_then_index_and_pop() {
        let mut array = pushed(1..=5);
        assert_eq!(array.len(), 5);
        assert_eq!(array.get(0), Ok(Some(&1)));
        assert_eq!(array.get(4), Ok(Some(&5)));

        assert_eq!(array.pop(), Ok(Some(5)));
        assert_eq!(array.len(), 4);
        assert_eq!(array.get(3), Ok(Some(&4)));
        array.assert_invariants();
    }

    #[test]
    fn get_follows_push_order_across_chunk_boundaries() {
        // 1 + 4 + 16 + 64 = 85 fills four chunks exactly; go a bit past.
        let array = pushed(0..100);
        assert_eq!(array.chunk_capacities(), vec![256, 64, 16, 4, 1]);
        for i in 0..100 {
            assert_eq!(array.get(i as usize), Ok(Some(&i)), "index {i}");
        }
        array.assert_invariants();
    }

    #[test]
    fn first_and_last_slot_of_every_chunk() {
        let array = pushed(0..85);
        // Chunk boundaries in push order: [0], [1..5), [5..21), [21..85).
        for &i in &[0, 1, 4, 5, 20, 21, 84] {
            assert_eq!(array.get(i), Ok(Some(&(i as i32))));
        }
        assert_eq!(array.capacity(), 85);
        array.assert_invariants();
    }

    #[test]
    fn pops_come_back_in_reverse_order() {
        let mut array = pushed(0..50);
        let popped: Vec<i32> = (0..50).map(|_| array.pop().unwrap().unwrap()).collect();
        let expected: Vec<i32> = (0..50).rev().collect();
        assert_eq!(popped, expected);
        assert!(array.is_empty());
        array.assert_invariants();
    }

    #[test]
    fn push_then_pop_restores_len() {
        let mut array = pushed(0..7);
        array.push(99).unwrap();
        assert_eq!(array.pop(), Ok(Some(99)));
        assert_eq!(array.len(), 7);
        assert_eq!(array.get(6), Ok(Some(&6)));
        array.assert_invariants();
    }

    #[test]
    fn pop_on_fresh_array_underflows() {
        let mut array = ChunkedArray::<i32>::new();
        assert_eq!(array.pop(), Err(VlistError::Underflow));
        assert_eq!(array.chunk_count(), 0);
    }

    #[test]
    fn pop_after_draining_underflows_without_freeing() {
        let mut array = pushed([1]);
        assert_eq!(array.pop(), Ok(Some(1)));
        assert_eq!(array.pop(), Err(VlistError::Underflow));
        // The drained head is kept for the next push.
        assert_eq!(array.chunk_count(), 1);
        array.assert_invariants();
    }

    #[test]
    fn get_and_set_reject_index_at_or_past_len() {
        let mut array = pushed(0..3);
        let at_len = VlistError::IndexOutOfBounds { index: 3, len: 3 };
        assert_eq!(array.get(3), Err(at_len.clone()));
        assert_eq!(array.set(3, 0), Err(at_len));
        assert_eq!(
            array.get(10),
            Err(VlistError::IndexOutOfBounds { index: 10, len: 3 })
        );
        assert_eq!(
            array.set(usize::MAX, 0),
            Err(VlistError::IndexOutOfBounds {
                index: usize::MAX,
                len: 3
            })
        );
    }

    #[test]
    fn get_on_empty_array_is_out_of_bounds() {
        let array = ChunkedArray::<i32>::new();
        assert_eq!(
            array.get(0),
            Err(VlistError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn set_returns_previous_and_leaves_neighbours() {
        let mut array = pushed(0..20);
        assert_eq!(array.set(7, 700), Ok(Some(7)));
        assert_eq!(array.get(7), Ok(Some(&700)));
        assert_eq!(array.get(6), Ok(Some(&6)));
        assert_eq!(array.get(8), Ok(Some(&8)));
        assert_eq!(array.len(), 20);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut array = pushed(0..5);
        if let Ok(Some(v)) = array.get_mut(2) {
            *v *= 10;
        }
        assert_eq!(array.get(2), Ok(Some(&20)));
    }

    #[test]
    fn ensure_grows_then_ignores_smaller_targets() {
        let mut array = ChunkedArray::<i32>::with_len(0).unwrap();
        assert_eq!(array.ensure(10), Ok(10));
        assert_eq!(array.len(), 10);
        assert_eq!(array.ensure(3), Ok(10));
        assert_eq!(array.len(), 10);
        for _ in 0..7 {
            array.pop().unwrap();
        }
        assert_eq!(array.len(), 3);
        array.assert_invariants();
    }

    #[test]
    fn ensure_without_fill_leaves_vacant_slots() {
        let mut array = pushed([1, 2]);
        array.ensure(6).unwrap();
        assert_eq!(array.get(0), Ok(Some(&1)));
        assert_eq!(array.get(1), Ok(Some(&2)));
        assert_eq!(array.get(2), Ok(None));
        assert_eq!(array.get(5), Ok(None));
        assert_eq!(array.set(5, 50), Ok(None));
        assert_eq!(array.get(5), Ok(Some(&50)));
        array.assert_invariants();
    }

    #[test]
    fn ensure_with_fill_zeroes_new_slots() {
        let mut array = ChunkedArray::<u32>::new().zeroed();
        array.push(9).unwrap();
        array.ensure(30).unwrap();
        assert_eq!(array.get(0), Ok(Some(&9)));
        for i in 1..30 {
            assert_eq!(array.get(i), Ok(Some(&0)), "index {i}");
        }
        array.assert_invariants();
    }

    #[test]
    fn ensure_overshoot_returns_to_free_slots() {
        let mut array = ChunkedArray::<u8>::new().zeroed();
        // Chunks 1 + 4 + 16 = 21 slots are needed for 6 elements.
        array.ensure(6).unwrap();
        assert_eq!(array.len(), 6);
        assert_eq!(array.chunk_capacities(), vec![16, 4, 1]);
        assert_eq!(array.capacity(), 21);
        // The 15 spare slots take pushes without another chunk.
        for v in 0..15 {
            array.push(v).unwrap();
        }
        assert_eq!(array.chunk_count(), 3);
        assert_eq!(array.get(6), Ok(Some(&0)));
        assert_eq!(array.get(20), Ok(Some(&14)));
        array.assert_invariants();
    }

    #[test]
    fn ensure_within_head_free_slots_allocates_nothing() {
        let mut array = pushed(0..2);
        // Heads: [4, 1], one used slot in the 4-chunk, three free.
        assert_eq!(array.chunk_capacities(), vec![4, 1]);
        array.ensure(4).unwrap();
        assert_eq!(array.chunk_count(), 2);
        assert_eq!(array.get(0), Ok(Some(&0)));
        assert_eq!(array.get(1), Ok(Some(&1)));
        array.push(7).unwrap();
        assert_eq!(array.get(4), Ok(Some(&7)));
        array.assert_invariants();
    }

    #[test]
    fn ensure_from_empty_to_exact_chunk_total() {
        let mut array = ChunkedArray::<u8>::new();
        array.ensure(21).unwrap();
        assert_eq!(array.chunk_capacities(), vec![16, 4, 1]);
        array.push(1).unwrap();
        assert_eq!(array.chunk_capacities(), vec![64, 16, 4, 1]);
        array.assert_invariants();
    }

    #[test]
    fn zeroed_with_len_fills_every_slot() {
        let array = ChunkedArray::<i64>::zeroed_with_len(37).unwrap();
        assert_eq!(array.len(), 37);
        assert!((0..37).all(|i| array.get(i) == Ok(Some(&0))));
        array.assert_invariants();
    }

    #[test]
    fn custom_fill_hook_is_used() {
        let array =
            ChunkedArray::with_len_in(5, VlistConfig::default(), Global, Some(|| -1i32)).unwrap();
        assert!((0..5).all(|i| array.get(i) == Ok(Some(&-1))));
    }

    #[test]
    fn five_pushes_need_more_than_one_chunk() {
        let array = pushed(0..5);
        assert!(array.chunk_count() >= 2);
        assert_eq!(array.chunk_capacities(), vec![4, 1]);
    }

    #[test]
    fn pop_frees_drained_head_lazily() {
        let mut array = pushed(0..6);
        assert_eq!(array.chunk_capacities(), vec![16, 4, 1]);
        array.pop().unwrap();
        // The 16-chunk is now empty but still linked.
        assert_eq!(array.chunk_count(), 3);
        assert_eq!(array.pop(), Ok(Some(4)));
        assert_eq!(array.chunk_capacities(), vec![4, 1]);
        array.assert_invariants();
    }

    #[test]
    fn push_after_lazy_release_grows_from_new_head() {
        let mut array = pushed(0..6);
        array.pop().unwrap();
        array.pop().unwrap();
        // Slot 0 of the promoted 4-chunk is free again.
        array.push(40).unwrap();
        assert_eq!(array.chunk_capacities(), vec![4, 1]);
        array.push(41).unwrap();
        assert_eq!(array.chunk_capacities(), vec![16, 4, 1]);
        assert_eq!(array.get(4), Ok(Some(&40)));
        assert_eq!(array.get(5), Ok(Some(&41)));
        array.assert_invariants();
    }

    #[test]
    fn ceiling_keeps_chunks_bounded() {
        let config = VlistConfig::new().with_max_chunk_capacity(8);
        let mut array = ChunkedArray::with_config(config).unwrap();
        for v in 0..50 {
            array.push(v).unwrap();
        }
        let capacities = array.chunk_capacities();
        assert!(capacities.iter().all(|&c| c <= 8));
        assert_eq!(capacities[..2], [8, 8]);
        for i in 0..50 {
            assert_eq!(array.get(i), Ok(Some(&(i as i32))));
        }
        array.assert_invariants();
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = VlistConfig {
            growth_factor: 0,
            ..VlistConfig::default()
        };
        assert!(matches!(
            ChunkedArray::<u8>::with_config(config),
            Err(VlistError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn elements_do_not_move_when_array_grows() {
        let mut array = ChunkedArray::new();
        array.push(String::from("anchor")).unwrap();
        let before = array.get(0).unwrap().unwrap() as *const String;
        for i in 0..1000 {
            array.push(i.to_string()).unwrap();
        }
        let after = array.get(0).unwrap().unwrap() as *const String;
        assert_eq!(before, after);
    }

    #[test]
    fn drop_releases_long_chain() {
        let config = VlistConfig {
            growth_factor: 1,
            first_chunk_capacity: 1,
            max_chunk_capacity: None,
        };
        let mut array = ChunkedArray::with_config(config).unwrap();
        for v in 0..100_000u32 {
            array.push(v).unwrap();
        }
        assert_eq!(array.chunk_count(), 100_000);
        drop(array);
    }

    #[test]
    fn debug_shows_shape_not_elements() {
        let array = pushed(0..3);
        let text = format!("{array:?}");
        assert!(text.contains("len: 3"));
        assert!(text.contains("chunks: [4, 1]"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Push(i32),
            Pop,
            Set(usize, i32),
            Ensure(usize),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => any::<i32>().prop_map(Op::Push),
                3 => Just(Op::Pop),
                2 => (0usize..200, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
                1 => (0usize..200).prop_map(Op::Ensure),
            ]
        }

        proptest! {
            #[test]
            fn matches_vec_model(
                ops in proptest::collection::vec(op(), 1..200),
                growth_factor in 1usize..6,
                ceiling in proptest::option::of(1usize..20),
            ) {
                let config = VlistConfig {
                    growth_factor,
                    first_chunk_capacity: 1,
                    max_chunk_capacity: ceiling,
                };
                let mut array = ChunkedArray::with_config(config).unwrap();
                let mut model: Vec<Option<i32>> = Vec::new();

                for op in ops {
                    match op {
                        Op::Push(v) => {
                            array.push(v).unwrap();
                            model.push(Some(v));
                        }
                        Op::Pop => match model.pop() {
                            Some(expected) => prop_assert_eq!(array.pop(), Ok(expected)),
                            None => prop_assert_eq!(array.pop(), Err(VlistError::Underflow)),
                        },
                        Op::Set(i, v) => {
                            if i < model.len() {
                                let previous = model[i].replace(v);
                                prop_assert_eq!(array.set(i, v), Ok(previous));
                            } else {
                                prop_assert!(array.set(i, v).is_err());
                            }
                        }
                        Op::Ensure(n) => {
                            if n > model.len() {
                                model.resize(n, None);
                            }
                            prop_assert_eq!(array.ensure(n), Ok(model.len()));
                        }
                    }
                    array.assert_invariants();
                    prop_assert_eq!(array.len(), model.len());
                }

                for (i, expected) in model.iter().enumerate() {
                    prop_assert_eq!(array.get(i), Ok(expected.as_ref()));
                }
            }

            #[test]
            fn ensure_preserves_prefix(
                prefix in proptest::collection::vec(any::<u16>(), 0..60),
                extra in 0usize..300,
            ) {
                let mut array = ChunkedArray::new().zeroed();
                for &v in &prefix {
                    array.push(v).unwrap();
                }
                let target = prefix.len() + extra;
                prop_assert_eq!(array.ensure(target), Ok(target));
                for (i, v) in prefix.iter().enumerate() {
                    prop_assert_eq!(array.get(i), Ok(Some(v)));
                }
                for i in prefix.len()..target {
                    prop_assert_eq!(array.get(i), Ok(Some(&0)));
                }
                array.assert_invariants();
            }
        }
    }
}
