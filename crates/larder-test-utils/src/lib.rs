//! Test utilities and mock types for Larder development.
//!
//! Provides instrumented [`Allocator`] implementations for observing and
//! sabotaging chunk allocation, plus shared text fixtures in
//! [`fixtures`].

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::alloc::Layout;
use std::cell::{Cell, RefCell};
use std::ptr::NonNull;

use larder_vlist::{AllocError, Allocator, Global};

pub mod fixtures;

/// Allocator that records every request and release.
///
/// Pass it by reference (`&CountingAllocator` is itself an
/// [`Allocator`]) so the counts stay readable after the array is dropped.
/// A chunk costs two requests: its slot storage, then its node.
#[derive(Default)]
pub struct CountingAllocator {
    requests: RefCell<Vec<usize>>,
    releases: Cell<usize>,
}

impl CountingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sizes in bytes of the granted requests, in request order.
    pub fn requests(&self) -> Vec<usize> {
        self.requests.borrow().clone()
    }

    /// Number of successful allocations.
    pub fn allocations(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Number of blocks handed back.
    pub fn releases(&self) -> usize {
        self.releases.get()
    }

    /// Allocations not yet released.
    pub fn live(&self) -> usize {
        self.allocations() - self.releases()
    }

    /// Largest single request in bytes, 0 if none was made.
    pub fn largest_request(&self) -> usize {
        self.requests.borrow().iter().copied().max().unwrap_or(0)
    }
}

// SAFETY: every block is obtained from and returned to `Global` with the
// caller's layout unchanged, so `Global`'s guarantees carry over.
unsafe impl Allocator for CountingAllocator {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let block = Global.allocate(layout)?;
        self.requests.borrow_mut().push(layout.size());
        Ok(block)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.releases.set(self.releases.get() + 1);
        // SAFETY: the caller guarantees `ptr` came from `allocate` above,
        // which got it from `Global` with this `layout`.
        unsafe { Global.deallocate(ptr, layout) }
    }
}

/// Allocator that grants a fixed number of allocations, then refuses.
///
/// Tracks live allocations so tests can check that a failed operation
/// handed back everything it had obtained.
pub struct FailingAllocator {
    remaining: Cell<usize>,
    live: Cell<usize>,
    refused: Cell<usize>,
}

impl FailingAllocator {
    /// Grant the first `grants` allocations, refuse every later one.
    pub fn after(grants: usize) -> Self {
        Self {
            remaining: Cell::new(grants),
            live: Cell::new(0),
            refused: Cell::new(0),
        }
    }

    /// Allocator that refuses every request.
    pub fn always() -> Self {
        Self::after(0)
    }

    /// Allow `grants` more allocations.
    pub fn grant(&self, grants: usize) {
        self.remaining.set(self.remaining.get() + grants);
    }

    /// Allocations currently held by callers.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Number of refused requests.
    pub fn refused(&self) -> usize {
        self.refused.get()
    }
}

// SAFETY: granted blocks come straight from `Global` and are returned to
// it with the same layout; refusals hand out nothing.
unsafe impl Allocator for FailingAllocator {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let remaining = self.remaining.get();
        if remaining == 0 {
            self.refused.set(self.refused.get() + 1);
            return Err(AllocError);
        }
        let block = Global.allocate(layout)?;
        self.remaining.set(remaining - 1);
        self.live.set(self.live.get() + 1);
        Ok(block)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.live.set(self.live.get() - 1);
        // SAFETY: the caller guarantees `ptr` came from `allocate` above,
        // which got it from `Global` with this `layout`.
        unsafe { Global.deallocate(ptr, layout) }
    }
}
