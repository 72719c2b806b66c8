//! Pluggable allocation for chunks.
//!
//! Arrays are generic over [`Allocator`], the stable mirror of the
//! standard library's allocator API. Each chunk costs two requests on the
//! array's allocator: one for its slot storage and one for the node that
//! links it into the chain. Both are made fallibly, so an out-of-memory
//! condition surfaces as
//! [`VlistError::AllocationFailure`](crate::VlistError::AllocationFailure)
//! instead of aborting the process.
//!
//! `&A` is itself an allocator, which lets several arrays share one
//! instrumented allocator by reference.

pub use allocator_api2::alloc::{AllocError, Allocator, Global};
