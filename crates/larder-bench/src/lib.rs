//! Deterministic workloads for the Larder benchmarks.
//!
//! - [`random_bytes`]: a seeded binary payload for the codec benches
//! - [`random_ini`]: a seeded INI document with a given number of entries
//! - [`random_indices`]: seeded lookup positions into an array
//! - [`counting_array`]: a [`ChunkedArray`] holding `0..n`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Write;

use larder_vlist::ChunkedArray;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// `len` pseudo-random bytes, identical for identical seeds.
pub fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    bytes
}

/// An INI document with `entries` key/value pairs spread over sections.
///
/// Roughly one line in ten is a comment and one entry in eight opens a
/// new section first.
pub fn random_ini(entries: usize, seed: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut doc = String::new();
    let mut section = 0;
    for i in 0..entries {
        if rng.random_ratio(1, 8) {
            section += 1;
            // Writing to a String cannot fail.
            let _ = writeln!(doc, "[section{section}]");
        }
        if rng.random_ratio(1, 10) {
            let _ = writeln!(doc, "; comment {i}");
        }
        let value_len = rng.random_range(1..48);
        let value: String = (0..value_len)
            .map(|_| char::from(rng.random_range(b'a'..=b'z')))
            .collect();
        let _ = writeln!(doc, "key{i} = {value}");
    }
    doc
}

/// `count` indices in `0..len`.
pub fn random_indices(count: usize, len: usize, seed: u64) -> Vec<usize> {
    assert!(len > 0, "cannot index an empty array");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0..len)).collect()
}

/// A default-configured array holding `0..n`.
pub fn counting_array(n: u64) -> ChunkedArray<u64> {
    let mut array = ChunkedArray::new();
    for v in 0..n {
        array.push(v).expect("global allocator refused a chunk");
    }
    array
}
