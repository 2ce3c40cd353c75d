// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! A reference-like proxy to a single bit inside a byte buffer.
//!
//! ##### About
//!
//! This crate exports a [`BitRef`] that behaves like a `&mut bool` into bit-packed storage.
//! Bit-packed containers (bitsets, bitmaps, bloom filter bit arrays) can hand out a `BitRef`
//! from their indexing operations instead of a plain `bool`.
//!
//! A `BitRef` is built from a buffer and a linear bit offset, which may be arbitrarily large.
//! The offset is canonicalized into a byte plus a bit index in `[0, 8)` on construction.
//! Writing through the reference modifies the referenced bit and never any other bit.
//!
//! The buffer is borrowed as `&[Cell<u8>]`, so any number of references may alias the same
//! byte at once. Use [`util::as_cells`] to get such a view of a `&mut [u8]`.
//!
//! ```
//! use bit_ref::{util::as_cells, BitRef};
//!
//! let mut bytes = [0u8; 2];
//!
//! {
//!     let cells = as_cells(&mut bytes);
//!
//!     let a = BitRef::new(cells, 3);
//!     let b = BitRef::new(cells, 12);
//!
//!     a.set(true);
//!     b.assign(&a);
//!     a.toggle_if(true);
//!     a.swap(&b);
//! }
//!
//! assert_eq!([0b0000_1000, 0b0000_0000], bytes);
//! ```
//!
//! Bounds are the caller's responsibility: [`BitRef::new`] panics on an out-of-range offset,
//! [`BitRef::try_new`] reports it as an [`Error`].
//! No synchronization is performed; `BitRef` is not `Sync`.

#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![allow(clippy::option_if_let_else)]
#![warn(clippy::redundant_feature_names)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod bit_ref;

/// Configuration
pub mod config;

mod error;

/// Utility functions
pub mod util;

pub use {
    bit_ref::BitRef,
    config::BitOrder,
    error::{Error, Result},
};
