// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use std::cell::Cell;

/// Splits a linear bit offset into a byte offset and a bit index in `[0, 8)`.
///
/// The offset may be arbitrarily large, spanning any number of bytes.
#[must_use]
pub const fn canonicalize(offset: usize) -> (usize, u8) {
    let byte_offset = offset / 8;

    // NOTE: offset % 8 is always < 8
    #[allow(clippy::cast_possible_truncation)]
    let bit_index = (offset % 8) as u8;

    (byte_offset, bit_index)
}

/// Views an exclusively borrowed byte buffer as shared cells.
///
/// Bit references are built on top of the returned slice, so any number of
/// them may alias the same byte for as long as the buffer stays borrowed.
#[must_use]
pub fn as_cells(bytes: &mut [u8]) -> &[Cell<u8>] {
    Cell::from_mut(bytes).as_slice_of_cells()
}

/// Returns the buffer size in bits.
pub(crate) fn len_bits(cells: &[Cell<u8>]) -> usize {
    cells.len().saturating_mul(8)
}
