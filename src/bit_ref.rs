// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{
    config::BitOrder,
    util::{canonicalize, len_bits},
    Error,
};
use std::{
    cell::Cell,
    ops::{BitAndAssign, BitOrAssign, BitXorAssign},
};

/// A reference to a single bit inside a byte buffer
///
/// Behaves like a `&mut bool` rather than a pointer: assigning through it
/// overwrites the referenced bit, it never changes which bit is referenced.
///
/// Many references may alias the same byte, or even the same bit, at the same time.
#[derive(Copy, Clone)]
pub struct BitRef<'a> {
    byte: &'a Cell<u8>,
    bit_index: u8,
    order: BitOrder,
}

impl<'a> BitRef<'a> {
    /// Creates a reference to the bit at the given linear offset.
    ///
    /// The offset may exceed a byte and is canonicalized into a byte plus a bit index in `[0, 8)`.
    ///
    /// # Panics
    ///
    /// Panics if the offset lies outside of the buffer.
    #[must_use]
    pub fn new(base: &'a [Cell<u8>], offset: usize) -> Self {
        Self::with_order(base, offset, BitOrder::default())
    }

    /// Creates a reference to the bit at the given linear offset, using a custom bit order.
    ///
    /// # Panics
    ///
    /// Panics if the offset lies outside of the buffer.
    #[must_use]
    pub fn with_order(base: &'a [Cell<u8>], offset: usize, order: BitOrder) -> Self {
        let (byte_offset, bit_index) = canonicalize(offset);

        // NOTE: We trust the caller
        #[allow(clippy::expect_used)]
        let byte = base.get(byte_offset).expect("should be in bounds");

        Self {
            byte,
            bit_index,
            order,
        }
    }

    /// Creates a reference to the bit at the given linear offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the offset lies outside of the buffer.
    pub fn try_new(base: &'a [Cell<u8>], offset: usize) -> crate::Result<Self> {
        Self::try_with_order(base, offset, BitOrder::default())
    }

    /// Creates a reference to the bit at the given linear offset, using a custom bit order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the offset lies outside of the buffer.
    pub fn try_with_order(
        base: &'a [Cell<u8>],
        offset: usize,
        order: BitOrder,
    ) -> crate::Result<Self> {
        let (byte_offset, bit_index) = canonicalize(offset);

        let Some(byte) = base.get(byte_offset) else {
            let len_bits = len_bits(base);
            log::trace!("Rejecting bit offset {offset}, buffer only holds {len_bits} bits");
            return Err(Error::OutOfBounds { offset, len_bits });
        };

        Ok(Self {
            byte,
            bit_index,
            order,
        })
    }

    /// Returns the bit index inside the referenced byte, in `[0, 8)`.
    #[must_use]
    pub fn bit_index(&self) -> u8 {
        self.bit_index
    }

    /// Returns the bit order.
    #[must_use]
    pub fn order(&self) -> BitOrder {
        self.order
    }

    /// Returns `true` if both references denote the same physical bit.
    ///
    /// This compares identity, not value. Use [`BitRef::get`] to compare values.
    #[must_use]
    pub fn aliases(&self, other: &BitRef<'_>) -> bool {
        std::ptr::eq(self.byte, other.byte) && self.mask() == other.mask()
    }

    fn mask(&self) -> u8 {
        self.order.mask(self.bit_index)
    }

    /// Reads the referenced bit.
    #[must_use]
    pub fn get(&self) -> bool {
        self.byte.get() & self.mask() != 0
    }

    /// Overwrites the referenced bit.
    pub fn set(&self, value: bool) -> &Self {
        let mask = self.mask();
        let byte = self.byte.get() & !mask;
        self.byte.set(byte | (u8::from(value) * mask));
        self
    }

    /// Copies the value of another bit into the referenced bit.
    ///
    /// `self` keeps referencing the same bit afterwards.
    pub fn assign(&self, other: &BitRef<'_>) -> &Self {
        self.set(other.get())
    }

    /// Flips the referenced bit if `value` is `true`.
    pub fn toggle_if(&self, value: bool) -> &Self {
        self.byte.set(self.byte.get() ^ (u8::from(value) * self.mask()));
        self
    }

    /// ANDs the referenced bit with `value`.
    ///
    /// Only the referenced bit can be cleared, the rest of the byte is untouched.
    pub fn and_assign(&self, value: bool) -> &Self {
        let mask = self.mask();
        self.byte.set(self.byte.get() & (!mask | (u8::from(value) * mask)));
        self
    }

    /// ORs the referenced bit with `value`.
    pub fn or_assign(&self, value: bool) -> &Self {
        self.byte.set(self.byte.get() | (u8::from(value) * self.mask()));
        self
    }

    /// Exchanges the values of two bits.
    ///
    /// Both references may live in the same byte or denote the same bit.
    pub fn swap(&self, other: &BitRef<'_>) {
        // NOTE: Snapshot before writing, both sides may share a byte
        let theirs = other.get();
        other.set(self.get());
        self.set(theirs);
    }
}

impl From<BitRef<'_>> for bool {
    fn from(value: BitRef<'_>) -> Self {
        value.get()
    }
}

impl From<&BitRef<'_>> for bool {
    fn from(value: &BitRef<'_>) -> Self {
        value.get()
    }
}

impl BitXorAssign<bool> for BitRef<'_> {
    fn bitxor_assign(&mut self, rhs: bool) {
        self.toggle_if(rhs);
    }
}

impl BitAndAssign<bool> for BitRef<'_> {
    fn bitand_assign(&mut self, rhs: bool) {
        self.and_assign(rhs);
    }
}

impl BitOrAssign<bool> for BitRef<'_> {
    fn bitor_assign(&mut self, rhs: bool) {
        self.or_assign(rhs);
    }
}

impl std::fmt::Debug for BitRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitRef")
            .field("bit_index", &self.bit_index)
            .field("order", &self.order)
            .field("value", &self.get())
            .finish()
    }
}
