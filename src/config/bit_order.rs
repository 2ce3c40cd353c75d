// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Bit numbering inside a byte
///
/// Decides which physical bit a bit index in `[0, 8)` denotes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BitOrder {
    /// Bit 0 is the least-significant bit
    #[default]
    Lsb0,

    /// Bit 0 is the most-significant bit, as used by bloom filter bit arrays
    Msb0,
}

impl BitOrder {
    /// Returns the single-bit mask selecting the given bit index.
    ///
    /// `bit_index` is expected to be normalized to `[0, 8)`.
    #[must_use]
    pub const fn mask(self, bit_index: u8) -> u8 {
        debug_assert!(bit_index < 8, "bit index should be normalized");

        match self {
            Self::Lsb0 => 1 << bit_index,
            Self::Msb0 => 0b1000_0000 >> bit_index,
        }
    }
}

impl std::fmt::Display for BitOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Lsb0 => "lsb0",
                Self::Msb0 => "msb0",
            }
        )
    }
}
