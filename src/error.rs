// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Represents errors that can occur when addressing bits
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// Bit offset lies outside of the buffer
    OutOfBounds {
        /// Requested linear bit offset
        offset: usize,

        /// Buffer size in bits
        len_bits: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitRefError: {self:?}")
    }
}

impl std::error::Error for Error {}

/// Bit reference result
pub type Result<T> = std::result::Result<T, Error>;
