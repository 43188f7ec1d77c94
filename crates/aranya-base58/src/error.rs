/// The Base58 could not be decoded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// The input contains a byte that is not a symbol in the
    /// selected alphabet.
    #[error("invalid Base58 character {byte:#04x} at index {index}")]
    InvalidCharacter {
        /// Offset of the byte in the input.
        index: usize,
        /// The offending byte.
        byte: u8,
    },
    /// The decoded value does not fit in the output buffer.
    #[error("decoded value does not fit in {capacity} bytes")]
    Overflow {
        /// The size of the output buffer.
        capacity: usize,
    },
}

/// The Base58 could not be encoded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EncodeError {
    /// The output buffer is too small.
    ///
    /// Retrying with a buffer of `required` bytes succeeds.
    #[error("output buffer too small: need {required} bytes")]
    InsufficientCapacity {
        /// The minimum size of the output buffer, including one
        /// byte reserved for a terminator.
        required: usize,
    },
}

/// The raw alphabet identifier is not known.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown Base58 alphabet id: {0}")]
pub struct UnknownAlphabet(pub i8);

/// The alphabet name is not known.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown Base58 alphabet name")]
pub struct ParseAlphabetError;
