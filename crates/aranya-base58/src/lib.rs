//! Base58 encoding and decoding.
//!
//! Bytes are treated as a big-endian unsigned integer written in
//! base 58, with each leading zero byte written as one zero
//! symbol. Two alphabets are supported: Bitcoin's and Ripple's.
//!
//! The `*_into` functions work on caller-provided buffers and do
//! not allocate output:
//!
//! - [`encode_into`] reports the exact buffer size it needs when
//!   the buffer is too small, so it can be called once to query
//!   the size and again to fill the buffer.
//! - [`decode_into`] writes the value right-justified across the
//!   whole buffer and returns its canonical length.
//!
//! [`encode`] and [`decode`] wrap them with owned results.
//!
//! ```
//! use aranya_base58::{decode, encode, Alphabet};
//!
//! let text = encode(Alphabet::Bitcoin, [0x00, 0x00, 0x01]);
//! assert_eq!(text, "112");
//! assert_eq!(decode(Alphabet::Bitcoin, &text)?, [0x00, 0x00, 0x01]);
//! # Ok::<(), aranya_base58::DecodeError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

mod alphabet;
mod decode;
mod encode;
mod error;
mod proptest_impls;

pub use crate::{
    alphabet::{Alphabet, Table},
    decode::{decode, decode_cstr, decode_into},
    encode::{encode, encode_into, max_encoded_len},
    error::{DecodeError, EncodeError, ParseAlphabetError, UnknownAlphabet},
};
