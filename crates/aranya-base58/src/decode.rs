use alloc::{vec, vec::Vec};
use core::ffi::CStr;

use byteorder::{BigEndian, ByteOrder};
use tracing::{debug, trace};

use crate::{alphabet::Alphabet, error::DecodeError};

/// Size in bytes of an accumulator word.
const WORD: usize = size_of::<u32>();

/// Decodes `input` into `out`.
///
/// On success, `out` holds the big-endian decoded value
/// right-justified across all of `out`, and the returned length
/// is the canonical length of the value: the number of trailing
/// bytes of `out` that make up the result. The bytes before
/// them are zero padding.
///
/// ```
/// use aranya_base58::{decode_into, Alphabet};
///
/// let mut out = [0xffu8; 4];
/// let n = decode_into(Alphabet::Bitcoin, "12g", &mut out)?;
/// assert_eq!(n, 2);
/// assert_eq!(&out[out.len() - n..], [0x00, 0x61]);
/// # Ok::<(), aranya_base58::DecodeError>(())
/// ```
///
/// # Errors
///
/// - [`DecodeError::InvalidCharacter`] if `input` contains a
///   byte that is not a symbol in `alphabet`.
/// - [`DecodeError::Overflow`] if the decoded value does not fit
///   in `out`.
///
/// On error the contents of `out` are unspecified.
pub fn decode_into(
    alphabet: Alphabet,
    input: impl AsRef<[u8]>,
    out: &mut [u8],
) -> Result<usize, DecodeError> {
    let input = input.as_ref();
    let table = alphabet.table();
    let cap = out.len();
    trace!(%alphabet, len = input.len(), cap, "decoding");

    // Leading zero symbols are literal zero bytes.
    let zeros = input.iter().take_while(|&&c| c == table.zero()).count();

    let mut acc = Accumulator::new(cap);
    for (index, &c) in input.iter().enumerate().skip(zeros) {
        let Some(d) = table.digit(c) else {
            debug!(index, byte = c, "invalid Base58 character");
            return Err(DecodeError::InvalidCharacter { index, byte: c });
        };
        if !acc.mul_add(d) {
            debug!(index, cap, "decoded value overflows output buffer");
            return Err(DecodeError::Overflow { capacity: cap });
        }
    }
    acc.write_be(out);

    // Zero bytes in front of the value are padding from the
    // fixed-size accumulator, not part of the result.
    let padding = out.iter().take_while(|&&b| b == 0).count();
    let n = cap
        .checked_sub(padding)
        .and_then(|n| n.checked_add(zeros))
        .filter(|&n| n <= cap)
        .ok_or_else(|| {
            debug!(zeros, cap, "leading zeros overflow output buffer");
            DecodeError::Overflow { capacity: cap }
        })?;
    Ok(n)
}

/// Decodes the NUL-terminated `input` into `out`.
///
/// See [`decode_into`].
pub fn decode_cstr(alphabet: Alphabet, input: &CStr, out: &mut [u8]) -> Result<usize, DecodeError> {
    decode_into(alphabet, input.to_bytes(), out)
}

/// Decodes `input` and returns the canonical bytes.
///
/// ```
/// use aranya_base58::{decode, Alphabet};
///
/// assert_eq!(decode(Alphabet::Bitcoin, "112")?, [0, 0, 1]);
/// assert_eq!(decode(Alphabet::Ripple, "rrp")?, [0, 0, 1]);
/// # Ok::<(), aranya_base58::DecodeError>(())
/// ```
///
/// # Errors
///
/// Returns [`DecodeError::InvalidCharacter`] if `input`
/// contains a byte that is not a symbol in `alphabet`.
pub fn decode(alphabet: Alphabet, input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let input = input.as_ref();
    // Each symbol contributes less than one byte, so the value
    // always fits in `input.len()` bytes.
    let mut out = vec![0u8; input.len()];
    let n = decode_into(alphabet, input, &mut out)?;
    out.drain(..out.len().saturating_sub(n));
    Ok(out)
}

/// An unsigned integer exactly `cap` bytes wide, stored as
/// 32-bit words with the most significant word first.
#[derive(Debug)]
struct Accumulator {
    words: Vec<u32>,
    /// The bits of `words[0]` that lie above `cap` bytes.
    mask: u32,
}

#[allow(clippy::arithmetic_side_effects)]
impl Accumulator {
    fn new(cap: usize) -> Self {
        let partial = cap % WORD;
        let mask = if partial == 0 {
            0
        } else {
            u32::MAX << (partial * 8)
        };
        Self {
            words: vec![0; cap.div_ceil(WORD)],
            mask,
        }
    }

    /// Sets `*self = self*58 + d` and reports whether the result
    /// still fits.
    #[allow(clippy::cast_possible_truncation)]
    fn mul_add(&mut self, d: u8) -> bool {
        let mut c = u32::from(d);
        for w in self.words.iter_mut().rev() {
            // (2^32-1)*58 + 2^32 < 2^64
            let t = u64::from(*w) * 58 + u64::from(c);
            c = (t >> 32) as u32;
            *w = t as u32;
        }
        c == 0 && self.words.first().is_none_or(|&w| w & self.mask == 0)
    }

    /// Writes the integer to `out` in big-endian order.
    ///
    /// `out` must be the `cap` bytes the accumulator was created
    /// with.
    fn write_be(&self, out: &mut [u8]) {
        let (head, tail) = out.split_at_mut(out.len() % WORD);
        let mut words = self.words.iter();
        if !head.is_empty() {
            if let Some(&w) = words.next() {
                let mut buf = [0u8; WORD];
                BigEndian::write_u32(&mut buf, w);
                head.copy_from_slice(&buf[WORD - head.len()..]);
            }
        }
        for (chunk, &w) in tail.chunks_exact_mut(WORD).zip(words) {
            BigEndian::write_u32(chunk, w);
        }
    }
}
