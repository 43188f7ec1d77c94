use alloc::{string::String, vec, vec::Vec};

use tracing::{debug, trace};

use crate::{alphabet::Alphabet, error::EncodeError};

/// Returns `floor(n * 138 / 100)`, an upper bound on the number
/// of Base58 digits needed for `n` bytes (log(256)/log(58) is
/// about 1.366).
#[allow(clippy::arithmetic_side_effects)]
const fn scaled_len(n: usize) -> usize {
    (n / 100)
        .saturating_mul(138)
        .saturating_add((n % 100) * 138 / 100)
}

/// Returns a buffer size that is always large enough for
/// [`encode_into`] to encode `n` bytes.
///
/// The exact size depends on the input; see
/// [`EncodeError::InsufficientCapacity`].
pub const fn max_encoded_len(n: usize) -> usize {
    scaled_len(n).saturating_add(2)
}

/// Encodes `input` into `out`.
///
/// Returns the length of the encoded text, which is written to
/// the front of `out`. `out` must be strictly longer than the
/// text: one byte is reserved for a terminator, which is not
/// written.
///
/// A buffer that is too small can be used to query the required
/// size:
///
/// ```
/// use aranya_base58::{encode_into, Alphabet, EncodeError};
///
/// let input = [0x00, 0x61];
/// let Err(EncodeError::InsufficientCapacity { required }) =
///     encode_into(Alphabet::Bitcoin, input, &mut [])
/// else {
///     unreachable!()
/// };
/// let mut out = vec![0u8; required];
/// let n = encode_into(Alphabet::Bitcoin, input, &mut out)?;
/// assert_eq!(&out[..n], b"12g");
/// # Ok::<(), EncodeError>(())
/// ```
///
/// # Errors
///
/// Returns [`EncodeError::InsufficientCapacity`] with the
/// minimum size of `out` if `out` is too small. Nothing is
/// written to `out`.
pub fn encode_into(
    alphabet: Alphabet,
    input: impl AsRef<[u8]>,
    out: &mut [u8],
) -> Result<usize, EncodeError> {
    let input = input.as_ref();
    let table = alphabet.table();
    trace!(%alphabet, len = input.len(), cap = out.len(), "encoding");

    // Leading zero bytes are written as zero symbols.
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    let buf = to_digits(&input[zeros..]);
    // The digit buffer is sized from an estimate, so it usually
    // starts with a few zero digits.
    let start = buf.iter().position(|&d| d != 0).unwrap_or(buf.len());
    let digits = &buf[start..];

    let n = zeros.saturating_add(digits.len());
    if out.len() <= n {
        let required = n.saturating_add(1);
        debug!(required, cap = out.len(), "output buffer too small");
        return Err(EncodeError::InsufficientCapacity { required });
    }

    let (prefix, rest) = out.split_at_mut(zeros);
    prefix.fill(table.zero());
    for (c, &d) in rest.iter_mut().zip(digits) {
        *c = table.symbol(d);
    }
    Ok(n)
}

/// Encodes `input` as a Base58 string.
///
/// ```
/// use aranya_base58::{encode, Alphabet};
///
/// assert_eq!(encode(Alphabet::Bitcoin, b"hello"), "Cn8eVZg");
/// assert_eq!(encode(Alphabet::Ripple, b"hello"), "U83eVZg");
/// assert_eq!(encode(Alphabet::Bitcoin, [0, 0, 1]), "112");
/// ```
pub fn encode(alphabet: Alphabet, input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut out = vec![0u8; max_encoded_len(input.len())];
    loop {
        match encode_into(alphabet, input, &mut out) {
            Ok(n) => {
                out.truncate(n);
                break;
            }
            Err(EncodeError::InsufficientCapacity { required }) => out.resize(required, 0),
        }
    }
    // Symbols are ASCII.
    out.into_iter().map(char::from).collect()
}

/// Converts the big-endian integer `input` to base 58 digits,
/// most significant first.
///
/// The result is padded with leading zero digits.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
fn to_digits(input: &[u8]) -> Vec<u8> {
    let size = scaled_len(input.len()) + 1;
    let mut buf = vec![0u8; size];

    // Digits above `high` are still zero, so each byte only
    // needs to sweep down to `high` before the carry runs out.
    let mut high = size - 1;
    for &b in input {
        let mut carry = u32::from(b);
        let mut j = size - 1;
        while j > high || carry != 0 {
            carry += 256 * u32::from(buf[j]);
            buf[j] = (carry % 58) as u8;
            carry /= 58;
            if j == 0 {
                break;
            }
            j -= 1;
        }
        high = j;
    }
    buf
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::*;

    #[test]
    fn test_encode_bitcoin() {
        let tests: &[(&str, &str)] = &[
            ("", ""),
            ("00", "1"),
            ("0001", "12"),
            ("000001", "112"),
            ("61", "2g"),
            ("626262", "a3gV"),
            ("636363", "aPEr"),
            ("68656c6c6f", "Cn8eVZg"),
            ("73696d706c792061206c6f6e6720737472696e67", "2cFupjhnEsSn59qHXstmK2ffpLv2"),
            (
                "00eb15231dfceb60925886b67d065299925915aeb172c06647",
                "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L",
            ),
            ("516b6fcd0f", "ABnLTmg"),
            ("bf4f89001e670274dd", "3SEo3LWLoPntC"),
            ("572e4794", "3EFU7m"),
            ("ecac89cad93923c02321", "EJDM8drfXA6uyA"),
            ("10c8511e", "Rt5zm"),
            ("00000000000000000000", "1111111111"),
            (
                "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
                "111114VYJtj3yEDffZem7N3PkK563wkLZZ8RjKzcfY",
            ),
        ];
        for (i, (input, want)) in tests.iter().enumerate() {
            let input = hex::decode(input).unwrap();
            assert_eq!(encode(Alphabet::Bitcoin, &input), *want, "#{i}");
        }
    }

    #[test]
    fn test_encode_ripple() {
        assert_eq!(encode(Alphabet::Ripple, b""), "");
        assert_eq!(encode(Alphabet::Ripple, [0]), "r");
        assert_eq!(encode(Alphabet::Ripple, b"a"), "pg");
        assert_eq!(encode(Alphabet::Ripple, b"bbb"), "2sgV");
        assert_eq!(encode(Alphabet::Ripple, [0, 0, 1]), "rrp");
        assert_eq!(encode(Alphabet::Ripple, [0, 0, 0, 0, 1, 2]), "rrrrnT");
        assert_eq!(
            encode(
                Alphabet::Ripple,
                hex::decode("00eb15231dfceb60925886b67d065299925915aeb172c06647").unwrap()
            ),
            "r4Srf52g9jJgTHDrVXjvLUN8ZuQsiJDN9L"
        );
    }

    #[test]
    fn test_encode_all_zeros() {
        assert_eq!(encode(Alphabet::Bitcoin, [0u8; 50]), "1".repeat(50));
        assert_eq!(encode(Alphabet::Ripple, [0u8; 50]), "r".repeat(50));
    }

    #[test]
    fn test_capacity_query() {
        let input = [0x00, 0x01];
        assert_eq!(
            encode_into(Alphabet::Bitcoin, input, &mut []),
            Err(EncodeError::InsufficientCapacity { required: 3 })
        );
        // The terminator slot is always reserved.
        let mut out = [0xaa; 2];
        assert_eq!(
            encode_into(Alphabet::Bitcoin, input, &mut out),
            Err(EncodeError::InsufficientCapacity { required: 3 })
        );
        assert_eq!(out, [0xaa; 2]);

        let mut out = [0xaa; 3];
        assert_eq!(encode_into(Alphabet::Bitcoin, input, &mut out), Ok(2));
        assert_eq!(&out[..2], b"12");
        assert_eq!(out[2], 0xaa);
    }

    #[test]
    fn test_capacity_query_empty() {
        assert_eq!(
            encode_into(Alphabet::Bitcoin, b"", &mut []),
            Err(EncodeError::InsufficientCapacity { required: 1 })
        );
        let mut out = [0u8; 1];
        assert_eq!(encode_into(Alphabet::Bitcoin, b"", &mut out), Ok(0));
    }

    #[test]
    fn test_max_encoded_len() {
        assert_eq!(max_encoded_len(0), 2);
        assert_eq!(max_encoded_len(100), 140);
        let inputs: [&[u8]; 5] = [&[], &[0xff; 32], &[0; 32], &[0x01, 0xff, 0xff], &[0xff; 257]];
        for input in inputs {
            let mut out = vec![0u8; max_encoded_len(input.len())];
            assert!(encode_into(Alphabet::Bitcoin, input, &mut out).is_ok(), "{}", input.len());
        }
    }

    #[test]
    fn test_to_digits() {
        assert_eq!(to_digits(&[]), [0]);
        // 97 = 1*58 + 39
        assert_eq!(to_digits(&[0x61]), [1, 39]);
        // 256 = 4*58 + 24
        assert_eq!(to_digits(&[0x01, 0x00]), [0, 4, 24]);
    }

    #[test]
    fn test_roundtrip_long() {
        let input = [42u8; 1024];
        let enc = encode(Alphabet::Bitcoin, input);
        assert_eq!(crate::decode(Alphabet::Bitcoin, &enc).unwrap(), input);
    }
}
