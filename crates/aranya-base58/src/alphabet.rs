use core::{fmt, str::FromStr};

use crate::error::{ParseAlphabetError, UnknownAlphabet};

/// Marks bytes that are not digits in a [`Table`].
const INVALID: u8 = 0xff;

/// The lookup tables for one Base58 alphabet.
///
/// `symbols` maps a digit value (0..58) to its ASCII symbol and
/// `digits` maps every byte back to its digit value, or
/// `INVALID`.
#[derive(Debug)]
pub struct Table {
    symbols: [u8; 58],
    digits: [u8; 256],
}

#[allow(clippy::arithmetic_side_effects, clippy::cast_lossless)]
impl Table {
    /// Builds the tables for `symbols`.
    ///
    /// Fails to compile (when used in a const context) if a
    /// symbol is not ASCII or appears twice.
    const fn new(symbols: &[u8; 58]) -> Self {
        let mut digits = [INVALID; 256];
        let mut i = 0;
        while i < symbols.len() {
            let c = symbols[i];
            assert!(c.is_ascii(), "Base58 symbols must be ASCII");
            assert!(digits[c as usize] == INVALID, "duplicate Base58 symbol");
            digits[c as usize] = i as u8;
            i += 1;
        }
        Self {
            symbols: *symbols,
            digits,
        }
    }

    /// Returns the digit value of `c`, or `None` if `c` is not
    /// a symbol in this alphabet.
    ///
    /// Bytes with the high bit set are never digits.
    #[inline]
    pub const fn digit(&self, c: u8) -> Option<u8> {
        match self.digits[c as usize] {
            INVALID => None,
            d => Some(d),
        }
    }

    /// Returns the symbol for the digit value `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d >= 58`.
    #[inline]
    pub const fn symbol(&self, d: u8) -> u8 {
        self.symbols[d as usize]
    }

    /// Returns the symbol for digit value zero.
    #[inline]
    pub const fn zero(&self) -> u8 {
        self.symbols[0]
    }

    /// Returns the symbols in digit order.
    #[inline]
    pub fn as_str(&self) -> &str {
        // Symbols are checked to be ASCII in `Table::new`.
        core::str::from_utf8(&self.symbols).unwrap_or_default()
    }
}

static BITCOIN: Table = Table::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
static RIPPLE: Table = Table::new(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");

/// A Base58 alphabet.
///
/// Both alphabets exclude `0`, `O`, `I`, and `l`; they differ
/// only in the order of their symbols.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Alphabet {
    /// The Bitcoin (BTC) alphabet.
    #[default]
    Bitcoin,
    /// The Ripple (XRP) alphabet.
    Ripple,
}

impl Alphabet {
    /// All supported alphabets.
    pub const ALL: [Alphabet; 2] = [Alphabet::Bitcoin, Alphabet::Ripple];

    /// Selects an alphabet by its raw identifier.
    ///
    /// Identifiers other than those returned by [`Alphabet::id`]
    /// select [`Alphabet::Bitcoin`]. Use [`Alphabet::try_from`]
    /// to reject them instead.
    pub const fn from_id(id: i8) -> Self {
        match id {
            0 => Self::Bitcoin,
            1 => Self::Ripple,
            // Unknown identifiers fall back to Bitcoin.
            _ => Self::Bitcoin,
        }
    }

    /// Returns the raw identifier of the alphabet.
    pub const fn id(self) -> i8 {
        match self {
            Self::Bitcoin => 0,
            Self::Ripple => 1,
        }
    }

    /// Returns the lookup tables for the alphabet.
    pub const fn table(self) -> &'static Table {
        match self {
            Self::Bitcoin => &BITCOIN,
            Self::Ripple => &RIPPLE,
        }
    }

    /// Returns the alphabet's symbols in digit order.
    pub fn symbols(self) -> &'static str {
        self.table().as_str()
    }

    /// Returns the alphabet's zero symbol.
    ///
    /// A leading run of zero symbols encodes the same number
    /// of leading zero bytes.
    pub const fn zero(self) -> u8 {
        self.table().zero()
    }

    /// Returns the lowercase name of the alphabet.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::Ripple => "ripple",
        }
    }
}

impl TryFrom<i8> for Alphabet {
    type Error = UnknownAlphabet;

    fn try_from(id: i8) -> Result<Self, UnknownAlphabet> {
        match id {
            0 => Ok(Self::Bitcoin),
            1 => Ok(Self::Ripple),
            _ => Err(UnknownAlphabet(id)),
        }
    }
}

impl From<Alphabet> for i8 {
    #[inline]
    fn from(alphabet: Alphabet) -> Self {
        alphabet.id()
    }
}

impl FromStr for Alphabet {
    type Err = ParseAlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, Alphabet); 4] = [
            ("bitcoin", Alphabet::Bitcoin),
            ("btc", Alphabet::Bitcoin),
            ("ripple", Alphabet::Ripple),
            ("xrp", Alphabet::Ripple),
        ];
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, alphabet)| alphabet)
            .ok_or(ParseAlphabetError)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
