//! The two RFC 4648 alphabets.

/// Padding symbol shared by both alphabets.
pub const PAD: u8 = b'=';

const STANDARD: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_SAFE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Marks bytes that are not part of an alphabet in the reverse tables.
const INVALID: u8 = 0xFF;

const fn reverse(symbols: &[u8; 64]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[symbols[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const STANDARD_REVERSE: [u8; 256] = reverse(STANDARD);
const URL_SAFE_REVERSE: [u8; 256] = reverse(URL_SAFE);

/// Which 64-symbol alphabet to encode with or decode from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `A-Z a-z 0-9 + /` (RFC 4648 §4).
    #[default]
    Standard,
    /// `A-Z a-z 0-9 - _`, safe in URLs and file names (RFC 4648 §5).
    UrlSafe,
}

impl Alphabet {
    /// The 64 symbols in sextet order.
    pub fn symbols(self) -> &'static [u8; 64] {
        match self {
            Self::Standard => STANDARD,
            Self::UrlSafe => URL_SAFE,
        }
    }

    /// Symbol for the low six bits of `sextet`.
    pub fn encode(self, sextet: u32) -> u8 {
        self.symbols()[(sextet & 63) as usize]
    }

    /// Sextet value of `symbol`, or `None` if it is not in this alphabet.
    pub fn decode(self, symbol: u8) -> Option<u8> {
        let table = match self {
            Self::Standard => &STANDARD_REVERSE,
            Self::UrlSafe => &URL_SAFE_REVERSE,
        };
        match table[symbol as usize] {
            INVALID => None,
            value => Some(value),
        }
    }
}
