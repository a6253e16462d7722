//! Raw Base58 engine: big-endian base-256 <-> base-58 conversion.
//!
//! No checksum and no version semantics live here. Leading zero bytes map
//! one-to-one onto leading `'1'` characters so that version cues survive the
//! round trip.

use zeroize::{Zeroize, Zeroizing};

use crate::errors::Base58Error;

/// The 58-character alphabet (no `0`, `O`, `I`, `l`).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const INVALID: u8 = 0xFF;

const fn build_digit_map() -> [u8; 128] {
    let mut map = [INVALID; 128];
    let mut i = 0usize;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
}

static DIGITS: [u8; 128] = build_digit_map();

/// Alphabet index of `ch`, or `None` if it is not a Base58 character.
#[inline]
#[must_use]
pub fn digit_of(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    match DIGITS[ch as usize] {
        INVALID => None,
        d => Some(d),
    }
}

/// Encode bytes as Base58. Empty input gives the empty string.
#[must_use]
pub fn encode(input: &[u8]) -> String {
    let zeroes = input.iter().take_while(|&&b| b == 0).count();
    let rest = &input[zeroes..];

    // log(256) / log(58), rounded up.
    let size = rest.len() * 138 / 100 + 1;
    let mut b58 = Zeroizing::new(vec![0u8; size]);
    let mut length = 0usize;

    for &byte in rest {
        let mut carry = u32::from(byte);
        let mut i = 0usize;
        for digit in b58.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += 256 * u32::from(*digit);
            *digit = (carry % 58) as u8;
            carry /= 58;
            i += 1;
        }
        debug_assert_eq!(carry, 0);
        length = i;
    }

    let start = b58[size - length..]
        .iter()
        .position(|&d| d != 0)
        .map_or(size, |p| size - length + p);

    let mut out = String::with_capacity(zeroes + (size - start));
    out.extend(std::iter::repeat('1').take(zeroes));
    out.extend(b58[start..].iter().map(|&d| ALPHABET[d as usize] as char));
    out
}

/// Decode Base58 text into a fresh vector.
///
/// # Errors
///
/// Returns `Base58Error::InvalidCharacter` on the first character outside the alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>, Base58Error> {
    let mut out = Vec::new();
    decode_into(text, &mut out)?;
    Ok(out)
}

/// Decode Base58 text into `out`, replacing (and first erasing) its contents.
///
/// On failure `out` is left empty. The internal base-256 accumulator is
/// zeroed before it is released on every path.
///
/// # Errors
///
/// Returns `Base58Error::InvalidCharacter` on the first character outside the alphabet.
pub fn decode_into(text: &str, out: &mut Vec<u8>) -> Result<(), Base58Error> {
    out.zeroize();

    let zeroes = text.bytes().take_while(|&c| c == b'1').count();
    let tail = &text[zeroes..];

    // log(58) / log(256), rounded up.
    let size = tail.len() * 733 / 1000 + 1;
    let mut b256 = Zeroizing::new(vec![0u8; size]);
    let mut length = 0usize;

    for (off, ch) in tail.char_indices() {
        let Some(d) = digit_of(ch) else {
            return Err(Base58Error::InvalidCharacter { ch, pos: zeroes + off });
        };
        let mut carry = u32::from(d);
        let mut i = 0usize;
        for byte in b256.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += 58 * u32::from(*byte);
            *byte = (carry % 256) as u8;
            carry /= 256;
            i += 1;
        }
        debug_assert_eq!(carry, 0);
        length = i;
    }

    let start = b256[size - length..]
        .iter()
        .position(|&b| b != 0)
        .map_or(size, |p| size - length + p);

    out.reserve(zeroes + (size - start));
    out.resize(zeroes, 0);
    out.extend_from_slice(&b256[start..]);
    Ok(())
}
