//! Lowercase hex encoding and strict hex decoding for digest bytes.

use std::fmt;

use crate::HashError;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Value of a single hex digit, either case.
const fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// The character starting at byte `position` of `text`.
///
/// Decoding stops at the first non-hex byte and every byte before it is
/// ASCII, so `position` is always a character boundary.
fn char_at(text: &str, position: usize) -> char {
    text.get(position..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Stream the lowercase hex of `bytes` into `out`, two digits per byte.
pub fn write_hex<W: fmt::Write>(bytes: &[u8], out: &mut W) -> fmt::Result {
    for &b in bytes {
        out.write_char(DIGITS[(b >> 4) as usize] as char)?;
        out.write_char(DIGITS[(b & 0x0f) as usize] as char)?;
    }
    Ok(())
}

/// Hex-encode `bytes` to a new `String`.
pub fn hex_to_string(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    // Writing into a String cannot fail.
    let _ = write_hex(bytes, &mut s);
    s
}

/// Decode `hex` into `buf`, which it must fill exactly.
pub fn hex_decode(text: &str, buf: &mut [u8]) -> Result<(), HashError> {
    let hex = text.as_bytes();
    if hex.len() != buf.len() * 2 {
        return Err(HashError::InvalidHexLength {
            expected: buf.len() * 2,
            actual: hex.len(),
        });
    }
    for (i, pair) in hex.chunks_exact(2).enumerate() {
        let digit = |offset: usize| {
            nibble(pair[offset]).ok_or_else(|| HashError::InvalidHex {
                position: i * 2 + offset,
                character: char_at(text, i * 2 + offset),
            })
        };
        buf[i] = (digit(0)? << 4) | digit(1)?;
    }
    Ok(())
}

/// Decode a hex string of any even length to a new `Vec<u8>`.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, HashError> {
    if hex.len() % 2 != 0 {
        return Err(HashError::InvalidHexLength {
            expected: hex.len() + 1,
            actual: hex.len(),
        });
    }
    let mut buf = vec![0u8; hex.len() / 2];
    hex_decode(hex, &mut buf)?;
    Ok(buf)
}
