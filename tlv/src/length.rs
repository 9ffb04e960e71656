//! Definite-length field codec.
//!
//! ```text
//! short form: 0lllllll                      length 0..=127
//! long form:  1nnnnnnn b1 b2 .. bn          length = b1 b2 .. bn (big-endian)
//! indefinite: 10000000                      unsupported
//! ```
//!
//! Encoding always produces the shortest form. Decoding accepts any long form,
//! including non-minimal ones such as `0x81 0x08`, since those are valid BER.

use nom::{IResult, Parser};

/// Marks the long form when set on the first length byte.
pub const LONG_FORM_BIT: u8 = 0x80;

/// First length byte of the indefinite form.
pub const INDEFINITE_LENGTH: u8 = 0x80;

/// Classification of the first byte of a length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthField {
    /// The byte itself is the length.
    Short(u8),
    /// `count` big-endian bytes follow and hold the length.
    Long { count: usize },
    Indefinite,
}

impl LengthField {
    pub fn from_first_byte(first: u8) -> Self {
        if first == INDEFINITE_LENGTH {
            LengthField::Indefinite
        } else if first & LONG_FORM_BIT == 0 {
            LengthField::Short(first)
        } else {
            LengthField::Long {
                count: (first & !LONG_FORM_BIT) as usize,
            }
        }
    }
}

/// Parses the first byte of a length field.
pub fn parse_length_field(input: &[u8]) -> IResult<&[u8], LengthField> {
    let (input, first) = nom::number::be_u8().parse(input)?;
    Ok((input, LengthField::from_first_byte(first)))
}

/// Parses the `count` bytes that follow a long-form first byte.
///
/// The length is `None` when it does not fit in `usize`.
pub fn parse_long_length(input: &[u8], count: usize) -> IResult<&[u8], Option<usize>> {
    let (input, bytes) = nom::bytes::complete::take(count).parse(input)?;
    Ok((input, decode_long_length(bytes)))
}

/// Folds big-endian length bytes into a length, or `None` on overflow.
pub fn decode_long_length(bytes: &[u8]) -> Option<usize> {
    bytes
        .iter()
        .try_fold(0usize, |n, &b| n.checked_mul(256)?.checked_add(b as usize))
}

/// Encodes `len` as a length field in its shortest form.
pub fn encode_length(len: usize) -> Vec<u8> {
    if len < LONG_FORM_BIT as usize {
        return vec![len as u8];
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    let significant = &bytes[skip..];

    let mut field = Vec::with_capacity(significant.len() + 1);
    field.push(LONG_FORM_BIT | significant.len() as u8);
    field.extend_from_slice(significant);
    field
}
