use std::fmt::{Display, Formatter};

use thiserror::Error;

/// What a reader was about to consume when it ran out of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    IdentifierByte,
    FirstLengthByte,
    LengthFieldBytes,
    FirstContentsByte,
    ContentsBytes,
    /// Literal bytes passed to `skip`.
    Bytes,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::IdentifierByte => write!(f, "identifier byte"),
            Field::FirstLengthByte => write!(f, "first byte of length field"),
            Field::LengthFieldBytes => write!(f, "length field bytes"),
            Field::FirstContentsByte => write!(f, "first contents byte"),
            Field::ContentsBytes => write!(f, "contents bytes"),
            Field::Bytes => write!(f, "bytes"),
        }
    }
}

/// Errors reported while reading an encoding.
///
/// Each variant records the cursor position at which the check failed and,
/// except for the indefinite-length case, the whole encoding the reader was
/// created with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The identifier at the cursor is not the one the caller asked for.
    #[error(
        "invalid identifier: expected {expected:02x}, actual {actual:02x} at position {position} of encoding {}",
        Hex(.encoding)
    )]
    InvalidIdentifier {
        expected: u8,
        actual: u8,
        position: usize,
        encoding: Vec<u8>,
    },

    /// The bytes at the cursor do not match the literal passed to `skip`.
    #[error(
        "invalid bytes: expected {}, actual {} at position {position} of encoding {}",
        Hex(.expected),
        Hex(.actual),
        Hex(.encoding)
    )]
    InvalidBytes {
        expected: Vec<u8>,
        actual: Vec<u8>,
        position: usize,
        encoding: Vec<u8>,
    },

    /// Fewer bytes remain than needed for the next read.
    #[error(
        "invalid length: reading {field} needs at least {minimum_remaining} bytes, {actual_remaining} remain at position {position} of encoding {}",
        Hex(.encoding)
    )]
    InvalidLength {
        minimum_remaining: usize,
        field: Field,
        actual_remaining: usize,
        position: usize,
        encoding: Vec<u8>,
    },

    /// A bit string declares unused bits, which is not supported.
    #[error(
        "unsupported first contents byte: expected 00, actual {actual:02x} at position {position} of encoding {}",
        Hex(.encoding)
    )]
    UnsupportedFirstContentsByte {
        actual: u8,
        position: usize,
        encoding: Vec<u8>,
    },

    #[error("indefinite length not supported at position {position}")]
    IndefiniteLengthNotSupported { position: usize },
}

impl Error {
    /// Cursor position at which the failing check happened.
    pub fn position(&self) -> usize {
        match self {
            Error::InvalidIdentifier { position, .. }
            | Error::InvalidBytes { position, .. }
            | Error::InvalidLength { position, .. }
            | Error::UnsupportedFirstContentsByte { position, .. }
            | Error::IndefiniteLengthNotSupported { position } => *position,
        }
    }
}

/// Lowercase hex bytes separated by single spaces.
struct Hex<'a>(&'a [u8]);

impl Display for Hex<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
