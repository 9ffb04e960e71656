//! Cursor based reader for BER and DER encodings.
//!
//! `Reader` walks an in-memory encoding one component at a time and hands
//! back raw contents bytes or a child reader scoped to them. Definite
//! lengths in both short and long form are accepted; the indefinite form is
//! reported as an error.

use std::ops::Range;

use error::{Error, Field};
use nom::{IResult, Parser};
use tlv::identifier::{BIT_STRING, NO_UNUSED_BITS};
use tlv::length::{LengthField, parse_length_field, parse_long_length};

pub use tlv::reading::Reading;

pub mod error;

pub type Result<T> = std::result::Result<T, Error>;

/// A reader over a fixed encoding.
///
/// Every read is computed from a local copy of the cursor and only committed
/// when it succeeds, so a failed read leaves the reader where it was.
///
/// Bounds are checked against the end of this reader's encoding, not against
/// the end of an enclosing component: a length field that claims bytes of a
/// following sibling is only caught when it runs past the end of the buffer.
#[derive(Debug, Clone)]
pub struct Reader {
    encoding: Vec<u8>,
    current_index: usize,
}

impl Reader {
    pub fn new(encoding: impl Into<Vec<u8>>) -> Self {
        Reader {
            encoding: encoding.into(),
            current_index: 0,
        }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.current_index
    }

    /// Number of bytes after the cursor.
    pub fn remaining(&self) -> usize {
        self.encoding.len() - self.current_index
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The whole encoding this reader was created with.
    pub fn encoding(&self) -> &[u8] {
        &self.encoding
    }

    /// Position of `rest`, a suffix of the encoding.
    fn index_of(&self, rest: &[u8]) -> usize {
        self.encoding.len() - rest.len()
    }

    fn invalid_length(&self, index: usize, minimum_remaining: usize, field: Field) -> Error {
        Error::InvalidLength {
            minimum_remaining,
            field,
            actual_remaining: self.encoding.len() - index,
            position: index,
            encoding: self.encoding.clone(),
        }
    }

    /// Reads identifier and length starting at the cursor and returns the
    /// position of the first contents byte along with the declared length.
    fn read_header(&self, identified_by: Option<u8>) -> Result<(usize, usize)> {
        let index = self.skip_identifier(self.current_index, identified_by)?;
        self.read_length(index)
    }

    fn skip_identifier(&self, index: usize, identified_by: Option<u8>) -> Result<usize> {
        let (rest, actual) = parse_byte(&self.encoding[index..])
            .map_err(|_| self.invalid_length(index, 1, Field::IdentifierByte))?;

        if let Some(expected) = identified_by {
            if actual != expected {
                return Err(Error::InvalidIdentifier {
                    expected,
                    actual,
                    position: index,
                    encoding: self.encoding.clone(),
                });
            }
        }
        Ok(self.index_of(rest))
    }

    fn read_length(&self, index: usize) -> Result<(usize, usize)> {
        let (rest, length_field) = parse_length_field(&self.encoding[index..])
            .map_err(|_| self.invalid_length(index, 1, Field::FirstLengthByte))?;

        match length_field {
            LengthField::Short(length) => Ok((self.index_of(rest), length as usize)),
            LengthField::Long { count } => {
                let index = self.index_of(rest);
                let (rest, length) = parse_long_length(rest, count)
                    .map_err(|_| self.invalid_length(index, count, Field::LengthFieldBytes))?;

                let index = self.index_of(rest);
                // A length beyond usize can never be satisfied by the buffer.
                let length = length
                    .ok_or_else(|| self.invalid_length(index, usize::MAX, Field::ContentsBytes))?;
                Ok((index, length))
            }
            LengthField::Indefinite => {
                Err(Error::IndefiniteLengthNotSupported { position: index })
            }
        }
    }

    /// Range of `length` contents bytes starting at `index`.
    fn contents(&self, index: usize, length: usize) -> Result<Range<usize>> {
        let (rest, _) = parse_bytes(&self.encoding[index..], length)
            .map_err(|_| self.invalid_length(index, length, Field::ContentsBytes))?;
        Ok(index..self.index_of(rest))
    }

    fn read_component(&self, identified_by: Option<u8>) -> Result<Range<usize>> {
        let (index, length) = self.read_header(identified_by)?;
        self.contents(index, length)
    }

    fn consume(&mut self, range: Range<usize>) -> &[u8] {
        log::trace!(
            "consumed {} contents bytes at position {}",
            range.len(),
            range.start
        );
        self.current_index = range.end;
        &self.encoding[range]
    }
}

fn parse_byte(input: &[u8]) -> IResult<&[u8], u8> {
    nom::number::be_u8().parse(input)
}

fn parse_bytes(input: &[u8], count: usize) -> IResult<&[u8], &[u8]> {
    nom::bytes::complete::take(count).parse(input)
}

fn log_failure(error: &Error) {
    log::debug!("failed to read encoding: {}", error);
}

impl Reading for Reader {
    type Error = Error;

    fn peek(&self) -> u8 {
        self.encoding
            .get(self.current_index)
            .copied()
            .unwrap_or(0x00)
    }

    fn unwrap(&mut self, identified_by: Option<u8>) -> Result<()> {
        let range = self.read_component(identified_by).inspect_err(log_failure)?;
        log::trace!(
            "unwrapped {} contents bytes at position {}",
            range.len(),
            range.start
        );
        self.current_index = range.start;
        Ok(())
    }

    fn read_contents(&mut self, identified_by: Option<u8>) -> Result<Vec<u8>> {
        let range = self.read_component(identified_by).inspect_err(log_failure)?;
        Ok(self.consume(range).to_vec())
    }

    fn reader_for_contents(&mut self, identified_by: Option<u8>) -> Result<Self> {
        let range = self.read_component(identified_by).inspect_err(log_failure)?;
        Ok(Reader::new(self.consume(range)))
    }

    fn read_contents_of_bit_string(&mut self) -> Result<Vec<u8>> {
        let range = self
            .read_header(Some(BIT_STRING))
            .and_then(|(index, length)| {
                if length == 0 {
                    // The declared contents cannot hold the unused bits byte.
                    return Err(Error::InvalidLength {
                        minimum_remaining: 1,
                        field: Field::FirstContentsByte,
                        actual_remaining: 0,
                        position: index,
                        encoding: self.encoding.clone(),
                    });
                }
                let (rest, first) = parse_byte(&self.encoding[index..])
                    .map_err(|_| self.invalid_length(index, 1, Field::FirstContentsByte))?;

                if first != NO_UNUSED_BITS {
                    return Err(Error::UnsupportedFirstContentsByte {
                        actual: first,
                        position: index,
                        encoding: self.encoding.clone(),
                    });
                }
                self.contents(self.index_of(rest), length - 1)
            })
            .inspect_err(log_failure)?;
        Ok(self.consume(range).to_vec())
    }

    fn skip_component(&mut self, identified_by: Option<u8>) -> Result<()> {
        let range = self.read_component(identified_by).inspect_err(log_failure)?;
        self.consume(range);
        Ok(())
    }

    fn skip(&mut self, expected: &[u8]) -> Result<()> {
        let index = self.current_index;
        let (rest, actual) = parse_bytes(&self.encoding[index..], expected.len())
            .map_err(|_| self.invalid_length(index, expected.len(), Field::Bytes))
            .inspect_err(log_failure)?;

        if actual != expected {
            let error = Error::InvalidBytes {
                expected: expected.to_vec(),
                actual: actual.to_vec(),
                position: index,
                encoding: self.encoding.clone(),
            };
            log_failure(&error);
            return Err(error);
        }
        let end = self.index_of(rest);
        self.consume(index..end);
        Ok(())
    }
}
