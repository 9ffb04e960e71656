//! Reading trait for extracting components from an encoding.
//!
//! The `Reading` trait describes a cursor over a BER encoding that yields
//! raw bytes. It is implemented by `ber::Reader`, and consumer code that is
//! written against the trait can be driven by a test double instead.
//!
//! # Usage Pattern
//!
//! A single reader is enough to read any encoding as long as the identifier
//! expected at each position is known upfront. When a structured type holds
//! optional components or a variable number of components, take a child
//! reader for its contents with `reader_for_contents` and `peek` at it.
//!
//! ```ignore
//! use tlv::identifier::{BIT_STRING, NULL, SEQUENCE};
//! use tlv::reading::Reading;
//!
//! // SEQUENCE { NULL, BIT STRING 00 02 01 07 }
//! let mut reader = ber::Reader::new(vec![
//!     0x30, 0x08, 0x05, 0x00, 0x03, 0x04, 0x00, 0x02, 0x01, 0x07,
//! ]);
//! reader.unwrap(Some(SEQUENCE))?;
//! reader.skip(&[0x05, 0x00])?;
//! let key = reader.read_contents_of_bit_string()?;
//! assert_eq!(vec![0x02, 0x01, 0x07], key);
//! ```

/// Sequential access to the components of an encoding.
///
/// Every operation that takes an `identified_by` argument verifies the
/// identifier byte when it is `Some` and fails without consuming anything on
/// a mismatch. A failed operation never moves the cursor.
pub trait Reading {
    /// The error type returned when the encoding appears to be invalid.
    type Error;

    /// Returns the identifier of the next component without consuming it,
    /// or `0x00` when no bytes are left.
    fn peek(&self) -> u8;

    /// Consumes the identifier and length of the next component and leaves
    /// the cursor at the start of its contents.
    ///
    /// # Errors
    ///
    /// Fails if the identifier does not match or fewer contents bytes remain
    /// than the length field states.
    fn unwrap(&mut self, identified_by: Option<u8>) -> Result<(), Self::Error>;

    /// Consumes the next component and returns its contents bytes.
    fn read_contents(&mut self, identified_by: Option<u8>) -> Result<Vec<u8>, Self::Error>;

    /// Consumes the next component and returns a reader scoped to its
    /// contents. The child has its own cursor starting at 0.
    fn reader_for_contents(&mut self, identified_by: Option<u8>) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Consumes a bit string that has no unused bits and returns its
    /// contents without the leading `0x00`.
    ///
    /// # Errors
    ///
    /// Fails if the identifier is not `0x03` or the first contents byte is
    /// not `0x00`.
    fn read_contents_of_bit_string(&mut self) -> Result<Vec<u8>, Self::Error>;

    /// Consumes the next component and discards it.
    fn skip_component(&mut self, identified_by: Option<u8>) -> Result<(), Self::Error>;

    /// Consumes exactly `expected` if the bytes at the cursor match it.
    fn skip(&mut self, expected: &[u8]) -> Result<(), Self::Error>;
}
