//! Bottom-up writer for DER encodings.
//!
//! Contents are written first and wrapped afterwards, so the size of an
//! outer component never has to be known before its inner components are
//! finished. Length fields are always emitted in their shortest form.

use std::collections::VecDeque;

use tlv::identifier::{BIT_STRING, NO_UNUSED_BITS};
use tlv::length::encode_length;

pub use tlv::writing::Writing;

/// Accumulates an encoding by inserting bytes in front of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Writer {
    encoding: VecDeque<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Writer::default()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.encoding.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoding.is_empty()
    }

    pub fn into_encoding(self) -> Vec<u8> {
        self.encoding.into()
    }

    fn prepend(&mut self, bytes: &[u8]) {
        for &b in bytes.iter().rev() {
            self.encoding.push_front(b);
        }
    }

    fn prepend_length_and_identifier(&mut self, identifier: u8, length: usize) {
        log::trace!(
            "wrapping {} contents bytes with identifier {:02x}",
            length,
            identifier
        );
        self.prepend(&encode_length(length));
        self.encoding.push_front(identifier);
    }
}

impl Writing for Writer {
    fn write(&mut self, bytes: &[u8]) {
        self.prepend(bytes);
    }

    fn write_contents(&mut self, contents: &[u8], identifier: u8) {
        self.prepend(contents);
        self.prepend_length_and_identifier(identifier, contents.len());
    }

    fn wrap(&mut self, identifier: u8) {
        self.prepend_length_and_identifier(identifier, self.encoding.len());
    }

    fn wrap_bit_string(&mut self) {
        self.encoding.push_front(NO_UNUSED_BITS);
        self.wrap(BIT_STRING);
    }

    fn write_from(&mut self, other: &Self) {
        for &b in other.encoding.iter().rev() {
            self.encoding.push_front(b);
        }
    }

    fn encoding(&self) -> Vec<u8> {
        self.encoding.iter().copied().collect()
    }
}
