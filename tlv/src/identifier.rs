//! Single-byte ASN.1 identifiers.
//!
//! An identifier byte packs the class (bits 8-7), the constructed flag
//! (bit 6) and the tag number (bits 5-1). Tag number 31 introduces the
//! high-tag-number form, which is not supported, so every identifier handled
//! here fits in one byte.

pub const BOOLEAN: u8 = 0x01;
pub const INTEGER: u8 = 0x02;
pub const BIT_STRING: u8 = 0x03;
pub const OCTET_STRING: u8 = 0x04;
pub const NULL: u8 = 0x05;
pub const OBJECT_IDENTIFIER: u8 = 0x06;
pub const UTF8_STRING: u8 = 0x0c;
pub const PRINTABLE_STRING: u8 = 0x13;
pub const IA5_STRING: u8 = 0x16;
pub const UTC_TIME: u8 = 0x17;
pub const GENERALIZED_TIME: u8 = 0x18;
pub const SEQUENCE: u8 = 0x30;
pub const SET: u8 = 0x31;

/// First contents byte of a bit string whose length is a multiple of 8.
pub const NO_UNUSED_BITS: u8 = 0x00;

pub const CONSTRUCTED: u8 = 0x20;
pub const CONTEXT_SPECIFIC: u8 = 0x80;

/// Highest tag number that still fits in a single identifier byte.
pub const MAX_LOW_TAG_NUMBER: u8 = 30;

/// Returns true when the identifier marks a constructed component.
pub fn is_constructed(identifier: u8) -> bool {
    identifier & CONSTRUCTED == CONSTRUCTED
}

/// Builds a context-specific identifier such as `[0]` or `[3] IMPLICIT`.
///
/// Returns `None` when `tag` would need the high-tag-number form.
pub fn context_specific(tag: u8, constructed: bool) -> Option<u8> {
    if tag > MAX_LOW_TAG_NUMBER {
        return None;
    }
    let mut identifier = CONTEXT_SPECIFIC | tag;
    if constructed {
        identifier |= CONSTRUCTED;
    }
    Some(identifier)
}
