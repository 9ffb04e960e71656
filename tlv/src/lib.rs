//! # tlv
//!
//! Shared vocabulary for reading and writing the Tag-Length-Value structure
//! of ASN.1 BER/DER encodings.
//!
//! This crate defines the `Reading` and `Writing` traits that the `ber`
//! reader and the `der` writer implement, the single-byte identifiers most
//! encodings are built from, and the definite-length field codec both sides
//! agree on.
//!
//! ## Overview
//!
//! Every component on the wire looks like this:
//! ```text
//! identifier (1 byte) | length field (1..=128 bytes) | contents (length bytes)
//! ```
//!
//! The contents of a constructed component are themselves a concatenation of
//! components, so nesting is expressed by scoping a new reader (or writer) to
//! the contents bytes.
//!
//! ## Restrictions
//!
//! - Only bytes flow in and out. There is no conversion to typed values.
//! - Identifiers are a single byte (no high tag numbers).
//! - Only definite lengths. The indefinite-length marker `0x80` is rejected
//!   by readers and never produced by writers.
//!
//! ## Example
//!
//! ```ignore
//! use tlv::identifier::{NULL, SEQUENCE};
//! use tlv::reading::Reading;
//! use tlv::writing::Writing;
//!
//! let mut writer = der::Writer::new();
//! writer.write_contents(&[], NULL);
//! writer.wrap(SEQUENCE);
//!
//! let mut reader = ber::Reader::new(writer.encoding());
//! let mut sequence = reader.reader_for_contents(Some(SEQUENCE)).unwrap();
//! assert!(sequence.read_contents(Some(NULL)).unwrap().is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod identifier;
pub mod length;
pub mod reading;
pub mod writing;
