//! Writing trait for building an encoding bottom-up.
//!
//! Writers only ever insert bytes in front of what was written before, so
//! the deepest contents go in first and the wrapping length and identifier
//! follow once their size is known. A structure that forks into several
//! branches is built with one writer per branch, merged with `write_from`.

/// Prepend-only construction of a DER encoding.
///
/// None of the operations can fail. Writing bytes that are not a valid
/// encoding produces a structurally valid component with meaningless
/// contents.
pub trait Writing {
    /// Writes `bytes` on top of everything written so far, as a sibling.
    fn write(&mut self, bytes: &[u8]);

    /// Writes `contents`, then its length, then `identifier` on top of
    /// everything written so far.
    ///
    /// For a bit string the first contents byte must give the number of
    /// unused bits; supplying it is up to the caller.
    fn write_contents(&mut self, contents: &[u8], identifier: u8);

    /// Wraps everything written so far as the contents of a new component.
    fn wrap(&mut self, identifier: u8);

    /// Prepends `0x00` and wraps everything written so far as a bit string.
    fn wrap_bit_string(&mut self);

    /// Writes the whole encoding of `other` on top of this one, as a sibling.
    fn write_from(&mut self, other: &Self)
    where
        Self: Sized;

    /// All bytes written so far.
    fn encoding(&self) -> Vec<u8>;
}
