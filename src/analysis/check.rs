/// What to verify about the pieces of a face.
///
/// Replaces a free-form mode string, so an unknown mode cannot exist.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Check {
    /// Every selected sticker shows its face's color. Sticker-level only,
    /// weaker than the piece being solved.
    Oriented,
    /// Every selected piece sits in its home position (any orientation),
    /// for at least one of the four turns of the face.
    Permuted,
}
