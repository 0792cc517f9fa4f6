/// A source of uniformly distributed random bytes.
///
/// This is consumed by IV/nonce generation for [`crate::container`]'s CBC
/// and OCB2 payloads, not implemented here. Whether an implementation wraps
/// a hardware RNG, an OS RNG, or something that hashes keystroke/pointer
/// timing into bytes is an integration concern that lives outside this
/// crate (see the crate-level docs for the out-of-scope list).
///
/// IV unpredictability is required for CBC's security argument; IV
/// uniqueness (not necessarily unpredictability) is required for OCB2's.
/// This trait does not police which property an implementation provides —
/// callers are responsible for picking a source suited to the mode they use.
pub trait RandomSource {
    /// Fill `out` with random bytes.
    fn fill(&mut self, out: &mut [u8]);
}

impl<F: FnMut(&mut [u8])> RandomSource for F {
    fn fill(&mut self, out: &mut [u8]) {
        self(out)
    }
}
