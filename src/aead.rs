pub mod ocb2;

pub use ocb2::Ocb2;

/// Authenticated encryption with associated data: like a [block
/// mode](crate::BlockMode), but [`seal`](Aead::seal)/[`open`](Aead::open)
/// also bind in a header that travels in the clear and produce/verify a
/// tag, so tampering with either the ciphertext or the header is detected.
pub trait Aead {
    type Err;
}

impl<C> Aead for Ocb2<C> {
    type Err = crate::error::Error;
}
