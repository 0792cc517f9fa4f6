/// Unencrypted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plaintext<T>(pub T);

/// Encrypted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ciphertext<T>(pub T);

/// An authentication tag produced by an AEAD mode such as [`crate::Ocb2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<T>(pub T);
