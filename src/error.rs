use std::fmt;

/// Errors produced by block-size/key-size validation, mode operations, and
/// container parsing.
///
/// On [`Error::AuthenticationFailed`], callers must not surface any
/// plaintext recovered before the tag mismatch was detected; the container
/// layer zeroizes such buffers before returning this variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `Nk` was not one of 4, 6, or 8 words.
    InvalidKeyLength,
    /// `Nb` was not one of 4, 6, or 8 words, or `Nb != 4` was used with OCB2.
    InvalidBlockSize,
    /// A CBC ciphertext was not a multiple of the block size, or a container
    /// was shorter than its mandatory iv/tag prefix.
    BadCiphertextLength,
    /// The container header line did not match the expected grammar.
    BadHeader,
    /// The container payload was marked base64-encoded but did not decode.
    BadBase64,
    /// OCB2 tag verification failed; the plaintext is not authentic.
    AuthenticationFailed,
    /// A CBC container's decrypted payload did not begin with `<digits>\n`.
    LengthPrefixMissing,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidKeyLength => "key length must be 16, 24, or 32 bytes",
            Error::InvalidBlockSize => "block size must be 16, 24, or 32 bytes",
            Error::BadCiphertextLength => "ciphertext length is invalid for this mode",
            Error::BadHeader => "container header does not match the expected grammar",
            Error::BadBase64 => "container payload is not valid base64",
            Error::AuthenticationFailed => "authentication tag did not verify",
            Error::LengthPrefixMissing => "cbc payload is missing its length prefix",
        })
    }
}

impl std::error::Error for Error {}
