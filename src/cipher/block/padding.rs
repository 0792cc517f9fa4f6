mod zero;

pub use zero::ZeroPad;

/// A scheme to pad messages to be a multiple of some block size.
///
/// [Block ciphers](crate::BlockCipher) expect the input data to be a
/// multiple of the block size. However, messages are rarely an exact
/// multiple of the block size, so a padding scheme is needed to extend the
/// length of the data before encryption.
///
/// Exposing information about the validity of padding can be dangerous.
/// Imagine a server which accepts encrypted messages from clients. An
/// adversary can send arbitrary ciphertexts to such a server. This attack
/// model is called a chosen ciphertext attack. Now imagine that the server
/// has a design flaw, and it will return a specific type of error if the
/// padding is invalid. This allows the attacker to send arbitrary
/// ciphertexts to the server and learn whether the padding is valid or not.
/// The attacker can use this information to decrypt the ciphertext faster
/// than a simple bruteforce attack.
///
/// This is called a padding oracle attack. [`ZeroPad`] sidesteps it
/// entirely: zero-padding carries no validity signal to leak, because
/// [`unpad`](Padding::unpad) never rejects anything.
pub trait Padding {
    type Err;

    /// Pad `data` to a multiple of `n` bytes.
    fn pad(&self, data: Vec<u8>, n: usize) -> Vec<u8>;

    /// Undo [`pad`](Padding::pad). Returns an error if the padding is
    /// invalid.
    fn unpad(&self, data: Vec<u8>, n: usize) -> Result<Vec<u8>, Self::Err>;
}
