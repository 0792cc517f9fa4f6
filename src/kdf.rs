//! Password-derived key generation.
//!
//! This scheme is deliberately weak and exists only so this crate stays
//! interoperable with containers produced by older implementations — it is
//! not a general-purpose KDF and must not be reused outside this format.
//! There is no salt, no iteration count, and no memory-hardness: a weak
//! password yields a weak key. [`derive_key`] reproduces the original
//! construction exactly rather than improving on it.

use crate::{
    cipher::block::{Aes128, BlockCipher, Cbc},
    Rijndael192_192,
    Rijndael256_256,
};
use zeroize::Zeroizing;

/// Derive an `nk * 4`-byte key from `password`, for key size `nk` words
/// (4, 6, or 8).
///
/// The password is zero-padded (never truncated) to the next multiple of
/// `nk * 4` bytes — at least one full block, even for an empty password.
/// The first `nk * 4` bytes of that padding are used directly as a key to
/// key-schedule itself, at block size `nk` (i.e. `Nb = Nk` for this step,
/// regardless of the block size the derived key will actually be used
/// with). That schedule CBC-encrypts the *entire* padded password (which
/// may span several blocks for passwords longer than one block) under an
/// all-zero IV; the final `nk * 4` bytes of ciphertext are the derived key.
///
/// Panics if `nk` is not one of 4, 6, or 8 — this module is only reached
/// after [`crate::container`] has already validated that value.
pub fn derive_key(password: &[u8], nk: usize) -> Zeroizing<Vec<u8>> {
    let key_bytes = nk * 4;
    let block_count = password.len().div_ceil(key_bytes).max(1);
    let mut padded = Zeroizing::new(vec![0u8; block_count * key_bytes]);
    padded[..password.len()].copy_from_slice(password);

    let ciphertext = match nk {
        4 => {
            let cipher = Aes128;
            let key: [u8; 16] = padded[..key_bytes].try_into().expect("16 bytes");
            let schedule = cipher.expand_key(&key);
            Cbc::encrypt(&cipher, &schedule, [0u8; 16], &padded)
        }
        6 => {
            let cipher = Rijndael192_192;
            let key: [u8; 24] = padded[..key_bytes].try_into().expect("24 bytes");
            let schedule = cipher.expand_key(&key);
            Cbc::encrypt(&cipher, &schedule, [0u8; 24], &padded)
        }
        8 => {
            let cipher = Rijndael256_256;
            let key: [u8; 32] = padded[..key_bytes].try_into().expect("32 bytes");
            let schedule = cipher.expand_key(&key);
            Cbc::encrypt(&cipher, &schedule, [0u8; 32], &padded)
        }
        _ => panic!("nk must be 4, 6, or 8"),
    };

    Zeroizing::new(ciphertext[ciphertext.len() - key_bytes..].to_vec())
}
