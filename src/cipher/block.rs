pub mod modes;
pub mod padding;
pub mod rijndael;

pub use {
    modes::{BlockMode, Cbc},
    padding::{Padding, ZeroPad},
    rijndael::{
        Aes128,
        Aes192,
        Aes256,
        Rijndael192_128,
        Rijndael192_192,
        Rijndael192_256,
        Rijndael256_128,
        Rijndael256_192,
        Rijndael256_256,
    },
};

use crate::Bytes;

/// A block cipher encrypts and decrypts data one fixed-size block at a time,
/// under a round-key schedule expanded once from the key.
///
/// Splitting key expansion ([`expand_key`](BlockCipher::expand_key)) from
/// the per-block operations lets a caller that processes many blocks under
/// the same key — [`Cbc`], PMAC, OCB2 — expand the schedule once and reuse
/// it, instead of repeating the expansion on every block.
///
/// Note that a block cipher alone does not fulfill the definition of a
/// cipher over arbitrary-length data: it must be paired with a
/// [block mode](BlockMode) such as [`Cbc`].
pub trait BlockCipher {
    type Block: Bytes;
    type Key: Bytes;
    type Schedule;

    /// Expand `key` into the round-key schedule used by
    /// [`encrypt_block`](Self::encrypt_block)/[`decrypt_block`](Self::decrypt_block).
    fn expand_key(&self, key: &Self::Key) -> Self::Schedule;

    /// Encrypt `block` in place under `schedule`.
    fn encrypt_block(&self, schedule: &Self::Schedule, block: &mut Self::Block);

    /// Decrypt `block` in place under `schedule`.
    fn decrypt_block(&self, schedule: &Self::Schedule, block: &mut Self::Block);
}
