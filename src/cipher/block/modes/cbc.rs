use crate::{
    cipher::block::{padding::ZeroPad, BlockCipher, Padding},
    error::Error,
    util::xor_into,
};

/// Cipher Block Chaining: each plaintext block is XORed with the previous
/// ciphertext block before encryption, so identical plaintext blocks
/// produce different ciphertext as long as what precedes them differs.
///
/// The plaintext is [zero-padded](ZeroPad) to a block boundary before
/// chaining starts. Padding is only ever applied (never removed) by this
/// type: the ambiguity between real trailing zero bytes and padding is
/// resolved by whatever frames the plaintext, not here (see
/// [`crate::container`]).
///
/// The IV is not part of the ciphertext this produces — callers own IV
/// generation, storage, and transmission.
pub struct Cbc<C>(std::marker::PhantomData<C>);

impl<C: BlockCipher> Cbc<C> {
    /// Encrypt `plaintext` under `schedule`, chaining from `iv`.
    pub fn encrypt(cipher: &C, schedule: &C::Schedule, iv: C::Block, plaintext: &[u8]) -> Vec<u8> {
        let block_size = iv.as_ref().len();
        let padded = ZeroPad.pad(plaintext.to_vec(), block_size);

        let mut prev = iv;
        let mut out = Vec::with_capacity(padded.len());
        for chunk in padded.chunks(block_size) {
            let mut block = C::Block::try_from(chunk).expect("chunk is exactly one block");
            xor_into(block.as_mut(), prev.as_ref());
            cipher.encrypt_block(schedule, &mut block);
            out.extend_from_slice(block.as_ref());
            prev = block;
        }
        out
    }

    /// Decrypt `ciphertext` under `schedule`, chaining from `iv`. The
    /// returned plaintext is still zero-padded to a block boundary; callers
    /// that need the exact original length must track it separately.
    pub fn decrypt(
        cipher: &C,
        schedule: &C::Schedule,
        iv: C::Block,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, Error> {
        let block_size = iv.as_ref().len();
        if ciphertext.len() % block_size != 0 {
            return Err(Error::BadCiphertextLength);
        }

        let mut prev = iv;
        let mut out = Vec::with_capacity(ciphertext.len());
        for chunk in ciphertext.chunks(block_size) {
            let ciphertext_block = C::Block::try_from(chunk).expect("chunk is exactly one block");
            let mut block = ciphertext_block;
            cipher.decrypt_block(schedule, &mut block);
            xor_into(block.as_mut(), prev.as_ref());
            out.extend_from_slice(block.as_ref());
            prev = ciphertext_block;
        }
        Ok(out)
    }
}
