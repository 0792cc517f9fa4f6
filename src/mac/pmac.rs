//! PMAC, as used by [`crate::aead::Ocb2`] to authenticate the associated
//! data (the container header) alongside the ciphertext.
//!
//! Unlike a general-purpose MAC, this is tied to a single 128-bit-block
//! cipher and a schedule the caller has already expanded — it is not meant
//! to be used standalone, only as OCB2's header-authentication step.

use crate::{cipher::block::BlockCipher, gf128, util::xor_into};

/// Authenticate `header` under `schedule`, returning a 16-byte tag to be
/// XORed into OCB2's ciphertext tag.
///
/// `header` must not be empty — callers (OCB2) are expected to skip calling
/// this entirely when there is no associated data, rather than relying on
/// it to handle that case.
///
/// The base point `L` is `triple(triple(E_K(0)))`. Every block but the last
/// is individually encrypted under a doubled running offset and XORed into
/// a running checksum; the last block is folded into the checksum raw
/// (encrypted only once, as part of the final step below) under one more
/// doubling, then a triple (full block) or double-triple (short block,
/// `0x80`-padded so it can't collide with an aligned one). The whole
/// checksum is encrypted exactly once, at the end, to produce the tag.
pub fn tag<C>(cipher: &C, schedule: &C::Schedule, header: &[u8]) -> [u8; 16]
where
    C: BlockCipher<Block = [u8; 16]>,
{
    debug_assert!(
        !header.is_empty(),
        "pmac::tag must not be called with an empty header"
    );

    const BLOCK_SIZE: usize = 16;

    let mut l = [0u8; 16];
    cipher.encrypt_block(schedule, &mut l);
    l = gf128::triple(gf128::triple(l));

    let num_blocks = header.len().div_ceil(BLOCK_SIZE);
    let last_len = header.len() - (num_blocks - 1) * BLOCK_SIZE;

    let mut offset = l;
    let mut checksum = [0u8; 16];

    for i in 0..num_blocks - 1 {
        offset = gf128::double(offset);
        let chunk = &header[i * BLOCK_SIZE..(i + 1) * BLOCK_SIZE];
        let mut block: [u8; 16] = chunk.try_into().expect("chunk is 16 bytes");
        xor_into(&mut block, &offset);
        cipher.encrypt_block(schedule, &mut block);
        xor_into(&mut checksum, &block);
    }

    offset = gf128::double(offset);
    let last = &header[(num_blocks - 1) * BLOCK_SIZE..];
    if last_len == BLOCK_SIZE {
        offset = gf128::triple(offset);
        xor_into(&mut checksum, last);
    } else {
        offset = gf128::triple(gf128::triple(offset));
        let mut padded = [0u8; BLOCK_SIZE];
        padded[..last.len()].copy_from_slice(last);
        padded[last.len()] = 0x80;
        xor_into(&mut checksum, &padded);
    }

    xor_into(&mut checksum, &offset);
    cipher.encrypt_block(schedule, &mut checksum);
    checksum
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cipher::block::Aes128;

    #[test]
    fn tag_is_deterministic() {
        let cipher = Aes128;
        let schedule = cipher.expand_key(&[0x11u8; 16]);
        let header = b"container header v1";
        assert_eq!(tag(&cipher, &schedule, header), tag(&cipher, &schedule, header));
    }

    #[test]
    fn different_headers_produce_different_tags() {
        let cipher = Aes128;
        let schedule = cipher.expand_key(&[0x22u8; 16]);
        let a = tag(&cipher, &schedule, b"header one");
        let b = tag(&cipher, &schedule, b"header two");
        assert_ne!(a, b);
    }

    #[test]
    fn aligned_and_short_headers_do_not_collide() {
        let cipher = Aes128;
        let schedule = cipher.expand_key(&[0x33u8; 16]);
        let aligned = tag(&cipher, &schedule, &[0x41u8; 16]);
        let mut short = [0x41u8; 16];
        short[15] = 0x80;
        let short_tag = tag(&cipher, &schedule, &short[..15]);
        assert_ne!(aligned, short_tag);
    }
}
