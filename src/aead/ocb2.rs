use crate::{cipher::block::BlockCipher, error::Error, gf128, mac::pmac, util::xor_into};
use zeroize::Zeroize;

/// OCB2, an authenticated encryption mode built on a 128-bit-block cipher.
///
/// OCB2 only runs on 16-byte blocks (`Nb = 4`) — this is enforced at
/// compile time through the `Block = [u8; 16]` bound on [`BlockCipher`],
/// rather than as a runtime check, since the type system can rule out the
/// misuse entirely.
///
/// A nonce is encrypted once to produce a running offset; every plaintext
/// block is XORed with the offset before and after the block encryption
/// (so two identical plaintext blocks at different positions never produce
/// the same ciphertext), and the offset is doubled in $GF(2^{128})$ between
/// blocks. A running XOR of the plaintext blocks (the "checksum") is
/// encrypted under a final offset to produce the tag; when a header is
/// supplied, [`pmac::tag`] of the header is XORed into the tag as well, so
/// the header is authenticated without being encrypted.
pub struct Ocb2<C>(std::marker::PhantomData<C>);

const BLOCK_SIZE: usize = 16;

impl<C> Ocb2<C>
where
    C: BlockCipher<Block = [u8; 16]>,
{
    /// Encrypt and authenticate `plaintext`, binding in `header` as
    /// associated data. Returns `(ciphertext, tag)`.
    pub fn seal(
        cipher: &C,
        schedule: &C::Schedule,
        nonce: [u8; 16],
        header: &[u8],
        plaintext: &[u8],
    ) -> (Vec<u8>, [u8; 16]) {
        let mut offset = nonce;
        cipher.encrypt_block(schedule, &mut offset);

        let num_blocks = plaintext.len().div_ceil(BLOCK_SIZE).max(1);
        let last_len = plaintext.len() - (num_blocks - 1) * BLOCK_SIZE;

        let mut checksum = [0u8; 16];
        let mut ciphertext = Vec::with_capacity(plaintext.len());

        for i in 0..num_blocks - 1 {
            offset = gf128::double(offset);
            let chunk = &plaintext[i * BLOCK_SIZE..(i + 1) * BLOCK_SIZE];
            let mut block: [u8; 16] = chunk.try_into().expect("chunk is 16 bytes");
            xor_into(&mut checksum, &block);
            xor_into(&mut block, &offset);
            cipher.encrypt_block(schedule, &mut block);
            xor_into(&mut block, &offset);
            ciphertext.extend_from_slice(&block);
        }

        offset = gf128::double(offset);
        let last = &plaintext[(num_blocks - 1) * BLOCK_SIZE..];
        let mut pad = offset;
        xor_into(&mut pad, &num2str(8 * last_len));
        cipher.encrypt_block(schedule, &mut pad);
        let c_last: Vec<u8> = last.iter().zip(pad.iter()).map(|(p, k)| p ^ k).collect();
        ciphertext.extend_from_slice(&c_last);

        let mut checksum_last = [0u8; 16];
        checksum_last[..last.len()].copy_from_slice(last);
        checksum_last[last.len()..].copy_from_slice(&pad[last.len()..]);
        xor_into(&mut checksum, &checksum_last);

        offset = gf128::triple(offset);
        let mut tag = checksum;
        xor_into(&mut tag, &offset);
        cipher.encrypt_block(schedule, &mut tag);
        if !header.is_empty() {
            xor_into(&mut tag, &pmac::tag(cipher, schedule, header));
        }

        (ciphertext, tag)
    }

    /// Decrypt `ciphertext` and verify it (and `header`) against `tag`.
    ///
    /// On mismatch, the partially recovered plaintext is zeroized before
    /// this returns [`Error::AuthenticationFailed`] — callers never see
    /// unauthenticated plaintext.
    ///
    /// The tag comparison below is a plain `!=`, not constant-time. This
    /// mode makes no side-channel hardening claims (the container format it
    /// backs isn't DPA-resistant either); a deployment that needs
    /// constant-time tag comparison must add it at the call site.
    pub fn open(
        cipher: &C,
        schedule: &C::Schedule,
        nonce: [u8; 16],
        header: &[u8],
        ciphertext: &[u8],
        tag: [u8; 16],
    ) -> Result<Vec<u8>, Error> {
        let mut offset = nonce;
        cipher.encrypt_block(schedule, &mut offset);

        let num_blocks = ciphertext.len().div_ceil(BLOCK_SIZE).max(1);
        let last_len = ciphertext.len() - (num_blocks - 1) * BLOCK_SIZE;

        let mut checksum = [0u8; 16];
        let mut plaintext = Vec::with_capacity(ciphertext.len());

        for i in 0..num_blocks - 1 {
            offset = gf128::double(offset);
            let chunk = &ciphertext[i * BLOCK_SIZE..(i + 1) * BLOCK_SIZE];
            let mut block: [u8; 16] = chunk.try_into().expect("chunk is 16 bytes");
            xor_into(&mut block, &offset);
            cipher.decrypt_block(schedule, &mut block);
            xor_into(&mut block, &offset);
            xor_into(&mut checksum, &block);
            plaintext.extend_from_slice(&block);
        }

        offset = gf128::double(offset);
        let last = &ciphertext[(num_blocks - 1) * BLOCK_SIZE..];
        let mut pad = offset;
        xor_into(&mut pad, &num2str(8 * last_len));
        cipher.encrypt_block(schedule, &mut pad);
        let p_last: Vec<u8> = last.iter().zip(pad.iter()).map(|(c, k)| c ^ k).collect();

        let mut checksum_last = [0u8; 16];
        checksum_last[..p_last.len()].copy_from_slice(&p_last);
        checksum_last[p_last.len()..].copy_from_slice(&pad[p_last.len()..]);
        xor_into(&mut checksum, &checksum_last);
        plaintext.extend_from_slice(&p_last);

        offset = gf128::triple(offset);
        let mut computed_tag = checksum;
        xor_into(&mut computed_tag, &offset);
        cipher.encrypt_block(schedule, &mut computed_tag);
        if !header.is_empty() {
            xor_into(&mut computed_tag, &pmac::tag(cipher, schedule, header));
        }

        if computed_tag != tag {
            plaintext.zeroize();
            return Err(Error::AuthenticationFailed);
        }
        Ok(plaintext)
    }
}

/// The big-endian, block-wide encoding of `n`, used to bind the last
/// block's bit length into its one-time pad.
fn num2str(n: usize) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[8..].copy_from_slice(&(n as u64).to_be_bytes());
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cipher::block::Aes128;

    #[test]
    fn round_trips_with_header() {
        let cipher = Aes128;
        let schedule = cipher.expand_key(&[0x10u8; 16]);
        let nonce = [0x20u8; 16];
        let header = b"container header";
        let plaintext = b"exactly thirty two octets here!";

        let (ciphertext, tag) = Ocb2::seal(&cipher, &schedule, nonce, header, plaintext);
        let decrypted = Ocb2::open(&cipher, &schedule, nonce, header, &ciphertext, tag).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn round_trips_partial_last_block() {
        let cipher = Aes128;
        let schedule = cipher.expand_key(&[0x44u8; 16]);
        let nonce = [0x55u8; 16];
        let plaintext = b"seventeen octets!";

        let (ciphertext, tag) = Ocb2::seal(&cipher, &schedule, nonce, b"", plaintext);
        let decrypted = Ocb2::open(&cipher, &schedule, nonce, b"", &ciphertext, tag).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn round_trips_empty_plaintext_and_header() {
        let cipher = Aes128;
        let schedule = cipher.expand_key(&[0x66u8; 16]);
        let nonce = [0x77u8; 16];

        let (ciphertext, tag) = Ocb2::seal(&cipher, &schedule, nonce, b"", b"");
        assert!(ciphertext.is_empty());
        let decrypted = Ocb2::open(&cipher, &schedule, nonce, b"", &ciphertext, tag).unwrap();
        assert!(decrypted.is_empty());
    }

    #[test]
    fn empty_message_tag_matches_the_spec_formula() {
        let cipher = Aes128;
        let schedule = cipher.expand_key(&[0u8; 16]);
        let iv = [0u8; 16];

        let mut l0 = iv;
        cipher.encrypt_block(&schedule, &mut l0);
        let doubled = gf128::double(l0);
        let mut pad = doubled;
        cipher.encrypt_block(&schedule, &mut pad);
        let mut expected_tag = gf128::triple(doubled);
        xor_into(&mut expected_tag, &pad);
        cipher.encrypt_block(&schedule, &mut expected_tag);

        let (ciphertext, tag) = Ocb2::seal(&cipher, &schedule, iv, b"", b"");
        assert!(ciphertext.is_empty());
        assert_eq!(tag, expected_tag);
    }

    #[test]
    fn tampered_ciphertext_fails_to_authenticate() {
        let cipher = Aes128;
        let schedule = cipher.expand_key(&[0x88u8; 16]);
        let nonce = [0x99u8; 16];
        let (mut ciphertext, tag) = Ocb2::seal(&cipher, &schedule, nonce, b"hdr", b"some plaintext!!");
        ciphertext[0] ^= 1;
        let err = Ocb2::open(&cipher, &schedule, nonce, b"hdr", &ciphertext, tag).unwrap_err();
        assert_eq!(err, Error::AuthenticationFailed);
    }

    #[test]
    fn tampered_header_fails_to_authenticate() {
        let cipher = Aes128;
        let schedule = cipher.expand_key(&[0xaau8; 16]);
        let nonce = [0xbbu8; 16];
        let (ciphertext, tag) = Ocb2::seal(&cipher, &schedule, nonce, b"hdr-a", b"some plaintext!!");
        let err = Ocb2::open(&cipher, &schedule, nonce, b"hdr-b", &ciphertext, tag).unwrap_err();
        assert_eq!(err, Error::AuthenticationFailed);
    }
}
