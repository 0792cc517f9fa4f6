//! FIPS-197 single-block test vectors for AES-128/192/256, i.e. Rijndael at
//! `Nb = 4` with `Nk` in {4, 6, 8}.

use crate::{Aes128, Aes192, Aes256, BlockCipher};

fn block(hex: &str) -> [u8; 16] {
    hex::decode(hex).unwrap().try_into().unwrap()
}

#[test]
fn aes_128_fips197_vector() {
    let cipher = Aes128;
    let key: [u8; 16] = hex::decode("000102030405060708090a0b0c0d0e0f")
        .unwrap()
        .try_into()
        .unwrap();
    let schedule = cipher.expand_key(&key);

    let mut data = block("00112233445566778899aabbccddeeff");
    cipher.encrypt_block(&schedule, &mut data);
    assert_eq!(data, block("69c4e0d86a7b0430d8cdb78070b4c55a"));

    cipher.decrypt_block(&schedule, &mut data);
    assert_eq!(data, block("00112233445566778899aabbccddeeff"));
}

#[test]
fn aes_192_fips197_vector() {
    let cipher = Aes192;
    let key: [u8; 24] = hex::decode("000102030405060708090a0b0c0d0e0f1011121314151617")
        .unwrap()
        .try_into()
        .unwrap();
    let schedule = cipher.expand_key(&key);

    let mut data = block("00112233445566778899aabbccddeeff");
    cipher.encrypt_block(&schedule, &mut data);
    assert_eq!(data, block("dda97ca4864cdfe06eaf70a0ec0d7191"));

    cipher.decrypt_block(&schedule, &mut data);
    assert_eq!(data, block("00112233445566778899aabbccddeeff"));
}

#[test]
fn aes_256_fips197_vector() {
    let cipher = Aes256;
    let key: [u8; 32] =
        hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
            .unwrap()
            .try_into()
            .unwrap();
    let schedule = cipher.expand_key(&key);

    let mut data = block("00112233445566778899aabbccddeeff");
    cipher.encrypt_block(&schedule, &mut data);
    assert_eq!(data, block("8ea2b7ca516745bfeafc49904b496089"));

    cipher.decrypt_block(&schedule, &mut data);
    assert_eq!(data, block("00112233445566778899aabbccddeeff"));
}

#[test]
fn random_round_trip_for_every_rijndael_configuration() {
    use crate::cipher::block::{
        Rijndael192_128,
        Rijndael192_192,
        Rijndael192_256,
        Rijndael256_128,
        Rijndael256_192,
        Rijndael256_256,
    };
    use rand::Rng;

    fn round_trip<C: BlockCipher + Default>()
    where
        C::Key: for<'a> TryFrom<&'a [u8]>,
    {
        let cipher = C::default();
        let key_bytes = std::mem::size_of::<C::Key>();
        let block_bytes = std::mem::size_of::<C::Block>();
        let key: Vec<u8> = (0..key_bytes).map(|_| rand::thread_rng().gen()).collect();
        let key = C::Key::try_from(&key).unwrap_or_else(|_| unreachable!());
        let schedule = cipher.expand_key(&key);

        let original: Vec<u8> = (0..block_bytes).map(|_| rand::thread_rng().gen()).collect();
        let mut block = C::Block::try_from(&original).unwrap_or_else(|_| unreachable!());
        cipher.encrypt_block(&schedule, &mut block);
        cipher.decrypt_block(&schedule, &mut block);
        assert_eq!(block.as_ref(), original.as_slice());
    }

    round_trip::<Rijndael192_128>();
    round_trip::<Rijndael192_192>();
    round_trip::<Rijndael192_256>();
    round_trip::<Rijndael256_128>();
    round_trip::<Rijndael256_192>();
    round_trip::<Rijndael256_256>();
}
