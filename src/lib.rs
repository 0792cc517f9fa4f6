#[cfg(test)]
mod test;

#[cfg(doc)]
pub mod doc;

mod aead;
mod bytes;
mod cipher;
pub mod container;
mod error;
mod gf128;
pub mod kdf;
mod key;
pub mod mac;
mod random;
mod text;
mod util;

pub use {
    aead::{Aead, Ocb2},
    bytes::Bytes,
    cipher::{
        Aes128,
        Aes192,
        Aes256,
        BlockCipher,
        Cbc,
        Padding,
        Rijndael192_128,
        Rijndael192_192,
        Rijndael192_256,
        Rijndael256_128,
        Rijndael256_192,
        Rijndael256_256,
        ZeroPad,
    },
    error::Error,
    key::Key,
    random::RandomSource,
    text::{Ciphertext, Plaintext, Tag},
};
