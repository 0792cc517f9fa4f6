pub mod block;

pub use block::{
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
};
