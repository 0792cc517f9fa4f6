//! The text container format: a human-readable ASCII header line describing
//! how a ciphertext was produced, followed by the ciphertext itself (raw or
//! base64-encoded).
//!
//! ```text
//! aes-encrypted V 1.2-<MODE>-<ENC>-<Nb>-<Nk>-<CHR>\n
//! <payload>
//! ```
//!
//! `<MODE>` is `CBC` or `OCB` (never `AUTO` — [`Mode::Auto`] is resolved to
//! one or the other before the header is written). `<ENC>` is `B` (base64)
//! or `N` (raw/none). `<Nb>`/`<Nk>` are decimal word counts, each 4, 6, or
//! 8. `<CHR>` is `M` or `U`, an opaque marker this crate stores and
//! round-trips but never interprets (see [`CharMarker`]).
//!
//! For CBC, the payload is `iv || cbc_encrypt(<plaintext length><plaintext>
//! <zero padding>)`: the plaintext is framed with its exact length in ASCII
//! decimal followed by a newline, so the zero-padding [`Cbc`] adds can be
//! stripped unambiguously on decrypt. For OCB, the payload is `nonce || tag
//! || ciphertext`, and the header line (including its trailing newline) is
//! authenticated as OCB2's associated data.

use {
    crate::{
        aead::Ocb2,
        cipher::block::{
            Aes128,
            Aes192,
            Aes256,
            BlockCipher,
            Cbc,
            Rijndael192_128,
            Rijndael192_192,
            Rijndael192_256,
            Rijndael256_128,
            Rijndael256_192,
            Rijndael256_256,
        },
        error::Error,
        kdf,
        random::RandomSource,
    },
    base64::{engine::general_purpose::STANDARD, Engine},
};

const HEADER_PREFIX: &str = "aes-encrypted V 1.2-";

/// Above this many plaintext bytes, [`Mode::Auto`] prefers [`Mode::Cbc`]
/// over [`Mode::Ocb`] (OCB2's all-at-once API holds the whole message in
/// memory twice; CBC does not need to).
const AUTO_OCB_THRESHOLD: usize = 20_000;

/// Which mode to frame a ciphertext with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Pick OCB2 for plaintexts under [`AUTO_OCB_THRESHOLD`] bytes when
    /// `nb == 4`, CBC otherwise.
    Auto,
    Cbc,
    Ocb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolvedMode {
    Cbc,
    Ocb,
}

/// How the payload following the header line is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Base64,
    Raw,
}

/// An opaque marker carried in the header and round-tripped verbatim. This
/// crate does not interpret it; it exists purely for compatibility with
/// containers written by other implementations that do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharMarker {
    Multibyte,
    Unibyte,
}

/// Parameters controlling how [`encrypt`] frames a ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    /// Block size in words (4, 6, or 8).
    pub nb: usize,
    /// Key size in words (4, 6, or 8).
    pub nk: usize,
    pub encoding: Encoding,
    pub char_marker: CharMarker,
}

struct Header {
    mode: ResolvedMode,
    nb: usize,
    nk: usize,
    encoding: Encoding,
    char_marker: CharMarker,
}

impl Header {
    fn render(&self) -> String {
        let mode = match self.mode {
            ResolvedMode::Cbc => "CBC",
            ResolvedMode::Ocb => "OCB",
        };
        let enc = match self.encoding {
            Encoding::Base64 => "B",
            Encoding::Raw => "N",
        };
        let chr = match self.char_marker {
            CharMarker::Multibyte => "M",
            CharMarker::Unibyte => "U",
        };
        format!("{HEADER_PREFIX}{mode}-{enc}-{}-{}-{chr}\n", self.nb, self.nk)
    }

    fn parse(line: &str) -> Result<Self, Error> {
        let rest = line.strip_prefix(HEADER_PREFIX).ok_or(Error::BadHeader)?;
        let rest = rest.strip_suffix('\n').ok_or(Error::BadHeader)?;

        let mut fields = rest.split('-');
        let mode = fields.next().ok_or(Error::BadHeader)?;
        let enc = fields.next().ok_or(Error::BadHeader)?;
        let nb = fields.next().ok_or(Error::BadHeader)?;
        let nk = fields.next().ok_or(Error::BadHeader)?;
        let chr = fields.next().ok_or(Error::BadHeader)?;
        if fields.next().is_some() {
            return Err(Error::BadHeader);
        }

        let mode = match mode {
            "CBC" => ResolvedMode::Cbc,
            "OCB" => ResolvedMode::Ocb,
            _ => return Err(Error::BadHeader),
        };
        let encoding = match enc {
            "B" => Encoding::Base64,
            "N" => Encoding::Raw,
            _ => return Err(Error::BadHeader),
        };
        // The header grammar (spec.md §7's `BadHeader` regex) already
        // restricts Nb/Nk to one of these three digits, so a value outside
        // that set is a grammar failure, not `InvalidBlockSize`/
        // `InvalidKeyLength` — those are reserved for semantic violations
        // the grammar can't express (see the OCB/Nb=4 check below).
        let nb: usize = match nb {
            "4" => 4,
            "6" => 6,
            "8" => 8,
            _ => return Err(Error::BadHeader),
        };
        let nk: usize = match nk {
            "4" => 4,
            "6" => 6,
            "8" => 8,
            _ => return Err(Error::BadHeader),
        };
        let char_marker = match chr {
            "M" => CharMarker::Multibyte,
            "U" => CharMarker::Unibyte,
            _ => return Err(Error::BadHeader),
        };
        if mode == ResolvedMode::Ocb && nb != 4 {
            return Err(Error::InvalidBlockSize);
        }

        Ok(Header { mode, nb, nk, encoding, char_marker })
    }
}

/// Encrypt `plaintext` under a key derived from `password`, framed
/// according to `options`.
///
/// Panics if `options.nb`/`options.nk` is not one of 4, 6, or 8, or if
/// `options.mode == Mode::Ocb` while `options.nb != 4` (OCB2 only runs on
/// 16-byte blocks). These are programmer errors in the caller's choice of
/// `Options`, not data-dependent failures, so they panic rather than
/// returning a `Result`.
pub fn encrypt(
    plaintext: &[u8],
    password: &[u8],
    options: &Options,
    random: &mut impl RandomSource,
) -> Vec<u8> {
    assert!(matches!(options.nb, 4 | 6 | 8), "nb must be 4, 6, or 8");
    assert!(matches!(options.nk, 4 | 6 | 8), "nk must be 4, 6, or 8");

    let mode = match options.mode {
        Mode::Cbc => ResolvedMode::Cbc,
        Mode::Ocb => {
            assert_eq!(options.nb, 4, "OCB2 requires nb = 4");
            ResolvedMode::Ocb
        }
        Mode::Auto if options.nb == 4 && plaintext.len() < AUTO_OCB_THRESHOLD => ResolvedMode::Ocb,
        Mode::Auto => ResolvedMode::Cbc,
    };

    let header = Header {
        mode,
        nb: options.nb,
        nk: options.nk,
        encoding: options.encoding,
        char_marker: options.char_marker,
    };
    let header_line = header.render();
    let key = kdf::derive_key(password, options.nk);

    let payload = match mode {
        ResolvedMode::Cbc => {
            let mut iv = vec![0u8; options.nb * 4];
            random.fill(&mut iv);
            let mut framed = format!("{}\n", plaintext.len()).into_bytes();
            framed.extend_from_slice(plaintext);
            let ciphertext = cbc_encrypt_dispatch(options.nb, options.nk, &key, &iv, &framed);
            let mut out = iv;
            out.extend_from_slice(&ciphertext);
            out
        }
        ResolvedMode::Ocb => {
            let mut nonce = [0u8; 16];
            random.fill(&mut nonce);
            let (ciphertext, tag) =
                ocb_seal_dispatch(options.nk, &key, nonce, header_line.as_bytes(), plaintext);
            let mut out = Vec::with_capacity(16 + 16 + ciphertext.len());
            out.extend_from_slice(&nonce);
            out.extend_from_slice(&tag);
            out.extend_from_slice(&ciphertext);
            out
        }
    };

    let mut out = header_line.into_bytes();
    match options.encoding {
        Encoding::Base64 => out.extend_from_slice(STANDARD.encode(&payload).as_bytes()),
        Encoding::Raw => out.extend_from_slice(&payload),
    }
    out
}

/// Decrypt a container produced by [`encrypt`].
pub fn decrypt(container: &[u8], password: &[u8]) -> Result<Vec<u8>, Error> {
    let header_end = container
        .iter()
        .position(|&b| b == b'\n')
        .ok_or(Error::BadHeader)?;
    let header_line = std::str::from_utf8(&container[..=header_end]).map_err(|_| Error::BadHeader)?;
    let header = Header::parse(header_line)?;

    let rest = &container[header_end + 1..];
    let payload = match header.encoding {
        Encoding::Base64 => STANDARD.decode(rest).map_err(|_| Error::BadBase64)?,
        Encoding::Raw => rest.to_vec(),
    };

    let key = kdf::derive_key(password, header.nk);

    match header.mode {
        ResolvedMode::Cbc => {
            let block_bytes = header.nb * 4;
            if payload.len() < block_bytes {
                return Err(Error::BadCiphertextLength);
            }
            let (iv, ciphertext) = payload.split_at(block_bytes);
            let decrypted = cbc_decrypt_dispatch(header.nb, header.nk, &key, iv, ciphertext)?;

            let newline = decrypted
                .iter()
                .position(|&b| b == b'\n')
                .ok_or(Error::LengthPrefixMissing)?;
            let len_str =
                std::str::from_utf8(&decrypted[..newline]).map_err(|_| Error::LengthPrefixMissing)?;
            let len: usize = len_str.parse().map_err(|_| Error::LengthPrefixMissing)?;

            let start = newline + 1;
            let end = start.checked_add(len).ok_or(Error::BadCiphertextLength)?;
            if end > decrypted.len() {
                return Err(Error::BadCiphertextLength);
            }
            Ok(decrypted[start..end].to_vec())
        }
        ResolvedMode::Ocb => {
            if payload.len() < 32 {
                return Err(Error::BadCiphertextLength);
            }
            let nonce: [u8; 16] = payload[..16].try_into().unwrap();
            let tag: [u8; 16] = payload[16..32].try_into().unwrap();
            let ciphertext = &payload[32..];
            ocb_open_dispatch(header.nk, &key, nonce, header_line.as_bytes(), ciphertext, tag)
        }
    }
}

fn cbc_encrypt_dispatch(nb: usize, nk: usize, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Vec<u8> {
    fn run<C: BlockCipher + Default>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Vec<u8> {
        let cipher = C::default();
        let key = C::Key::try_from(key).unwrap_or_else(|_| panic!("key is the wrong length"));
        let schedule = cipher.expand_key(&key);
        let iv = C::Block::try_from(iv).unwrap_or_else(|_| panic!("iv is the wrong length"));
        Cbc::encrypt(&cipher, &schedule, iv, plaintext)
    }

    match (nb, nk) {
        (4, 4) => run::<Aes128>(key, iv, plaintext),
        (4, 6) => run::<Aes192>(key, iv, plaintext),
        (4, 8) => run::<Aes256>(key, iv, plaintext),
        (6, 4) => run::<Rijndael192_128>(key, iv, plaintext),
        (6, 6) => run::<Rijndael192_192>(key, iv, plaintext),
        (6, 8) => run::<Rijndael192_256>(key, iv, plaintext),
        (8, 4) => run::<Rijndael256_128>(key, iv, plaintext),
        (8, 6) => run::<Rijndael256_192>(key, iv, plaintext),
        (8, 8) => run::<Rijndael256_256>(key, iv, plaintext),
        _ => unreachable!("nb/nk validated by the caller"),
    }
}

fn cbc_decrypt_dispatch(
    nb: usize,
    nk: usize,
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, Error> {
    fn run<C: BlockCipher + Default>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
        let cipher = C::default();
        let key = C::Key::try_from(key).unwrap_or_else(|_| panic!("key is the wrong length"));
        let schedule = cipher.expand_key(&key);
        let iv = C::Block::try_from(iv).unwrap_or_else(|_| panic!("iv is the wrong length"));
        Cbc::decrypt(&cipher, &schedule, iv, ciphertext)
    }

    match (nb, nk) {
        (4, 4) => run::<Aes128>(key, iv, ciphertext),
        (4, 6) => run::<Aes192>(key, iv, ciphertext),
        (4, 8) => run::<Aes256>(key, iv, ciphertext),
        (6, 4) => run::<Rijndael192_128>(key, iv, ciphertext),
        (6, 6) => run::<Rijndael192_192>(key, iv, ciphertext),
        (6, 8) => run::<Rijndael192_256>(key, iv, ciphertext),
        (8, 4) => run::<Rijndael256_128>(key, iv, ciphertext),
        (8, 6) => run::<Rijndael256_192>(key, iv, ciphertext),
        (8, 8) => run::<Rijndael256_256>(key, iv, ciphertext),
        _ => unreachable!("nb/nk validated by the caller"),
    }
}

fn ocb_seal_dispatch(
    nk: usize,
    key: &[u8],
    nonce: [u8; 16],
    header: &[u8],
    plaintext: &[u8],
) -> (Vec<u8>, [u8; 16]) {
    fn run<C: BlockCipher<Block = [u8; 16]> + Default>(
        key: &[u8],
        nonce: [u8; 16],
        header: &[u8],
        plaintext: &[u8],
    ) -> (Vec<u8>, [u8; 16]) {
        let cipher = C::default();
        let key = C::Key::try_from(key).unwrap_or_else(|_| panic!("key is the wrong length"));
        let schedule = cipher.expand_key(&key);
        Ocb2::seal(&cipher, &schedule, nonce, header, plaintext)
    }

    match nk {
        4 => run::<Aes128>(key, nonce, header, plaintext),
        6 => run::<Aes192>(key, nonce, header, plaintext),
        8 => run::<Aes256>(key, nonce, header, plaintext),
        _ => unreachable!("nk validated by the caller"),
    }
}

fn ocb_open_dispatch(
    nk: usize,
    key: &[u8],
    nonce: [u8; 16],
    header: &[u8],
    ciphertext: &[u8],
    tag: [u8; 16],
) -> Result<Vec<u8>, Error> {
    fn run<C: BlockCipher<Block = [u8; 16]> + Default>(
        key: &[u8],
        nonce: [u8; 16],
        header: &[u8],
        ciphertext: &[u8],
        tag: [u8; 16],
    ) -> Result<Vec<u8>, Error> {
        let cipher = C::default();
        let key = C::Key::try_from(key).unwrap_or_else(|_| panic!("key is the wrong length"));
        let schedule = cipher.expand_key(&key);
        Ocb2::open(&cipher, &schedule, nonce, header, ciphertext, tag)
    }

    match nk {
        4 => run::<Aes128>(key, nonce, header, ciphertext, tag),
        6 => run::<Aes192>(key, nonce, header, ciphertext, tag),
        8 => run::<Aes256>(key, nonce, header, ciphertext, tag),
        _ => unreachable!("nk validated by the caller"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn options(mode: Mode, nb: usize, nk: usize) -> Options {
        Options { mode, nb, nk, encoding: Encoding::Base64, char_marker: CharMarker::Unibyte }
    }

    #[test]
    fn default_options_produce_the_documented_header() {
        let mut rng = rand_source();
        let opts = options(Mode::Auto, 4, 4);
        let container = encrypt(b"hello\n", b"correct horse battery staple", &opts, &mut rng);
        let header_end = container.iter().position(|&b| b == b'\n').unwrap();
        assert_eq!(&container[..=header_end], b"aes-encrypted V 1.2-OCB-B-4-4-U\n");

        let payload = &container[header_end + 1..];
        assert!(STANDARD.decode(payload).is_ok());

        let plaintext = decrypt(&container, b"correct horse battery staple").unwrap();
        assert_eq!(plaintext, b"hello\n");
    }

    #[test]
    fn round_trips_cbc_base64() {
        let mut rng = rand_source();
        let opts = options(Mode::Cbc, 4, 4);
        let container = encrypt(b"hello, container", b"hunter2", &opts, &mut rng);
        let plaintext = decrypt(&container, b"hunter2").unwrap();
        assert_eq!(plaintext, b"hello, container");
    }

    #[test]
    fn round_trips_ocb_raw() {
        let mut rng = rand_source();
        let opts = Options {
            mode: Mode::Ocb,
            nb: 4,
            nk: 6,
            encoding: Encoding::Raw,
            char_marker: CharMarker::Multibyte,
        };
        let container = encrypt(b"authenticated data please", b"swordfish", &opts, &mut rng);
        let plaintext = decrypt(&container, b"swordfish").unwrap();
        assert_eq!(plaintext, b"authenticated data please");
    }

    #[test]
    fn auto_picks_ocb_below_threshold() {
        let mut rng = rand_source();
        let opts = options(Mode::Auto, 4, 4);
        let container = encrypt(b"short message", b"pw", &opts, &mut rng);
        let line = std::str::from_utf8(&container[..container.iter().position(|&b| b == b'\n').unwrap()])
            .unwrap();
        assert!(line.contains("-OCB-"));
    }

    #[test]
    fn auto_picks_cbc_above_threshold() {
        let mut rng = rand_source();
        let opts = options(Mode::Auto, 4, 4);
        let big = vec![0x41u8; AUTO_OCB_THRESHOLD + 1];
        let container = encrypt(&big, b"pw", &opts, &mut rng);
        let line = std::str::from_utf8(&container[..container.iter().position(|&b| b == b'\n').unwrap()])
            .unwrap();
        assert!(line.contains("-CBC-"));
    }

    #[test]
    fn wrong_password_fails_ocb_authentication() {
        let mut rng = rand_source();
        let opts = options(Mode::Ocb, 4, 4);
        let container = encrypt(b"top secret", b"correct password", &opts, &mut rng);
        let err = decrypt(&container, b"wrong password").unwrap_err();
        assert_eq!(err, Error::AuthenticationFailed);
    }

    #[test]
    fn tampered_ocb_container_is_rejected() {
        let mut rng = rand_source();
        let opts = options(Mode::Ocb, 4, 4);
        let mut container = encrypt(b"top secret", b"pw", &opts, &mut rng);
        let last = container.len() - 1;
        container[last] ^= 1;
        let err = decrypt(&container, b"pw").unwrap_err();
        assert_eq!(err, Error::AuthenticationFailed);
    }

    #[test]
    fn rejects_malformed_header() {
        let err = decrypt(b"not a container\npayload", b"pw").unwrap_err();
        assert_eq!(err, Error::BadHeader);
    }

    #[test]
    fn rejects_nb_outside_the_header_grammar_as_bad_header_not_invalid_block_size() {
        let container = b"aes-encrypted V 1.2-CBC-B-5-4-U\npayload".to_vec();
        let err = decrypt(&container, b"pw").unwrap_err();
        assert_eq!(err, Error::BadHeader);
    }

    #[test]
    fn rejects_nk_outside_the_header_grammar_as_bad_header_not_invalid_key_length() {
        let container = b"aes-encrypted V 1.2-CBC-B-4-7-U\npayload".to_vec();
        let err = decrypt(&container, b"pw").unwrap_err();
        assert_eq!(err, Error::BadHeader);
    }

    #[test]
    fn rejects_ocb_with_a_non_four_nb_as_invalid_block_size() {
        let container = b"aes-encrypted V 1.2-OCB-B-6-4-U\npayload".to_vec();
        let err = decrypt(&container, b"pw").unwrap_err();
        assert_eq!(err, Error::InvalidBlockSize);
    }

    #[test]
    fn round_trips_length_prefix_for_plaintext_ending_in_zero_byte() {
        let mut rng = rand_source();
        let opts = options(Mode::Cbc, 4, 4);
        let plaintext = [b'a', b'b', b'c', 0, 0, 0];
        let container = encrypt(&plaintext, b"pw", &opts, &mut rng);
        let decrypted = decrypt(&container, b"pw").unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn round_trips_a_payload_larger_than_one_mebibyte() {
        let mut rng = rand_source();
        let opts = options(Mode::Cbc, 4, 4);
        let plaintext: Vec<u8> = (0..(1024 * 1024 + 37)).map(|i| (i % 251) as u8).collect();
        let container = encrypt(&plaintext, b"pw", &opts, &mut rng);
        let decrypted = decrypt(&container, b"pw").unwrap();
        assert_eq!(decrypted, plaintext);
    }

    fn rand_source() -> impl RandomSource {
        use rand::RngCore;
        let mut rng = rand::thread_rng();
        move |out: &mut [u8]| rng.fill_bytes(out)
    }
}
