//! Rijndael is the block cipher family AES was standardized from: it
//! generalizes AES by allowing the block size (`Nb`) to vary along with the
//! key size (`Nk`), each independently chosen from {4, 6, 8} 32-bit words.
//! AES itself is the special case `Nb = 4`.
//!
//! It works by applying a series of rounds of substitutions and permutations
//! to the plaintext, using a substitution box (S-box, see [`gf256`]) and
//! XORing the output with a different key every round. The round keys are
//! derived from the encryption key by [`key_expansion`].
//!
//! The permutations are achieved by treating the state as a 4-row ×
//! `Nb`-column matrix (column-major: byte `i` sits at row `i % 4`, column
//! `i / 4`), then shifting rows and mixing columns together, which ensures
//! diffusion.
//!
//! The specification for the `Nb = 4` case is available as [FIPS
//! 197](https://doi.org/10.6028/NIST.FIPS.197); the general case is
//! described in Daemen & Rijmen's Rijndael submission to the AES contest.

pub mod gf256;

use {crate::cipher::block::BlockCipher, docext::docext, zeroize::{Zeroize, ZeroizeOnDrop}};

/// AES/Rijndael word size in bytes.
const WORD_SIZE: usize = 4;

/// The expanded round-key schedule produced by [`key_expansion`].
///
/// Zeroized on drop, since it is derived from (and as sensitive as) the
/// encryption key.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeySchedule<const N: usize>([u8; N]);

impl<const N: usize> RoundKeySchedule<N> {
    fn words(&self) -> &[u8; N] {
        &self.0
    }
}

/// The KeyExpansion routine: expands a cipher key into `Nb * (Nr + 1)` round
/// key words.
///
/// The first `Nk` words are the key itself. Each subsequent word `w[i]` is
/// `w[i - Nk]` XORed with a function of `w[i - 1]`: a rotate + S-box
/// substitution + round-constant XOR when `i % Nk == 0`, a plain S-box
/// substitution when `Nk > 6` and `i % Nk == 4` (the AES-256 case), and the
/// identity otherwise.
///
/// The round constant starts at `0x01` and is doubled in `GF(2^8)` after
/// each use, rather than drawn from a fixed table: the largest configuration
/// (`Nb = Nk = 8`, `Nr = 14`) needs Rcon values up to index 30, more than
/// AES's 15-entry table ever requires.
pub fn key_expansion<
    const NB: usize,
    const NK: usize,
    const NR: usize,
    const KEY_BYTES: usize,
    const EXPANSION_BYTES: usize,
>(
    key: [u8; KEY_BYTES],
) -> RoundKeySchedule<EXPANSION_BYTES> {
    let mut w = [0u8; EXPANSION_BYTES];
    w[0..KEY_BYTES].copy_from_slice(&key);

    let mut rcon: u8 = 1;
    for i in NK..NB * (NR + 1) {
        let mut temp = [0u8; WORD_SIZE];
        temp.copy_from_slice(&w[(i - 1) * WORD_SIZE..i * WORD_SIZE]);

        if i % NK == 0 {
            rot_word(&mut temp);
            sub_word(&mut temp);
            temp[0] ^= rcon;
            rcon = gf256::mul(rcon, 0x02);
        } else if NK > 6 && i % NK == 4 {
            sub_word(&mut temp);
        }

        for j in 0..WORD_SIZE {
            w[i * WORD_SIZE + j] = w[(i - NK) * WORD_SIZE + j] ^ temp[j];
        }
    }

    RoundKeySchedule(w)
}

/// Rotate a word left by one byte: `[a, b, c, d] -> [b, c, d, a]`.
fn rot_word(word: &mut [u8; WORD_SIZE]) {
    word.rotate_left(1);
}

/// Substitute every byte of a word through the [S-box](gf256::S_BOX).
fn sub_word(word: &mut [u8; WORD_SIZE]) {
    for b in word.iter_mut() {
        *b = gf256::S_BOX[*b as usize];
    }
}

/// SubBytes: replace each byte of the state with its [S-box](gf256::S_BOX)
/// entry.
fn sub_bytes<const N: usize>(state: &mut [u8; N]) {
    for b in state.iter_mut() {
        *b = gf256::S_BOX[*b as usize];
    }
}

/// InvSubBytes: inverse of [`sub_bytes`].
fn inv_sub_bytes<const N: usize>(state: &mut [u8; N]) {
    for b in state.iter_mut() {
        *b = gf256::INV_S_BOX[*b as usize];
    }
}

/// The per-row left-rotation offsets for ShiftRows: `(1, 2, 3)` for `Nb ∈
/// {4, 6}`, `(1, 3, 4)` for `Nb = 8`.
const fn row_offsets(nb: usize) -> [usize; 3] {
    if nb == 8 {
        [1, 3, 4]
    } else {
        [1, 2, 3]
    }
}

/// ShiftRows: cyclically rotate row `r` left by `row_offsets(Nb)[r - 1]`
/// columns (row 0 is unchanged).
#[docext]
fn shift_rows<const NB: usize, const BLOCK_BYTES: usize>(state: &mut [u8; BLOCK_BYTES]) {
    let offsets = row_offsets(NB);
    for row in 1..4 {
        let off = offsets[row - 1];
        let mut line = [0u8; 8];
        for col in 0..NB {
            line[col] = state[row + 4 * col];
        }
        for col in 0..NB {
            state[row + 4 * col] = line[(col + off) % NB];
        }
    }
}

/// InvShiftRows: the inverse rotation of [`shift_rows`] (rotate right
/// instead of left).
fn inv_shift_rows<const NB: usize, const BLOCK_BYTES: usize>(state: &mut [u8; BLOCK_BYTES]) {
    let offsets = row_offsets(NB);
    for row in 1..4 {
        let off = offsets[row - 1];
        let mut line = [0u8; 8];
        for col in 0..NB {
            line[col] = state[row + 4 * col];
        }
        for col in 0..NB {
            state[row + 4 * col] = line[(col + NB - off) % NB];
        }
    }
}

/// MixColumns: multiply each 4-byte column by the fixed Rijndael matrix,
/// via the precomputed [`gf256::LMUL2`]/[`gf256::LMUL3`] tables.
#[docext]
fn mix_columns<const BLOCK_BYTES: usize>(state: &mut [u8; BLOCK_BYTES]) {
    let copy = *state;
    state.chunks_mut(4).zip(copy.chunks(4)).for_each(|(s, c)| {
        s[0] = gf256::LMUL2[c[0] as usize] ^ gf256::LMUL3[c[1] as usize] ^ c[2] ^ c[3];
        s[1] = c[0] ^ gf256::LMUL2[c[1] as usize] ^ gf256::LMUL3[c[2] as usize] ^ c[3];
        s[2] = c[0] ^ c[1] ^ gf256::LMUL2[c[2] as usize] ^ gf256::LMUL3[c[3] as usize];
        s[3] = gf256::LMUL3[c[0] as usize] ^ c[1] ^ c[2] ^ gf256::LMUL2[c[3] as usize];
    });
}

/// InvMixColumns: the inverse of [`mix_columns`], via
/// [`gf256::LMUL9`]/[`gf256::LMUL11`]/[`gf256::LMUL13`]/[`gf256::LMUL14`].
fn inv_mix_columns<const BLOCK_BYTES: usize>(state: &mut [u8; BLOCK_BYTES]) {
    let copy = *state;
    state.chunks_mut(4).zip(copy.chunks(4)).for_each(|(s, c)| {
        s[0] = gf256::LMUL14[c[0] as usize]
            ^ gf256::LMUL11[c[1] as usize]
            ^ gf256::LMUL13[c[2] as usize]
            ^ gf256::LMUL9[c[3] as usize];
        s[1] = gf256::LMUL9[c[0] as usize]
            ^ gf256::LMUL14[c[1] as usize]
            ^ gf256::LMUL11[c[2] as usize]
            ^ gf256::LMUL13[c[3] as usize];
        s[2] = gf256::LMUL13[c[0] as usize]
            ^ gf256::LMUL9[c[1] as usize]
            ^ gf256::LMUL14[c[2] as usize]
            ^ gf256::LMUL11[c[3] as usize];
        s[3] = gf256::LMUL11[c[0] as usize]
            ^ gf256::LMUL13[c[1] as usize]
            ^ gf256::LMUL9[c[2] as usize]
            ^ gf256::LMUL14[c[3] as usize];
    });
}

fn add_round_key<const BLOCK_BYTES: usize, const EXPANSION_BYTES: usize>(
    state: &mut [u8; BLOCK_BYTES],
    w: &[u8; EXPANSION_BYTES],
    round: usize,
) {
    state
        .iter_mut()
        .zip(&w[round * BLOCK_BYTES..(round + 1) * BLOCK_BYTES])
        .for_each(|(s, k)| *s ^= k);
}

/// The Rijndael encryption routine: one initial AddRoundKey, `Nr - 1` full
/// rounds of SubBytes/ShiftRows/MixColumns/AddRoundKey, and a final round
/// without MixColumns.
fn encrypt_rounds<
    const NB: usize,
    const NR: usize,
    const BLOCK_BYTES: usize,
    const EXPANSION_BYTES: usize,
>(
    data: [u8; BLOCK_BYTES],
    schedule: &RoundKeySchedule<EXPANSION_BYTES>,
) -> [u8; BLOCK_BYTES] {
    let mut state = data;
    let w = schedule.words();
    add_round_key(&mut state, w, 0);

    for round in 1..NR {
        sub_bytes(&mut state);
        shift_rows::<NB, BLOCK_BYTES>(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, w, round);
    }

    sub_bytes(&mut state);
    shift_rows::<NB, BLOCK_BYTES>(&mut state);
    add_round_key(&mut state, w, NR);

    state
}

/// The Rijndael decryption routine: the structural inverse of
/// [`encrypt_rounds`], applying InvShiftRows/InvSubBytes/AddRoundKey/
/// InvMixColumns in reverse round order.
fn decrypt_rounds<
    const NB: usize,
    const NR: usize,
    const BLOCK_BYTES: usize,
    const EXPANSION_BYTES: usize,
>(
    data: [u8; BLOCK_BYTES],
    schedule: &RoundKeySchedule<EXPANSION_BYTES>,
) -> [u8; BLOCK_BYTES] {
    let mut state = data;
    let w = schedule.words();
    add_round_key(&mut state, w, NR);

    for round in (1..NR).rev() {
        inv_shift_rows::<NB, BLOCK_BYTES>(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, w, round);
        inv_mix_columns(&mut state);
    }

    inv_shift_rows::<NB, BLOCK_BYTES>(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, w, 0);

    state
}

macro_rules! rijndael {
    ($(#[$doc:meta])* $name:ident, $nb:expr, $nk:expr, $nr:expr) => {
        $(#[$doc])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl BlockCipher for $name {
            type Block = [u8; $nb * WORD_SIZE];
            type Key = [u8; $nk * WORD_SIZE];
            type Schedule = RoundKeySchedule<{ $nb * ($nr + 1) * WORD_SIZE }>;

            fn expand_key(&self, key: &Self::Key) -> Self::Schedule {
                key_expansion::<{ $nb }, { $nk }, { $nr }, { $nk * WORD_SIZE }, { $nb * ($nr + 1) * WORD_SIZE }>(
                    *key,
                )
            }

            fn encrypt_block(&self, schedule: &Self::Schedule, block: &mut Self::Block) {
                *block = encrypt_rounds::<{ $nb }, { $nr }, { $nb * WORD_SIZE }, { $nb * ($nr + 1) * WORD_SIZE }>(
                    *block, schedule,
                );
            }

            fn decrypt_block(&self, schedule: &Self::Schedule, block: &mut Self::Block) {
                *block = decrypt_rounds::<{ $nb }, { $nr }, { $nb * WORD_SIZE }, { $nb * ($nr + 1) * WORD_SIZE }>(
                    *block, schedule,
                );
            }
        }
    };
}

rijndael!(
    /// [Rijndael](self) with `Nb = 4`, `Nk = 4` — this is AES-128.
    Aes128, 4, 4, 10
);
rijndael!(
    /// [Rijndael](self) with `Nb = 4`, `Nk = 6` — this is AES-192.
    Aes192, 4, 6, 12
);
rijndael!(
    /// [Rijndael](self) with `Nb = 4`, `Nk = 8` — this is AES-256.
    Aes256, 4, 8, 14
);
rijndael!(
    /// [Rijndael](self) with `Nb = 6`, `Nk = 4`.
    Rijndael192_128, 6, 4, 12
);
rijndael!(
    /// [Rijndael](self) with `Nb = 6`, `Nk = 6`.
    Rijndael192_192, 6, 6, 12
);
rijndael!(
    /// [Rijndael](self) with `Nb = 6`, `Nk = 8`.
    Rijndael192_256, 6, 8, 14
);
rijndael!(
    /// [Rijndael](self) with `Nb = 8`, `Nk = 4`.
    Rijndael256_128, 8, 4, 14
);
rijndael!(
    /// [Rijndael](self) with `Nb = 8`, `Nk = 6`.
    Rijndael256_192, 8, 6, 14
);
rijndael!(
    /// [Rijndael](self) with `Nb = 8`, `Nk = 8`.
    Rijndael256_256, 8, 8, 14
);
