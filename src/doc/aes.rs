//! Rijndael is a block cipher family; AES is the special case of it
//! standardized by NIST.
//!
//! Rijndael works on blocks of `Nb` 32-bit words and keys of `Nk` 32-bit
//! words, with `Nb` and `Nk` each independently chosen from {4, 6, 8}. AES
//! fixes `Nb = 4` (a 128-bit block) and allows `Nk` in {4, 6, 8} — these are
//! AES-128, AES-192, and AES-256.
//!
//! It works by applying a series of rounds of substitutions and
//! permutations to the plaintext, using a substitution box (S-box) and
//! XORing the output with a different key every round. The round keys are
//! derived from the encryption key.
//!
//! The S-box is a fixed, non-linear mapping from original to substituted
//! bytes. It's implemented as a lookup table. This achieves
//! [confusion](crate::doc::encryption#confusion). In particular, the S-box
//! is built from the multiplicative inverse in $GF(2^8)$ followed by an
//! affine transform, which gives it the desired nonlinearity properties.
//!
//! The permutations are achieved by treating the plaintext block as a
//! 4-row × `Nb`-column matrix, then shifting rows and mixing columns
//! together. This ensures [diffusion](crate::doc::encryption#diffusion).
//!
//! The number of rounds, `Nr`, is `max(Nb, Nk) + 6`.
//!
//! The `Nb = 4` case is specified as [FIPS
//! 197](https://doi.org/10.6028/NIST.FIPS.197); the general case is
//! specified in Daemen & Rijmen's original Rijndael submission to the AES
//! contest.
