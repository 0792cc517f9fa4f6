//! OCB2 is an authenticated encryption mode: it provides both
//! [confidentiality](crate::doc::encryption#confusion) for the plaintext
//! and integrity for the plaintext and an additional header that travels
//! unencrypted alongside it.
//!
//! A plain block mode like [CBC](crate::Cbc) only hides the plaintext — it
//! does nothing to stop an attacker from flipping bits in the ciphertext
//! and having them silently flip the corresponding bits of the recovered
//! plaintext. OCB2 rules this out by producing a tag alongside the
//! ciphertext: the tag is a function of every plaintext block and the
//! header, so tampering with any of them is detected on decryption before
//! any plaintext is released to the caller.
//!
//! OCB2 gets this from one encrypted nonce and a sequence of per-block
//! offsets derived from it by repeated doubling in $GF(2^{128})$ — the same
//! doubling operation the header authentication step
//! ([`crate::mac::pmac`]) uses to derive its own offsets from a
//! independently-derived base point.
