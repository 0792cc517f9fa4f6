/// XOR `rhs` into `lhs`, byte by byte. Panics if the slices differ in length.
pub(crate) fn xor_into(lhs: &mut [u8], rhs: &[u8]) {
    lhs.iter_mut().zip(rhs).for_each(|(a, b)| *a ^= b);
}

/// XOR two equal-length byte arrays into a freshly allocated array.
pub(crate) fn xor<const N: usize>(lhs: [u8; N], rhs: [u8; N]) -> [u8; N] {
    let mut out = lhs;
    xor_into(&mut out, &rhs);
    out
}
