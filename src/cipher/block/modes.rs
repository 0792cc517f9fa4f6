mod cbc;

pub use cbc::Cbc;

/// A way to execute a [block cipher](crate::BlockCipher) on data of
/// arbitrary length, by chaining the fixed-size block operation across a
/// padded input.
pub trait BlockMode {}

impl<C> BlockMode for Cbc<C> {}
