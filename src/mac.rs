pub mod pmac;

pub use pmac::tag;
