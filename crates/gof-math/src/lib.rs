//! Goodness-of-fit math utilities.

pub mod math;

pub use math::probit::*;
pub use math::stable::*;
