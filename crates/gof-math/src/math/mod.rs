//! Core math modules.

pub mod probit;
pub mod stable;
