//! Various procedures for mutating a context, or for examining the result of a solve.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod check;
pub mod solve;
