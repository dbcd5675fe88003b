//! Generic structures, not specific to local search.

pub mod random;
