// tests/common/mod.rs
//! Shared test helpers.

pub mod builders;

#[allow(unused_imports)]
pub use builders::*;
