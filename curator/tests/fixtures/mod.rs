//! Test fixtures and utilities

pub mod museum_responses;
pub mod sources;

#[allow(unused_imports)]
pub use museum_responses::*;
#[allow(unused_imports)]
pub use sources::*;
