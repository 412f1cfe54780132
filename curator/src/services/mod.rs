//! Curator services implementations

pub mod clock;
pub mod content_filter;
pub mod memory_cache;
pub mod pool_builder;
pub mod random;
pub mod rotation;
pub mod source_selector;

#[cfg(test)]
pub mod tests;

pub use clock::*;
pub use content_filter::*;
pub use memory_cache::*;
pub use pool_builder::*;
pub use random::*;
pub use rotation::*;
pub use source_selector::*;
