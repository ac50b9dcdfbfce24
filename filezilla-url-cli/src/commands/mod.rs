//! CLI command implementations.

pub mod info;
pub mod products;
pub mod resolve;
