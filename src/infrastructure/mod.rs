//! Infrastructure layer: cache and persistence implementations.

pub mod cache;
pub mod persistence;
