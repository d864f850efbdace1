//! Shared helpers: key generation and URL normalization.

pub mod key_gen;
pub mod url_normalizer;
