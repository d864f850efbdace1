//! Core business entities.

mod mapping;

pub use mapping::{NewUrlMapping, UrlMapping};
