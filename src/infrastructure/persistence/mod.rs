//! Repository implementations.

mod memory_repository;
mod pg_mapping_repository;

pub use memory_repository::InMemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
