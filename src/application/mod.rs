//! Application layer: key pool, click pipeline, and the orchestrating
//! service.

pub mod click_pipeline;
pub mod key_pool;
pub mod services;
