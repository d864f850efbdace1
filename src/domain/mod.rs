//! Domain layer: entities, repository traits, and the click worker.

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
