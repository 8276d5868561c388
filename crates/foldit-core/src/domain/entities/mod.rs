//! Domain entities.

pub mod artifact;
pub mod common;
pub mod plan;
pub mod request;
pub mod route;
pub mod template;
