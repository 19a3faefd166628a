//! Domain layer containing entities.

pub mod entities;

pub use entities::*;
