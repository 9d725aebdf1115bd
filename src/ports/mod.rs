//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the domain layer and infrastructure.
//! Following hexagonal architecture, these traits are owned by the domain and
//! implemented by adapters in the infrastructure layer.

pub mod classifier;
pub mod move_source;

pub use classifier::{Classifier, ModelInfo};
pub use move_source::{MoveRequest, MoveSource};
