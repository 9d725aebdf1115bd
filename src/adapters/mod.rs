//! Adapters implementing domain ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module. Following hexagonal architecture, adapters depend on
//! domain ports, not the other way around.

pub mod console;
pub mod scripted;
pub mod stored_model;

pub use console::ConsoleMoveSource;
pub use scripted::ScriptedOpponent;
pub use stored_model::{ModelArtifact, StoredModelClassifier};
