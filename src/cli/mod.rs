//! CLI infrastructure for the evaluation harness
//!
//! This module provides the command-line interface for interactive and
//! batch classifier-evaluation sessions.

pub mod commands;
pub mod output;
