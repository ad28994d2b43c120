//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate load/mutate/persist cycles into user-level operations.
//! - Keep CLI and other front ends decoupled from storage details.

pub mod record_service;
pub mod session;
