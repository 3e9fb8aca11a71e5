//! Configuration module for yiffdl.
//!
//! This module handles:
//! - Loading configuration from a JSON file
//! - Validating loaded values before the run starts

pub mod loader;
pub mod validation;

pub use loader::{Config, E6Config, FaConfig};
pub use validation::validate_config;
