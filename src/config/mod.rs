//! Configuration module for Linkprobe
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; `Config::default()` mirrors an empty file.
//!
//! # Example
//!
//! ```no_run
//! use linkprobe::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("linkprobe.toml")).unwrap();
//! println!("Batches are capped at {} URLs", config.batch.max_urls);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    BatchConfig, Config, FilterConfig, HttpConfig, ServerConfig, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
