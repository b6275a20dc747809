//! Configuration for pullpanda
//!
//! This crate provides:
//! - The YAML configuration file model (AppConfig)
//! - Configuration file loading and validation

pub mod app_config;
pub mod config_file;

pub use app_config::{AppConfig, DEFAULT_STATUS};
pub use config_file::{read_config_file, ConfigError, DEFAULT_CONFIG_FILE};
