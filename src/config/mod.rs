//! Configuration module for Suplementor
//!
//! This module handles:
//! - Project-level configuration (suplementor.toml / .suplementorrc.json)
//! - User-level fallback (~/.config/suplementor/config.toml)
//! - Graph, layout and scoring defaults
//! - Safety analysis policy

mod project_config;

pub use project_config::{
    init_config, load_config, user_config_path, CatalogConfig, SafetyConfig, SuplementorConfig,
    CONFIG_FILE_NAME, CONFIG_TEMPLATE, JSON_CONFIG_FILE_NAME,
};
