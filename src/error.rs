//! Error handling for the filmchest-cli application
//!
//! This module provides a hierarchical error system with typed errors for
//! each subsystem. Command modules generally work with `anyhow::Result` and
//! convert at the top level.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Catalog is empty (no playable entries)")]
    Empty,
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Index response invalid: {reason}")]
    InvalidResponse { reason: String },

    #[error("No catalog URL configured")]
    NoRemoteConfigured,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkillError>;

impl From<std::io::Error> for SkillError {
    fn from(err: std::io::Error) -> Self {
        SkillError::Cache(CacheError::Io(err))
    }
}

impl From<serde_json::Error> for SkillError {
    fn from(err: serde_json::Error) -> Self {
        SkillError::Catalog(CatalogError::InvalidJson(err))
    }
}

impl From<toml::de::Error> for SkillError {
    fn from(err: toml::de::Error) -> Self {
        SkillError::Config(ConfigError::InvalidFormat(err))
    }
}

impl From<reqwest::Error> for SkillError {
    fn from(err: reqwest::Error) -> Self {
        SkillError::Network(NetworkError::Http(err))
    }
}
