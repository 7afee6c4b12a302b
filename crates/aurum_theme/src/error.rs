use std::path::PathBuf;
use thiserror::Error;

use crate::tokens::TokenGroup;

/// Errors raised by the theme pipeline
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme mode `{0}`, expected `light` or `dark`")]
    InvalidMode(String),

    #[error("token schema violation: {0}")]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("invalid theme settings: {0}")]
    Settings(#[source] toml::de::Error),

    #[error("invalid theme setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("invalid token file: {0}")]
    TokenFile(#[source] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to export theme: {0}")]
    Export(#[from] serde_json::Error),

    #[error("ThemeContext not initialized. Call ThemeContext::init() at app startup.")]
    NotInitialized,

    #[error("ThemeContext::init() called more than once")]
    AlreadyInitialized,
}

/// A token table that does not match the fixed schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{table} table is missing `{group}.{key}`")]
    Missing {
        table: &'static str,
        group: TokenGroup,
        key: &'static str,
    },

    #[error("{table} table has unexpected `{group}.{key}`")]
    Unexpected {
        table: &'static str,
        group: TokenGroup,
        key: String,
    },

    #[error("{table} table has unknown group `{group}`")]
    UnknownGroup { table: &'static str, group: String },

    #[error("{table} table has an invalid `{group}.{key}`: {message}")]
    InvalidValue {
        table: &'static str,
        group: TokenGroup,
        key: &'static str,
        message: String,
    },

    #[error("projection produced {found} variables, expected {expected}")]
    VariableCount { found: usize, expected: usize },

    #[error("variable `{0}` is produced more than once")]
    DuplicateVariable(String),
}

/// Failures of the durable preference storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference file {path} is not valid TOML: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}
