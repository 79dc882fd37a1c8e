//! Unified application error type.
//! All modules (menu, config, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Menu data
    // ---------------------------
    #[error("Invalid menu file {0}: {1}")]
    MenuFile(String, serde_json::Error),

    #[error("No menu data found in {0}")]
    NoMenuData(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid day abbreviation: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
