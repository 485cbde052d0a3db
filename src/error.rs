//! Errors of the configuration and parsing surfaces.

use thiserror::Error;

/// The scale computations themselves never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown palette: {0:?}")]
    UnknownPalette(String),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
