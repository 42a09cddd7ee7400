//! Error types for the EIR synchronization core.
//!
//! This module defines the error type for payload-encoding and
//! configuration failures. Controller transmission outcomes are not
//! errors: `write_eir` results travel as `TxStatus` values returned to
//! the caller.

use thiserror::Error;

/// Main error type for the EIR core.
#[derive(Error, Debug)]
pub enum EirError {
   #[error("EIR payload overflow: element needs {needed} bytes, {capacity} available")]
   PayloadOverflow { needed: usize, capacity: usize },

   #[error("Could not determine config directory")]
   ConfigDirNotFound,

   #[error("I/O error: {0}")]
   Io(#[from] std::io::Error),

   #[error("TOML parsing error: {0}")]
   TomlParse(#[from] toml::de::Error),

   #[error("TOML serialization error: {0}")]
   TomlSerialize(#[from] toml::ser::Error),
}

/// Convenience type alias for Results with `EirError`.
pub type Result<T> = std::result::Result<T, EirError>;
