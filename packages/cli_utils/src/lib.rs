#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared CLI utilities for the meteorite map toolchain.
//!
//! Provides [`init_logger`], which sets up `pretty_env_logger` from
//! `RUST_LOG`, plus whole-document JSON helpers. Every tool reads its input
//! fully into memory with [`read_json`] and writes its output with
//! [`write_json_pretty`], which indents with four spaces.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

/// Indentation used for every JSON document the toolchain writes.
const INDENT: &[u8] = b"    ";

/// Errors that can occur while reading or writing a JSON document.
#[derive(Debug, Error)]
pub enum JsonFileError {
    /// The file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The file contents are not the expected JSON document, or the value
    /// could not be serialized.
    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        /// File being parsed or written.
        path: PathBuf,
        /// Underlying parse or serialization failure.
        source: serde_json::Error,
    },
}

/// Initializes the global `pretty_env_logger` logger, configured from the
/// `RUST_LOG` environment variable.
pub fn init_logger() {
    pretty_env_logger::formatted_builder()
        .parse_env("RUST_LOG")
        .try_init()
        .ok(); // Ignore error if logger was already set (e.g., in tests)
}

/// Reads and deserializes a whole JSON document.
///
/// # Errors
///
/// Returns [`JsonFileError`] if the file cannot be read or does not parse
/// as `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, JsonFileError> {
    log::info!("Reading {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|source| JsonFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| JsonFileError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `value` as JSON indented with four spaces.
///
/// # Errors
///
/// Returns the serializer error if `value` cannot be represented as JSON
/// (e.g. a map with non-string keys).
pub fn to_pretty_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Writes `value` to `path` as JSON indented with four spaces, replacing
/// any existing file.
///
/// # Errors
///
/// Returns [`JsonFileError`] if serialization or the write fails.
pub fn write_json_pretty<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), JsonFileError> {
    let bytes = to_pretty_vec(value).map_err(|source| JsonFileError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, bytes).map_err(|source| JsonFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Wrote {}", path.display());
    Ok(())
}
