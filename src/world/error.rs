//! Error types for game data loading.

use thiserror::Error;

/// Errors that can occur when loading tables or map layouts.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A grid cell is not an integer.
    #[error("Malformed cell '{value}' in '{source_name}' at row {row}, column {column}")]
    MalformedCell {
        source_name: String,
        row: usize,
        column: usize,
        value: String,
    },

    /// Grid dimensions don't match between layers.
    #[error("Grid mismatch in layer '{layer}': expected {expected_columns}x{expected_rows}, got {actual_columns}x{actual_rows}")]
    GridMismatch {
        layer: String,
        expected_columns: usize,
        expected_rows: usize,
        actual_columns: usize,
        actual_rows: usize,
    },

    /// Entity layer code that is neither the player marker nor an enemy.
    #[error("Unknown entity code {code} at row {row}, column {column}")]
    UnknownSpawnCode { code: i32, row: usize, column: usize },

    /// Spawn table points at a species with no definition.
    #[error("Unknown enemy species '{0}'")]
    UnknownSpecies(String),

    /// No layout loaded for this map id.
    #[error("Unknown map {0}")]
    UnknownMap(u32),
}
