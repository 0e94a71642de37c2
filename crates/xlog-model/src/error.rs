use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown tag '{tag}' at position {pos} (expected one of: f|d|c|s|i|b)")]
    UnknownTag { tag: char, pos: usize },

    #[error("matrix shape mismatch: {rows}x{cols} needs {expected} cells, got {actual}")]
    MatrixShape {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("matrix too large: {rows}x{cols} cells overflow usize")]
    MatrixTooLarge { rows: usize, cols: usize },

    #[error("ragged matrix: row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub type ModelResult<T> = Result<T, ModelError>;
