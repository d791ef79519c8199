use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The coefficient matrix has a row whose length differs from the number of rows.
    #[error("The coefficient matrix must be square: it has {rows} rows but row {row} has {len} entries")]
    NotSquare { rows: usize, row: usize, len: usize },

    #[error("The coefficient matrix must be square, it is {rows}x{cols}")]
    NotSquareMatrix { rows: usize, cols: usize },

    #[error("The coefficient matrix has {a_rows} rows but the right-hand side has {b_rows}")]
    RowCountMismatch { a_rows: usize, b_rows: usize },

    /// A right-hand side row is not a single cell.
    #[error("Right-hand side row {row} has {len} entries, expected exactly one")]
    NotAColumn { row: usize, len: usize },

    #[error("Cannot label {unknowns} unknowns, the scheme only provides {available} labels")]
    LabelsExhausted { unknowns: usize, available: usize },

    #[error("Expected {expected} labels, found {found}")]
    LabelCount { expected: usize, found: usize },

    /// The system has no unique solution; `columns` lists the pivot columns that were skipped.
    #[error("The system is singular or under-determined (no usable pivot in columns {columns:?})")]
    Singular { columns: Vec<usize> },

    #[error("Cannot round to {digits} decimals, at most 15 are supported")]
    Precision { digits: u32 },
}
