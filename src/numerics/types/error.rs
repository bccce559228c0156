// src/numerics/types/error.rs
// Error type shared by matrix construction and operations.

/// Errors raised by [`Matrix`](super::matrix::Matrix) construction and
/// operations.
///
/// Three families surface to callers: invalid arguments (malformed
/// shapes, length mismatches, squareness violations, scalar division
/// by zero), out-of-range row/column subscripts, and the
/// singular-matrix condition raised by inversion. All are immediate,
/// synchronous failures; no operation mutates the receiver before
/// reporting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("invalid matrix rows argument: {rows}")]
    InvalidRows { rows: usize },

    #[error("invalid matrix cols argument: {cols}")]
    InvalidCols { cols: usize },

    #[error("buffer length {len} does not match a {rows} x {cols} matrix")]
    LengthMismatch { rows: usize, cols: usize, len: usize },

    #[error("sequence length {len} does not match dimension {expected}")]
    SequenceLength { expected: usize, len: usize },

    #[error("row {row} of matrix literal has {got} elements, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("matrix shapes {lhs:?} and {rhs:?} do not match")]
    ShapeMismatch { lhs: (usize, usize), rhs: (usize, usize) },

    #[error("incompatible shapes {lhs:?} and {rhs:?} for matrix product")]
    IncompatibleProduct { lhs: (usize, usize), rhs: (usize, usize) },

    #[error("square matrix required, shape is {rows} x {cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix division by zero")]
    DivisionByZero,

    #[error("row subscript {row} out of range for {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("column subscript {col} out of range for {cols} columns")]
    ColOutOfRange { col: usize, cols: usize },

    #[error("singular matrix: null determinant")]
    Singular,
}
