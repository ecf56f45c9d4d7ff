#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("distance matrix must be square, got {rows}x{cols}")]
    NonSquareDistance { rows: usize, cols: usize },

    #[error("row index {row} out of bounds for a matrix with {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    #[error("expected {expected} brand coordinates to match the performance matrix, got {actual}")]
    BrandCountMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
