use thiserror::Error;

/// Top-level error type for the contour boolean engine.
#[derive(Debug, Error)]
pub enum ContourError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the shape of input contours.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("contour is not closed")]
    ContourNotClosed,
}

/// Errors related to operation parameters.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("parameter {parameter} = {value} must be finite and non-negative")]
    InvalidThreshold { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`ContourError`].
pub type Result<T> = std::result::Result<T, ContourError>;
