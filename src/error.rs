use thiserror::Error;

/// Top-level error type for segline.
#[derive(Debug, Error)]
pub enum SeglineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors related to geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("coordinate {coordinate} = {value} is not finite")]
    NonFinite { coordinate: &'static str, value: f64 },
}

/// Errors raised while reading coordinates from text input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid input. Please enter numeric values.")]
    InvalidNumber(String),

    #[error("Invalid input. Please enter numeric values.")]
    UnexpectedEof,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`SeglineError`].
pub type Result<T> = std::result::Result<T, SeglineError>;
