use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Degenerate point: {0}")]
    DegeneratePoint(String),

    #[error("Projection error: {0}")]
    Proj(String),

    #[error("Diagnostic output failed: {0}")]
    Io(#[from] std::io::Error),
}
