use thiserror::Error;

/// Errors produced by shape lookup, color parsing and pixel import.
#[derive(Debug, Error)]
pub enum BlockformError {
    #[error("shape type \"{0}\" not recognized")]
    UnrecognizedShape(String),

    #[error("no shapes available after applying blacklist")]
    EmptyShapePool,

    #[error("invalid color literal \"{0}\"")]
    InvalidColor(String),

    #[error("unknown image format hint \"{0}\"")]
    UnknownFormat(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
