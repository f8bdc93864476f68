use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImgspectError {
    #[error("A region is already being drawn")]
    RegionInProgress,

    #[error("Cannot map to original space at zoom factor {zoom}")]
    DivideByZero { zoom: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not parse options: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, ImgspectError>;
