/// Possible errors that arise when building or querying a region map.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    #[error("Coordinate out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid image dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Pixel buffer does not match image dimensions: {0}")]
    SizeMismatch(String),
}
