use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Could not parse location data: {0}")]
    Parse(String),
    #[error("No valid location data found.")]
    NoLocations,
    #[error("{0}")]
    Upstream(String),
    #[error("Model did not answer within {0} seconds")]
    Timeout(u64),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for LocationError {
    fn from(err: validator::ValidationErrors) -> Self {
        LocationError::Validation(err.to_string())
    }
}
