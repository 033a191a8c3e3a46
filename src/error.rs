use thiserror::Error;

/// Main error type for the ddlpress library
#[derive(Error, Debug)]
pub enum DdlPressError {
    #[error("Unknown format type: {name}. Available formats: {valid}")]
    UnknownFormat { name: String, valid: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DdlPressError {
    pub fn unknown_format(name: impl Into<String>, valid: impl Into<String>) -> Self {
        Self::UnknownFormat {
            name: name.into(),
            valid: valid.into(),
        }
    }
}

/// Convenience alias for results produced by this crate
pub type DdlPressResult<T> = Result<T, DdlPressError>;
