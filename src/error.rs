use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    /// The response could not be processed at all. Raised only when the value
    /// pattern is unavailable; malformed fields never reach this.
    #[error("Failed to parse the response into a table: {0}")]
    ParseFailure(String),

    #[error("Failed to estimate nutrient content from the response")]
    NoEstimates,

    #[error("No matching data found for {country} - {subpopulation}")]
    ProfileNotFound {
        country: String,
        subpopulation: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, NutriError>;
