use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatementMetricsError {
    #[error("Invalid projection parameters: discount rate {discount_rate} equals terminal growth rate {terminal_growth_rate}, perpetuity value is undefined")]
    InvalidProjectionParameters {
        discount_rate: f64,
        terminal_growth_rate: f64,
    },

    #[error("Invalid highlighted metric '{result}': {details}")]
    InvalidHighlightedMetric { result: String, details: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatementMetricsError>;
