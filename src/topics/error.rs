use thiserror::Error;

/// Ways topic modeling can fail.
///
/// Callers treat every variant as non-fatal, but `InsufficientData` is the
/// expected outcome for small or repetitive uploads while the others point at
/// configuration or numerical problems.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopicModelError {
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("invalid topic model parameters: {0}")]
    InvalidParameters(String),

    #[error("topic model produced non-finite weights: {0}")]
    Numerical(String),
}

impl TopicModelError {
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, TopicModelError::InsufficientData(_))
    }
}
