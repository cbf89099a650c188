use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Missing value for prompt variable '{0}'")]
    MissingVariable(String),
}

/// Errors from the text completion service
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key not found. Set the {0} environment variable.")]
    MissingApiKey(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Errors from the stock photo service.
/// Callers downgrade every one of these to "no image".
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image access key not found. Set the {0} environment variable.")]
    MissingAccessKey(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Errors returned by a workflow action. None of them change session state.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Choose a destination before planning a trip")]
    NoDestination,

    #[error("Destination must not be empty")]
    EmptyDestination,

    #[error("The suggestion service returned no text")]
    EmptySuggestion,

    #[error("Trip duration must be between 1 and 28 days, got {0}")]
    InvalidDuration(u32),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl WorkflowError {
    /// Whether pressing the same button again may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            WorkflowError::Generation(GenerationError::MissingApiKey(_)) => false,
            WorkflowError::Generation(GenerationError::Template(_)) => false,
            WorkflowError::Generation(_) => true,
            WorkflowError::EmptySuggestion => true,
            WorkflowError::NoDestination
            | WorkflowError::EmptyDestination
            | WorkflowError::InvalidDuration(_) => false,
        }
    }
}
