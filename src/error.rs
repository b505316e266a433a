use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read input.")]
    Read(#[source] std::io::Error),

    #[error("Error: Input text is empty.")]
    EmptyInput,

    #[error("Error: GEMINI_API_KEY environment variable not set.")]
    MissingCredential,

    #[error("request failed: {0}")]
    Transport(#[source] BoxError),

    #[error("JSON parsing error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Names the first field of the response whose shape did not match.
    #[error("Invalid JSON structure: {}", describe_field(.0))]
    Schema(&'static str),
}

impl Error {
    pub fn transport(e: impl Into<BoxError>) -> Self {
        Self::Transport(e.into())
    }
}

fn describe_field(field: &str) -> String {
    match field {
        "candidates" | "parts" => format!("'{field}' is not an array."),
        "content" => "'content' is not an object.".to_string(),
        "text" => "'text' is not a string.".to_string(),
        "candidate" => "First candidate is not an object.".to_string(),
        "part" => "First part is not an object.".to_string(),
        other => format!("unexpected '{other}'."),
    }
}
