use crate::extract::ExtractError;

/// Fatal pipeline outcomes. Both variants keep the raw model response so the
/// caller can show it when debugging a misbehaving model.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("model response carried no tagged ingredient block: {source}")]
    MissingPayload {
        raw: String,
        #[source]
        source: ExtractError,
    },
    #[error("tagged ingredient block is not a valid JSON array: {source}")]
    BadPayload {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ReportError {
    /// The raw model response, for display alongside the failure message.
    pub fn raw_response(&self) -> &str {
        match self {
            ReportError::MissingPayload { raw, .. } => raw,
            ReportError::BadPayload { raw, .. } => raw,
        }
    }
}
