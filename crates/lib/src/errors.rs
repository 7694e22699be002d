use thiserror::Error;

/// Custom error types for the description pipeline.
///
/// Normalization, extraction, prompt building and post-processing are total
/// functions, so every variant here originates either from building the
/// generator or from talking to the generation backend.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Model generation failed: {0}")]
    BackendRequest(reqwest::Error),
    #[error("Model generation failed: could not decode backend response: {0}")]
    BackendDeserialization(reqwest::Error),
    #[error("Model generation failed: backend returned {status}: {body}")]
    BackendApi { status: u16, body: String },
    #[error("Generation backend is missing")]
    MissingBackend,
}
