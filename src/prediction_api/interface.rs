use crate::image_file::ImageFile;
use serde::Deserialize;
use thiserror::Error;

/// Payload returned by the classification endpoint. `species` and
/// `confidence` are required; a 2xx body without them is treated as
/// malformed rather than panicking downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub species: String,
    pub confidence: f32,
    #[serde(default)]
    pub info: PredictionInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PredictionInfo {
    pub common_name: Option<String>,
    pub habitat: Option<String>,
    pub fun_fact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("could not reach the prediction endpoint: {0}")]
    Transport(String),

    #[error("prediction endpoint returned status {0}")]
    Status(u16),

    #[error("prediction endpoint returned a malformed body: {0}")]
    MalformedBody(String),
}

pub trait PredictionApi: Send + Sync {
    fn predict(&self, file: &ImageFile) -> Result<Prediction, PredictionError>;
}
