use crate::config::Config;
use crate::image_file::ImageFile;
use crate::library::logger::interface::Logger;
use crate::prediction_api::interface::{Prediction, PredictionApi, PredictionError};
use reqwest::blocking::multipart;
use std::sync::Arc;

/// Submits the raw image bytes as a single `file` part to the configured
/// endpoint. One best-effort attempt: no retry, no timeout, no cancellation.
pub struct PredictionApiHttp {
    client: reqwest::blocking::Client,
    predict_url: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionApiHttp {
    pub fn new(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            predict_url: config.predict_url.clone(),
            logger: logger.with_namespace("prediction_api").with_namespace("http"),
        }
    }
}

impl PredictionApi for PredictionApiHttp {
    fn predict(&self, file: &ImageFile) -> Result<Prediction, PredictionError> {
        let _ = self.logger.info(&format!(
            "submitting {} ({} bytes) to {}",
            file.name,
            file.bytes.len(),
            self.predict_url
        ));

        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(|e| PredictionError::Transport(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.predict_url)
            .multipart(form)
            .send()
            .map_err(|e| PredictionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status.as_u16()));
        }

        response
            .json::<Prediction>()
            .map_err(|e| PredictionError::MalformedBody(e.to_string()))
    }
}
