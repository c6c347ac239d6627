use crate::image_file::ImageFile;
use crate::library::logger::interface::Logger;
use crate::prediction_api::interface::{Prediction, PredictionApi, PredictionError, PredictionInfo};
use rand::Rng;
use std::sync::Arc;

/// Canned predictions for wiring tests and running the window without a
/// backend.
#[allow(dead_code)]
pub struct PredictionApiFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionApiFake {
    #[allow(dead_code)]
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("prediction_api").with_namespace("fake"),
        }
    }
}

impl PredictionApi for PredictionApiFake {
    fn predict(&self, file: &ImageFile) -> Result<Prediction, PredictionError> {
        let _ = self
            .logger
            .info(&format!("faking a prediction for {}", file.name));

        let species = [
            "clown_fish",
            "trout",
            "salmon",
            "sea_bass",
            "shrimp",
            "tuna",
            "red_mullet",
            "striped_red_mullet",
        ];

        let mut rng = rand::rng();
        let species = species[rng.random_range(0..species.len())].to_string();
        let confidence = rng.random_range(0.70..0.99);

        Ok(Prediction {
            species,
            confidence,
            info: PredictionInfo {
                common_name: Some("Fake fish".to_string()),
                habitat: Some("Test waters".to_string()),
                fun_fact: None,
            },
        })
    }
}
