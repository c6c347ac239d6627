#[derive(Debug, Clone)]
pub struct Config {
    pub predict_url: String,
    pub preview_max_dimension: u32,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predict_url: "http://localhost:8000/predict".to_string(),
            preview_max_dimension: 512,
            logger_timezone: utc(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(0).unwrap()
}
