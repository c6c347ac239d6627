use config::Config;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use prediction_api::impl_http::PredictionApiHttp;
use spotter::main::Spotter;
use std::sync::Arc;

mod config;
mod image_file;
mod library;
mod prediction_api;
mod spotter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let prediction_api = Arc::new(PredictionApiHttp::new(&config, logger.clone()));

    let spotter = Spotter::new(config, logger, prediction_api);

    spotter.run()?;

    Ok(())
}
