use crate::config::Config;
use crate::image_file::ImageFile;
use crate::library::logger::impl_console::LoggerConsole;
use crate::prediction_api::impl_fake::PredictionApiFake;
use crate::spotter::main::Spotter;
use std::sync::Arc;

pub struct Fixture {
    pub spotter: Spotter,
}

impl Fixture {
    pub fn new() -> Self {
        let config = Config::default();
        let logger = Arc::new(LoggerConsole::new(config.logger_timezone));
        let prediction_api = Arc::new(PredictionApiFake::new(logger.clone()));
        let spotter = Spotter::new(config, logger, prediction_api);

        Self { spotter }
    }
}

/// A real (tiny) PNG so preview decoding has something to chew on.
pub fn sample_png_file() -> ImageFile {
    let mut bytes = Vec::new();
    let pixels = image::RgbaImage::from_pixel(4, 4, image::Rgba([12, 110, 255, 255]));
    image::DynamicImage::ImageRgba8(pixels)
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();

    ImageFile {
        name: "reef.png".to_string(),
        mime: "image/png".to_string(),
        bytes,
    }
}
