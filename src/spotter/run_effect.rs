use super::main::Spotter;
use crate::image_file::ImageFile;
use crate::spotter::core::{Effect, Event};

impl Spotter {
    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("running effect: {:?}", effect));

        match effect {
            Effect::CreatePreview { file, preview } => {
                match decode_preview(&file, self.config.preview_max_dimension) {
                    Ok(image) => self.previews.insert(preview, image),
                    // The file still uploads fine; only the thumbnail is lost.
                    Err(error) => {
                        let _ = self.logger.error(&format!(
                            "could not decode a preview for {}: {}",
                            file.name, error
                        ));
                    }
                }
            }
            Effect::ReleasePreview(handle) => {
                self.previews.release(handle);
            }
            Effect::SubmitImage { file, request } => {
                let result = self.prediction_api.predict(&file);
                if let Err(error) = &result {
                    let _ = self
                        .logger
                        .error(&format!("prediction request failed: {}", error));
                }
                let _ = self.event_sender.send(Event::SubmitDone { request, result });
            }
        }
    }
}

fn decode_preview(file: &ImageFile, max_dimension: u32) -> Result<egui::ColorImage, image::ImageError> {
    let decoded = image::load_from_memory(&file.bytes)?;
    let scaled = decoded.thumbnail(max_dimension, max_dimension);
    let rgba = scaled.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}
