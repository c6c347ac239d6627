use crate::spotter::core::PreviewHandle;
use std::collections::HashMap;
use std::sync::Mutex;

/// Decoded previews keyed by their handle. Entries are published by the
/// effect interpreter and read by the window; the GPU texture is uploaded
/// lazily on the first frame that draws the handle. Removing an entry drops
/// the texture handle, which frees the texture.
pub struct PreviewStore {
    entries: Mutex<HashMap<PreviewHandle, PreviewEntry>>,
}

struct PreviewEntry {
    image: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, handle: PreviewHandle, image: egui::ColorImage) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            handle,
            PreviewEntry {
                image: Some(image),
                texture: None,
            },
        );
    }

    /// Returns whether the handle was still live.
    pub fn release(&self, handle: PreviewHandle) -> bool {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(&handle).is_some()
    }

    #[allow(dead_code)]
    pub fn contains(&self, handle: PreviewHandle) -> bool {
        let entries = self.entries.lock().unwrap();
        entries.contains_key(&handle)
    }

    pub fn texture(
        &self,
        ctx: &egui::Context,
        handle: PreviewHandle,
    ) -> Option<(egui::TextureId, egui::Vec2)> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.get_mut(&handle)?;

        if entry.texture.is_none() {
            let image = entry.image.take()?;
            entry.texture = Some(ctx.load_texture(
                format!("preview-{}", handle.0),
                image,
                egui::TextureOptions::LINEAR,
            ));
        }

        entry
            .texture
            .as_ref()
            .map(|texture| (texture.id(), texture.size_vec2()))
    }
}
