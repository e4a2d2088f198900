// src/config/state.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Directory record image paths are resolved against
    pub asset_root: PathBuf,

    /// Bottom status line
    pub status: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            status: s!("Idle"),
        }
    }
}

impl GuiState {
    pub fn inner_size(&self) -> [f32; 2] {
        [self.window_w as f32, self.window_h as f32]
    }


    /// URI egui's file loader understands for a record image path.
    pub fn image_uri(&self, image: &str) -> String {
        let path = self.asset_root.join(image);
        join!("file://", &path.to_string_lossy())
    }
}
