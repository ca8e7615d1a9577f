//! Drag-and-drop of import files onto the window.
//!
//! On the web a dropped file carries its bytes; natively it carries a path
//! that is read here.

use super::file_picker::PickedFile;

/// Trait for handling dropped files, enabling mock implementations for testing.
pub trait DropHandler {
    fn handle_drop(&self, ctx: &egui::Context) -> Option<PickedFile>;
}

#[derive(Default)]
pub struct SystemDropHandler;

impl DropHandler for SystemDropHandler {
    fn handle_drop(&self, ctx: &egui::Context) -> Option<PickedFile> {
        handle_dropped_files(ctx)
    }
}

/// The first file dropped this frame. Further files are ignored.
pub fn handle_dropped_files(ctx: &egui::Context) -> Option<PickedFile> {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    if dropped.len() > 1 {
        log::debug!("{} files dropped, using the first", dropped.len());
    }
    dropped.into_iter().next().and_then(picked_from_dropped)
}

fn picked_from_dropped(file: egui::DroppedFile) -> Option<PickedFile> {
    if let Some(bytes) = file.bytes {
        log::info!("Dropped file {} ({} bytes)", file.name, bytes.len());
        return Some(PickedFile {
            name: file.name,
            bytes: bytes.to_vec(),
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = &file.path {
        return super::file_picker::read_picked(path);
    }

    log::warn!("Dropped file {:?} has no readable content", file.name);
    None
}
