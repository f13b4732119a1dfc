//! File intake: file picker, drag-and-drop, and preview textures

use super::session::Session;
use super::App;
use crate::constants::IMAGE_EXTENSIONS;
use crate::error::IntakeError;
use crate::types::SelectedFile;
use eframe::egui;
use std::path::Path;
use tracing::{debug, info, warn};

pub fn read_path(path: &Path) -> Result<SelectedFile, IntakeError> {
    let bytes = std::fs::read(path).map_err(|source| IntakeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(SelectedFile::new(name, bytes))
}

/// Dropped files carry bytes on web and a path on native
pub fn read_dropped(file: &egui::DroppedFile) -> Result<SelectedFile, IntakeError> {
    match (&file.bytes, &file.path) {
        (Some(bytes), _) => Ok(SelectedFile::new(file.name.clone(), bytes.clone())),
        (None, Some(path)) => {
            let mut selected = read_path(path)?;
            if !file.name.is_empty() {
                selected.name = file.name.clone();
            }
            Ok(selected)
        }
        (None, None) => Err(IntakeError::NoContent(file.name.clone())),
    }
}

/// Decode the file into a texture, downscaled to fit the GPU's maximum side
fn load_preview(ctx: &egui::Context, file: &SelectedFile) -> Option<egui::TextureHandle> {
    match image::load_from_memory(&file.bytes) {
        Ok(mut img) => {
            let max_side = ctx.input(|i| i.max_texture_side) as u32;
            if img.width() > max_side || img.height() > max_side {
                debug!(
                    file = %file.name,
                    width = img.width(),
                    height = img.height(),
                    max_side,
                    "Downscaling preview"
                );
                img = img.thumbnail(max_side, max_side);
            }
            let rgba = img.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let pixels = rgba.into_raw();
            Some(ctx.load_texture(
                format!("preview:{}", file.name),
                egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
                egui::TextureOptions::LINEAR,
            ))
        }
        Err(e) => {
            warn!(file = %file.name, error = %e, "Could not decode preview");
            None
        }
    }
}

/// Store a new selection and replace the preview. Dropping the old
/// texture handle frees it.
fn select(
    session: &mut Session,
    preview: &mut Option<egui::TextureHandle>,
    ctx: &egui::Context,
    file: SelectedFile,
) {
    info!(file = %file.name, bytes = file.bytes.len(), mime = file.mime, "File selected");
    *preview = load_preview(ctx, &file);
    session.select_file(file);
}

/// Take the first dropped file. An empty drop changes nothing.
fn accept_dropped(
    session: &mut Session,
    preview: &mut Option<egui::TextureHandle>,
    ctx: &egui::Context,
    files: &[egui::DroppedFile],
) {
    let Some(first) = files.first() else {
        return;
    };
    match read_dropped(first) {
        Ok(file) => select(session, preview, ctx, file),
        Err(e) => warn!(error = %e, "Ignoring dropped file"),
    }
}

/// Consume this frame's drops and report whether files are hovering.
/// Drops only count while the dialog is open; hovering never touches state.
fn process_drops(
    session: &mut Session,
    preview: &mut Option<egui::TextureHandle>,
    ctx: &egui::Context,
) -> bool {
    let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

    let dropped = ctx.input_mut(|i| std::mem::take(&mut i.raw.dropped_files));
    if dropped.is_empty() {
        return hovering;
    }
    if session.is_open {
        accept_dropped(session, preview, ctx, &dropped);
    } else {
        debug!(count = dropped.len(), "Files dropped while dialog closed");
    }
    hovering
}

impl App {
    pub fn browse_for_file(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", IMAGE_EXTENSIONS)
            .pick_file()
        else {
            debug!("File dialog dismissed");
            return;
        };
        match read_path(&path) {
            Ok(file) => select(&mut self.session, &mut self.preview, ctx, file),
            Err(e) => warn!(error = %e, "Ignoring picked file"),
        }
    }

    pub fn handle_file_drops(&mut self, ctx: &egui::Context) {
        self.files_hovering = process_drops(&mut self.session, &mut self.preview, ctx);
    }

    /// Release the preview texture and cancel any pending request
    pub fn teardown(&mut self) {
        self.session.cancel_in_flight();
        self.preview = None;
    }
}
