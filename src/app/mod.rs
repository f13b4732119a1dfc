//! App module - contains the main application state and logic

mod intake;
mod modals;
mod predict;
mod session;
mod views;

use crate::constants::PREDICT_URL;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use predict::{Mailbox, PredictionClient};
use session::Session;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) session: Session,
    pub(crate) preview: Option<egui::TextureHandle>,
    pub(crate) files_hovering: bool,
    // Prediction plumbing
    pub(crate) client: PredictionClient,
    pub(crate) mailbox: Mailbox,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Settings
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    /// One-time bootstrap: theme and icon fonts are installed here, never by
    /// the dialog itself.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Runtime::new()?;
        info!(endpoint = PREDICT_URL, "Prediction client ready");

        Ok(Self {
            session: Session::default(),
            preview: None,
            files_hovering: false,
            client: PredictionClient::new(PREDICT_URL),
            mailbox: Arc::default(),
            runtime,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}
