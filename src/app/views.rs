//! Landing view with the dialog trigger

use super::App;
use crate::constants::APP_NAME;
use crate::theme;
use eframe::egui;

impl App {
    pub fn render_home(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.3);
                    ui.label(
                        egui::RichText::new(format!("{}  {}", egui_phosphor::regular::PLANT, APP_NAME))
                            .size(theme::FONT_DISPLAY)
                            .strong()
                            .color(theme::ACCENT),
                    );
                    ui.add_space(theme::SPACING_SM);
                    ui.label(
                        egui::RichText::new("Upload a leaf photo to identify plant diseases")
                            .size(theme::FONT_HEADING)
                            .color(theme::TEXT_MUTED),
                    );
                    ui.add_space(theme::SPACING_XL);

                    let start = ui.add(
                        theme::button_accent(format!(
                            "{}  Get Started",
                            egui_phosphor::regular::ARROW_SQUARE_IN
                        ))
                        .min_size(egui::vec2(180.0, theme::BUTTON_HEIGHT_LARGE)),
                    );
                    if start.clicked() {
                        self.session.open();
                    }
                });
            });
    }
}
