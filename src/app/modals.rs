//! Upload dialog: drop zone, preview, predict/close actions, result panel

use super::App;
use crate::constants::PREDICTION_FAILED;
use crate::theme;
use crate::types::PredictionResult;
use crate::ui::components::{drop_zone, highlighted_text, result_row};
use eframe::egui;
use egui_phosphor::regular as icons;

/// Scale `size` down to fit within the bounds, never up
fn fit_within(size: egui::Vec2, max_w: f32, max_h: f32) -> egui::Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let scale = (max_w / size.x).min(max_h / size.y).min(1.0);
    size * scale
}

fn render_result(ui: &mut egui::Ui, result: &PredictionResult) {
    theme::section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new("Prediction Result")
                .size(theme::FONT_TITLE)
                .strong(),
        );
        ui.add_space(theme::SPACING_MD);

        let label_color = if result.label == PREDICTION_FAILED {
            theme::STATUS_ERROR
        } else {
            theme::TEXT_PRIMARY
        };
        result_row(ui, "Prediction", |ui| {
            ui.label(
                egui::RichText::new(&result.label)
                    .size(theme::FONT_RESULT)
                    .strong()
                    .color(label_color),
            );
        });
        result_row(ui, "Cause", |ui| {
            highlighted_text(ui, &result.cause);
        });
        result_row(ui, "Solution", |ui| {
            highlighted_text(ui, &result.solution);
        });
        // The service calls this field "fertilizer"
        result_row(ui, "Pesticide", |ui| {
            ui.label(egui::RichText::new(&result.treatment).strong().color(theme::PESTICIDE));
        });
    });
}

impl App {
    pub fn render_upload_modal(&mut self, ctx: &egui::Context) {
        if !self.session.is_open {
            return;
        }

        let mut browse = false;
        let mut toggle_zoom = false;
        let mut predict = false;
        let mut close = false;

        // Built-in Modal with backdrop, escape-to-close, click-outside handling
        let modal_area = egui::Modal::default_area(egui::Id::new("upload_modal"))
            .default_width(theme::MODAL_WIDTH + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("upload_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());

        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(theme::MODAL_WIDTH);
            ui.set_max_width(theme::MODAL_WIDTH);

            // Header
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("{}  Upload Image", icons::CLOUD_ARROW_UP))
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
            });
            ui.add_space(theme::SPACING_SM);
            ui.separator();
            ui.add_space(theme::SPACING_MD);

            if drop_zone(ui, self.files_hovering).clicked() {
                browse = true;
            }

            egui::ScrollArea::vertical()
                .max_height(ctx.screen_rect().height() * 0.6)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    if let Some(file) = &self.session.selected_file {
                        ui.add_space(theme::SPACING_LG);
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(format!("{}  {}", icons::FILE_IMAGE, file.name))
                                    .color(theme::TEXT_MUTED),
                            );
                        });

                        if let Some(texture) = &self.preview {
                            let max_h = if self.session.is_zoomed {
                                theme::PREVIEW_ZOOM_HEIGHT
                            } else {
                                theme::PREVIEW_MAX_HEIGHT
                            };
                            let size = fit_within(texture.size_vec2(), theme::MODAL_WIDTH, max_h);
                            ui.add_space(theme::SPACING_MD);
                            let image = ui
                                .vertical_centered(|ui| {
                                    ui.add(
                                        egui::Image::from_texture(texture)
                                            .fit_to_exact_size(size)
                                            .sense(egui::Sense::click()),
                                    )
                                })
                                .inner;
                            if image.hovered() {
                                ctx.set_cursor_icon(if self.session.is_zoomed {
                                    egui::CursorIcon::ZoomOut
                                } else {
                                    egui::CursorIcon::ZoomIn
                                });
                            }
                            if image.clicked() {
                                toggle_zoom = true;
                            }
                        }

                        ui.add_space(theme::SPACING_LG);
                        let loading = self.session.is_loading;
                        ui.columns(2, |cols| {
                            let width = cols[0].available_width();
                            let size = egui::vec2(width, theme::BUTTON_HEIGHT_LARGE);
                            let label = if loading {
                                format!("{}  Predicting...", icons::HOURGLASS)
                            } else {
                                format!("{}  Predict", icons::LIGHTNING)
                            };
                            if cols[0]
                                .add_enabled(!loading, theme::button_accent(label).min_size(size))
                                .clicked()
                            {
                                predict = true;
                            }
                            if cols[1]
                                .add(theme::button_danger(format!("{}  Close", icons::X)).min_size(size))
                                .clicked()
                            {
                                close = true;
                            }
                        });
                        if loading {
                            ui.add_space(theme::SPACING_SM);
                            ui.vertical_centered(|ui| ui.spinner());
                        }
                    } else {
                        ui.add_space(theme::SPACING_LG);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.add(theme::button(format!("{}  Close", icons::X))).clicked() {
                                close = true;
                            }
                        });
                    }

                    if let Some(result) = &self.session.result {
                        ui.add_space(theme::SPACING_XL);
                        render_result(ui, result);
                    }
                });
        });

        if modal_response.should_close() {
            close = true;
        }

        if toggle_zoom {
            self.session.toggle_zoom();
        }
        if predict {
            self.predict(ctx);
        }
        if browse {
            self.browse_for_file(ctx);
        }
        if close {
            self.session.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_within_scales_down_preserving_aspect() {
        let fitted = fit_within(egui::vec2(800.0, 400.0), 400.0, 300.0);
        assert_eq!(fitted, egui::vec2(400.0, 200.0));
    }

    #[test]
    fn fit_within_never_upscales() {
        let fitted = fit_within(egui::vec2(100.0, 50.0), 400.0, 300.0);
        assert_eq!(fitted, egui::vec2(100.0, 50.0));
    }

    #[test]
    fn fit_within_handles_empty_texture() {
        assert_eq!(fit_within(egui::Vec2::ZERO, 400.0, 300.0), egui::Vec2::ZERO);
    }
}
