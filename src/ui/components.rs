//! Reusable UI components
//!
//! Text formatting for prediction results plus the small widgets the
//! upload dialog is built from.

use crate::theme;
use eframe::egui;
use egui::text::{LayoutJob, TextFormat};

/// Turn a raw classifier label such as `Tomato___Early_blight` into
/// `Tomato - Early blight`.
pub fn format_label(raw: &str) -> String {
    let replaced = raw
        .replace("___", " - ")
        .replace('_', " ")
        .replace(['(', ')'], "");

    let mut collapsed = String::with_capacity(replaced.len());
    for c in replaced.chars() {
        if c == ' ' && collapsed.ends_with(' ') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed.trim().to_string()
}

/// Free text split into its leading sentence and everything after it
#[derive(Debug, PartialEq, Eq)]
pub struct Highlight<'a> {
    /// Up to and including the first period
    pub main: &'a str,
    pub rest: &'a str,
}

pub fn highlight_main_part(text: &str) -> Highlight<'_> {
    match text.find('.') {
        Some(idx) => {
            let (main, rest) = text.split_at(idx + 1);
            Highlight { main, rest }
        }
        None => Highlight { main: text, rest: "" },
    }
}

/// Render text with its leading sentence emphasized
pub fn highlighted_text(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let parts = highlight_main_part(text);
    let font_id = egui::FontId::proportional(theme::FONT_BODY);

    let mut job = LayoutJob::default();
    job.append(
        parts.main,
        0.0,
        TextFormat {
            font_id: font_id.clone(),
            color: theme::HIGHLIGHT,
            ..Default::default()
        },
    );
    job.append(
        parts.rest,
        0.0,
        TextFormat {
            font_id,
            color: theme::TEXT_SECONDARY,
            ..Default::default()
        },
    );
    job.wrap.max_width = ui.available_width();
    ui.label(job)
}

/// A `Title: value` row in the result panel
pub fn result_row(ui: &mut egui::Ui, title: &str, add_value: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal_wrapped(|ui| {
        ui.label(
            egui::RichText::new(format!("{}:", title))
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        add_value(ui);
    });
}

/// Dashed-looking drop target. Returns the click response.
pub fn drop_zone(ui: &mut egui::Ui, files_hovering: bool) -> egui::Response {
    let size = egui::vec2(ui.available_width(), theme::DROP_ZONE_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let highlighted = files_hovering || response.hovered();
        let (fill, stroke) = if highlighted {
            (theme::BG_HOVER, theme::ACCENT)
        } else {
            (theme::BG_INPUT, theme::BORDER_DEFAULT)
        };
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_LARGE, fill);
        painter.rect_stroke(
            rect,
            theme::RADIUS_LARGE,
            egui::Stroke::new(theme::STROKE_MEDIUM, stroke),
            egui::StrokeKind::Inside,
        );
        painter.text(
            rect.center() - egui::vec2(0.0, 12.0),
            egui::Align2::CENTER_CENTER,
            egui_phosphor::regular::UPLOAD_SIMPLE,
            egui::FontId::proportional(32.0),
            theme::TEXT_MUTED,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 22.0),
            egui::Align2::CENTER_CENTER,
            "Click or Drag & Drop to Upload",
            egui::FontId::proportional(theme::FONT_LABEL),
            theme::TEXT_DIM,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_label_splits_on_triple_underscore() {
        assert_eq!(format_label("Tomato___Early_blight"), "Tomato - Early blight");
    }

    #[test]
    fn format_label_drops_parentheses() {
        assert_eq!(format_label("Potato_(Late_blight)"), "Potato Late blight");
        assert_eq!(
            format_label("Corn_(maize)___Common_rust_"),
            "Corn maize - Common rust"
        );
    }

    #[test]
    fn format_label_empty_input() {
        assert_eq!(format_label(""), "");
        assert_eq!(format_label("   "), "");
        assert_eq!(format_label("_()_"), "");
    }

    #[test]
    fn format_label_collapses_spaces_and_trims() {
        assert_eq!(format_label("  Apple__ _scab  "), "Apple scab");
    }

    #[test]
    fn format_label_is_idempotent() {
        let samples = [
            "Tomato___Early_blight",
            "Potato_(Late_blight)",
            "Grape___Esca_(Black_Measles)",
            "____",
            "a___b___c",
            " _x_ (y) ",
            "already clean",
            "",
        ];
        for raw in samples {
            let once = format_label(raw);
            assert_eq!(format_label(&once), once, "input {:?}", raw);
        }
    }

    #[test]
    fn highlight_splits_after_first_period() {
        let parts = highlight_main_part("Caused by fungus. Spreads in wet weather.");
        assert_eq!(parts.main, "Caused by fungus.");
        assert_eq!(parts.rest, " Spreads in wet weather.");
    }

    #[test]
    fn highlight_without_period_keeps_everything_main() {
        let parts = highlight_main_part("No period here");
        assert_eq!(parts.main, "No period here");
        assert_eq!(parts.rest, "");
    }

    #[test]
    fn highlight_empty_input() {
        assert_eq!(highlight_main_part(""), Highlight { main: "", rest: "" });
    }

    #[test]
    fn highlight_preserves_text() {
        let text = "One. Two. Three.";
        let parts = highlight_main_part(text);
        assert_eq!(format!("{}{}", parts.main, parts.rest), text);
        assert_eq!(parts.main, "One.");
    }
}
