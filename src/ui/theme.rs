/// Colours, fonts and the avatar badge
use crate::assistant::{Sender, Severity};
use eframe::egui;
use std::path::Path;
use std::sync::Arc;

pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(22, 128, 110);
pub const PRIMARY_DARK: egui::Color32 = egui::Color32::from_rgb(14, 92, 80);
pub const HEADER_SUBTITLE: egui::Color32 = egui::Color32::from_rgb(205, 230, 224);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(120, 128, 126);

pub const USER_BUBBLE: egui::Color32 = egui::Color32::from_rgb(210, 242, 224);
pub const BOT_BUBBLE: egui::Color32 = egui::Color32::from_rgb(236, 238, 240);
pub const EMERGENCY_BUBBLE: egui::Color32 = egui::Color32::from_rgb(214, 48, 49);
pub const WARNING_BUBBLE: egui::Color32 = egui::Color32::from_rgb(230, 140, 20);
pub const DESTRUCTIVE: egui::Color32 = egui::Color32::from_rgb(200, 40, 40);
pub const INFO: egui::Color32 = egui::Color32::from_rgb(60, 70, 80);

const DARK_TEXT: egui::Color32 = egui::Color32::from_rgb(30, 36, 34);

/// Bubble fill and text colour. Severity only tints assistant bubbles.
pub fn bubble_colors(sender: Sender, severity: Severity) -> (egui::Color32, egui::Color32) {
    match (sender, severity) {
        (Sender::User, _) => (USER_BUBBLE, DARK_TEXT),
        (Sender::Assistant, Severity::Emergency) => (EMERGENCY_BUBBLE, egui::Color32::WHITE),
        (Sender::Assistant, Severity::Warning) => (WARNING_BUBBLE, egui::Color32::WHITE),
        (Sender::Assistant, Severity::Normal) => (BOT_BUBBLE, DARK_TEXT),
    }
}

/// Light visuals, plus an optional extra font for Devanagari, Telugu and Odia glyphs.
pub fn apply(ctx: &egui::Context, font_path: Option<&Path>) {
    ctx.set_visuals(egui::Visuals::light());

    let Some(path) = font_path else {
        return;
    };

    match std::fs::read(path) {
        Ok(bytes) => {
            let mut fonts = egui::FontDefinitions::default();
            fonts
                .font_data
                .insert("indic".to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts.families.entry(family).or_default().push("indic".to_owned());
            }
            ctx.set_fonts(fonts);
            log::info!("🔤 Extra font loaded: {}", path.display());
        }
        Err(e) => {
            log::warn!("⚠️ Cannot read font {}: {}", path.display(), e);
        }
    }
}

/// Round badge standing in for the assistant's avatar
pub fn draw_avatar(ui: &mut egui::Ui, diameter: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    let painter = ui.painter();
    let radius = diameter / 2.0;

    painter.circle_filled(rect.center(), radius, PRIMARY);
    painter.circle_stroke(
        rect.center(),
        radius,
        egui::Stroke::new(2.0, egui::Color32::from_rgba_unmultiplied(255, 255, 255, 80)),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "A",
        egui::FontId::proportional(diameter * 0.5),
        egui::Color32::WHITE,
    );
}
