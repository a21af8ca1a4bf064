/// Language picker screen
use super::theme;
use crate::assistant::language::LANGUAGES;
use eframe::egui;

pub const LANGUAGE_BUTTON_WIDTH: f32 = 300.0;
pub const LANGUAGE_BUTTON_HEIGHT: f32 = 52.0;

/// Draws the picker and returns the code of the language clicked this frame.
pub fn show(ctx: &egui::Context) -> Option<&'static str> {
    let mut selected = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(36.0);
                theme::draw_avatar(ui, 96.0);
                ui.add_space(16.0);

                ui.label(egui::RichText::new("आयुरक्षक").size(30.0).strong().color(theme::PRIMARY));
                ui.label(egui::RichText::new("AYURAKSHAK").size(20.0).strong());
                ui.label(
                    egui::RichText::new("Your Multilingual AI Health Assistant")
                        .size(13.0)
                        .color(theme::MUTED),
                );

                ui.add_space(28.0);
                ui.label(egui::RichText::new("Choose your preferred language").size(16.0));
                ui.add_space(12.0);

                for lang in LANGUAGES.iter() {
                    let label = egui::RichText::new(format!("{}    {}", lang.native_name, lang.name)).size(16.0);
                    let button = egui::Button::new(label)
                        .min_size(egui::vec2(LANGUAGE_BUTTON_WIDTH, LANGUAGE_BUTTON_HEIGHT));
                    if ui.add(button).clicked() {
                        log::info!("🌐 Language selected: {} ({})", lang.name, lang.code);
                        selected = Some(lang.code);
                    }
                    ui.add_space(8.0);
                }

                ui.add_space(24.0);
                ui.label(
                    egui::RichText::new("⚠️ For emergency, call 108 or visit nearest hospital")
                        .size(11.0)
                        .color(theme::MUTED),
                );
            });
        });
    });

    selected
}
