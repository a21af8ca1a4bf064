/// Chat screen rendering and interaction module
use super::theme;
use crate::assistant::{language, ChatSession, Message};
use eframe::egui;

/// Constants for chat screen styling
pub const CHAT_PADDING: i8 = 12;
pub const BUBBLE_PADDING: i8 = 10;
pub const BUBBLE_WIDTH_RATIO: f32 = 0.8;
pub const MESSAGE_SPACING: f32 = 10.0;
pub const SEND_BUTTON_SIZE: f32 = 32.0;

/// What the user asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    None,
    Back,
    Send,
    ShareLocation,
    AttachHint,
}

pub fn show(ctx: &egui::Context, session: &mut ChatSession) -> ChatAction {
    let mut action = ChatAction::None;

    egui::TopBottomPanel::top("chat_header")
        .frame(
            egui::Frame::new()
                .fill(theme::PRIMARY_DARK)
                .inner_margin(egui::Margin::same(CHAT_PADDING)),
        )
        .show(ctx, |ui| {
            if draw_header(ui, session.language()) {
                action = ChatAction::Back;
            }
        });

    egui::TopBottomPanel::bottom("chat_input")
        .frame(
            egui::Frame::new()
                .fill(ctx.style().visuals.panel_fill)
                .inner_margin(egui::Margin::same(CHAT_PADDING)),
        )
        .show(ctx, |ui| {
            if let Some(input_action) = draw_input_bar(ui, session) {
                action = input_action;
            }
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                draw_messages(ui, session.transcript());
                if session.is_awaiting_reply() {
                    draw_typing_indicator(ui);
                }
            });
    });

    action
}

/// Header with back button, avatar and language label. Returns true if back was clicked.
fn draw_header(ui: &mut egui::Ui, language_code: &str) -> bool {
    let mut back = false;
    ui.horizontal(|ui| {
        let back_button = egui::Button::new(egui::RichText::new("⬅").size(18.0).color(egui::Color32::WHITE))
            .frame(false);
        if ui.add(back_button).on_hover_text("Change language").clicked() {
            back = true;
        }

        theme::draw_avatar(ui, 40.0);

        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new("AYURAKSHAK")
                    .size(17.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            ui.label(
                egui::RichText::new(format!(
                    "{} • Online • AI Health Assistant",
                    language::display_label(language_code)
                ))
                .size(11.0)
                .color(theme::HEADER_SUBTITLE),
            );
        });
    });
    back
}

pub fn draw_messages(ui: &mut egui::Ui, messages: &[Message]) {
    for message in messages {
        let is_user = message.is_user();
        let (fill, text_color) = theme::bubble_colors(message.sender(), message.severity());

        let layout = if is_user {
            egui::Layout::right_to_left(egui::Align::Min)
        } else {
            egui::Layout::left_to_right(egui::Align::Min)
        };

        ui.with_layout(layout, |ui| {
            let max_width = ui.available_width() * BUBBLE_WIDTH_RATIO;
            egui::Frame::new()
                .fill(fill)
                .corner_radius(bubble_corners(is_user))
                .inner_margin(egui::Margin::same(BUBBLE_PADDING))
                .show(ui, |ui| {
                    ui.set_max_width(max_width);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        for line in message.lines() {
                            draw_line(ui, line, text_color);
                        }
                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(message.timestamp().format("%H:%M").to_string())
                                .size(10.0)
                                .color(text_color.gamma_multiply(0.7)),
                        );
                    });
                });
        });

        ui.add_space(MESSAGE_SPACING);
    }
}

/// Bubbles get a flat corner on the sender's side
fn bubble_corners(is_user: bool) -> egui::CornerRadius {
    let (sw, se) = if is_user { (16, 4) } else { (4, 16) };
    egui::CornerRadius { nw: 16, ne: 16, sw, se }
}

/// One display line; the first https:// link in it becomes clickable
fn draw_line(ui: &mut egui::Ui, line: &str, color: egui::Color32) {
    let Some((before, url, after)) = split_link(line) else {
        ui.label(egui::RichText::new(line).size(13.0).color(color));
        return;
    };

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        if !before.is_empty() {
            ui.label(egui::RichText::new(before).size(13.0).color(color));
        }
        ui.hyperlink_to(egui::RichText::new(url).size(13.0).color(color).underline(), url);
        if !after.is_empty() {
            ui.label(egui::RichText::new(after).size(13.0).color(color));
        }
    });
}

fn split_link(line: &str) -> Option<(&str, &str, &str)> {
    let start = line.find("https://")?;
    let rest = &line[start..];
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    Some((&line[..start], &rest[..end], &rest[end..]))
}

fn draw_typing_indicator(ui: &mut egui::Ui) {
    let time = ui.input(|i| i.time);

    egui::Frame::new()
        .fill(theme::BOT_BUBBLE)
        .corner_radius(bubble_corners(false))
        .inner_margin(egui::Margin::same(BUBBLE_PADDING))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(36.0, 14.0), egui::Sense::hover());
                for i in 0..3 {
                    let phase = time * 6.0 - i as f64 * 0.6;
                    let lift = (phase.sin().max(0.0) * 4.0) as f32;
                    let center = egui::pos2(rect.min.x + 6.0 + i as f32 * 12.0, rect.center().y + 2.0 - lift);
                    ui.painter().circle_filled(center, 3.0, theme::MUTED);
                }
                ui.label(
                    egui::RichText::new("AYURAKSHAK is typing...")
                        .size(11.0)
                        .color(theme::MUTED),
                );
            });
        });
}

/// Attach and location buttons, text field and send button
fn draw_input_bar(ui: &mut egui::Ui, session: &mut ChatSession) -> Option<ChatAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("📎").on_hover_text("Attach a file").clicked() {
            action = Some(ChatAction::AttachHint);
        }
        if ui.button("📍").on_hover_text("Share location").clicked() {
            action = Some(ChatAction::ShareLocation);
        }

        let awaiting = session.is_awaiting_reply();
        let field_width = (ui.available_width() - SEND_BUTTON_SIZE - 8.0).max(80.0);
        let field = egui::TextEdit::singleline(session.pending_input_mut())
            .hint_text("Type your health question...")
            .desired_width(field_width);
        let response = ui.add_enabled(!awaiting, field);

        // Enter submits
        let enter_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let send_button = egui::Button::new(egui::RichText::new("↑").size(16.0).color(egui::Color32::WHITE))
            .fill(theme::PRIMARY)
            .min_size(egui::vec2(SEND_BUTTON_SIZE, SEND_BUTTON_SIZE));
        let send_clicked = ui.add_enabled(session.can_submit(), send_button).clicked();

        if enter_pressed || send_clicked {
            action = Some(ChatAction::Send);
            response.request_focus();
        }
    });

    action
}
