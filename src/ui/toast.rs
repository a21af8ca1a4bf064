use super::theme;
use crate::assistant::Notice;
use eframe::egui;
use std::time::{Duration, Instant};

pub const TOAST_TTL: Duration = Duration::from_secs(4);
pub const TOAST_WIDTH: f32 = 260.0;

struct Toast {
    notice: Notice,
    destructive: bool,
    shown_at: Instant,
}

/// Short-lived notifications stacked in the bottom-right corner.
#[derive(Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    /// Capability failures coming from a session
    pub fn push_notice(&mut self, notice: Notice) {
        log::info!("🔔 {}: {}", notice.title, notice.description);
        self.push(notice, true);
    }

    pub fn push_info(&mut self, title: &str, description: &str) {
        let notice = Notice {
            title: title.to_string(),
            description: description.to_string(),
        };
        self.push(notice, false);
    }

    fn push(&mut self, notice: Notice, destructive: bool) {
        self.items.push(Toast {
            notice,
            destructive,
            shown_at: Instant::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn prune(&mut self, now: Instant) {
        self.items
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < TOAST_TTL);
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune(Instant::now());
        if self.items.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -72.0))
            .show(ctx, |ui| {
                for toast in &self.items {
                    let fill = if toast.destructive { theme::DESTRUCTIVE } else { theme::INFO };
                    egui::Frame::new()
                        .fill(fill)
                        .corner_radius(egui::CornerRadius::same(8))
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.set_max_width(TOAST_WIDTH);
                            ui.label(
                                egui::RichText::new(&toast.notice.title)
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            );
                            ui.label(
                                egui::RichText::new(&toast.notice.description)
                                    .size(11.0)
                                    .color(egui::Color32::WHITE),
                            );
                        });
                    ui.add_space(6.0);
                }
            });

        // Keep frames coming so expired toasts disappear on time
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
