/// Main application structure and lifecycle management
use super::toast::Toasts;
use super::{chat, picker, theme};
use crate::assistant::{LocationRequest, Navigator, RepaintHook, Screen, SubmitOutcome};
use crate::config::Config;
use crate::services::geolocation;
use super::chat::ChatAction;
use eframe::egui;
use std::sync::Arc;
use std::time::Duration;

enum Navigation {
    Open(&'static str),
    Back,
}

pub struct AyurakshakApp {
    pub config: Config,
    pub navigator: Navigator,
    pub toasts: Toasts,
}

impl AyurakshakApp {
    pub fn new(config: Config, ctx: &egui::Context) -> Self {
        theme::apply(ctx, config.font_path.as_deref());

        let geolocator = geolocation::from_mode(config.geolocation, &config.geolocation_url);
        let mut navigator = Navigator::new(config.timing, geolocator);

        let repaint_ctx = ctx.clone();
        let hook: RepaintHook = Arc::new(move || repaint_ctx.request_repaint());
        navigator.set_repaint_hook(hook);

        // Like opening a /chat/<code> deep link
        if let Some(code) = &config.start_language {
            log::info!("🌐 Opening chat directly in '{}'", code);
            navigator.select_language(code);
        }

        Self {
            config,
            navigator,
            toasts: Toasts::default(),
        }
    }

    /// Handles one frame of the chat screen. Returns a navigation request, if any.
    fn update_chat(&mut self, ctx: &egui::Context) -> Option<Navigation> {
        let Screen::Chat(session) = self.navigator.screen_mut() else {
            return None;
        };

        session.poll();

        // Files dropped on the window stand in for the file picker
        let dropped: Vec<String> = ctx.input(|i| i.raw.dropped_files.iter().map(dropped_file_name).collect());
        for name in dropped {
            session.attach_file(&name);
        }

        let mut navigation = None;
        match chat::show(ctx, session) {
            ChatAction::Send => {
                if session.submit_pending() == SubmitOutcome::Accepted {
                    log::debug!("💬 Message sent");
                }
            }
            ChatAction::ShareLocation => {
                if session.share_location() == LocationRequest::Started {
                    log::info!("📍 Location requested");
                }
            }
            ChatAction::AttachHint => {
                self.toasts.push_info("Attach a file", "Drop a prescription or report onto this window.");
            }
            ChatAction::Back => navigation = Some(Navigation::Back),
            ChatAction::None => {}
        }

        for notice in session.take_notices() {
            self.toasts.push_notice(notice);
        }

        // Animates the typing dots
        if session.is_awaiting_reply() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        navigation
    }
}

fn dropped_file_name(file: &egui::DroppedFile) -> String {
    if !file.name.is_empty() {
        return file.name.clone();
    }
    file.path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string())
}

impl eframe::App for AyurakshakApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let on_picker = matches!(self.navigator.screen(), Screen::LanguagePicker);
        let navigation = if on_picker {
            picker::show(ctx).map(Navigation::Open)
        } else {
            self.update_chat(ctx)
        };

        match navigation {
            Some(Navigation::Open(code)) => self.navigator.select_language(code),
            Some(Navigation::Back) => {
                log::info!("🌐 Back to language picker");
                self.navigator.back();
            }
            None => {}
        }

        self.toasts.show(ctx);
    }
}
