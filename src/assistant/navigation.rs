use super::session::{ChatSession, RepaintHook};
use super::timing::ReplyTiming;
use crate::services::Geolocator;
use std::sync::Arc;

pub enum Screen {
    LanguagePicker,
    Chat(ChatSession),
}

/// Switches between the picker and the chat. Every language pick starts a fresh session.
pub struct Navigator {
    screen: Screen,
    timing: ReplyTiming,
    geolocator: Arc<dyn Geolocator>,
    repaint: Option<RepaintHook>,
}

impl Navigator {
    pub fn new(timing: ReplyTiming, geolocator: Arc<dyn Geolocator>) -> Self {
        Self {
            screen: Screen::LanguagePicker,
            timing,
            geolocator,
            repaint: None,
        }
    }

    /// Hook handed to every session created from now on.
    pub fn set_repaint_hook(&mut self, hook: RepaintHook) {
        self.repaint = Some(hook);
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn session(&self) -> Option<&ChatSession> {
        match &self.screen {
            Screen::Chat(session) => Some(session),
            Screen::LanguagePicker => None,
        }
    }

    pub fn select_language(&mut self, code: &str) {
        let mut session = ChatSession::new(code, self.timing, Arc::clone(&self.geolocator));
        if let Some(hook) = &self.repaint {
            session = session.with_repaint_hook(Arc::clone(hook));
        }
        // The previous session, if any, is dropped here
        self.screen = Screen::Chat(session);
    }

    pub fn back(&mut self) {
        self.screen = Screen::LanguagePicker;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::geolocation::DeniedGeolocator;
    use std::time::Duration;

    fn navigator() -> Navigator {
        Navigator::new(ReplyTiming::default(), Arc::new(DeniedGeolocator))
    }

    #[test]
    fn starts_on_picker() {
        let nav = navigator();
        assert!(matches!(nav.screen(), Screen::LanguagePicker));
        assert!(nav.session().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn reselecting_language_resets_transcript() {
        let mut nav = navigator();
        nav.select_language("hi");
        let first_id = nav.session().unwrap().id();

        if let Screen::Chat(session) = nav.screen_mut() {
            session.submit("I have a fever");
        }
        tokio::time::sleep(Duration::from_millis(2_001)).await;
        if let Screen::Chat(session) = nav.screen_mut() {
            session.poll();
            assert_eq!(session.transcript().len(), 3);
            assert_eq!(session.language(), "hi");
        }

        nav.back();
        assert!(nav.session().is_none());

        nav.select_language("en");
        let session = nav.session().unwrap();
        assert_ne!(session.id(), first_id);
        assert_eq!(session.language(), "en");
        assert_eq!(session.transcript().len(), 1);
        assert!(session.transcript()[0].content().starts_with("🙏 Welcome"));
    }

    #[tokio::test(start_paused = true)]
    async fn reply_pending_at_back_navigation_never_lands() {
        let mut nav = navigator();
        nav.select_language("te");
        if let Screen::Chat(session) = nav.screen_mut() {
            session.submit("sos");
        }
        nav.back();
        nav.select_language("te");

        tokio::time::sleep(Duration::from_millis(3_000)).await;
        if let Screen::Chat(session) = nav.screen_mut() {
            assert_eq!(session.poll(), 0);
            assert_eq!(session.transcript().len(), 1);
            assert!(!session.is_awaiting_reply());
        }
    }
}
