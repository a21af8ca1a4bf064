use super::classifier;
use super::message::{Message, MessageId, Severity};
use super::responses;
use super::timing::ReplyTiming;
use crate::services::{Geolocator, LocationError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Called from background tasks after they deliver something.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    AwaitingReply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Blank input, ignored
    Empty,
    /// A text reply is still pending
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationRequest {
    Started,
    Unsupported,
}

/// Transient, non-blocking notification for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    fn location_denied() -> Self {
        Self {
            title: "Location access denied".to_string(),
            description: "Please enable location to find nearby healthcare facilities.".to_string(),
        }
    }

    fn location_unsupported() -> Self {
        Self {
            title: "Location not supported".to_string(),
            description: "Your device doesn't support location services.".to_string(),
        }
    }
}

/// Work finished by a background task, applied on the UI thread by `poll`.
#[derive(Debug)]
enum Deferred {
    TextReply { prompt: String },
    FileReceived { file_name: String },
    LocationReply,
    LocationFailed(LocationError),
}

/// One conversation: transcript, composer text and the pending-reply guard.
///
/// Timers run as tokio tasks and report back over a channel owned by the
/// session, so anything that fires after the session is dropped goes nowhere.
pub struct ChatSession {
    id: Uuid,
    language: String,
    transcript: Vec<Message>,
    pending_input: String,
    state: ConversationState,
    next_id: u64,
    timing: ReplyTiming,
    geolocator: Arc<dyn Geolocator>,
    deferred_tx: mpsc::UnboundedSender<Deferred>,
    deferred_rx: mpsc::UnboundedReceiver<Deferred>,
    notices: Vec<Notice>,
    repaint: Option<RepaintHook>,
}

impl ChatSession {
    /// Starts a session holding only the greeting. Must be called inside a tokio runtime
    /// before any timers are scheduled.
    pub fn new(language: &str, timing: ReplyTiming, geolocator: Arc<dyn Geolocator>) -> Self {
        let (deferred_tx, deferred_rx) = mpsc::unbounded_channel();
        let mut session = Self {
            id: Uuid::new_v4(),
            language: language.to_string(),
            transcript: Vec::new(),
            pending_input: String::new(),
            state: ConversationState::Idle,
            next_id: 1,
            timing,
            geolocator,
            deferred_tx,
            deferred_rx,
            notices: Vec::new(),
            repaint: None,
        };
        session.push_assistant(responses::GREETING.to_string(), Severity::Normal);
        log::info!("💬 Session {} started ({})", session.id, session.language);
        session
    }

    pub fn with_repaint_hook(mut self, hook: RepaintHook) -> Self {
        self.repaint = Some(hook);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.state == ConversationState::AwaitingReply
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Composer text, for binding to an input widget.
    pub fn pending_input_mut(&mut self) -> &mut String {
        &mut self.pending_input
    }

    /// Whether `submit_pending` would be accepted right now.
    pub fn can_submit(&self) -> bool {
        !self.is_awaiting_reply() && !self.pending_input.trim().is_empty()
    }

    pub fn submit_pending(&mut self) -> SubmitOutcome {
        let text = self.pending_input.clone();
        self.submit(&text)
    }

    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            return SubmitOutcome::Empty;
        }
        if self.is_awaiting_reply() {
            log::debug!("Session {}: submit while awaiting reply, rejected", self.id);
            return SubmitOutcome::Busy;
        }

        self.push_user(text.to_string());
        self.pending_input.clear();
        self.state = ConversationState::AwaitingReply;

        let delay = self.timing.text_reply.sample();
        log::debug!("Session {}: reply scheduled in {} ms", self.id, delay.as_millis());
        self.schedule(delay, Deferred::TextReply { prompt: text.to_string() });

        SubmitOutcome::Accepted
    }

    /// Acknowledges a picked file by name. Not gated by the pending-reply guard.
    pub fn attach_file(&mut self, file_name: &str) {
        log::info!("📎 Session {}: file attached: {}", self.id, file_name);
        self.push_user(responses::file_uploaded(file_name));
        self.schedule(
            self.timing.file_ack,
            Deferred::FileReceived { file_name: file_name.to_string() },
        );
    }

    /// Asks the geolocator for a fix. The "sharing" message is added before the
    /// outcome is known and stays even if the request fails.
    pub fn share_location(&mut self) -> LocationRequest {
        if !self.geolocator.is_supported() {
            log::info!("📍 Session {}: location unsupported", self.id);
            self.notices.push(Notice::location_unsupported());
            return LocationRequest::Unsupported;
        }

        self.push_user(responses::SHARING_LOCATION.to_string());

        let geolocator = Arc::clone(&self.geolocator);
        let reply_delay = self.timing.location_reply;
        let tx = self.deferred_tx.clone();
        let repaint = self.repaint.clone();
        let session_id = self.id;

        tokio::spawn(async move {
            let event = match geolocator.current_position().await {
                Ok(fix) => {
                    log::debug!(
                        "📍 Session {}: position fix {:.3}, {:.3}",
                        session_id,
                        fix.latitude,
                        fix.longitude
                    );
                    tokio::time::sleep(reply_delay).await;
                    Deferred::LocationReply
                }
                Err(e) => Deferred::LocationFailed(e),
            };
            deliver(&tx, event, repaint.as_ref(), session_id);
        });

        LocationRequest::Started
    }

    /// Applies everything background tasks have delivered so far. Returns how many.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.deferred_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn apply(&mut self, event: Deferred) {
        match event {
            Deferred::TextReply { prompt } => {
                let reply = classifier::classify(&prompt);
                log::info!(
                    "💬 Session {}: {:?} reply ({:?})",
                    self.id,
                    reply.category,
                    reply.severity
                );
                self.push_assistant(reply.text, reply.severity);
                self.state = ConversationState::Idle;
            }
            Deferred::FileReceived { file_name } => {
                self.push_assistant(responses::file_received(&file_name), Severity::Normal);
            }
            Deferred::LocationReply => {
                self.push_assistant(responses::location_received(), Severity::Normal);
            }
            Deferred::LocationFailed(e) => {
                log::info!("📍 Session {}: no location ({})", self.id, e);
                self.notices.push(Notice::location_denied());
            }
        }
    }

    fn schedule(&self, delay: Duration, event: Deferred) {
        let tx = self.deferred_tx.clone();
        let repaint = self.repaint.clone();
        let session_id = self.id;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            deliver(&tx, event, repaint.as_ref(), session_id);
        });
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    fn push_user(&mut self, content: String) {
        let id = self.allocate_id();
        self.transcript.push(Message::user(id, content));
    }

    fn push_assistant(&mut self, content: String, severity: Severity) {
        let id = self.allocate_id();
        self.transcript.push(Message::assistant(id, content, severity));
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        log::info!("💬 Session {} closed ({} messages)", self.id, self.transcript.len());
    }
}

/// Hands a finished result to its session, unless the session is gone.
fn deliver(
    tx: &mpsc::UnboundedSender<Deferred>,
    event: Deferred,
    repaint: Option<&RepaintHook>,
    session_id: Uuid,
) -> bool {
    if tx.is_closed() || tx.send(event).is_err() {
        log::debug!("Session {} already closed, dropping late result", session_id);
        return false;
    }
    if let Some(repaint) = repaint {
        repaint();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::message::Sender;
    use crate::assistant::responses::{DISCLAIMER, EMERGENCY_NUMBER, HEALTH_HELPLINE};
    use crate::assistant::timing::DelayWindow;
    use crate::services::geolocation::{DeniedGeolocator, UnsupportedGeolocator};
    use crate::services::PositionFix;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedGeolocator;

    #[async_trait]
    impl Geolocator for FixedGeolocator {
        async fn current_position(&self) -> Result<PositionFix, LocationError> {
            Ok(PositionFix { latitude: 17.385, longitude: 78.486 })
        }
    }

    fn timing() -> ReplyTiming {
        ReplyTiming {
            text_reply: DelayWindow::new(1_000, 2_000),
            file_ack: Duration::from_millis(1_500),
            location_reply: Duration::from_millis(1_000),
        }
    }

    fn session_with(geolocator: Arc<dyn Geolocator>) -> ChatSession {
        ChatSession::new("en", timing(), geolocator)
    }

    fn session() -> ChatSession {
        session_with(Arc::new(FixedGeolocator))
    }

    async fn wait_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn starts_with_greeting_only() {
        let session = session();
        assert_eq!(session.transcript().len(), 1);
        let greeting = &session.transcript()[0];
        assert_eq!(greeting.id(), MessageId(1));
        assert_eq!(greeting.sender(), Sender::Assistant);
        assert!(greeting.content().starts_with("🙏 Welcome to AYURAKSHAK!"));
        assert_eq!(session.state(), ConversationState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_submissions_are_ignored() {
        let mut session = session();
        assert_eq!(session.submit(""), SubmitOutcome::Empty);
        assert_eq!(session.submit("   "), SubmitOutcome::Empty);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.state(), ConversationState::Idle);

        wait_ms(5_000).await;
        assert_eq!(session.poll(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn fever_reply_arrives_after_delay() {
        let mut session = session();
        session.pending_input_mut().push_str("I have a fever");
        assert!(session.can_submit());

        assert_eq!(session.submit_pending(), SubmitOutcome::Accepted);
        assert_eq!(session.pending_input(), "");
        assert!(session.is_awaiting_reply());
        assert_eq!(session.transcript().len(), 2);

        wait_ms(999).await;
        assert_eq!(session.poll(), 0);

        wait_ms(1_002).await;
        assert_eq!(session.poll(), 1);
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.state(), ConversationState::Idle);

        let reply = &session.transcript()[2];
        assert_eq!(reply.sender(), Sender::Assistant);
        assert_eq!(reply.severity(), Severity::Normal);
        assert!(reply.content().contains("101°F (38.3°C)"));
        assert!(reply.content().ends_with(DISCLAIMER));
    }

    #[tokio::test(start_paused = true)]
    async fn sos_is_an_emergency() {
        let mut session = session();
        session.submit("sos help me");
        wait_ms(2_001).await;
        session.poll();

        let reply = session.transcript().last().unwrap();
        assert_eq!(reply.severity(), Severity::Emergency);
        assert!(reply.content().contains(EMERGENCY_NUMBER));
        assert!(reply.content().contains(HEALTH_HELPLINE));
    }

    #[tokio::test(start_paused = true)]
    async fn garlic_myth_is_a_warning() {
        let mut session = session();
        session.submit("garlic cures cancer");
        wait_ms(2_001).await;
        session.poll();

        let reply = session.transcript().last().unwrap();
        assert_eq!(reply.severity(), Severity::Warning);
        assert!(reply.content().contains("Garlic does NOT cure"));
    }

    #[tokio::test(start_paused = true)]
    async fn second_submit_while_awaiting_is_rejected() {
        let mut session = session();
        assert_eq!(session.submit("I have a cough"), SubmitOutcome::Accepted);
        session.pending_input_mut().push_str("and a fever");
        assert!(!session.can_submit());
        assert_eq!(session.submit("and a fever"), SubmitOutcome::Busy);
        assert_eq!(session.transcript().len(), 2);
        // Rejected text stays in the composer
        assert_eq!(session.pending_input(), "and a fever");

        wait_ms(2_001).await;
        assert_eq!(session.poll(), 1);
        assert_eq!(session.transcript().len(), 3);

        assert_eq!(session.submit_pending(), SubmitOutcome::Accepted);
        assert_eq!(session.transcript().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn message_ids_increase() {
        let mut session = session();
        session.submit("hello");
        session.attach_file("scan.png");
        wait_ms(2_001).await;
        session.poll();

        let ids: Vec<u64> = session.transcript().iter().map(|m| m.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test(start_paused = true)]
    async fn file_ack_ignores_pending_reply_guard() {
        let mut session = session();
        session.submit("my back hurts");
        session.attach_file("prescription.pdf");
        assert_eq!(session.transcript()[2].content(), "📎 Uploaded: prescription.pdf");
        assert_eq!(session.transcript().len(), 3);

        wait_ms(1_501).await;
        session.poll();
        let file_reply = session
            .transcript()
            .iter()
            .find(|m| m.content().contains("I received your file: \"prescription.pdf\""))
            .expect("file reply");
        assert_eq!(file_reply.severity(), Severity::Normal);

        wait_ms(500).await;
        session.poll();
        assert_eq!(session.transcript().len(), 5);
        assert_eq!(session.state(), ConversationState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn location_success_appends_reply() {
        let mut session = session();
        assert_eq!(session.share_location(), LocationRequest::Started);
        assert_eq!(session.transcript().last().unwrap().content(), "📍 Sharing location...");
        assert!(!session.is_awaiting_reply());

        wait_ms(1_001).await;
        assert_eq!(session.poll(), 1);
        let reply = session.transcript().last().unwrap();
        assert!(reply.content().starts_with("📍 Location received!"));
        assert!(reply.content().contains(responses::PHARMACIES_URL));
        assert!(session.take_notices().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn location_denied_keeps_optimistic_message() {
        let mut session = session_with(Arc::new(DeniedGeolocator));
        assert_eq!(session.share_location(), LocationRequest::Started);

        wait_ms(5_000).await;
        session.poll();
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1].content(), responses::SHARING_LOCATION);

        let notices = session.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Location access denied");
        assert!(session.take_notices().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn location_unsupported_adds_nothing() {
        let mut session = session_with(Arc::new(UnsupportedGeolocator));
        assert_eq!(session.share_location(), LocationRequest::Unsupported);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.take_notices()[0].title, "Location not supported");
    }

    #[tokio::test(start_paused = true)]
    async fn repaint_hook_fires_on_delivery() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let mut session = session().with_repaint_hook(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        session.submit("hello");
        wait_ms(2_001).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(session.poll(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn late_results_for_closed_session_are_dropped() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let mut session = session().with_repaint_hook(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        session.submit("hello");
        session.attach_file("x-ray.jpg");
        let tx = session.deferred_tx.clone();
        drop(session);

        wait_ms(5_000).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(!deliver(&tx, Deferred::LocationReply, None, Uuid::nil()));
    }
}
