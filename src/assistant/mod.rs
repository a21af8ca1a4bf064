pub mod classifier;
pub mod language;
pub mod message;
pub mod navigation;
pub mod responses;
pub mod session;
pub mod timing;

pub use message::{Message, Sender, Severity};
pub use navigation::{Navigator, Screen};
pub use session::{ChatSession, LocationRequest, Notice, RepaintHook, SubmitOutcome};
pub use timing::{DelayWindow, ReplyTiming};
