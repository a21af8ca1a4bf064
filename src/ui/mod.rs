pub mod app;
pub mod chat;
pub mod picker;
pub mod theme;
pub mod toast;

pub use app::AyurakshakApp;
