use crate::assistant::{DelayWindow, ReplyTiming};
use crate::services::GeolocationMode;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipapi.co/json/";

#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub window_width: f32,
    pub window_height: f32,
    pub timing: ReplyTiming,
    pub geolocation: GeolocationMode,
    pub geolocation_url: String,
    pub start_language: Option<String>,
    pub font_path: Option<PathBuf>,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }
}

impl Config {
    /// Builds the config from a variable lookup, falling back to defaults for
    /// anything missing or unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ReplyTiming::default();

        let reply_min = parse_or(&lookup, "AYURAKSHAK_REPLY_DELAY_MIN_MS", defaults.text_reply.min_ms());
        let reply_max = parse_or(&lookup, "AYURAKSHAK_REPLY_DELAY_MAX_MS", defaults.text_reply.max_ms());
        let file_ack_ms = parse_or(&lookup, "AYURAKSHAK_FILE_ACK_DELAY_MS", defaults.file_ack.as_millis() as u64);
        let location_ms = parse_or(
            &lookup,
            "AYURAKSHAK_LOCATION_DELAY_MS",
            defaults.location_reply.as_millis() as u64,
        );

        let geolocation = parse_or(&lookup, "AYURAKSHAK_GEOLOCATION", GeolocationMode::Ip);
        let geolocation_url = non_empty(&lookup, "AYURAKSHAK_GEOLOCATION_URL")
            .unwrap_or_else(|| DEFAULT_GEOLOCATION_URL.to_string());

        let start_language = non_empty(&lookup, "AYURAKSHAK_LANGUAGE");
        let font_path = non_empty(&lookup, "AYURAKSHAK_FONT_PATH").map(PathBuf::from);
        let log_file = non_empty(&lookup, "AYURAKSHAK_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs/ayurakshak.log"));

        Self {
            app_name: "AYURAKSHAK".to_string(),
            window_width: 420.0,
            window_height: 720.0,
            timing: ReplyTiming {
                text_reply: DelayWindow::new(reply_min, reply_max),
                file_ack: Duration::from_millis(file_ack_ms),
                location_reply: Duration::from_millis(location_ms),
            },
            geolocation,
            geolocation_url,
            start_language,
            font_path,
            log_file,
        }
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match non_empty(lookup, key) {
        Some(raw) => raw.parse::<T>().unwrap_or_else(|_| {
            // Logging may not be up yet, so this goes straight to stderr
            eprintln!("{key}: cannot parse '{raw}', using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config.timing, ReplyTiming::default());
        assert_eq!(config.timing.text_reply.min_ms(), 1_000);
        assert_eq!(config.timing.text_reply.max_ms(), 2_000);
        assert_eq!(config.timing.file_ack, Duration::from_millis(1_500));
        assert_eq!(config.geolocation, GeolocationMode::Ip);
        assert_eq!(config.geolocation_url, DEFAULT_GEOLOCATION_URL);
        assert!(config.start_language.is_none());
        assert_eq!(config.log_file, PathBuf::from("logs/ayurakshak.log"));
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("AYURAKSHAK_REPLY_DELAY_MIN_MS", "200"),
            ("AYURAKSHAK_REPLY_DELAY_MAX_MS", "400"),
            ("AYURAKSHAK_FILE_ACK_DELAY_MS", "50"),
            ("AYURAKSHAK_GEOLOCATION", "deny"),
            ("AYURAKSHAK_LANGUAGE", "or"),
        ]);
        assert_eq!(config.timing.text_reply, DelayWindow::new(200, 400));
        assert_eq!(config.timing.file_ack, Duration::from_millis(50));
        assert_eq!(config.geolocation, GeolocationMode::Deny);
        assert_eq!(config.start_language.as_deref(), Some("or"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("AYURAKSHAK_REPLY_DELAY_MIN_MS", "soon"),
            ("AYURAKSHAK_GEOLOCATION", "satellite"),
            ("AYURAKSHAK_LANGUAGE", "   "),
        ]);
        assert_eq!(config.timing.text_reply.min_ms(), 1_000);
        assert_eq!(config.geolocation, GeolocationMode::Ip);
        assert!(config.start_language.is_none());
    }

    #[test]
    fn inverted_window_is_normalised() {
        let config = config_from(&[
            ("AYURAKSHAK_REPLY_DELAY_MIN_MS", "3000"),
            ("AYURAKSHAK_REPLY_DELAY_MAX_MS", "500"),
        ]);
        assert_eq!(config.timing.text_reply, DelayWindow::new(500, 3000));
    }
}
