/// Logging setup.
/// Writes to the configured log file, or to stderr when the file cannot be opened.

use std::io::Write;
use std::path::Path;
use log::LevelFilter;

pub fn init(log_file: &Path) {
    let mut builder = env_logger::Builder::new();

    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        // Dependencies are too chatty at info
        for noisy in ["eframe", "egui", "egui_glow", "wgpu", "winit", "reqwest", "hyper"] {
            builder.filter_module(noisy, LevelFilter::Warn);
        }
    }

    // [HH:MM:SS LEVEL] target - message
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    let mut fallback_reason = None;
    match open_log_file(log_file) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            builder.target(env_logger::Target::Stderr);
            fallback_reason = Some(e);
        }
    }

    // A second init (tests, embedding) is harmless
    if builder.try_init().is_err() {
        return;
    }

    match fallback_reason {
        None => log::info!("Logging initialised ✓ ({})", log_file.display()),
        Some(e) => log::warn!("⚠️ Cannot open {}: {}, logging to stderr", log_file.display(), e),
    }
}

fn open_log_file(log_file: &Path) -> std::io::Result<std::fs::File> {
    if let Some(dir) = log_file.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
}
