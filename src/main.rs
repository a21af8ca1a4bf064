mod assistant;
mod config;
mod logger;
mod services;
mod ui;

use config::Config;
use eframe::NativeOptions;
use ui::AyurakshakApp;

fn main() -> anyhow::Result<()> {
    let config = Config::default();

    logger::init(&config.log_file);
    log::info!("🚀 {} started", config.app_name);

    // The UI thread stays inside the runtime so sessions can spawn their timers
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    log::info!(
        "📁 Config loaded: reply {}..={} ms, file ack {} ms, location {} ms, geolocation {:?}",
        config.timing.text_reply.min_ms(),
        config.timing.text_reply.max_ms(),
        config.timing.file_ack.as_millis(),
        config.timing.location_reply.as_millis(),
        config.geolocation,
    );
    let app_name = config.app_name.clone();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&app_name)
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(AyurakshakApp::new(config, &cc.egui_ctx)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    log::info!("👋 {} closed", app_name);
    Ok(())
}
