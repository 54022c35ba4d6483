// src/main.rs

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::sync::Arc;

use tauri::Manager;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use certicheck::application::commands::*;
use certicheck::application::{AppState, WindowNotifier};
use certicheck::config::VerifierConfig;
use certicheck::events::register_notification_handlers;

fn main() -> anyhow::Result<()> {
    // 1. LOGGING
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "certicheck=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. CONFIGURATION
    let config = VerifierConfig::from_env();
    log::info!(
        "Starting CertiCheck (latency {} ms, reports in {})",
        config.scoring_latency_ms,
        config.report_dir.display()
    );

    // 3. APPLICATION STATE (session is created here and dropped on exit)
    let app_state = AppState::new(config);

    // 4. TAURI BOOTSTRAP
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(app_state)
        .setup(|app| {
            let state = app.state::<AppState>();
            let notifier = Arc::new(WindowNotifier::new(app.handle().clone()));
            register_notification_handlers(&state.event_bus, notifier);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_session,
            select_file,
            clear_file,
            set_text,
            select_mode,
            get_notifications,
            get_config,
            submit_verification,
            reset_verification,
            export_report,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
