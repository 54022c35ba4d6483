// src/application/state.rs

use std::sync::Arc;

use crate::config::VerifierConfig;
use crate::events::{register_notification_handlers, EventBus};
use crate::infrastructure::{NotificationLog, ReportStore};
use crate::integrations::{CannedScoringEngine, ScoringEngine};
use crate::services::VerificationService;

/// Application state managed by Tauri.
/// One per mounted view; dropped when the window goes away.
pub struct AppState {
    pub config: VerifierConfig,
    pub event_bus: Arc<EventBus>,
    pub verification_service: Arc<VerificationService>,
    pub notifications: Arc<NotificationLog>,
}

impl AppState {
    /// Wire the canned engine, the bus and the in-memory notification log
    pub fn new(config: VerifierConfig) -> Self {
        let engine = Arc::new(CannedScoringEngine::new(config.scoring_latency()));
        Self::with_engine(config, engine)
    }

    pub fn with_engine(config: VerifierConfig, engine: Arc<dyn ScoringEngine>) -> Self {
        let event_bus = Arc::new(EventBus::new());

        let notifications = Arc::new(NotificationLog::new());
        register_notification_handlers(&event_bus, notifications.clone());

        let verification_service = Arc::new(VerificationService::new(
            engine,
            event_bus.clone(),
            ReportStore::new(config.report_dir.clone()),
        ));

        Self {
            config,
            event_bus,
            verification_service,
            notifications,
        }
    }
}
