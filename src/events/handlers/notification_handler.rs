// src/events/handlers/notification_handler.rs
//
// Notification Event Handler
//
// Bridge between the event bus and the notification sink.
// Turns the events a user should hear about into toast notifications.
// Holds no state and contains no business logic.

use std::sync::Arc;

use crate::events::types::{
    FileAccepted, ReportExported, ValidationFailed, VerificationCompleted, VerificationFailed,
};
use crate::events::EventBus;
use crate::infrastructure::notifications::{Notification, NotificationSink, Severity};

/// Registers all notification handlers with the event bus.
pub fn register_notification_handlers(bus: &EventBus, sink: Arc<dyn NotificationSink>) {
    let file_sink = Arc::clone(&sink);
    bus.subscribe::<FileAccepted, _>(move |event| {
        file_sink.notify(file_accepted(event));
    });

    let validation_sink = Arc::clone(&sink);
    bus.subscribe::<ValidationFailed, _>(move |event| {
        validation_sink.notify(validation_failed(event));
    });

    let completed_sink = Arc::clone(&sink);
    bus.subscribe::<VerificationCompleted, _>(move |event| {
        completed_sink.notify(verification_completed(event));
    });

    let failed_sink = Arc::clone(&sink);
    bus.subscribe::<VerificationFailed, _>(move |event| {
        failed_sink.notify(verification_failed(event));
    });

    let report_sink = sink;
    bus.subscribe::<ReportExported, _>(move |event| {
        report_sink.notify(report_exported(event));
    });

    log::debug!("[NOTIFICATIONS] Handlers registered");
}

fn file_accepted(event: &FileAccepted) -> Notification {
    Notification::new(
        "File uploaded successfully",
        format!("{} is ready for verification.", event.file_name),
        Severity::Info,
    )
}

fn validation_failed(event: &ValidationFailed) -> Notification {
    Notification::new("Input required", event.reason.clone(), Severity::Warning)
}

fn verification_completed(event: &VerificationCompleted) -> Notification {
    Notification::new(
        "Verification complete",
        format!("Certificate scored {}/100", event.score),
        Severity::Info,
    )
}

fn verification_failed(event: &VerificationFailed) -> Notification {
    Notification::new("Verification failed", event.error.clone(), Severity::Error)
}

fn report_exported(event: &ReportExported) -> Notification {
    Notification::new(
        "Report saved",
        format!("Report written to {}", event.report_path.display()),
        Severity::Info,
    )
}
