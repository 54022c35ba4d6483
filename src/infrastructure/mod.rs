// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Implementation details that support the domain but are not part of it.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod notifications;
pub mod report_store;

pub use notifications::{
    Notification, NotificationLog, NotificationSink, Severity, NOTIFICATION_LOG_CAPACITY,
};
pub use report_store::{ReportDocument, ReportStore};
