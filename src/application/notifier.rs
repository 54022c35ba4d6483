// src/application/notifier.rs
//
// Forwards notifications to the webview as "notification" events.

use tauri::{AppHandle, Emitter};

use crate::application::dto::NotificationDto;
use crate::infrastructure::{Notification, NotificationSink};

pub const NOTIFICATION_EVENT: &str = "notification";

pub struct WindowNotifier {
    handle: AppHandle,
}

impl WindowNotifier {
    pub fn new(handle: AppHandle) -> Self {
        Self { handle }
    }
}

impl NotificationSink for WindowNotifier {
    fn notify(&self, notification: Notification) {
        let payload = NotificationDto::from(notification);
        if let Err(e) = self.handle.emit(NOTIFICATION_EVENT, payload) {
            log::warn!("Failed to forward notification to window: {}", e);
        }
    }
}
