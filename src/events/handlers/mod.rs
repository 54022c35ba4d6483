// src/events/handlers/mod.rs
//
// Event Handlers
//
// Handlers subscribe to the bus through closures; the bus's own
// EventHandler type stays private.

pub mod notification_handler;

pub use notification_handler::register_notification_handlers;
