//! Outbound messaging seam between the core and the host platform.
//!
//! The core never talks to player sessions directly; it hands plain-text
//! lines to a [`Messenger`] and the host decides the transport.

use crate::models::SessionId;

/// Narrow "send a text line to a session" capability.
pub trait Messenger {
    /// Delivers `message` to `session`. Delivery failures to an individual
    /// session are the implementation's concern and are never surfaced.
    fn send(&self, session: &SessionId, message: &str);
}

/// Messenger that routes every outbound line to the log.
///
/// Useful for host-less runs and embeddings that have not wired a real
/// transport yet.
#[derive(Debug, Default)]
pub struct LogMessenger;

impl Messenger for LogMessenger {
    fn send(&self, session: &SessionId, message: &str) {
        log::info!("[{}] {}", session, message);
    }
}
