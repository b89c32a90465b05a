// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector and its producer-side handle.
//!
//! Producers (the controller, the UI layer) hold a cheap cloneable
//! [`DiagnosticsHandle`] and log through a bounded channel; sends never
//! block and are dropped when the channel is full. The collector drains
//! the channel into a ring buffer whenever the host asks.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, UserAction};

/// Size of the channel between producers and the collector.
const CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and safe to share across threads. A handle created
/// with [`DiagnosticsHandle::disabled`] has no collector behind it and
/// drops every event.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Creates a handle whose events go nowhere.
    ///
    /// This is the default for the playback controller: logging is
    /// opt-in and never affects playback behavior.
    #[must_use]
    pub fn disabled() -> Self {
        let (event_tx, _) = bounded(1);
        Self { event_tx }
    }

    /// Logs a user action.
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Logs a user action with optional free-form details.
    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action, details });
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a recoverable problem.
    pub fn log_warning_simple(&self, message: impl Into<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: message.into(),
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a failure.
    pub fn log_error_simple(&self, message: impl Into<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error {
            message: message.into(),
        });
        let _ = self.event_tx.try_send(event);
    }
}

/// Central store for diagnostic events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_rx: Receiver<DiagnosticEvent>,
    handle: DiagnosticsHandle,
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector with the given buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            event_rx,
            handle: DiagnosticsHandle { event_tx },
            buffer: CircularBuffer::new(capacity),
        }
    }

    /// Returns a handle for producers.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        self.handle.clone()
    }

    /// Drains pending events from the channel into the buffer.
    ///
    /// Returns the number of events absorbed. Call periodically (e.g.
    /// on the host's tick).
    pub fn process_pending(&mut self) -> usize {
        let mut absorbed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            absorbed += 1;
        }
        absorbed
    }

    /// Iterates stored events oldest-first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the number of stored events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_actions_reach_the_buffer() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::NavigateNext);
        handle.log_action_with_details(
            UserAction::LoadAlbum { clip_count: 3 },
            Some("coastline".to_string()),
        );

        assert_eq!(collector.process_pending(), 2);
        assert_eq!(collector.len(), 2);

        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert!(matches!(
            kinds[0],
            DiagnosticEventKind::UserAction {
                action: UserAction::NavigateNext,
                ..
            }
        ));
    }

    #[test]
    fn disabled_handle_drops_everything_silently() {
        let handle = DiagnosticsHandle::disabled();
        for _ in 0..100 {
            handle.log_action(UserAction::TogglePlayback);
            handle.log_error_simple("ignored");
        }
        // No panic, no blocking: that is the whole contract.
    }

    #[test]
    fn channel_overflow_drops_instead_of_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..(CHANNEL_CAPACITY * 2) {
            handle.log_action(UserAction::TogglePlayback);
        }

        // Only a channel's worth made it through; nothing blocked.
        assert_eq!(collector.process_pending(), CHANNEL_CAPACITY);
    }

    #[test]
    fn warnings_and_errors_are_distinguished() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning_simple("play rejected");
        handle.log_error_simple("clip failed to load");
        collector.process_pending();

        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert!(matches!(kinds[0], DiagnosticEventKind::Warning { .. }));
        assert!(matches!(kinds[1], DiagnosticEventKind::Error { .. }));
    }
}
