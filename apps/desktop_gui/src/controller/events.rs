//! Events flowing from the backend worker to the UI, and error modeling.

use client_core::ViewSnapshot;
use shared::domain::{FacilityName, RoomNumber};

pub enum UiEvent {
    SnapshotLoaded(ViewSnapshot),
    MutationSucceeded {
        notice: String,
        snapshot: ViewSnapshot,
    },
    ResidentLocated {
        name: String,
        facility: FacilityName,
        room: RoomNumber,
    },
    ResidentNotFound {
        name: String,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Refresh,
    Mutation,
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn dialog_title(&self) -> &'static str {
        match self.context {
            UiErrorContext::BackendStartup => "Startup Error",
            UiErrorContext::Refresh => "Connection Error",
            UiErrorContext::Mutation => "Error",
        }
    }

    /// Body text for the blocking error dialog.
    pub fn dialog_message(&self) -> String {
        match self.context {
            UiErrorContext::BackendStartup | UiErrorContext::Refresh => {
                classify_refresh_failure(&self.message)
            }
            UiErrorContext::Mutation => format!("Error: {}", self.message),
        }
    }
}

pub fn classify_refresh_failure(message: &str) -> String {
    let lower = message.to_ascii_lowercase();
    if lower.contains("connection refused")
        || lower.contains("failed to connect")
        || lower.contains("dns")
        || lower.contains("timed out")
    {
        "Server unreachable; check HAVENLEDGER_SERVER_URL and retry.".to_string()
    } else {
        format!("Error: {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failures_get_a_friendly_message() {
        let text = classify_refresh_failure(
            "request to /rooms failed: error sending request: Connection refused",
        );
        assert!(text.contains("HAVENLEDGER_SERVER_URL"));
    }

    #[test]
    fn other_failures_keep_the_original_message() {
        let text = classify_refresh_failure("Facility already exists");
        assert_eq!(text, "Error: Facility already exists");
    }

    #[test]
    fn mutation_errors_render_with_error_prefix() {
        let err = UiError::new(UiErrorContext::Mutation, "Room already exists");
        assert_eq!(err.dialog_title(), "Error");
        assert_eq!(err.dialog_message(), "Error: Room already exists");
    }
}
