//! Activity notification port
//!
//! Defines the interface for reporting in-flight service calls (spinners,
//! status lines) while the quiz waits on the network.

/// Kind of service call in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    LoadQuestions,
    Submit,
    Save,
    Retrieve,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::LoadQuestions => "load_questions",
            RequestKind::Submit => "submit",
            RequestKind::Save => "save",
            RequestKind::Retrieve => "retrieve",
        }
    }

    /// Message shown while the call is running
    pub fn pending_message(&self) -> &'static str {
        match self {
            RequestKind::LoadQuestions => "Loading questions...",
            RequestKind::Submit => "Scoring your answers...",
            RequestKind::Save => "Saving your result...",
            RequestKind::Retrieve => "Looking up your result...",
        }
    }
}

/// Callback for service-call activity
///
/// Implementations live in the presentation layer.
pub trait ActivityNotifier: Send + Sync {
    /// Called right before a service call starts
    fn on_request_start(&self, kind: RequestKind);

    /// Called when the call finished, successfully or not
    fn on_request_complete(&self, kind: RequestKind, success: bool);
}

/// No-op notifier for when activity reporting is not needed
pub struct NoActivity;

impl ActivityNotifier for NoActivity {
    fn on_request_start(&self, _kind: RequestKind) {}
    fn on_request_complete(&self, _kind: RequestKind, _success: bool) {}
}
