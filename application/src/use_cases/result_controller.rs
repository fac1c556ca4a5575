//! Result controller
//!
//! Drives scoring, persistence and retrieval of quiz results against the
//! scoring service, and remembers the latest result and key on display.

use crate::config::BehaviorConfig;
use crate::ports::activity::{ActivityNotifier, NoActivity, RequestKind};
use crate::ports::device::{DeviceClassifier, FixedDevice};
use crate::ports::presentation::ErrorKind;
use crate::ports::scoring_gateway::{GatewayError, ScoringGateway};
use crate::use_cases::shared::bounded_call;
use compass_domain::{
    AnswerMap, ClientMetadata, DeviceClass, QuizResult, ResultKey, SaveRequest, StoredResult,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by the result controller
#[derive(Error, Debug)]
pub enum ResultError {
    #[error("Could not score your answers: {0}")]
    Submission(String),

    #[error("Your result could not be saved: {0}")]
    Persistence(String),

    #[error("Invalid result key: {0}")]
    InvalidKeyFormat(String),

    #[error("No result found for key {0}")]
    NotFound(ResultKey),

    #[error("Could not retrieve result {key}: {reason}")]
    RetrievalFailed { key: ResultKey, reason: String },

    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

impl ResultError {
    /// User-facing category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResultError::Submission(_) | ResultError::AlreadySubmitting => ErrorKind::Submission,
            ResultError::Persistence(_) => ErrorKind::Persistence,
            ResultError::InvalidKeyFormat(_) => ErrorKind::InvalidKeyFormat,
            ResultError::NotFound(_) | ResultError::RetrievalFailed { .. } => ErrorKind::NotFound,
        }
    }
}

/// A scored submission, saved or not
#[derive(Debug)]
pub struct SubmitOutcome {
    pub result: QuizResult,
    /// Retrieval key, when persistence succeeded
    pub key: Option<ResultKey>,
    /// Why persistence failed, when it did
    pub persistence_error: Option<ResultError>,
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        self.key.is_some()
    }
}

#[derive(Debug, Default)]
struct DisplayState {
    latest_result: Option<QuizResult>,
    latest_key: Option<ResultKey>,
}

/// Clears the in-flight flag when the submission ends, however it ends
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Submits, persists and retrieves quiz results
pub struct ResultController<G: ScoringGateway + 'static> {
    gateway: Arc<G>,
    behavior: BehaviorConfig,
    locale: String,
    device: Arc<dyn DeviceClassifier>,
    activity: Arc<dyn ActivityNotifier>,
    submitting: AtomicBool,
    state: Mutex<DisplayState>,
}

impl<G: ScoringGateway + 'static> ResultController<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            behavior: BehaviorConfig::default(),
            locale: ClientMetadata::default().locale,
            device: Arc::new(FixedDevice(DeviceClass::default())),
            activity: Arc::new(NoActivity),
            submitting: AtomicBool::new(false),
            state: Mutex::new(DisplayState::default()),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_device_classifier(mut self, device: Arc<dyn DeviceClassifier>) -> Self {
        self.device = device;
        self
    }

    pub fn with_activity(mut self, activity: Arc<dyn ActivityNotifier>) -> Self {
        self.activity = activity;
        self
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    /// Fetch the raw question set, bounded by the configured timeout.
    pub async fn fetch_questions(&self) -> Result<serde_json::Value, GatewayError> {
        bounded_call(
            RequestKind::LoadQuestions,
            self.behavior.timeout,
            self.activity.as_ref(),
            self.gateway.fetch_questions(),
        )
        .await
    }

    /// Score the answers, then try to save the result.
    ///
    /// Only a scoring failure is an error. A failed save is reported in
    /// [`SubmitOutcome::persistence_error`] and the result is still returned.
    pub async fn submit(&self, answers: &AnswerMap) -> Result<SubmitOutcome, ResultError> {
        let Some(_in_flight) = InFlight::acquire(&self.submitting) else {
            warn!("Submission rejected: another one is in flight");
            return Err(ResultError::AlreadySubmitting);
        };

        info!("Submitting {} answers", answers.len());

        let scored = bounded_call(
            RequestKind::Submit,
            self.behavior.timeout,
            self.activity.as_ref(),
            self.gateway.submit(answers),
        )
        .await
        .map_err(|e| {
            warn!("Scoring failed: {}", e);
            ResultError::Submission(e.to_string())
        })?;

        let result = QuizResult::new(answers.clone(), scored.axes, scored.profile);
        debug!(
            axes = result.axes.len(),
            profile = result.profile.display_label(),
            "Answers scored"
        );

        let (key, persistence_error) = match self.persist(&result).await {
            Ok(key) => (Some(key), None),
            Err(e) => (None, Some(e)),
        };

        let mut state = self.lock_state();
        state.latest_result = Some(result.clone());
        state.latest_key = key.clone();
        drop(state);

        Ok(SubmitOutcome {
            result,
            key,
            persistence_error,
        })
    }

    /// Save a scored result and return its retrieval key.
    pub async fn persist(&self, result: &QuizResult) -> Result<ResultKey, ResultError> {
        let metadata = ClientMetadata::new(self.locale.clone(), self.device.classify());
        let request = SaveRequest::new(result, &metadata, self.behavior.client_version.clone());

        let key = bounded_call(
            RequestKind::Save,
            self.behavior.timeout,
            self.activity.as_ref(),
            self.gateway.save_result(&request),
        )
        .await
        .map_err(|e| {
            warn!("Saving result failed: {}", e);
            ResultError::Persistence(e.to_string())
        })?;

        info!("Result saved as {}", key);
        Ok(key)
    }

    /// Look up a stored result by its user-entered key.
    ///
    /// The key is validated before any network call.
    pub async fn retrieve(&self, raw_key: &str) -> Result<StoredResult, ResultError> {
        let key = ResultKey::parse(raw_key).map_err(|e| {
            debug!("Rejected key {:?}", raw_key);
            ResultError::InvalidKeyFormat(e.to_string())
        })?;

        let stored = bounded_call(
            RequestKind::Retrieve,
            self.behavior.timeout,
            self.activity.as_ref(),
            self.gateway.fetch_result(&key),
        )
        .await
        .map_err(|e| match e {
            GatewayError::NotFound => ResultError::NotFound(key.clone()),
            other => ResultError::RetrievalFailed {
                key: key.clone(),
                reason: other.to_string(),
            },
        })?;

        info!("Retrieved result {}", stored.key);
        let mut state = self.lock_state();
        state.latest_result = Some(stored.result.clone());
        state.latest_key = Some(stored.key.clone());
        drop(state);

        Ok(stored)
    }

    pub fn latest_result(&self) -> Option<QuizResult> {
        self.lock_state().latest_result.clone()
    }

    pub fn latest_result_key(&self) -> Option<ResultKey> {
        self.lock_state().latest_key.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Forget the displayed result and key.
    pub fn reset(&self) {
        *self.lock_state() = DisplayState::default();
    }

    fn lock_state(&self) -> MutexGuard<'_, DisplayState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
