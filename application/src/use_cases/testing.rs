//! In-memory doubles shared by the use case tests.

use crate::ports::presentation::{ErrorKind, PresentationBridge};
use crate::ports::scoring_gateway::{GatewayError, ScoreResponse, ScoringGateway};
use async_trait::async_trait;
use compass_domain::{
    AnswerMap, AxisScoreSet, InterpretedAxis, Page, Profile, QuizResult, ResultKey, SaveRequest,
    StoredResult,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Scoring service double backed by a HashMap
pub(crate) struct FakeGateway {
    pub questions: Mutex<Value>,
    pub scored: Mutex<Option<ScoreResponse>>,
    pub issued_key: Mutex<String>,
    pub save_fails: AtomicBool,
    pub submit_delay: Mutex<Option<Duration>>,
    pub store: Mutex<HashMap<String, StoredResult>>,
    pub last_save: Mutex<Option<SaveRequest>>,
    pub calls: AtomicUsize,
}

impl FakeGateway {
    pub fn new() -> Self {
        let mut axes = AxisScoreSet::new();
        axes.insert("economic", 10.0);
        axes.insert("social", -2.0);
        Self {
            questions: Mutex::new(json!({
                "questions": [
                    {"id": "q1", "axis": "economic", "text": "Markets allocate resources best."},
                    {"id": "q2", "axis": "social", "text": "Order matters more than freedom."}
                ]
            })),
            scored: Mutex::new(Some(ScoreResponse {
                axes,
                profile: Profile::from_key_label(
                    Some("liberal_classico_mercado".to_string()),
                    Some("Classical liberal".to_string()),
                ),
            })),
            issued_key: Mutex::new("IDEO-AB12-CD34".to_string()),
            save_fails: AtomicBool::new(false),
            submit_delay: Mutex::new(None),
            store: Mutex::new(HashMap::new()),
            last_save: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_submit(self) -> Self {
        *self.scored.lock().unwrap() = None;
        self
    }

    pub fn failing_save(self) -> Self {
        self.save_fails.store(true, Ordering::SeqCst);
        self
    }

    pub fn with_submit_delay(self, delay: Duration) -> Self {
        *self.submit_delay.lock().unwrap() = Some(delay);
        self
    }

    pub fn with_questions(self, questions: Value) -> Self {
        *self.questions.lock().unwrap() = questions;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoringGateway for FakeGateway {
    async fn fetch_questions(&self) -> Result<Value, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn submit(&self, _answers: &AnswerMap) -> Result<ScoreResponse, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.submit_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.scored
            .lock()
            .unwrap()
            .clone()
            .ok_or(GatewayError::HttpStatus {
                status: 500,
                message: "scoring unavailable".to_string(),
            })
    }

    async fn save_result(&self, request: &SaveRequest) -> Result<ResultKey, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_save.lock().unwrap() = Some(request.clone());
        if self.save_fails.load(Ordering::SeqCst) {
            return Err(GatewayError::ConnectionError("connection refused".to_string()));
        }
        let key = ResultKey::parse(&self.issued_key.lock().unwrap())
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        let profile = self
            .scored
            .lock()
            .unwrap()
            .as_ref()
            .map(|s| s.profile.clone())
            .unwrap_or_default();
        let stored = StoredResult {
            key: key.clone(),
            result: QuizResult::new(request.answers.clone(), request.scores.clone(), profile),
            saved_at: None,
            version: Some(request.version.clone()),
        };
        self.store
            .lock()
            .unwrap()
            .insert(key.as_str().to_string(), stored);
        Ok(key)
    }

    async fn fetch_result(&self, key: &ResultKey) -> Result<StoredResult, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.store
            .lock()
            .unwrap()
            .get(key.as_str())
            .cloned()
            .ok_or(GatewayError::NotFound)
    }
}

/// One recorded bridge call
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Rendered {
    Page { axis: String, answered: usize },
    Progress { index: usize, count: usize },
    Result { axes: Vec<String>, profile: String },
    Key(Option<String>),
    Error(ErrorKind),
    Cleared,
}

/// Bridge that records every call
#[derive(Default)]
pub(crate) struct RecordingBridge {
    pub calls: Mutex<Vec<Rendered>>,
}

impl RecordingBridge {
    pub fn take(&self) -> Vec<Rendered> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    fn push(&self, call: Rendered) {
        self.calls.lock().unwrap().push(call);
    }
}

impl PresentationBridge for RecordingBridge {
    fn render_question_page(&self, page: &Page, answers: &AnswerMap) {
        let answered = page
            .questions
            .iter()
            .filter(|q| answers.contains(q.id()))
            .count();
        self.push(Rendered::Page {
            axis: page.axis.clone(),
            answered,
        });
    }

    fn render_progress(&self, page_index: usize, page_count: usize) {
        self.push(Rendered::Progress {
            index: page_index,
            count: page_count,
        });
    }

    fn render_result(&self, axes: &[InterpretedAxis], profile: &Profile) {
        self.push(Rendered::Result {
            axes: axes.iter().map(|a| a.axis.clone()).collect(),
            profile: profile.display_label().to_string(),
        });
    }

    fn render_result_key(&self, key: Option<&ResultKey>) {
        self.push(Rendered::Key(key.map(|k| k.to_string())));
    }

    fn render_error(&self, kind: ErrorKind, _message: &str) {
        self.push(Rendered::Error(kind));
    }

    fn clear_result(&self) {
        self.push(Rendered::Cleared);
    }
}
