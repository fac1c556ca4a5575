//! Question value object and question-set parsing

use crate::axis::catalog::OTHER_AXIS;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// A Likert statement belonging to one axis (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: String,
    axis: String,
    text: String,
}

impl Question {
    /// Create a question; a blank axis falls back to [`OTHER_AXIS`].
    pub fn new(id: impl Into<String>, axis: impl Into<String>, text: impl Into<String>) -> Self {
        let axis = axis.into();
        let axis = if axis.trim().is_empty() {
            OTHER_AXIS.to_string()
        } else {
            axis.trim().to_string()
        };
        Self {
            id: id.into(),
            axis,
            text: text.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn axis(&self) -> &str {
        &self.axis
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Build a question from one wire record.
    ///
    /// `axis_hint` is used when the record has no axis of its own (records
    /// nested under a `by_axis` key).
    fn from_record(record: &Value, axis_hint: Option<&str>) -> Result<Self, DomainError> {
        let obj = record.as_object().ok_or_else(|| {
            DomainError::MalformedQuestionSet(format!("expected a question object, got {}", record))
        })?;

        let id = match obj.get("id") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(DomainError::MalformedQuestionSet(
                    "question without a usable 'id'".to_string(),
                ));
            }
        };

        let text = obj
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                DomainError::MalformedQuestionSet(format!("question '{}' has no 'text'", id))
            })?;

        let axis = obj
            .get("axis")
            .and_then(Value::as_str)
            .or(axis_hint)
            .unwrap_or(OTHER_AXIS);

        Ok(Question::new(id, axis, text))
    }
}

/// A validated, non-empty question set with unique ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Validate an owned list of questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::MalformedQuestionSet(
                "the question set is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id()) {
                return Err(DomainError::MalformedQuestionSet(format!(
                    "duplicate question id '{}'",
                    q.id()
                )));
            }
        }

        Ok(Self { questions })
    }

    /// Parse any of the accepted wire shapes:
    ///
    /// - `{"questions": [...]}` (optionally alongside `by_axis`)
    /// - a bare array `[...]`
    /// - `{"by_axis": {"economic": [...], ...}}`
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let questions = match value {
            Value::Array(records) => Self::parse_records(records, None)?,
            Value::Object(obj) => {
                if let Some(list) = obj.get("questions") {
                    let records = list.as_array().ok_or_else(|| {
                        DomainError::MalformedQuestionSet(
                            "'questions' is not an array".to_string(),
                        )
                    })?;
                    Self::parse_records(records, None)?
                } else if let Some(Value::Object(by_axis)) = obj.get("by_axis") {
                    let mut questions = Vec::new();
                    for (axis, list) in by_axis {
                        let records = list.as_array().ok_or_else(|| {
                            DomainError::MalformedQuestionSet(format!(
                                "'by_axis.{}' is not an array",
                                axis
                            ))
                        })?;
                        questions.extend(Self::parse_records(records, Some(axis))?);
                    }
                    questions
                } else {
                    return Err(DomainError::MalformedQuestionSet(
                        "expected 'questions' or 'by_axis'".to_string(),
                    ));
                }
            }
            other => {
                return Err(DomainError::MalformedQuestionSet(format!(
                    "expected an array or object, got {}",
                    json_kind(other)
                )));
            }
        };

        Self::new(questions)
    }

    fn parse_records(records: &[Value], axis_hint: Option<&str>) -> Result<Vec<Question>, DomainError> {
        records
            .iter()
            .map(|r| Question::from_record(r, axis_hint))
            .collect()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.questions.iter().any(|q| q.id() == id)
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
