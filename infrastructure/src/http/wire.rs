//! Wire types for the scoring service's JSON API
//!
//! The service has grown a few response shapes over time; these types accept
//! all of them and convert into domain values.

use super::error::{HttpError, Result};
use chrono::NaiveDateTime;
use compass_application::ScoreResponse;
use compass_domain::{AnswerMap, AxisScoreSet, Profile, QuizResult, ResultKey, StoredResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Body of `POST /api/submit`
#[derive(Debug, Serialize)]
pub(crate) struct SubmitBody<'a> {
    pub answers: &'a AnswerMap,
}

/// Response of `POST /api/submit`
#[derive(Debug, Deserialize)]
pub(crate) struct ScoreBody {
    #[serde(default)]
    axes: AxisScoreSet,
    #[serde(default)]
    profile: Option<Profile>,
}

impl From<ScoreBody> for ScoreResponse {
    fn from(body: ScoreBody) -> Self {
        ScoreResponse {
            axes: body.axes,
            profile: body.profile.unwrap_or_default(),
        }
    }
}

/// Response of `POST /api/save_result`
#[derive(Debug, Deserialize)]
pub(crate) struct SaveBody {
    #[serde(alias = "id")]
    result_id: String,
}

impl SaveBody {
    pub fn into_key(self) -> Result<ResultKey> {
        ResultKey::parse(&self.result_id).map_err(|_| {
            HttpError::UnexpectedResponse(format!(
                "service issued a malformed key: {:?}",
                self.result_id
            ))
        })
    }
}

/// Response of `GET /api/result/{id}`
///
/// Either the scored shape (`answers`, `axes`, `profile`) or the stored-record
/// shape (`id`, `timestamp`, `version`, `answers`, `scores`, `profile_key`,
/// `profile_label`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StoredBody {
    id: Option<String>,
    timestamp: Option<String>,
    version: Option<String>,
    answers: AnswerMap,
    axes: Option<AxisScoreSet>,
    scores: Option<AxisScoreSet>,
    profile: Option<Profile>,
    profile_key: Option<String>,
    profile_label: Option<String>,
    error: Option<Value>,
}

/// A stored result carries at least one of these
const RESULT_FIELDS: [&str; 5] = ["answers", "axes", "scores", "profile", "profile_key"];

impl StoredBody {
    /// Parse a raw body, treating `null` and `{error}` as a missing result.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).map_err(|e| HttpError::ParseError {
            error: e.to_string(),
            raw: raw.to_string(),
        })?;
        if value.is_null() {
            return Err(HttpError::NotFound);
        }
        if let Some(object) = value.as_object()
            && !object.contains_key("error")
            && !RESULT_FIELDS.iter().any(|field| object.contains_key(*field))
        {
            return Err(HttpError::UnexpectedResponse(format!(
                "stored result has none of {}",
                RESULT_FIELDS.join(", ")
            )));
        }
        let body: StoredBody =
            serde_json::from_value(value).map_err(|e| HttpError::ParseError {
                error: e.to_string(),
                raw: raw.to_string(),
            })?;
        if body.error.is_some() {
            return Err(HttpError::NotFound);
        }
        Ok(body)
    }

    /// Build the stored result; `requested` is used when the body has no id.
    pub fn into_stored(self, requested: &ResultKey) -> StoredResult {
        let key = self
            .id
            .as_deref()
            .and_then(|id| ResultKey::parse(id).ok())
            .unwrap_or_else(|| requested.clone());

        let profile = match self.profile {
            Some(profile) => profile,
            None => Profile::from_key_label(self.profile_key, self.profile_label),
        };

        let saved_at = self.timestamp.as_deref().and_then(|ts| {
            ts.parse::<NaiveDateTime>()
                .inspect_err(|e| debug!("Ignoring unparseable timestamp {:?}: {}", ts, e))
                .ok()
        });

        StoredResult {
            key,
            result: QuizResult::new(
                self.answers,
                self.axes.or(self.scores).unwrap_or_default(),
                profile,
            ),
            saved_at,
            version: self.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key() -> ResultKey {
        ResultKey::parse("IDEO-AB12-CD34").unwrap()
    }

    #[test]
    fn test_score_body_without_profile() {
        let body: ScoreBody = serde_json::from_value(json!({"axes": {"economic": 4.5}})).unwrap();
        let response = ScoreResponse::from(body);
        assert_eq!(response.axes.get("economic"), Some(4.5));
        assert_eq!(response.profile.display_label(), "Unclassified profile");
    }

    #[test]
    fn test_save_body_rejects_malformed_key() {
        let body: SaveBody = serde_json::from_value(json!({"result_id": "12345"})).unwrap();
        assert!(matches!(
            body.into_key(),
            Err(HttpError::UnexpectedResponse(_))
        ));

        let body: SaveBody = serde_json::from_value(json!({"result_id": "ideo-ab12-cd34"})).unwrap();
        assert_eq!(body.into_key().unwrap(), key());
    }

    #[test]
    fn test_stored_record_shape() {
        let raw = json!({
            "id": "IDEO-AB12-CD34",
            "timestamp": "2025-03-01T12:30:00.123456",
            "version": "v1",
            "answers": {"q1": 2, "q2": -1},
            "scores": {"economic": 10, "social": -2},
            "profile_key": "liberal_classico_mercado",
            "profile_label": "Classical liberal",
            "user_locale": "pt-BR",
            "device_type": "desktop"
        })
        .to_string();

        let stored = StoredBody::parse(&raw).unwrap().into_stored(&key());
        assert_eq!(stored.result.answers.len(), 2);
        assert_eq!(stored.result.axes.get("social"), Some(-2.0));
        assert_eq!(stored.result.profile.display_label(), "Classical liberal");
        assert_eq!(stored.version.as_deref(), Some("v1"));
        assert!(stored.saved_at.is_some());
    }

    #[test]
    fn test_scored_shape_uses_requested_key() {
        let raw = json!({
            "answers": {"q1": 1},
            "axes": {"economic": 1.5},
            "profile": {"key": "centro", "label": "Center"}
        })
        .to_string();

        let stored = StoredBody::parse(&raw).unwrap().into_stored(&key());
        assert_eq!(stored.key, key());
        assert_eq!(stored.result.profile.key.as_deref(), Some("centro"));
        assert!(stored.saved_at.is_none());
    }

    #[test]
    fn test_null_and_error_bodies_are_not_found() {
        assert!(matches!(StoredBody::parse("null"), Err(HttpError::NotFound)));
        assert!(matches!(
            StoredBody::parse(r#"{"error": "not found"}"#),
            Err(HttpError::NotFound)
        ));
    }

    #[test]
    fn test_body_without_result_fields_is_rejected() {
        assert!(matches!(
            StoredBody::parse("{}"),
            Err(HttpError::UnexpectedResponse(_))
        ));
        assert!(matches!(
            StoredBody::parse(r#"{"status": "ok", "id": "IDEO-AB12-CD34"}"#),
            Err(HttpError::UnexpectedResponse(_))
        ));
        assert!(StoredBody::parse(r#"{"profile_key": "centro"}"#).is_ok());
    }

    #[test]
    fn test_html_body_is_parse_error() {
        assert!(matches!(
            StoredBody::parse("<html>oops</html>"),
            Err(HttpError::ParseError { .. })
        ));
    }
}
