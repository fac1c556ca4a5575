//! Result entities: scores, scored results and persisted results

use super::key::ResultKey;
use super::profile::Profile;
use crate::axis::catalog::AxisCatalog;
use crate::axis::interpretation::ScoreInterpreter;
use crate::core::client::ClientMetadata;
use crate::quiz::answer::AnswerMap;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Axis id -> score, as computed by the scoring service
///
/// `null` scores on the wire become NaN and are rendered as insufficient data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisScoreSet(BTreeMap<String, f64>);

impl AxisScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, axis: impl Into<String>, score: f64) {
        self.0.insert(axis.into(), score);
    }

    pub fn get(&self, axis: &str) -> Option<f64> {
        self.0.get(axis).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in display order: canonical axes first, the rest alphabetically.
    pub fn ordered(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.0.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by_key(|(axis, _)| {
            (
                AxisCatalog::canonical_rank(axis).unwrap_or(usize::MAX),
                axis.to_string(),
            )
        });
        entries
    }
}

impl FromIterator<(String, f64)> for AxisScoreSet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for AxisScoreSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // JSON has no NaN; non-finite scores travel as null.
        let wire: BTreeMap<&str, Option<f64>> = self
            .0
            .iter()
            .map(|(k, v)| (k.as_str(), v.is_finite().then_some(*v)))
            .collect();
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AxisScoreSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = BTreeMap::<String, Option<f64>>::deserialize(deserializer)?;
        Ok(wire
            .into_iter()
            .map(|(k, v)| (k, v.unwrap_or(f64::NAN)))
            .collect())
    }
}

/// One axis score enriched for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretedAxis {
    pub axis: String,
    pub label: String,
    pub score: f64,
    pub formatted: String,
    pub interpretation: &'static str,
    /// Score on the -10..=10 chart scale
    pub normalized: f64,
}

impl InterpretedAxis {
    pub fn new(axis: &str, score: f64) -> Self {
        Self {
            axis: axis.to_string(),
            label: AxisCatalog::label_of(axis),
            score,
            formatted: ScoreInterpreter::format_score(score),
            interpretation: ScoreInterpreter::interpret(axis, score),
            normalized: ScoreInterpreter::normalize_score(score),
        }
    }

    /// Interpret every score of a set, in display order.
    pub fn from_scores(scores: &AxisScoreSet) -> Vec<Self> {
        scores
            .ordered()
            .into_iter()
            .map(|(axis, score)| Self::new(axis, score))
            .collect()
    }
}

/// Answers plus what the scoring service made of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub answers: AnswerMap,
    pub axes: AxisScoreSet,
    pub profile: Profile,
}

impl QuizResult {
    pub fn new(answers: AnswerMap, axes: AxisScoreSet, profile: Profile) -> Self {
        Self {
            answers,
            axes,
            profile,
        }
    }

    pub fn interpreted_axes(&self) -> Vec<InterpretedAxis> {
        InterpretedAxis::from_scores(&self.axes)
    }
}

/// A result fetched back by key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredResult {
    pub key: ResultKey,
    pub result: QuizResult,
    /// When the service saved the result, if it reports it
    pub saved_at: Option<NaiveDateTime>,
    /// Quiz version the result was produced with, if reported
    pub version: Option<String>,
}

/// Payload of the save call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveRequest {
    pub answers: AnswerMap,
    pub scores: AxisScoreSet,
    pub profile_key: String,
    pub profile_label: String,
    pub locale: String,
    pub device: String,
    pub version: String,
}

impl SaveRequest {
    pub fn new(result: &QuizResult, metadata: &ClientMetadata, version: impl Into<String>) -> Self {
        Self {
            answers: result.answers.clone(),
            scores: result.axes.clone(),
            profile_key: result.profile.key.clone().unwrap_or_default(),
            profile_label: result.profile.display_label().to_string(),
            locale: metadata.locale.clone(),
            device: metadata.device.as_str().to_string(),
            version: version.into(),
        }
    }
}
