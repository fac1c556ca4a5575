//! Likert answers

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// A response on the five-point Likert scale, -2 (strongly disagree) to
/// +2 (strongly agree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LikertValue(i8);

impl LikertValue {
    pub const MIN: i8 = -2;
    pub const MAX: i8 = 2;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as i8))
        } else {
            Err(DomainError::InvalidAnswer(value))
        }
    }

    pub fn value(&self) -> i8 {
        self.0
    }

    /// Short label used next to the radio-style choices
    pub fn label(&self) -> &'static str {
        match self.0 {
            -2 => "Strongly disagree",
            -1 => "Disagree",
            0 => "Neutral",
            1 => "Agree",
            _ => "Strongly agree",
        }
    }

    /// All values, from -2 to +2
    pub fn all() -> [LikertValue; 5] {
        [Self(-2), Self(-1), Self(0), Self(1), Self(2)]
    }
}

impl TryFrom<i64> for LikertValue {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        LikertValue::new(value)
    }
}

impl std::fmt::Display for LikertValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for LikertValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i8(self.0)
    }
}

impl<'de> Deserialize<'de> for LikertValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        LikertValue::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Question id -> Likert value
///
/// Ordered by question id so that submitted payloads are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, LikertValue>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an answer, returning the previous value.
    pub fn record(&mut self, question_id: impl Into<String>, value: LikertValue) -> Option<LikertValue> {
        self.0.insert(question_id.into(), value)
    }

    pub fn get(&self, question_id: &str) -> Option<LikertValue> {
        self.0.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Keep only answers whose question id satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|id, _| keep(id));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, LikertValue)> {
        self.0.iter().map(|(id, v)| (id.as_str(), *v))
    }

    /// True when at least two answers exist and all of them are identical.
    ///
    /// The scoring service cannot find a pattern in such answers and reports
    /// an inconclusive profile.
    pub fn is_uniform(&self) -> bool {
        let mut values = self.0.values();
        match values.next() {
            Some(first) => self.0.len() > 1 && values.all(|v| v == first),
            None => false,
        }
    }
}

impl FromIterator<(String, LikertValue)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (String, LikertValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
