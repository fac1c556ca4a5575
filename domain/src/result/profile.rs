//! Profile value object
//!
//! Everything here is supplied by the scoring service; the client only
//! reads it for display. All fields are optional on the wire.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Profile key the scoring service uses for inconclusive results
pub const INCONCLUSIVE_KEY: &str = "inconclusivo";

/// Long description, either plain text or pre-split per axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LongDescription {
    Text(String),
    PerAxis(BTreeMap<String, String>),
}

/// An author, public figure or practical example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Name(String),
    Detailed {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl Reference {
    pub fn name(&self) -> &str {
        match self {
            Reference::Name(name) => name,
            Reference::Detailed { name, .. } => name,
        }
    }

    /// `name` or `name: description`
    pub fn display(&self) -> String {
        match self {
            Reference::Name(name) => name.clone(),
            Reference::Detailed {
                name,
                description: Some(description),
            } if !description.is_empty() => format!("{}: {}", name, description),
            Reference::Detailed { name, .. } => name.clone(),
        }
    }
}

/// The profile matched to a set of axis scores
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_short: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_long: Option<LongDescription>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub axis_tendencies: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors_classic: Vec<Reference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub figures_modern_international: Vec<Reference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub figures_modern_national: Vec<Reference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples_practical: Vec<Reference>,
}

impl Profile {
    /// Minimal profile known only by key and label (stored-record shape).
    pub fn from_key_label(key: Option<String>, label: Option<String>) -> Self {
        Self {
            key,
            label,
            ..Self::default()
        }
    }

    /// Label, falling back to the raw key, then to a fixed placeholder.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .or(self.key.as_deref())
            .unwrap_or("Unclassified profile")
    }

    pub fn is_inconclusive(&self) -> bool {
        self.key.as_deref() == Some(INCONCLUSIVE_KEY)
    }

    /// Long description for one axis, when the service pre-split it.
    pub fn description_for_axis(&self, axis: &str) -> Option<&str> {
        match &self.description_long {
            Some(LongDescription::PerAxis(parts)) => parts.get(axis).map(String::as_str),
            _ => None,
        }
    }

    /// Reference groups with their headings, skipping empty groups.
    pub fn reference_groups(&self) -> Vec<(&'static str, &[Reference])> {
        [
            ("Classic authors", self.authors_classic.as_slice()),
            (
                "Contemporary figures (international)",
                self.figures_modern_international.as_slice(),
            ),
            (
                "Contemporary figures (national)",
                self.figures_modern_national.as_slice(),
            ),
            ("In practice", self.examples_practical.as_slice()),
        ]
        .into_iter()
        .filter(|(_, refs)| !refs.is_empty())
        .collect()
    }
}
