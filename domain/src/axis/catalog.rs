//! Axis catalog: the static registry of known axes.
//!
//! Axis identifiers travel as plain strings between the scoring service and
//! the client. Known identifiers map onto [`Axis`]; anything else degrades
//! gracefully to its raw identifier.

use serde::{Deserialize, Serialize};

/// Axis identifier used when a question carries no axis.
pub const OTHER_AXIS: &str = "other";

/// The five axes of the quiz space (Value Object)
///
/// Sign convention (shared with the scoring service): a negative score leans
/// toward the first pole, a positive score toward the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// State (-) vs Market (+)
    Economic,
    /// Individual liberties (-) vs Authority and order (+)
    Social,
    /// Cosmopolitan (-) vs National/communitarian (+)
    Community,
    /// Planning (-) vs Incrementalism (+)
    Method,
    /// Idealism (-) vs Pragmatism (+)
    Pragmatism,
}

const CANONICAL_ORDER: [Axis; 5] = [
    Axis::Economic,
    Axis::Social,
    Axis::Community,
    Axis::Method,
    Axis::Pragmatism,
];

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Economic => "economic",
            Axis::Social => "social",
            Axis::Community => "community",
            Axis::Method => "method",
            Axis::Pragmatism => "pragmatism",
        }
    }

    /// Look up a known axis by identifier (exact, lowercase match).
    pub fn from_id(id: &str) -> Option<Axis> {
        CANONICAL_ORDER.iter().copied().find(|a| a.as_str() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::Economic => "Economy",
            Axis::Social => "Social order",
            Axis::Community => "Community",
            Axis::Method => "Method of change",
            Axis::Pragmatism => "Pragmatism",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Axis::Economic => {
                "How much of economic life should be steered by the State versus left to markets."
            }
            Axis::Social => {
                "Whether social life should prioritise authority and order or individual liberties."
            }
            Axis::Community => {
                "Attachment to national and community belonging versus a cosmopolitan, global outlook."
            }
            Axis::Method => {
                "Whether society should be changed through deliberate planning or gradual, tested reform."
            }
            Axis::Pragmatism => {
                "Whether political choices should follow fixed principles or be judged by their results."
            }
        }
    }

    /// Pole names as `(negative, positive)`.
    pub fn poles(&self) -> (&'static str, &'static str) {
        match self {
            Axis::Economic => ("State", "Market"),
            Axis::Social => ("Liberties", "Authority"),
            Axis::Community => ("Cosmopolitan", "National"),
            Axis::Method => ("Planning", "Incremental"),
            Axis::Pragmatism => ("Idealism", "Pragmatism"),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stateless lookups over raw axis identifiers.
pub struct AxisCatalog;

impl AxisCatalog {
    /// Display label; the raw identifier when the axis is unknown.
    pub fn label_of(axis: &str) -> String {
        match Axis::from_id(axis) {
            Some(known) => known.label().to_string(),
            None => axis.to_string(),
        }
    }

    /// Descriptive text; a generic sentence when the axis is unknown.
    pub fn description_of(axis: &str) -> String {
        match Axis::from_id(axis) {
            Some(known) => known.description().to_string(),
            None => format!("Additional axis \"{}\" reported by the scoring service.", axis),
        }
    }

    pub fn poles_of(axis: &str) -> Option<(&'static str, &'static str)> {
        Axis::from_id(axis).map(|a| a.poles())
    }

    pub fn canonical_order() -> &'static [Axis] {
        &CANONICAL_ORDER
    }

    /// Position in the canonical order, `None` for unrecognized axes.
    pub fn canonical_rank(axis: &str) -> Option<usize> {
        CANONICAL_ORDER.iter().position(|a| a.as_str() == axis)
    }

    pub fn is_known(axis: &str) -> bool {
        Axis::from_id(axis).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let ids: Vec<_> = AxisCatalog::canonical_order()
            .iter()
            .map(|a| a.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["economic", "social", "community", "method", "pragmatism"]
        );
    }

    #[test]
    fn test_label_fallback_to_raw_identifier() {
        assert_eq!(AxisCatalog::label_of("economic"), "Economy");
        assert_eq!(AxisCatalog::label_of("ecology"), "ecology");
    }

    #[test]
    fn test_description_fallback_is_templated() {
        let text = AxisCatalog::description_of("ecology");
        assert!(text.contains("\"ecology\""));
        assert_ne!(
            AxisCatalog::description_of("social"),
            AxisCatalog::description_of("community")
        );
    }

    #[test]
    fn test_from_id_is_case_sensitive() {
        assert_eq!(Axis::from_id("method"), Some(Axis::Method));
        assert_eq!(Axis::from_id("Method"), None);
    }

    #[test]
    fn test_canonical_rank() {
        assert_eq!(AxisCatalog::canonical_rank("economic"), Some(0));
        assert_eq!(AxisCatalog::canonical_rank("pragmatism"), Some(4));
        assert_eq!(AxisCatalog::canonical_rank(OTHER_AXIS), None);
    }

    #[test]
    fn test_poles() {
        assert_eq!(AxisCatalog::poles_of("economic"), Some(("State", "Market")));
        assert_eq!(AxisCatalog::poles_of("other"), None);
    }
}
