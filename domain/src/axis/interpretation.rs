//! Score interpretation: turns a numeric axis score into display text.
//!
//! Scores are centered at 0 and conventionally bounded to roughly ±20.
//! Magnitude picks a [`Band`]; the sign picks the pole of the axis.

use super::catalog::Axis;

/// Shown when the score is missing or not a finite number.
pub const INSUFFICIENT_DATA: &str =
    "Not enough answers on this axis to give an interpretation.";

/// Shown for axes outside the five known ones.
pub const OUTSIDE_CORE_SET: &str =
    "This axis is outside the core set; no interpretation is available.";

/// Lower bound (inclusive) of the strong band.
pub const STRONG_THRESHOLD: f64 = 7.0;

/// Lower bound (inclusive) of the moderate band.
pub const MODERATE_THRESHOLD: f64 = 3.0;

/// Raw score magnitude mapped to the edge of the normalized scale
/// (8 questions per axis, answers from -2 to +2).
pub const RAW_SCORE_LIMIT: f64 = 16.0;

/// Half-width of the normalized scale.
pub const NORMALIZED_LIMIT: f64 = 10.0;

/// Interpretation band of a score's magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Strong,
    Moderate,
    Neutral,
}

impl Band {
    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Strong => "strong",
            Band::Moderate => "moderate",
            Band::Neutral => "neutral",
        }
    }
}

/// Interpretation texts for one axis.
struct AxisTexts {
    strong_negative: &'static str,
    strong_positive: &'static str,
    moderate_negative: &'static str,
    moderate_positive: &'static str,
    neutral: &'static str,
}

fn texts_for(axis: Axis) -> AxisTexts {
    match axis {
        Axis::Economic => AxisTexts {
            strong_negative: "You strongly favour an active State that directs the economy, provides public services and curbs market power.",
            strong_positive: "You strongly favour free markets, private initiative and a small economic footprint for the State.",
            moderate_negative: "You lean toward State regulation and redistribution, while accepting a role for markets.",
            moderate_positive: "You lean toward market solutions, while accepting some regulation and public services.",
            neutral: "You balance State and market, judging economic questions case by case.",
        },
        Axis::Social => AxisTexts {
            strong_negative: "You place individual liberties and personal autonomy well above social control.",
            strong_positive: "You place authority, order and shared moral standards well above individual latitude.",
            moderate_negative: "You lean toward civil liberties, with some room for public order.",
            moderate_positive: "You lean toward order and stability, with some room for personal freedom.",
            neutral: "You weigh order and individual liberty roughly equally.",
        },
        Axis::Community => AxisTexts {
            strong_negative: "You identify strongly with a global, cosmopolitan outlook over national belonging.",
            strong_positive: "You identify strongly with your nation and community, prioritising shared belonging.",
            moderate_negative: "You lean cosmopolitan, open to global integration and exchange.",
            moderate_positive: "You lean communitarian, valuing local and national ties.",
            neutral: "You hold national belonging and global openness in balance.",
        },
        Axis::Method => AxisTexts {
            strong_negative: "You favour ambitious planning and deliberate social engineering to transform society.",
            strong_positive: "You favour cautious, incremental reform that preserves what already works.",
            moderate_negative: "You lean toward planned, coordinated change driven by design.",
            moderate_positive: "You lean toward gradual change tested by experience.",
            neutral: "You mix planning and gradualism depending on the problem.",
        },
        Axis::Pragmatism => AxisTexts {
            strong_negative: "You hold firmly to principles and ideals, even when compromise would be easier.",
            strong_positive: "You judge policies almost entirely by their practical results.",
            moderate_negative: "You lean toward principled positions over expedient ones.",
            moderate_positive: "You lean toward pragmatic, results-oriented choices.",
            neutral: "You balance principles and practical outcomes.",
        },
    }
}

/// Pure interpretation functions for axis scores.
pub struct ScoreInterpreter;

impl ScoreInterpreter {
    /// Classify a score's magnitude; `None` for non-finite scores.
    pub fn band_of(score: f64) -> Option<Band> {
        if !score.is_finite() {
            return None;
        }
        let magnitude = score.abs();
        Some(if magnitude >= STRONG_THRESHOLD {
            Band::Strong
        } else if magnitude >= MODERATE_THRESHOLD {
            Band::Moderate
        } else {
            Band::Neutral
        })
    }

    /// Narrative interpretation of `score` on `axis`.
    pub fn interpret(axis: &str, score: f64) -> &'static str {
        let Some(band) = Self::band_of(score) else {
            return INSUFFICIENT_DATA;
        };
        let Some(known) = Axis::from_id(axis) else {
            return OUTSIDE_CORE_SET;
        };

        let texts = texts_for(known);
        let negative = score < 0.0;
        match (band, negative) {
            (Band::Strong, true) => texts.strong_negative,
            (Band::Strong, false) => texts.strong_positive,
            (Band::Moderate, true) => texts.moderate_negative,
            (Band::Moderate, false) => texts.moderate_positive,
            (Band::Neutral, _) => texts.neutral,
        }
    }

    /// Render a score for display: `+5`, `-3.2`, `0`, `--`.
    pub fn format_score(score: f64) -> String {
        if !score.is_finite() {
            return "--".to_string();
        }

        let rounded = score.round();
        if (score - rounded).abs() < 0.001 {
            let whole = rounded as i64;
            if whole > 0 {
                format!("+{}", whole)
            } else {
                format!("{}", whole)
            }
        } else if (score * 10.0).round() == 0.0 {
            // Would print as `0.0` or `-0.0`
            "0".to_string()
        } else if score > 0.0 {
            format!("+{:.1}", score)
        } else {
            format!("{:.1}", score)
        }
    }

    /// Map a raw score onto the -10..=10 scale used for chart placement.
    ///
    /// Scores beyond ±16 are clamped. Non-finite scores map to 0.
    pub fn normalize_score(score: f64) -> f64 {
        if !score.is_finite() {
            return 0.0;
        }
        let clamped = score.clamp(-RAW_SCORE_LIMIT, RAW_SCORE_LIMIT);
        clamped / RAW_SCORE_LIMIT * NORMALIZED_LIMIT
    }
}
