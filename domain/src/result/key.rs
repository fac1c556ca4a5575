//! Result key value object

use crate::core::error::DomainError;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::LazyLock;

static KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^IDEO-[A-Z0-9]{4}-[A-Z0-9]{4}$").expect("result key pattern is valid")
});

/// Identifier issued by the persistence service for a saved result
///
/// Always stored in normalized (uppercase) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultKey(String);

impl ResultKey {
    /// Trim, uppercase and validate user or service input.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized = input.trim().to_ascii_uppercase();
        if KEY_PATTERN.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(DomainError::InvalidKeyFormat(input.trim().to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResultKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ResultKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResultKey::parse(s)
    }
}

impl Serialize for ResultKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ResultKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ResultKey::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_input_is_normalized() {
        let key = ResultKey::parse("ideo-ab12-cd34").unwrap();
        assert_eq!(key.as_str(), "IDEO-AB12-CD34");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(ResultKey::parse("  IDEO-AB12-CD34\n").is_ok());
    }

    #[test]
    fn test_wrong_group_length() {
        assert!(matches!(
            ResultKey::parse("IDEO-AB1-CD34"),
            Err(DomainError::InvalidKeyFormat(_))
        ));
        assert!(ResultKey::parse("IDEO-AB123-CD34").is_err());
    }

    #[test]
    fn test_non_ascii_letters_are_not_expanded() {
        // `ß` uppercases to `SS`, which would pad a short group to four
        assert!(ResultKey::parse("ideo-ßab-cd34").is_err());
        assert!(ResultKey::parse("ideo-ab12-cdﬃ").is_err());
    }

    #[test]
    fn test_wrong_prefix() {
        assert!(ResultKey::parse("FOO-AB12-CD34").is_err());
        assert!(ResultKey::parse("AB12-CD34").is_err());
    }

    #[test]
    fn test_rejects_symbols_and_extra_groups() {
        assert!(ResultKey::parse("IDEO-AB!2-CD34").is_err());
        assert!(ResultKey::parse("IDEO-AB12-CD34-EF56").is_err());
        assert!(ResultKey::parse("").is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let key: ResultKey = serde_json::from_str("\"ideo-zz99-aa00\"").unwrap();
        assert_eq!(key.to_string(), "IDEO-ZZ99-AA00");
        assert!(serde_json::from_str::<ResultKey>("\"nope\"").is_err());
    }
}
