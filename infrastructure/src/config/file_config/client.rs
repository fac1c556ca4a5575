//! Client identity configuration from TOML (`[client]` section)

use super::{ConfigIssue, ConfigIssueCode, Severity};
use compass_domain::DeviceClass;
use serde::{Deserialize, Serialize};

/// Locale used when neither the config nor `LANG` provide one
pub const FALLBACK_LOCALE: &str = "pt-BR";

/// Raw client configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Locale reported with saved results (e.g. "pt-BR")
    pub locale: Option<String>,
    /// Device class override ("mobile" or "desktop"); detected when unset
    pub device: Option<String>,
}

impl FileClientConfig {
    /// Parse the device override.
    ///
    /// An unknown value yields a warning and `None` (fall back to detection).
    pub fn parse_device(&self) -> (Option<DeviceClass>, Option<ConfigIssue>) {
        let Some(raw) = self.device.as_deref() else {
            return (None, None);
        };
        match raw.parse::<DeviceClass>() {
            Ok(device) => (Some(device), None),
            Err(_) => (
                None,
                Some(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "client.device".to_string(),
                        value: raw.to_string(),
                        valid_values: vec!["mobile".to_string(), "desktop".to_string()],
                    },
                    message: format!(
                        "client.device: unknown value '{}', detecting from the terminal instead",
                        raw
                    ),
                }),
            ),
        }
    }

    /// Locale to report: config, then `LANG`, then [`FALLBACK_LOCALE`].
    pub fn resolve_locale(&self) -> String {
        self.locale
            .clone()
            .filter(|l| !l.trim().is_empty())
            .or_else(|| detect_locale(std::env::var("LANG").ok().as_deref()))
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
    }
}

/// Turn a POSIX locale (`pt_BR.UTF-8`) into a language tag (`pt-BR`).
///
/// Returns `None` for the `C`/`POSIX` locales and empty values.
pub fn detect_locale(lang: Option<&str>) -> Option<String> {
    let lang = lang?.trim();
    let base = lang.split(['.', '@']).next().unwrap_or_default();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_locale() {
        assert_eq!(detect_locale(Some("pt_BR.UTF-8")), Some("pt-BR".to_string()));
        assert_eq!(detect_locale(Some("en_US")), Some("en-US".to_string()));
        assert_eq!(detect_locale(Some("de_DE@euro")), Some("de-DE".to_string()));
        assert_eq!(detect_locale(Some("C.UTF-8")), None);
        assert_eq!(detect_locale(Some("POSIX")), None);
        assert_eq!(detect_locale(Some("")), None);
        assert_eq!(detect_locale(None), None);
    }

    #[test]
    fn test_configured_locale_wins() {
        let config = FileClientConfig {
            locale: Some("es-AR".to_string()),
            device: None,
        };
        assert_eq!(config.resolve_locale(), "es-AR");
    }

    #[test]
    fn test_parse_device() {
        let config = FileClientConfig {
            locale: None,
            device: Some("mobile".to_string()),
        };
        assert_eq!(config.parse_device(), (Some(DeviceClass::Mobile), None));

        let config = FileClientConfig {
            locale: None,
            device: Some("tablet".to_string()),
        };
        let (device, issue) = config.parse_device();
        assert!(device.is_none());
        assert_eq!(issue.unwrap().severity, Severity::Warning);
    }
}
