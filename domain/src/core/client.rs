//! Client metadata value objects

use serde::{Deserialize, Serialize};

/// Coarse device class reported alongside a saved result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Desktop => "desktop",
        }
    }
}

impl Default for DeviceClass {
    fn default() -> Self {
        Self::Desktop
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DeviceClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mobile" => Ok(DeviceClass::Mobile),
            "desktop" => Ok(DeviceClass::Desktop),
            other => Err(format!("unknown device class '{}'", other)),
        }
    }
}

/// Locale and device information attached to a save request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMetadata {
    pub locale: String,
    pub device: DeviceClass,
}

impl ClientMetadata {
    pub fn new(locale: impl Into<String>, device: DeviceClass) -> Self {
        Self {
            locale: locale.into(),
            device,
        }
    }
}

impl Default for ClientMetadata {
    fn default() -> Self {
        Self::new("pt-BR", DeviceClass::Desktop)
    }
}
