use crate::{DemoError, Platform, USED_API};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const DEFAULT_GREETING: &str = "Hello OS";
pub const DEFAULT_CUSTOM_TITLE: &str = "New title";

const NO_PLATFORM: &str = "none";

/// Settings shared by the demo programs.
///
/// Every field is optional in TOML; missing ones fall back to
/// [`DemoConfig::default`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    #[serde(
        serialize_with = "serialize_selection",
        deserialize_with = "deserialize_selection"
    )]
    pub platform: Option<Platform>,
    pub greeting: String,
    pub custom_title: String,
}

impl DemoConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, DemoError> {
        toml::from_str(source).map_err(|e| DemoError::config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, DemoError> {
        toml::to_string(self).map_err(|e| DemoError::config(e.to_string()))
    }

    pub fn with_platform(mut self, platform: Option<Platform>) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_greeting<S: Into<String>>(mut self, greeting: S) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn with_custom_title<S: Into<String>>(mut self, title: S) -> Self {
        self.custom_title = title.into();
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            platform: USED_API,
            greeting: DEFAULT_GREETING.to_string(),
            custom_title: DEFAULT_CUSTOM_TITLE.to_string(),
        }
    }
}

fn serialize_selection<S: Serializer>(
    selection: &Option<Platform>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match selection {
        Some(platform) => platform.serialize(serializer),
        None => serializer.serialize_str(NO_PLATFORM),
    }
}

fn deserialize_selection<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Platform>, D::Error> {
    let value = String::deserialize(deserializer)?;
    if value.trim().eq_ignore_ascii_case(NO_PLATFORM) {
        return Ok(None);
    }
    Platform::try_from(value.as_str())
        .map(Some)
        .map_err(serde::de::Error::custom)
}
