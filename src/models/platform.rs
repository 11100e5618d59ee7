use crate::DemoError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Widget family a factory or builder produces for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Platform {
    Windows,
    MacOS,
}

/// Platform chosen at compile time through the `platform-*` cargo features.
///
/// Windows takes precedence when both features are enabled; with neither
/// enabled no platform is selected.
pub const USED_API: Option<Platform> = if cfg!(feature = "platform-windows") {
    Some(Platform::Windows)
} else if cfg!(feature = "platform-macos") {
    Some(Platform::MacOS)
} else {
    None
};

impl Platform {
    pub fn all() -> [Platform; 2] {
        [Self::Windows, Self::MacOS]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOS => "MacOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Platform {
    type Error = DemoError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "windows" | "win" => Ok(Self::Windows),
            "macos" | "mac" | "osx" => Ok(Self::MacOS),
            _ => Err(DemoError::validation(format!(
                "Invalid platform: '{}'. Use 'windows' or 'macos'",
                value
            ))),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = DemoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Platform::try_from("Windows").unwrap(), Platform::Windows);
        assert_eq!(Platform::try_from("win").unwrap(), Platform::Windows);
        assert_eq!(Platform::try_from("MACOS").unwrap(), Platform::MacOS);
        assert_eq!(Platform::try_from("osx").unwrap(), Platform::MacOS);
    }

    #[test]
    fn test_parse_unknown_platform() {
        let result = Platform::try_from("linux");
        assert!(matches!(result, Err(DemoError::ValidationError(_))));
    }

    #[test]
    fn test_display_matches_name() {
        for platform in Platform::all() {
            assert_eq!(platform.to_string(), platform.name());
        }
    }

    #[test]
    fn test_default_feature_selects_windows() {
        if cfg!(feature = "platform-windows") {
            assert_eq!(USED_API, Some(Platform::Windows));
        }
    }
}
