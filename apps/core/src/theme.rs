use serde::{Deserialize, Serialize};

/// Key the preference is stored under.
pub const STORAGE_KEY: &str = "colorScheme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum ColorScheme {
    #[default]
    #[serde(rename = "light dark")]
    Automatic,
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
}

impl ColorScheme {
    pub const ALL: [Self; 3] = [Self::Automatic, Self::Light, Self::Dark];

    /// Value of the CSS `color-scheme` property.
    pub const fn css_value(self) -> &'static str {
        match self {
            Self::Automatic => "light dark",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_css_value(value: &str) -> Option<Self> {
        match value.trim() {
            "light dark" => Some(Self::Automatic),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Automatic => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::Automatic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_values_round_trip() {
        for scheme in ColorScheme::ALL {
            assert_eq!(ColorScheme::from_css_value(scheme.css_value()), Some(scheme));
        }
        assert_eq!(ColorScheme::from_css_value("sepia"), None);
    }

    #[test]
    fn test_cycle_visits_every_scheme() {
        let scheme = ColorScheme::Automatic;
        assert_eq!(scheme.next(), ColorScheme::Light);
        assert_eq!(scheme.next().next().next(), scheme);
    }

    #[test]
    fn test_serialized_as_css_value() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&ColorScheme::Dark)?, r#""dark""#);
        let parsed: ColorScheme = serde_json::from_str(r#""light dark""#)?;
        assert_eq!(parsed, ColorScheme::Automatic);
        Ok(())
    }
}
