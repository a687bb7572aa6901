// Settings module
// User-facing configuration for the picker and the demo host

use serde::{Deserialize, Serialize};

/// Date format preferences understood by the range formatter.
pub const DATE_FORMATS: [&str; 3] = ["DD/MM/YYYY", "MM/DD/YYYY", "YYYY-MM-DD"];

/// Theme names with built-in palettes.
pub const THEMES: [&str; 2] = ["light", "dark"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Trigger text shown while no bound is committed
    pub placeholder: String,
    pub date_format: String,
    /// Text placed between the two bounds
    pub separator: String,
    /// Keep the displayed months when the popover is reopened
    pub remember_view: bool,
    pub theme: String,
    /// Raw initial bounds handed to the demo host; parsed leniently
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_end: Option<String>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            placeholder: "Select date range".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
            separator: " - ".to_string(),
            remember_view: true,
            theme: "light".to_string(),
            initial_start: None,
            initial_end: None,
        }
    }
}

impl PickerSettings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if !DATE_FORMATS.contains(&self.date_format.as_str()) {
            return Err(format!(
                "Unknown date format '{}' (expected one of {})",
                self.date_format,
                DATE_FORMATS.join(", ")
            ));
        }

        if !THEMES.contains(&self.theme.as_str()) {
            return Err(format!("Unknown theme '{}'", self.theme));
        }

        if self.separator.is_empty() {
            return Err("Range separator cannot be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PickerSettings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let settings = PickerSettings {
            date_format: "D.M.YY".to_string(),
            ..PickerSettings::default()
        };
        assert!(settings.validate().unwrap_err().contains("D.M.YY"));
    }

    #[test]
    fn test_validate_rejects_unknown_theme() {
        let settings = PickerSettings {
            theme: "solarized".to_string(),
            ..PickerSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_separator() {
        let settings = PickerSettings {
            separator: String::new(),
            ..PickerSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
