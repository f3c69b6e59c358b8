//! Rendering configuration – page size, brand colours, and the highlight
//! timeout. Built-in defaults are overlaid by an optional `pdf-config.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name of the optional settings file in the workspace root.
pub const CONFIG_FILE_NAME: &str = "pdf-config.json";

/// Read-only options for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Explicit browser executable. `None` means discover one.
    pub chrome_path: Option<PathBuf>,
    /// Headings, bullet markers, table headers, note borders.
    pub brand_primary: String,
    /// Third-level headings.
    pub brand_dark: String,
    /// CSS length, e.g. `1200px`.
    pub slide_width: String,
    /// CSS length, e.g. `800px`.
    pub slide_height: String,
    /// Upper bound on the highlight wait, in milliseconds.
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chrome_path: None,
            brand_primary: "#1089C8".to_string(),
            brand_dark: "#0C7BB8".to_string(),
            slide_width: "1200px".to_string(),
            slide_height: "800px".to_string(),
            timeout: 5000,
        }
    }
}

impl Config {
    /// Deserialise from JSON. Missing keys take their defaults and unknown
    /// keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Serialise to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Slide size in inches, as the rendering service wants it.
    ///
    /// Returns `None` if either dimension is not a length we can convert;
    /// the print document's own `@page` rule then decides the size.
    pub fn paper_size_inches(&self) -> Option<(f64, f64)> {
        Some((
            css_length_to_inches(&self.slide_width)?,
            css_length_to_inches(&self.slide_height)?,
        ))
    }
}

/// Load the settings file at `path`, falling back to defaults.
///
/// A missing file is normal. A file that cannot be read or parsed is
/// reported with a warning and otherwise ignored.
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            log::warn!(
                "Could not read {}, using defaults: {e}",
                path.display()
            );
            return Config::default();
        }
    };

    match Config::from_json(&text) {
        Ok(config) => {
            log::info!("Loaded custom configuration from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!(
                "Could not parse {}, using defaults: {e}",
                path.display()
            );
            Config::default()
        }
    }
}

/// Convert a CSS absolute length to inches. A bare number is pixels.
pub fn css_length_to_inches(value: &str) -> Option<f64> {
    let value = value.trim();
    let split = value
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let number: f64 = number.trim().parse().ok()?;
    if !number.is_finite() || number <= 0.0 {
        return None;
    }

    let per_inch = match unit.to_ascii_lowercase().as_str() {
        "" | "px" => 96.0,
        "in" => 1.0,
        "cm" => 2.54,
        "mm" => 25.4,
        "pt" => 72.0,
        "pc" => 6.0,
        _ => return None,
    };
    Some(number / per_inch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_overlays_defaults() {
        let config =
            Config::from_json(r##"{"brandPrimary": "#ff0000", "timeout": 100}"##).unwrap();
        assert_eq!(config.brand_primary, "#ff0000");
        assert_eq!(config.timeout, 100);
        assert_eq!(config.brand_dark, Config::default().brand_dark);
        assert_eq!(config.slide_width, "1200px");
        assert_eq!(config.chrome_path, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = Config::from_json(r#"{"theme": "dark", "slideWidth": "10in"}"#).unwrap();
        assert_eq!(config.slide_width, "10in");
    }

    #[test]
    fn chrome_path_is_read() {
        let config = Config::from_json(r#"{"chromePath": "/opt/chrome/chrome"}"#).unwrap();
        assert_eq!(config.chrome_path, Some(PathBuf::from("/opt/chrome/chrome")));
    }

    #[test]
    fn json_roundtrip_uses_camel_case() {
        let json = Config::default().to_json();
        assert!(json.contains("\"brandPrimary\""));
        assert!(json.contains("\"slideHeight\""));
    }

    #[test]
    fn load_falls_back_on_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config(&path), Config::default());
    }

    #[test]
    fn load_without_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            load_config(&dir.path().join(CONFIG_FILE_NAME)),
            Config::default()
        );
    }

    #[test]
    fn css_lengths_convert_to_inches() {
        assert_eq!(css_length_to_inches("1200px"), Some(12.5));
        assert_eq!(css_length_to_inches("96"), Some(1.0));
        assert_eq!(css_length_to_inches("8.5in"), Some(8.5));
        assert_eq!(css_length_to_inches("72pt"), Some(1.0));
        assert_eq!(css_length_to_inches("25.4mm"), Some(1.0));
        assert_eq!(css_length_to_inches(" 2.54cm "), Some(1.0));
    }

    #[test]
    fn unconvertible_lengths_are_rejected() {
        assert_eq!(css_length_to_inches("50%"), None);
        assert_eq!(css_length_to_inches("10vw"), None);
        assert_eq!(css_length_to_inches("auto"), None);
        assert_eq!(css_length_to_inches("-5px"), None);
        assert_eq!(css_length_to_inches(""), None);
    }

    #[test]
    fn default_paper_size() {
        assert_eq!(Config::default().paper_size_inches(), Some((12.5, 800.0 / 96.0)));
    }
}
