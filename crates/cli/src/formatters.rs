//! Output formatting for text and JSON.
//!
//! Every formatter returns the complete output as a `String`; printing is
//! left to the caller.

use anyhow::Result;
use profiles_config::{Configuration, Profile};

use crate::args::OutputFormat;

pub fn format_profile_names(names: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(names.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(names)?),
    }
}

pub fn format_profile(profile: &Profile, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(profile
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(profile)?),
    }
}

/// Formats a single string (a value or preprocessed text).
pub fn format_text(text: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(text)?),
    }
}

pub fn format_config(config: &Configuration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(config.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profiles_config::CaseMode;

    fn sample() -> Configuration {
        Configuration::parse("[b]\ny = 2\nx = 1\n[a]\nk = v", CaseMode::Lowercase).unwrap()
    }

    #[test]
    fn test_profile_names_text() {
        let names = sample().profile_names();
        assert_eq!(
            format_profile_names(&names, OutputFormat::Text).unwrap(),
            "b\na"
        );
    }

    #[test]
    fn test_profile_names_json() {
        let names = sample().profile_names();
        let json = format_profile_names(&names, OutputFormat::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec!["b", "a"]);
    }

    #[test]
    fn test_profile_text_keeps_order() {
        let config = sample();
        let profile = config.get("b").unwrap();
        assert_eq!(
            format_profile(profile, OutputFormat::Text).unwrap(),
            "y = 2\nx = 1"
        );
    }

    #[test]
    fn test_text_json_is_quoted() {
        assert_eq!(
            format_text("a \"b\"", OutputFormat::Json).unwrap(),
            r#""a \"b\"""#
        );
        assert_eq!(format_text("plain", OutputFormat::Text).unwrap(), "plain");
    }

    #[test]
    fn test_config_text_matches_display() {
        let config = sample();
        assert_eq!(
            format_config(&config, OutputFormat::Text).unwrap(),
            "[b]\ny = 2\nx = 1\n\n[a]\nk = v"
        );
    }

    #[test]
    fn test_config_json_is_nested() {
        let json = format_config(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["a"]["k"], "v");
        assert_eq!(value["b"]["x"], "1");
    }
}
