//! Validation and normalization of parsed sections.
//!
//! Responsibilities:
//! - Normalize profile names and keys according to `CaseMode`.
//! - Reject duplicate profiles and duplicate keys.
//! - Fold an optional default section into every profile.
//!
//! Does NOT handle:
//! - Grammar errors (already reported by `parser.rs`).
//!
//! Invariants:
//! - Profile duplicates are detected on the normalized name.
//! - Key duplicates are detected on the trimmed key as written, case-sensitively,
//!   even though storage is case-normalized. Two spellings that differ only in
//!   case therefore collapse into one stored key, last value winning.

use std::collections::HashSet;

use crate::types::{CaseMode, Configuration, Profile};

use super::LoadOptions;
use super::error::ConfigError;
use super::parser::{RawEntry, RawSection};

/// Turns raw sections into a validated configuration.
///
/// # Errors
/// `ConfigError::DuplicateProfile` or `ConfigError::DuplicateKey`.
pub fn validate(
    sections: Vec<RawSection>,
    options: &LoadOptions,
) -> Result<Configuration, ConfigError> {
    let (defaults, sections) = split_default_section(sections, options.default_section.as_deref());
    let inherited = match &defaults {
        Some((name, entries)) => unique_entries(name, entries)?,
        None => Vec::new(),
    };

    let mut seen_profiles = HashSet::new();
    let mut profiles = Vec::with_capacity(sections.len());

    for section in sections {
        let name = options.case_mode.normalize(section.name.trim());
        if !seen_profiles.insert(name.clone()) {
            tracing::warn!(profile = %name, line = section.line, "Duplicate profile");
            return Err(ConfigError::DuplicateProfile(name));
        }

        let own = unique_entries(&name, &section.entries)?;
        let mut profile = Profile::new(name);
        for (key, value) in inherited.iter().chain(own.iter()) {
            profile.insert(options.case_mode.normalize(key), value.to_string());
        }

        tracing::trace!(profile = %profile.name(), keys = profile.len(), "Validated profile");
        profiles.push(profile);
    }

    Ok(Configuration::from_profiles(profiles))
}

/// Checks that no trimmed key repeats within one section.
fn unique_entries<'a>(
    profile: &str,
    entries: &'a [RawEntry],
) -> Result<Vec<(&'a str, &'a str)>, ConfigError> {
    let mut seen_keys = HashSet::new();
    let mut unique = Vec::with_capacity(entries.len());

    for entry in entries {
        let key = entry.key.trim();
        if !seen_keys.insert(key) {
            tracing::warn!(profile, key, line = entry.line, "Duplicate key");
            return Err(ConfigError::DuplicateKey {
                profile: profile.to_string(),
                key: key.to_string(),
            });
        }
        unique.push((key, entry.value.trim()));
    }

    Ok(unique)
}

/// Pulls every section named exactly `default_name` out of `sections`,
/// merging their entries in order.
fn split_default_section(
    sections: Vec<RawSection>,
    default_name: Option<&str>,
) -> (Option<(String, Vec<RawEntry>)>, Vec<RawSection>) {
    let Some(default_name) = default_name else {
        return (None, sections);
    };

    let (defaults, profiles): (Vec<_>, Vec<_>) = sections
        .into_iter()
        .partition(|section| section.name.trim() == default_name);

    if defaults.is_empty() {
        return (None, profiles);
    }

    let entries = defaults
        .into_iter()
        .flat_map(|section| section.entries)
        .collect();
    (Some((default_name.to_string(), entries)), profiles)
}

/// Case-normalized lookup key, as the stored map would hold it.
pub(crate) fn lookup_key(key: &str, case_mode: CaseMode) -> String {
    case_mode.normalize(key.trim())
}
