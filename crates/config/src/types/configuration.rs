//! The validated configuration: an ordered set of uniquely named profiles.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::constants::{DISPLAY_ASSIGNMENT, SECTION_CLOSE, SECTION_OPEN};
use crate::loader::{ConfigError, LoadOptions, load_from_str};
use crate::types::{CaseMode, Profile};

/// Profiles in the order they first appeared in the source file.
///
/// Only the loader can build one, so every instance has passed duplicate
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    profiles: Vec<Profile>,
}

impl Configuration {
    pub(crate) fn from_profiles(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Runs the full preprocess, parse, validate pipeline over in-memory text.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse`, `ConfigError::DuplicateProfile`, or
    /// `ConfigError::DuplicateKey` when the text is rejected.
    pub fn parse(text: &str, case_mode: CaseMode) -> Result<Self, ConfigError> {
        let options = LoadOptions {
            case_mode,
            ..LoadOptions::default()
        };
        load_from_str(text, &options)
    }

    /// Same as [`Configuration::parse`] with every load option available.
    pub fn parse_with_options(text: &str, options: &LoadOptions) -> Result<Self, ConfigError> {
        load_from_str(text, options)
    }

    /// Looks up a profile by its stored name.
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Profile> {
        self.profiles.iter()
    }

    /// Stored profile names in file order.
    pub fn profile_names(&self) -> Vec<String> {
        self.profiles
            .iter()
            .map(|profile| profile.name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = &'a Profile;
    type IntoIter = std::slice::Iter<'a, Profile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}

/// Renders `[name]` headers followed by `key = value` lines, with a blank
/// line between profiles and no trailing newline.
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, profile) in self.profiles.iter().enumerate() {
            if index > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{SECTION_OPEN}{}{SECTION_CLOSE}", profile.name())?;
            for (key, value) in profile.iter() {
                write!(f, "\n{key}{DISPLAY_ASSIGNMENT}{value}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for Configuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.profiles.len()))?;
        for profile in &self.profiles {
            map.serialize_entry(profile.name(), profile)?;
        }
        map.end()
    }
}
