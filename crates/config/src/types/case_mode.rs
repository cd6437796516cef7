//! Case handling for profile names and keys.

use std::fmt;

/// Governs whether profile names and keys are lowercased or kept as written.
///
/// Chosen once when a handler is built and never changed afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaseMode {
    /// Lowercase profile names and keys.
    #[default]
    Lowercase,
    /// Keep profile names and keys exactly as authored.
    Preserve,
}

impl CaseMode {
    /// Maps the conventional `preserve_case` flag onto a mode.
    pub const fn from_preserve_case(preserve_case: bool) -> Self {
        if preserve_case {
            CaseMode::Preserve
        } else {
            CaseMode::Lowercase
        }
    }

    /// Returns true when names are kept as authored.
    pub const fn preserves_case(self) -> bool {
        matches!(self, CaseMode::Preserve)
    }

    /// Applies this mode to an already-trimmed name.
    pub fn normalize(self, name: &str) -> String {
        match self {
            CaseMode::Lowercase => name.to_lowercase(),
            CaseMode::Preserve => name.to_string(),
        }
    }
}

impl From<bool> for CaseMode {
    fn from(preserve_case: bool) -> Self {
        Self::from_preserve_case(preserve_case)
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMode::Lowercase => f.write_str("lowercase"),
            CaseMode::Preserve => f.write_str("preserve"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lowercase() {
        assert_eq!(CaseMode::default(), CaseMode::Lowercase);
        assert!(!CaseMode::default().preserves_case());
    }

    #[test]
    fn test_from_preserve_case_flag() {
        assert_eq!(CaseMode::from(true), CaseMode::Preserve);
        assert_eq!(CaseMode::from(false), CaseMode::Lowercase);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(CaseMode::Lowercase.normalize("KeyA"), "keya");
        assert_eq!(CaseMode::Preserve.normalize("KeyA"), "KeyA");
    }

    #[test]
    fn test_normalize_does_not_trim() {
        assert_eq!(CaseMode::Lowercase.normalize(" Key "), " key ");
    }
}
