//! Centralized constants for the profiles-config workspace.
//!
//! Grammar characters live here so the preprocessor, parser, and display
//! code agree on a single definition.

// =============================================================================
// Grammar
// =============================================================================

/// Characters that start a comment. Everything from the first marker to the
/// end of the line is discarded, regardless of quoting.
pub const COMMENT_MARKERS: [char; 2] = [';', '#'];

/// Characters that separate a key from its value. The first one on the line wins.
pub const KEY_VALUE_DELIMITERS: [char; 2] = ['=', ':'];

/// Opening bracket of a section header.
pub const SECTION_OPEN: char = '[';

/// Closing bracket of a section header.
pub const SECTION_CLOSE: char = ']';

// =============================================================================
// Display
// =============================================================================

/// Separator written between a key and its value by `display_config`.
pub const DISPLAY_ASSIGNMENT: &str = " = ";

// =============================================================================
// Host Environment
// =============================================================================

/// Environment variable consulted by the inspection CLI for the config path.
///
/// The library itself never reads the environment.
pub const CONFIG_PATH_ENV: &str = "PROFILES_CONFIG_PATH";
