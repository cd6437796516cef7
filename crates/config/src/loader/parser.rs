//! Line-oriented INI parser.
//!
//! Responsibilities:
//! - Recognize `[section]` headers and `key = value` / `key : value` entries.
//! - Group entries under the most recent header.
//!
//! Does NOT handle:
//! - Comment removal (input is already clean, see `preprocess.rs`).
//! - Duplicate detection or case normalization (see `validate.rs`).
//!
//! Invariants:
//! - Every header and every entry is kept, repeats included, in source order.
//! - Keys and values are trimmed; section names are kept as written.

use crate::constants::{KEY_VALUE_DELIMITERS, SECTION_CLOSE, SECTION_OPEN};

use super::error::ParseError;
use super::preprocess::CleanLine;

/// A section as written in the file, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    /// Header text between the brackets, untrimmed.
    pub name: String,
    /// Line of the header in the original file.
    pub line: usize,
    /// Every entry in order, including repeated keys.
    pub entries: Vec<RawEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub key: String,
    pub value: String,
    pub line: usize,
}

enum ParserState {
    NoSection,
    InSection(RawSection),
}

/// Parses preprocessed lines into raw sections.
///
/// # Errors
/// Returns the first `ParseError` encountered; nothing is returned on failure.
pub fn parse<'a, I>(lines: I) -> Result<Vec<RawSection>, ParseError>
where
    I: IntoIterator<Item = CleanLine<'a>>,
{
    let mut sections = Vec::new();
    let mut state = ParserState::NoSection;

    for line in lines {
        if let Some(name) = header_name(line.text) {
            if name.trim().is_empty() {
                return Err(ParseError::EmptySectionName { line: line.number });
            }
            if let ParserState::InSection(section) = state {
                sections.push(section);
            }
            state = ParserState::InSection(RawSection {
                name: name.to_string(),
                line: line.number,
                entries: Vec::new(),
            });
            continue;
        }

        match &mut state {
            ParserState::NoSection => {
                return Err(ParseError::MissingSectionHeader {
                    line: line.number,
                    content: line.text.to_string(),
                });
            }
            ParserState::InSection(section) => section.entries.push(parse_entry(line)?),
        }
    }

    if let ParserState::InSection(section) = state {
        sections.push(section);
    }

    tracing::trace!(sections = sections.len(), "Parsed raw sections");
    Ok(sections)
}

/// Returns the text between `[` and the last `]` when `line` is a header.
///
/// Anything after the closing bracket is ignored.
fn header_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(SECTION_OPEN)?;
    let close = rest.rfind(SECTION_CLOSE)?;
    Some(&rest[..close]).filter(|name| !name.is_empty())
}

fn parse_entry(line: CleanLine<'_>) -> Result<RawEntry, ParseError> {
    let Some(split) = line.text.find(KEY_VALUE_DELIMITERS) else {
        return Err(ParseError::MissingDelimiter {
            line: line.number,
            content: line.text.to_string(),
        });
    };

    // Delimiters are ASCII, so `split + 1` is a char boundary.
    let key = line.text[..split].trim();
    let value = line.text[split + 1..].trim();

    if key.is_empty() {
        return Err(ParseError::EmptyKey {
            line: line.number,
            content: line.text.to_string(),
        });
    }

    Ok(RawEntry {
        key: key.to_string(),
        value: value.to_string(),
        line: line.number,
    })
}
