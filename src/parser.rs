//! INI text parser
//!
//! Turns raw bytes into entries of a [`SectionMap`]. Parsing is additive: new
//! sections and keys are layered onto whatever the map already holds, and a
//! header for an existing section restarts that section's key list.

use crate::error::{IniError, Result};
use crate::options::ParseOptions;
use crate::types::{Key, SectionMap, DEFAULT_SECTION};
use tracing::{debug, trace};

/// Classification of a single trimmed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Blank,
    Comment,
    Section(&'a str),
    Entry(&'a str),
}

/// Classify a line after trimming surrounding whitespace.
pub(crate) fn classify<'a>(raw: &'a str, options: &ParseOptions) -> Line<'a> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if options.skip_comments && (line.starts_with(';') || line.starts_with('#')) {
        return Line::Comment;
    }
    if options.parse_sections && line.len() >= 2 && line.starts_with('[') && line.ends_with(']')
    {
        return Line::Section(&line[1..line.len() - 1]);
    }
    Line::Entry(line)
}

/// Decode raw input, rejecting empty buffers.
pub(crate) fn decode(data: &[u8]) -> Result<&str> {
    if data.is_empty() {
        return Err(IniError::EmptyInput);
    }
    Ok(std::str::from_utf8(data)?)
}

/// Parse `data` into `sections`.
///
/// Fails on the first line that is neither blank, a comment, a header nor a
/// key/value pair; lines before it stay applied.
pub fn parse(data: &[u8], options: &ParseOptions, sections: &mut SectionMap) -> Result<()> {
    let text = decode(data)?;
    options.validate()?;

    sections.ensure_default();
    let mut current = DEFAULT_SECTION.to_string();
    let mut recorded = 0usize;

    for raw in text.split(options.line_separator.as_str()) {
        match classify(raw, options) {
            Line::Blank | Line::Comment => {}
            Line::Section(name) => {
                trace!(section = name, "Opening section");
                sections.insert_section(name);
                current = name.to_string();
            }
            Line::Entry(line) => {
                let key = parse_entry(line, options)?;
                if sections.push_key(&current, key) {
                    recorded += 1;
                }
            }
        }
    }

    debug!(
        sections = sections.len(),
        keys = recorded,
        "Parsed INI data"
    );
    Ok(())
}

fn parse_entry(line: &str, options: &ParseOptions) -> Result<Key> {
    let (name, value) = line
        .split_once(options.kv_separator.as_str())
        .ok_or_else(|| IniError::MalformedLine {
            line: line.to_string(),
        })?;

    let mut value = value.trim();
    if options.trim_quotes {
        value = trim_quotes(value);
    }
    Ok(Key::new(name.trim(), value))
}

/// Quote characters stripped from either end of a value
pub(crate) const QUOTES: &[char] = &['"', '\''];

/// Strip one leading and one trailing quote character, each independently.
fn trim_quotes(value: &str) -> &str {
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}
