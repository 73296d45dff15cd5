//! Section-aware merging of two INI buffers.
//!
//! Used for include support: the lines of every section are gathered from the
//! primary buffer first and the included buffer second, then written back as
//! one buffer for the parser. A section defined in both files ends up with the
//! primary lines followed by the included lines, so with first-occurrence-wins
//! parsing the primary file's value takes precedence for a shared key.

use crate::error::Result;
use crate::options::ParseOptions;
use crate::parser::{classify, Line};
use crate::types::DEFAULT_SECTION;
use std::collections::HashMap;
use tracing::debug;

/// Raw lines per section, in order of first appearance
#[derive(Debug, Default)]
struct SectionLines<'a> {
    order: Vec<&'a str>,
    lines: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> SectionLines<'a> {
    fn section(&mut self, name: &'a str) -> &mut Vec<&'a str> {
        if !self.lines.contains_key(name) {
            self.order.push(name);
        }
        self.lines.entry(name).or_default()
    }

    fn collect(&mut self, text: &'a str, options: &ParseOptions) {
        let mut current = DEFAULT_SECTION;
        self.section(current);
        for raw in text.split(options.line_separator.as_str()) {
            match classify(raw, options) {
                Line::Blank | Line::Comment => {}
                Line::Section(name) => {
                    current = name;
                    self.section(current);
                }
                Line::Entry(line) => self.section(current).push(line),
            }
        }
    }
}

/// Merge `primary` and `included` into one buffer ready for re-parsing.
///
/// Comments and blank lines are dropped; entry lines are kept verbatim. The
/// default section is written first without a header, named sections follow
/// in order of first appearance.
pub fn combine(primary: &[u8], included: &[u8], options: &ParseOptions) -> Result<Vec<u8>> {
    let primary = std::str::from_utf8(primary)?;
    let included = std::str::from_utf8(included)?;

    let mut merged = SectionLines::default();
    merged.collect(primary, options);
    merged.collect(included, options);

    let sep = options.line_separator.as_str();
    let mut out = String::with_capacity(primary.len() + included.len());
    for name in &merged.order {
        if *name != DEFAULT_SECTION {
            out.push('[');
            out.push_str(name);
            out.push(']');
            out.push_str(sep);
        }
        for line in &merged.lines[name] {
            out.push_str(line);
            out.push_str(sep);
        }
    }

    debug!(
        sections = merged.order.len(),
        bytes = out.len(),
        "Combined INI buffers"
    );
    Ok(out.into_bytes())
}
