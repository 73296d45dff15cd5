//! Serializes a [`SectionMap`] back to INI text.
//!
//! Layout: default-section keys first with no header, then each named section
//! in sorted order, separated from the previous block by one blank line. Each
//! key is written as `name SEP value`. With quote trimming enabled, a value
//! with leading or trailing whitespace or quote characters is wrapped in
//! double quotes so it reads back unchanged.

use crate::error::Result;
use crate::options::ParseOptions;
use crate::parser::QUOTES;
use crate::types::{Key, SectionMap, DEFAULT_SECTION};
use std::io::{BufWriter, Write};

pub fn write<W: Write>(sections: &SectionMap, options: &ParseOptions, writer: W) -> Result<()> {
    options.validate()?;
    let mut buf = BufWriter::new(writer);
    let sep = options.line_separator.as_str();
    let mut wrote_any = false;

    if let Some(keys) = sections.get(DEFAULT_SECTION) {
        if !keys.is_empty() {
            write_keys(&mut buf, keys, options)?;
            wrote_any = true;
        }
    }

    for name in sections.section_names() {
        if wrote_any {
            buf.write_all(sep.as_bytes())?;
        }
        write!(buf, "[{}]{}", name, sep)?;
        if let Some(keys) = sections.get(&name) {
            write_keys(&mut buf, keys, options)?;
        }
        wrote_any = true;
    }

    buf.flush()?;
    Ok(())
}

/// Serialize into an owned string.
pub fn to_string(sections: &SectionMap, options: &ParseOptions) -> Result<String> {
    let mut out = Vec::new();
    write(sections, options, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn write_keys<W: Write>(buf: &mut W, keys: &[Key], options: &ParseOptions) -> Result<()> {
    for key in keys {
        if options.trim_quotes && needs_quotes(&key.value) {
            write!(
                buf,
                "{} {} \"{}\"{}",
                key.name, options.kv_separator, key.value, options.line_separator
            )?;
        } else {
            write!(
                buf,
                "{} {} {}{}",
                key.name, options.kv_separator, key.value, options.line_separator
            )?;
        }
    }
    Ok(())
}

fn needs_quotes(value: &str) -> bool {
    let edge = |c: char| c.is_whitespace() || QUOTES.contains(&c);
    value.starts_with(edge) || value.ends_with(edge)
}
