//! Configuration object
//!
//! [`Ini`] owns one [`SectionMap`] together with the directory and filename of
//! its backing file. All mutable state sits behind a single reader/writer
//! lock: getters share it, loads and writes hold it exclusively. Every public
//! method takes the lock once; the private `*_locked` helpers work on the
//! already borrowed state.

use crate::combine::combine;
use crate::error::{IniError, Result};
use crate::fs;
use crate::options::ParseOptions;
use crate::parser;
use crate::serializer;
use crate::types::{KeySlice, SectionMap, DEFAULT_SECTION};
use crate::value;
use parking_lot::RwLock;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Directory used when none is given
pub const DEFAULT_DIRECTORY: &str = "./conf";

/// Section holding the include directive
pub const INCLUDE_SECTION: &str = "file";

/// Key naming the file to merge into the primary configuration
pub const INCLUDE_KEY: &str = "include";

struct State {
    directory: PathBuf,
    filename: String,
    sections: SectionMap,
}

/// An INI configuration backed by an optional file
pub struct Ini {
    options: ParseOptions,
    state: RwLock<State>,
}

impl Default for Ini {
    fn default() -> Self {
        Self::new()
    }
}

impl Ini {
    /// Create an empty configuration rooted at `./conf` with default options
    pub fn new() -> Self {
        Self::with_options(DEFAULT_DIRECTORY, ParseOptions::default())
    }

    pub fn with_directory<P: AsRef<Path>>(directory: P) -> Self {
        Self::with_options(directory, ParseOptions::default())
    }

    pub fn with_options<P: AsRef<Path>>(directory: P, options: ParseOptions) -> Self {
        Self {
            options,
            state: RwLock::new(State {
                directory: directory.as_ref().to_path_buf(),
                filename: String::new(),
                sections: SectionMap::new(),
            }),
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Load `directory/filename`, following a `[file] include` directive one level deep.
    ///
    /// The filename is recorded for [`Ini::reload`] and [`Ini::write_origin_file`].
    /// Loads accumulate: sections from earlier loads are kept unless the new
    /// content redefines them.
    #[instrument(skip(self))]
    pub fn load(&self, filename: &str) -> Result<()> {
        let mut state = self.state.write();
        state.filename = filename.to_string();
        self.load_locked(&mut state)
    }

    /// Re-read the most recently loaded file.
    pub fn reload(&self) -> Result<()> {
        let mut state = self.state.write();
        self.load_locked(&mut state)
    }

    /// Parse in-memory bytes with the configured options.
    pub fn load_bytes(&self, data: &[u8]) -> Result<()> {
        let mut state = self.state.write();
        parser::parse(data, &self.options, &mut state.sections)
    }

    /// Parse in-memory bytes with explicit separators.
    ///
    /// The separators apply to this call only; the configured options are unchanged.
    pub fn load_bytes_with(&self, data: &[u8], line_separator: &str, kv_separator: &str) -> Result<()> {
        let options = self.options.with_separators(line_separator, kv_separator);
        let mut state = self.state.write();
        parser::parse(data, &options, &mut state.sections)
    }

    pub fn load_reader<R: Read>(&self, mut reader: R) -> Result<()> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.load_bytes(&data)
    }

    pub fn load_reader_with<R: Read>(
        &self,
        mut reader: R,
        line_separator: &str,
        kv_separator: &str,
    ) -> Result<()> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.load_bytes_with(&data, line_separator, kv_separator)
    }

    pub fn get(&self, key: &str) -> String {
        self.section_get(DEFAULT_SECTION, key)
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.section_bool(DEFAULT_SECTION, key)
    }

    pub fn get_int(&self, key: &str) -> Result<i32> {
        self.section_int(DEFAULT_SECTION, key)
    }

    pub fn get_int64(&self, key: &str) -> Result<i64> {
        self.section_int64(DEFAULT_SECTION, key)
    }

    pub fn get_float32(&self, key: &str) -> Result<f32> {
        self.section_float32(DEFAULT_SECTION, key)
    }

    pub fn get_float64(&self, key: &str) -> Result<f64> {
        self.section_float64(DEFAULT_SECTION, key)
    }

    /// Value of `key` in `section`; empty when the section or key is absent.
    pub fn section_get(&self, section: &str, key: &str) -> String {
        self.state.read().sections.section_get(section, key).to_string()
    }

    /// Boolean value of `key`; absent and unrecognised values read as `false`.
    pub fn section_bool(&self, section: &str, key: &str) -> bool {
        value::parse_bool(&self.section_get(section, key))
    }

    pub fn section_int(&self, section: &str, key: &str) -> Result<i32> {
        value::parse_int(section, key, &self.section_get(section, key))
    }

    pub fn section_int64(&self, section: &str, key: &str) -> Result<i64> {
        value::parse_int64(section, key, &self.section_get(section, key))
    }

    pub fn section_float32(&self, section: &str, key: &str) -> Result<f32> {
        value::parse_float32(section, key, &self.section_get(section, key))
    }

    pub fn section_float64(&self, section: &str, key: &str) -> Result<f64> {
        value::parse_float64(section, key, &self.section_get(section, key))
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.state.read().sections.has_section(section)
    }

    /// Whether `key` is present in `section`, even with an empty value.
    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.state.read().sections.has_key(section, key)
    }

    /// Named sections in sorted order, excluding the default section.
    pub fn get_sections(&self) -> Vec<String> {
        self.state.read().sections.section_names()
    }

    /// Keys of `section`; empty when the section is absent.
    pub fn get_keys(&self, section: &str) -> KeySlice {
        self.state
            .read()
            .sections
            .get(section)
            .cloned()
            .unwrap_or_default()
    }

    /// Snapshot of the whole section table.
    pub fn section_map(&self) -> SectionMap {
        self.state.read().sections.clone()
    }

    pub fn set_section_map(&self, sections: SectionMap) {
        self.state.write().sections = sections;
    }

    /// Serialize the configuration to `writer`.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let state = self.state.write();
        serializer::write(&state.sections, &self.options, writer)
    }

    pub fn write_to_string(&self) -> Result<String> {
        let state = self.state.write();
        serializer::to_string(&state.sections, &self.options)
    }

    /// Serialize the configuration to `directory/filename`.
    #[instrument(skip(self))]
    pub fn write_file(&self, filename: &str) -> Result<PathBuf> {
        let state = self.state.write();
        self.write_file_locked(&state, filename)
    }

    /// Serialize the configuration back to the file it was loaded from.
    pub fn write_origin_file(&self) -> Result<PathBuf> {
        let state = self.state.write();
        if state.filename.is_empty() {
            return Err(IniError::MissingFilename);
        }
        self.write_file_locked(&state, &state.filename)
    }

    pub fn filename(&self) -> String {
        self.state.read().filename.clone()
    }

    pub fn set_filename(&self, filename: &str) {
        self.state.write().filename = filename.to_string();
    }

    pub fn directory(&self) -> PathBuf {
        self.state.read().directory.clone()
    }

    pub fn set_directory<P: AsRef<Path>>(&self, directory: P) {
        self.state.write().directory = directory.as_ref().to_path_buf();
    }

    fn load_locked(&self, state: &mut State) -> Result<()> {
        let data = fs::read_file(&state.directory, &state.filename)?;
        let data = self.merge_include_locked(&state.directory, data)?;
        parser::parse(&data, &self.options, &mut state.sections)?;
        info!(
            file = %state.directory.join(&state.filename).display(),
            sections = state.sections.len(),
            "Loaded configuration"
        );
        Ok(())
    }

    /// Merge the file named by `[file] include`, if any, after the primary content.
    ///
    /// Only the primary file's directive is honoured; an include inside the
    /// included file is ignored.
    fn merge_include_locked(&self, directory: &Path, data: Vec<u8>) -> Result<Vec<u8>> {
        let mut probe = SectionMap::new();
        parser::parse(&data, &self.options, &mut probe)?;

        let include = probe.section_get(INCLUDE_SECTION, INCLUDE_KEY);
        if include.is_empty() {
            return Ok(data);
        }

        debug!(include, "Merging included configuration");
        let included = fs::read_file(directory, include)?;
        combine(&data, &included, &self.options)
    }

    fn write_file_locked(&self, state: &State, filename: &str) -> Result<PathBuf> {
        let contents = serializer::to_string(&state.sections, &self.options)?;
        let path = fs::write_file(&state.directory, filename, contents.as_bytes())?;
        info!(file = %path.display(), "Wrote configuration");
        Ok(path)
    }
}
