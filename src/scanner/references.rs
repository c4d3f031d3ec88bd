use crate::config::ScanConfig;
use regex::Regex;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{Level, debug, span, trace};

/// Invalid scan rules.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The extension is empty, so every word would match.
    #[error("Scan extension must not be empty")]
    EmptyExtension,

    /// The filename pattern failed to compile.
    #[error("Invalid filename pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Finds the source files a manifest references.
///
/// Implementations only read the text. [`LineScanner`] is a line heuristic;
/// a structural pbxproj parser would slot in behind the same trait.
pub trait ReferenceScanner {
    /// Return the distinct bare filenames referenced by `text`.
    fn scan(&self, text: &str) -> BTreeSet<String>;
}

/// Line-oriented reference heuristic.
///
/// A line is a file-reference line when it contains both the marker
/// (`PBXFileReference`) and `.<extension>`. The first `<word chars>.<extension>`
/// token on such a line is taken as the referenced filename.
#[derive(Debug, Clone)]
pub struct LineScanner {
    /// Substring identifying a file-reference declaration
    marker: String,
    /// `.<extension>`, checked before running the pattern
    dotted_extension: String,
    /// `(\w+\.<extension>)`
    pattern: Regex,
}

impl LineScanner {
    /// Build a scanner for `marker` lines naming `*.<extension>` files.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the extension is empty or the pattern does not compile.
    pub fn new(marker: &str, extension: &str) -> Result<Self, ScanError> {
        if extension.is_empty() {
            return Err(ScanError::EmptyExtension);
        }

        let pattern = Regex::new(&format!(r"(\w+\.{})", regex::escape(extension)))?;

        Ok(Self {
            marker: marker.to_string(),
            dotted_extension: format!(".{extension}"),
            pattern,
        })
    }

    /// Build a scanner from the `[scan]` config section.
    ///
    /// # Errors
    ///
    /// See [`LineScanner::new`].
    pub fn from_config(config: &ScanConfig) -> Result<Self, ScanError> {
        Self::new(&config.marker, &config.extension)
    }

    /// Extract the referenced filename from one line, if it is a reference line.
    #[must_use]
    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        if !line.contains(&self.dotted_extension) || !line.contains(&self.marker) {
            return None;
        }
        self.pattern.find(line).map(|m| m.as_str())
    }
}

impl ReferenceScanner for LineScanner {
    fn scan(&self, text: &str) -> BTreeSet<String> {
        let span = span!(Level::DEBUG, "scan_references", marker = %self.marker);
        let _guard = span.enter();

        let mut found = BTreeSet::new();
        for line in text.lines() {
            if let Some(name) = self.extract(line) {
                trace!(name, "Reference line");
                found.insert(name.to_string());
            }
        }

        debug!(count = found.len(), "Scanned manifest references");
        found
    }
}
