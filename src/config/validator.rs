use anyhow::Result;
use colored::Colorize;
use std::collections::HashSet;
use std::path::Path;

/// Flags configuration keys pbxsync does not recognise
pub struct ConfigValidator {
    /// Dotted paths of every recognised leaf key
    known_fields: HashSet<&'static str>,
    /// Keys accepted inside each `[[files]]` entry
    file_fields: HashSet<&'static str>,
}

impl ConfigValidator {
    /// Create a new validator with known configuration fields
    #[must_use]
    pub fn new() -> Self {
        let known_fields = HashSet::from([
            "manifest.path",
            "manifest.slack_tolerance",
            "manifest.mmap_threshold",
            "scan.marker",
            "scan.extension",
            "project.name",
            "project.source_dir",
        ]);
        let file_fields = HashSet::from(["path", "group", "name"]);

        Self {
            known_fields,
            file_fields,
        }
    }

    /// Validate a configuration file and warn about unknown keys
    ///
    /// Unknown keys are ignored by the loader, so a typo silently falls back
    /// to a default. This surfaces them on stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn validate_config_file(&self, config_path: &Path) -> Result<()> {
        if !config_path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(config_path)?;
        let unknown = self.unknown_fields(&content)?;

        if !unknown.is_empty() {
            eprintln!("{}", "Configuration warnings:".yellow().bold());
            for field in &unknown {
                eprintln!("  Unknown configuration field: {}", field.yellow());
            }
            eprintln!();
        }

        Ok(())
    }

    /// Collect the dotted paths of unknown keys in TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML
    pub fn unknown_fields(&self, content: &str) -> Result<Vec<String>> {
        let parsed: toml::Table = toml::from_str(content)?;
        let mut unknown = Vec::new();

        for (key, value) in &parsed {
            match (key.as_str(), value) {
                ("files", toml::Value::Array(entries)) => {
                    for (i, entry) in entries.iter().enumerate() {
                        self.check_file_entry(entry, i, &mut unknown);
                    }
                }
                (section, toml::Value::Table(table)) => {
                    for field in table.keys() {
                        let full_key = format!("{section}.{field}");
                        if !self.known_fields.contains(full_key.as_str()) {
                            unknown.push(full_key);
                        }
                    }
                }
                _ => unknown.push(key.clone()),
            }
        }

        Ok(unknown)
    }

    /// Checks the keys of one `[[files]]` entry
    fn check_file_entry(&self, entry: &toml::Value, index: usize, unknown: &mut Vec<String>) {
        if let toml::Value::Table(map) = entry {
            for key in map.keys() {
                if !self.file_fields.contains(key.as_str()) {
                    unknown.push(format!("files[{index}].{key}"));
                }
            }
        }
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
