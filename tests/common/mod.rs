#![allow(dead_code)]

use anyhow::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Names of the built-in expected file list
pub const DEFAULT_NAMES: [&str; 10] = [
    "Message.swift",
    "MessageDetailView.swift",
    "MessageListView.swift",
    "SettingsView.swift",
    "MessageListViewModel.swift",
    "APIService.swift",
    "PushNotificationManager.swift",
    "AppDelegate.swift",
    "InfoDigestApp.swift",
    "ContentView.swift",
];

/// Render a minimal project.pbxproj referencing `names`.
///
/// Each name gets a `PBXBuildFile` line and a `PBXFileReference` line, like
/// Xcode writes them; only the latter should be counted.
pub fn pbxproj(names: &[&str]) -> String {
    let mut out = String::from("// !$*UTF8*$!\n{\n\tobjects = {\n\n/* Begin PBXBuildFile section */\n");
    for (i, name) in names.iter().enumerate() {
        let _ = writeln!(
            out,
            "\t\t{:024X} /* {name} in Sources */ = {{isa = PBXBuildFile; fileRef = {:024X} /* {name} */; }};",
            i + 0x1000,
            i
        );
    }
    out.push_str("/* End PBXBuildFile section */\n\n/* Begin PBXFileReference section */\n");
    for (i, name) in names.iter().enumerate() {
        let _ = writeln!(
            out,
            "\t\t{i:024X} /* {name} */ = {{isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = {name}; sourceTree = \"<group>\"; }};"
        );
    }
    out.push_str(
        "\t\tFFFFFFFFFFFFFFFFFFFFFFFF /* Assets.xcassets */ = {isa = PBXFileReference; lastKnownFileType = folder.assetcatalog; path = Assets.xcassets; sourceTree = \"<group>\"; };\n",
    );
    out.push_str("/* End PBXFileReference section */\n\t};\n}\n");
    out
}

/// Temporary project with a manifest and an optional config file
pub struct TestProject {
    pub temp_dir: TempDir,
    pub manifest: PathBuf,
    pub config: PathBuf,
}

impl TestProject {
    /// Create a project whose manifest references `names`
    pub fn with_references(names: &[&str]) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let manifest = temp_dir.path().join("App.xcodeproj/project.pbxproj");
        fs::create_dir_all(manifest.parent().unwrap())?;
        fs::write(&manifest, pbxproj(names))?;
        let config = temp_dir.path().join("config.toml");
        Ok(Self {
            temp_dir,
            manifest,
            config,
        })
    }

    /// Write a config pointing at this project's manifest, plus `extra` TOML
    pub fn write_config(&self, extra: &str) -> Result<()> {
        let text = format!(
            "[manifest]\npath = {:?}\n\n{extra}",
            self.manifest.to_string_lossy()
        );
        fs::write(&self.config, text)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}
