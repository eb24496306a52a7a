//! Icon list handed to the icon-font build.

use std::{
    collections::BTreeSet,
    fs::{read_to_string, write},
    path::Path,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::io::ensure_parent_dir;

/// `{"includeIcons": [...]}`: bare icon names the font build should keep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptions {
    pub include_icons: Vec<String>,
}

impl CompileOptions {
    /// Sorted, de-duplicated icon list.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self {
            include_icons: names.into_iter().collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize compile options")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        write(path, self.to_json()?)
            .with_context(|| format!("Failed to write compile options: {}", path.display()))
    }

    pub fn read(path: &Path) -> Result<Self> {
        let json = read_to_string(path)
            .with_context(|| format!("Failed to read compile options: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid compile options: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names_sorted_unique() {
        let options = CompileOptions::from_names(["star", "home", "star"]);
        assert_eq!(options.include_icons, ["home", "star"]);
    }

    #[test]
    fn test_json_key() {
        let options = CompileOptions::from_names(["arrow-left", "home"]);
        assert_eq!(
            options.to_json().unwrap(),
            r#"{"includeIcons":["arrow-left","home"]}"#
        );
    }

    #[test]
    fn test_write_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/compile-options.json");
        let options = CompileOptions::from_names(["brand-github"]);
        options.write(&path).unwrap();
        assert_eq!(CompileOptions::read(&path).unwrap(), options);
    }
}
