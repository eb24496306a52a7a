use std::{
    collections::BTreeSet,
    fs::read,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use glob::{Pattern, glob};
use log::debug;
use regex::Regex;

use crate::error::{Error, Result};

/// Marker token followed by an icon class, e.g. `ti ti-arrow-left`.
pub const TABLER_PATTERN: &str = r"ti ti(-\w+)*";

/// File extensions treated as text and searched for icon references.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "css", "csv", "htm", "html", "js", "markdown", "md", "mjs", "tsv", "txt", "xml",
];

static TABLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TABLER_PATTERN).expect("tabler pattern is valid"));

/// Whether a file is searched, judged by its extension.
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TEXT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// A single icon reference found in a file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UsageMatch {
    /// The matched text, e.g. `ti ti-home`.
    pub token: String,
    pub path: PathBuf,
    /// 1-based line number.
    pub line: usize,
}

impl UsageMatch {
    /// The class after the marker (`ti ti-home` -> `ti-home`).
    pub fn class_name(&self) -> Option<&str> {
        self.token.split_whitespace().nth(1)
    }

    /// The class with `prefix` stripped (`ti-home` -> `home`).
    pub fn bare_name(&self, prefix: &str) -> Option<&str> {
        self.class_name()?
            .strip_prefix(prefix)
            .filter(|name| !name.is_empty())
    }
}

/// Regex-driven search for icon references.
#[derive(Debug, Clone)]
pub struct Scanner {
    pattern: Regex,
}

impl Scanner {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Scanner for Tabler Icons markup ([`TABLER_PATTERN`]).
    pub fn tabler() -> Self {
        Self {
            pattern: TABLER.clone(),
        }
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Find all matches in `text`, attributing them to `path`.
    pub fn scan_text(&self, text: &str, path: &Path) -> Vec<UsageMatch> {
        text.lines()
            .enumerate()
            .flat_map(|(index, line)| {
                self.pattern.find_iter(line).map(move |m| UsageMatch {
                    token: m.as_str().to_owned(),
                    path: path.to_path_buf(),
                    line: index + 1,
                })
            })
            .collect()
    }

    /// Scan a single file. Files that are not valid UTF-8 yield no matches.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<UsageMatch>> {
        let data = read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        match String::from_utf8(data) {
            Ok(text) => Ok(self.scan_text(&text, path)),
            Err(_) => {
                debug!("Skipping {} (not UTF-8)", path.display());
                Ok(Vec::new())
            }
        }
    }

    /// Recursively scan every text file under `root`.
    ///
    /// `root` may also be a single file, which is scanned regardless of its
    /// extension.
    pub fn scan(&self, root: &Path) -> Result<Vec<UsageMatch>> {
        if root.is_file() {
            return self.scan_file(root);
        }
        if !root.is_dir() {
            return Err(Error::MissingRoot(root.to_path_buf()));
        }

        let mut matches = Vec::new();
        for path in text_files(root)? {
            debug!("Searching {}", path.display());
            let found = self.scan_file(&path)?;
            for m in &found {
                debug!("{}:{}: {}", m.path.display(), m.line, m.token);
            }
            matches.extend(found);
        }
        Ok(matches)
    }

    /// Union of bare icon names referenced under `roots`.
    pub fn collect_class_names<I, P>(&self, roots: I, prefix: &str) -> Result<BTreeSet<String>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut names = BTreeSet::new();
        for root in roots {
            for m in self.scan(root.as_ref())? {
                if let Some(name) = m.bare_name(prefix) {
                    names.insert(name.to_owned());
                }
            }
        }
        Ok(names)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::tabler()
    }
}

fn text_files(root: &Path) -> Result<Vec<PathBuf>> {
    let escaped = Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{escaped}/**/*");
    Ok(glob(&pattern)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                debug!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|path| path.is_file() && is_text_file(path))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(matches: &[UsageMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.token.as_str()).collect()
    }

    #[test]
    fn test_scan_text_tokens_and_lines() {
        let text = "<i class=\"ti ti-home\"></i>\nplain\n<i class=\"ti ti-arrow-left\"></i><i class=\"ti ti-brand-x\"></i>\n";
        let found = Scanner::tabler().scan_text(text, Path::new("a.html"));

        assert_eq!(tokens(&found), ["ti ti-home", "ti ti-arrow-left", "ti ti-brand-x"]);
        assert_eq!(
            found.iter().map(|m| m.line).collect::<Vec<_>>(),
            [1, 3, 3]
        );
        assert!(found.iter().all(|m| m.path == Path::new("a.html")));
    }

    #[test]
    fn test_bare_marker_has_no_name() {
        let found = Scanner::tabler().scan_text("class=\"ti ti\"", Path::new("x.md"));
        assert_eq!(tokens(&found), ["ti ti"]);
        assert_eq!(found[0].class_name(), Some("ti"));
        assert_eq!(found[0].bare_name("ti-"), None);
    }

    #[test]
    fn test_bare_name() {
        let m = UsageMatch {
            token: "ti ti-arrow-left".into(),
            path: PathBuf::from("x.html"),
            line: 1,
        };
        assert_eq!(m.class_name(), Some("ti-arrow-left"));
        assert_eq!(m.bare_name("ti-"), Some("arrow-left"));
    }

    #[test]
    fn test_custom_pattern() {
        let scanner = Scanner::new(r"icon icon-\w+").unwrap();
        assert_eq!(scanner.pattern(), r"icon icon-\w+");
        let found = scanner.scan_text("icon icon-cat ti ti-home", Path::new("x.txt"));
        assert_eq!(tokens(&found), ["icon icon-cat"]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(Scanner::new("ti ti("), Err(Error::Pattern(_))));
    }

    #[test]
    fn test_is_text_file() {
        assert!(is_text_file(Path::new("layouts/index.html")));
        assert!(is_text_file(Path::new("content/post.MD")));
        assert!(!is_text_file(Path::new("static/logo.svg")));
        assert!(!is_text_file(Path::new("images/cover.png")));
        assert!(!is_text_file(Path::new("Makefile")));
    }
}
