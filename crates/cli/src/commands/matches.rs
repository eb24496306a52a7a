use std::{collections::BTreeSet, path::PathBuf};

use anyhow::{Context, Result};
use piatto_core::{Scanner, UsageMatch, config::DEFAULT_MATCH_PATH};

/// Print every icon reference under `paths` (current directory if empty).
pub fn find_matches(paths: &[PathBuf], name_only: bool) -> Result<()> {
    let scanner = Scanner::tabler();
    let paths = if paths.is_empty() {
        vec![PathBuf::from(DEFAULT_MATCH_PATH)]
    } else {
        paths.to_vec()
    };

    for path in &paths {
        println!("Matching under {}", path.display());
        let matches = scanner
            .scan(path)
            .with_context(|| format!("Failed to scan {}", path.display()))?;
        for line in format_matches(&matches, name_only) {
            println!("{line}");
        }
    }
    Ok(())
}

/// `path:line: token` per match, or each distinct token once when `name_only`.
pub fn format_matches(matches: &[UsageMatch], name_only: bool) -> Vec<String> {
    if name_only {
        let tokens: BTreeSet<&str> = matches.iter().map(|m| m.token.as_str()).collect();
        tokens.into_iter().map(str::to_owned).collect()
    } else {
        matches
            .iter()
            .map(|m| format!("{}:{}: {}", m.path.display(), m.line, m.token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(token: &str, path: &str, line: usize) -> UsageMatch {
        UsageMatch {
            token: token.to_string(),
            path: PathBuf::from(path),
            line,
        }
    }

    #[test]
    fn test_format_with_locations() {
        let matches = [
            usage("ti ti-home", "layouts/nav.html", 2),
            usage("ti ti-home", "layouts/footer.html", 7),
        ];
        assert_eq!(
            format_matches(&matches, false),
            [
                "layouts/nav.html:2: ti ti-home",
                "layouts/footer.html:7: ti ti-home"
            ]
        );
    }

    #[test]
    fn test_format_name_only() {
        let matches = [
            usage("ti ti-star", "a.md", 1),
            usage("ti ti-home", "b.md", 1),
            usage("ti ti-star", "c.md", 3),
        ];
        assert_eq!(format_matches(&matches, true), ["ti ti-home", "ti ti-star"]);
    }
}
