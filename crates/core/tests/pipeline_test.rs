use std::{collections::BTreeSet, fs, path::Path};

use piatto_core::{CompileOptions, TrimOptions, Watcher, trim};
use tempfile::TempDir;

const STYLESHEET: &str = concat!(
    "/*!\n * Tabler Icons 3.0.0 by tabler - https://tabler.io\n */",
    "@font-face{font-family:\"tabler-icons\";src:url(\"./fonts/tabler-icons.woff2\") format(\"woff2\")}",
    ".ti{font-family:\"tabler-icons\"!important;speak:none}",
    ".ti-arrow-left:before{content:\"\\ea19\"}",
    ".ti-brand-github:before{content:\"\\ec1c\"}",
    ".ti-home:before{content:\"\\eac1\"}",
    ".ti-search:before{content:\"\\eb1c\"}",
    "/*# sourceMappingURL=tabler-icons.min.css.map */",
);

struct Site {
    dir: TempDir,
}

impl Site {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("assets/css")).unwrap();
        fs::create_dir_all(root.join("layouts/partials")).unwrap();
        fs::write(root.join("assets/css/tabler-icons.min.css"), STYLESHEET).unwrap();
        fs::write(
            root.join("layouts/partials/nav.html"),
            "<i class=\"ti ti-home\"></i>\n<i class=\"ti ti-search\"></i>\n",
        )
        .unwrap();
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn options(&self) -> TrimOptions {
        let root = self.root();
        TrimOptions {
            paths: vec![root.join("layouts")],
            input: root.join("assets/css/tabler-icons.min.css"),
            output: root.join("static/css/tabler-icons.min.css"),
            compile_options: Some(root.join("data/icons.json")),
            ..Default::default()
        }
    }

    fn output(&self) -> String {
        fs::read_to_string(self.root().join("static/css/tabler-icons.min.css")).unwrap()
    }
}

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_trim_writes_subset() {
    let site = Site::new();
    let report = trim(&site.options(), &names(&["home", "typo"])).unwrap();

    assert_eq!(report.kept, [".ti", ".ti-home:before"]);
    assert_eq!(report.unmatched, ["typo"]);
    assert_eq!(report.input_bytes, STYLESHEET.len() as u64);
    assert!(report.output_bytes < report.input_bytes);

    let css = site.output();
    assert!(css.starts_with("/*!\n * Tabler Icons"));
    assert!(css.ends_with("/*# sourceMappingURL=tabler-icons.min.css.map */"));
    assert!(css.contains("@font-face{font-family:\"tabler-icons\""));
    assert!(css.contains(".ti-home:before{content:\"\\eac1\"}"));
    assert!(!css.contains("ti-search"));
    assert_eq!(report.output_bytes, css.len() as u64);
}

#[test]
fn test_trim_missing_input() {
    let site = Site::new();
    let options = TrimOptions {
        input: site.root().join("assets/css/missing.css"),
        ..site.options()
    };
    let err = trim(&options, &names(&["home"])).unwrap_err();
    assert!(err.to_string().contains("Failed to read stylesheet"));
}

#[test]
fn test_trim_failure_keeps_previous_output() {
    let site = Site::new();
    let options = site.options();
    trim(&options, &names(&["home"])).unwrap();
    let before = site.output();

    fs::write(&options.input, ".ti-home:before{content:\"x\"}").unwrap();
    let err = trim(&options, &names(&["home"])).unwrap_err();
    assert!(format!("{err:#}").contains("comment"));
    assert_eq!(site.output(), before);
}

#[test]
fn test_trim_missing_base_rule() {
    let site = Site::new();
    let options = site.options();
    fs::write(&options.input, "/*A*/.ti-home:before{content:\"x\"}/*B*/").unwrap();
    let err = trim(&options, &names(&["home"])).unwrap_err();
    assert!(format!("{err:#}").contains("no base rule `.ti`"));
    assert!(!options.output.exists());
}

#[test]
fn test_watcher_first_run_writes_everything() {
    let site = Site::new();
    let mut watcher = Watcher::new(site.options()).unwrap();

    let report = watcher.run_once().unwrap().expect("first run trims");
    assert_eq!(
        report.kept,
        [".ti", ".ti-home:before", ".ti-search:before"]
    );
    assert_eq!(watcher.previous(), Some(&names(&["home", "search"])));

    let compile_options = CompileOptions::read(&site.root().join("data/icons.json")).unwrap();
    assert_eq!(compile_options.include_icons, ["home", "search"]);
}

#[test]
fn test_watcher_skips_unchanged_and_picks_up_new_icons() {
    let site = Site::new();
    let mut watcher = Watcher::new(site.options()).unwrap();

    assert!(watcher.run_once().unwrap().is_some());
    assert_eq!(
        CompileOptions::read(&site.root().join("data/icons.json"))
            .unwrap()
            .include_icons,
        ["home", "search"]
    );

    // Nothing changed: no rewrite.
    fs::write(site.root().join("static/css/tabler-icons.min.css"), "untouched").unwrap();
    assert!(watcher.run_once().unwrap().is_none());
    assert_eq!(site.output(), "untouched");

    fs::write(
        site.root().join("layouts/partials/footer.html"),
        "<i class=\"ti ti-brand-github\"></i>",
    )
    .unwrap();
    let report = watcher.run_once().unwrap().expect("usage changed");
    assert_eq!(
        report.kept,
        [".ti", ".ti-brand-github:before", ".ti-home:before", ".ti-search:before"]
    );
    assert!(site.output().contains(".ti-brand-github:before"));
    assert_eq!(
        CompileOptions::read(&site.root().join("data/icons.json"))
            .unwrap()
            .include_icons,
        ["brand-github", "home", "search"]
    );
}

#[test]
fn test_watcher_invalid_pattern() {
    let site = Site::new();
    let options = TrimOptions {
        pattern: "ti ti(".to_string(),
        ..site.options()
    };
    assert!(Watcher::new(options).is_err());
}
