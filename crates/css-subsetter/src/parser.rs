//! Pattern-based stylesheet parser.
//!
//! Icon font stylesheets are generated files with a fixed shape: a header
//! comment, `@font-face` blocks, flat class rules and a footer comment. A few
//! regular expressions cover that shape; anything else is ignored.

use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use crate::{
    document::{IconFont, StylesheetDocument},
    error::{Error, Result},
};

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*[\s\S]*?\*/").expect("comment pattern is valid"));

static FONT_FACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@font-face\s*\{[^}]*\}").expect("font-face pattern is valid"));

// Bodies exclude `{` so a wrapping at-rule (`@media (...) {`) never pairs with
// the first nested rule.
static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^{};]+)\{([^{}]*)\}").expect("rule pattern is valid"));

/// Parse a Tabler Icons stylesheet.
pub fn parse(source: &str) -> Result<StylesheetDocument> {
    parse_with(source, &IconFont::tabler())
}

/// Parse a stylesheet, keeping the rules that belong to `icon_font`.
///
/// At least two comment blocks are required: the first and last are written
/// back as header and footer when the document is serialized. Duplicate
/// selectors keep their first position and their last body.
pub fn parse_with(source: &str, icon_font: &IconFont) -> Result<StylesheetDocument> {
    let comments: Vec<String> = COMMENT
        .find_iter(source)
        .map(|m| m.as_str().to_owned())
        .collect();
    if comments.len() < 2 {
        return Err(Error::MalformedInput {
            found: comments.len(),
        });
    }

    let uncommented = COMMENT.replace_all(source, "");

    let font_faces: Vec<String> = FONT_FACE
        .find_iter(&uncommented)
        .map(|m| m.as_str().to_owned())
        .collect();

    let rest = FONT_FACE.replace_all(&uncommented, "");

    let mut rules = IndexMap::new();
    for caps in RULE.captures_iter(&rest) {
        let selector = caps[1].trim();
        if !icon_font.is_icon_selector(selector) {
            continue;
        }
        if rules
            .insert(selector.to_owned(), caps[2].to_owned())
            .is_some()
        {
            debug!("Duplicate rule {selector}, keeping the later body");
        }
    }

    debug!(
        "Parsed {} comment(s), {} @font-face block(s), {} icon rule(s)",
        comments.len(),
        font_faces.len(),
        rules.len()
    );

    Ok(StylesheetDocument::new(comments, font_faces, rules))
}
