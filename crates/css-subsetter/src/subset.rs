//! Usage-driven filtering of icon rules.

use std::collections::{BTreeSet, HashSet};

use log::{debug, info};

use crate::{
    document::{IconFont, StylesheetDocument, selector_list},
    error::{Error, Result},
};

/// Stylesheet subsetter with builder pattern.
///
/// Keeps the base rule plus the glyph rules of the configured icon names;
/// comments and `@font-face` blocks pass through untouched.
#[derive(Debug, Clone, Default)]
pub struct Subsetter {
    icon_font: IconFont,
    classes: BTreeSet<String>,
}

impl Subsetter {
    /// Creates a Tabler Icons subsetter with an empty allow-list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a different icon-font naming scheme.
    pub fn with_icon_font(mut self, icon_font: IconFont) -> Self {
        self.icon_font = icon_font;
        self
    }

    /// Adds bare icon names (without the class prefix) to keep.
    pub fn with_classes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn icon_font(&self) -> &IconFont {
        &self.icon_font
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Allow-list entries that have no glyph rule in `doc`.
    pub fn unmatched<'a>(&'a self, doc: &StylesheetDocument) -> Vec<&'a str> {
        self.classes()
            .filter(|name| !doc.targets(&self.icon_font.selector_for(name)))
            .collect()
    }

    /// Returns a new document holding only the base rule and the allowed glyphs.
    ///
    /// Rules keep their source order. Unknown names are reported and skipped.
    pub fn subset(&self, doc: &StylesheetDocument) -> Result<StylesheetDocument> {
        let base = self.icon_font.base_selector();
        if !doc.rules.contains_key(base) {
            return Err(Error::MissingBaseRule {
                selector: base.to_owned(),
            });
        }

        for name in self.unmatched(doc) {
            info!("No rule for icon class {name:?}, skipping");
        }

        let wanted: HashSet<String> = self
            .classes()
            .map(|name| self.icon_font.selector_for(name))
            .collect();

        let rules = doc
            .rules
            .iter()
            .filter(|(selector, _)| {
                selector.as_str() == base
                    || selector_list(selector).any(|s| wanted.contains(s))
            })
            .map(|(selector, body)| {
                debug!("Keeping {selector}");
                (selector.clone(), body.clone())
            })
            .collect();

        Ok(StylesheetDocument::new(
            doc.comments.clone(),
            doc.font_faces.clone(),
            rules,
        ))
    }
}

/// Subsets a Tabler Icons document to the given bare names (convenience function).
///
/// This is equivalent to `Subsetter::new().with_classes(allowed).subset(doc)`.
pub fn subset<I, S>(doc: &StylesheetDocument, allowed: I) -> Result<StylesheetDocument>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Subsetter::new().with_classes(allowed).subset(doc)
}
