//! Parsed stylesheet model and the icon-font naming scheme.

use indexmap::IndexMap;

/// Naming scheme of an icon font stylesheet.
///
/// Every glyph is addressed as `.<prefix><name><pseudo-element>`, e.g.
/// `.ti-home:before`, and depends on a shared base rule (`.ti`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFont {
    base_selector: String,
    class_prefix: String,
    pseudo_element: String,
}

impl IconFont {
    pub fn new(
        base_selector: impl Into<String>,
        class_prefix: impl Into<String>,
        pseudo_element: impl Into<String>,
    ) -> Self {
        Self {
            base_selector: base_selector.into(),
            class_prefix: class_prefix.into(),
            pseudo_element: pseudo_element.into(),
        }
    }

    /// Tabler Icons: `.ti` base rule, `ti-` class prefix, `:before` glyphs.
    pub fn tabler() -> Self {
        Self::new(".ti", "ti-", ":before")
    }

    pub fn base_selector(&self) -> &str {
        &self.base_selector
    }

    pub fn class_prefix(&self) -> &str {
        &self.class_prefix
    }

    pub fn pseudo_element(&self) -> &str {
        &self.pseudo_element
    }

    /// Selector of the glyph rule for a bare icon name (`home` -> `.ti-home:before`).
    pub fn selector_for(&self, name: &str) -> String {
        format!(".{}{name}{}", self.class_prefix, self.pseudo_element)
    }

    /// Strip the class prefix from a class token (`ti-home` -> `home`).
    ///
    /// Returns `None` when the token does not carry the prefix or names nothing.
    pub fn bare_name<'a>(&self, class: &'a str) -> Option<&'a str> {
        class
            .strip_prefix(self.class_prefix.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Whether a selector belongs to this icon font.
    ///
    /// The base selector must be followed by a non-identifier character, so
    /// `.ti`, `.ti-home:before` and `.ti, .ti-x` match while `.tip` does not.
    pub fn is_icon_selector(&self, selector: &str) -> bool {
        selector
            .strip_prefix(self.base_selector.as_str())
            .is_some_and(|rest| {
                rest.chars()
                    .next()
                    .is_none_or(|c| !(c.is_alphanumeric() || c == '_'))
            })
    }
}

impl Default for IconFont {
    fn default() -> Self {
        Self::tabler()
    }
}

/// A stylesheet split into the sections the subsetter cares about.
///
/// Text outside comments, `@font-face` blocks and icon rules is not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetDocument {
    /// Comment blocks in source order. The first is the header, the last the footer.
    pub comments: Vec<String>,
    /// Raw `@font-face { ... }` blocks in source order.
    pub font_faces: Vec<String>,
    /// Icon rules keyed by selector; values are the raw text between `{` and `}`.
    pub rules: IndexMap<String, String>,
}

impl StylesheetDocument {
    pub fn new(
        comments: Vec<String>,
        font_faces: Vec<String>,
        rules: IndexMap<String, String>,
    ) -> Self {
        Self {
            comments,
            font_faces,
            rules,
        }
    }

    pub fn leading_comment(&self) -> Option<&str> {
        self.comments.first().map(String::as_str)
    }

    /// The footer comment. A lone comment block counts as a header only.
    pub fn trailing_comment(&self) -> Option<&str> {
        match self.comments.as_slice() {
            [_, .., last] => Some(last.as_str()),
            _ => None,
        }
    }

    /// Declaration body of the rule with exactly this selector.
    pub fn rule(&self, selector: &str) -> Option<&str> {
        self.rules.get(selector).map(String::as_str)
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Whether any rule, including one with a selector list, targets `selector`.
    pub fn targets(&self, selector: &str) -> bool {
        self.selectors()
            .any(|list| selector_list(list).any(|s| s == selector))
    }
}

/// Split a selector list (`.a:before, .b:before`) into its selectors.
pub(crate) fn selector_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}
