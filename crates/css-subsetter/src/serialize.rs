//! Stylesheet serialization.

use std::{fs, path::Path};

use log::debug;

use crate::{
    document::StylesheetDocument,
    error::{Error, Result, Section},
};

/// Render a document as minified CSS.
///
/// Emits the header comment, every `@font-face` block, each rule as
/// `selector{body}` and the footer comment, with nothing added in between.
pub fn serialize(doc: &StylesheetDocument) -> Result<String> {
    let leading = doc.leading_comment().ok_or(Error::EmptySection {
        section: Section::LeadingComment,
    })?;
    let trailing = doc.trailing_comment().ok_or(Error::EmptySection {
        section: Section::TrailingComment,
    })?;

    let capacity = leading.len()
        + trailing.len()
        + doc.font_faces.iter().map(String::len).sum::<usize>()
        + doc
            .rules
            .iter()
            .map(|(selector, body)| selector.len() + body.len() + 2)
            .sum::<usize>();

    let mut css = String::with_capacity(capacity);
    css.push_str(leading);
    for font_face in &doc.font_faces {
        css.push_str(font_face);
    }
    for (selector, body) in &doc.rules {
        css.push_str(selector);
        css.push('{');
        css.push_str(body);
        css.push('}');
    }
    css.push_str(trailing);

    Ok(css)
}

/// Serialize a document and write it to `path`, replacing any existing file.
///
/// Nothing is written when serialization fails.
pub fn write(doc: &StylesheetDocument, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let css = serialize(doc)?;
    fs::write(path, &css).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", css.len(), path.display());
    Ok(())
}
