//! Icon-font stylesheet subsetting.
//!
//! Parses a generated icon stylesheet (such as `tabler-icons.min.css`) into its
//! header/footer comments, `@font-face` blocks and icon rules, keeps only the
//! rules for icons that are actually used, and writes the result back as
//! minified CSS. It operates on strings; [`write`] is the only file I/O.
//!
//! # Example
//!
//! ```
//! use css_subsetter::{Subsetter, parse, serialize};
//!
//! let source = "/*A*/.ti{font-family:x}.ti-home:before{content:\"a\"}.ti-star:before{content:\"b\"}/*B*/";
//! let doc = parse(source).unwrap();
//! let subset = Subsetter::new().with_classes(["home"]).subset(&doc).unwrap();
//!
//! assert_eq!(
//!     serialize(&subset).unwrap(),
//!     "/*A*/.ti{font-family:x}.ti-home:before{content:\"a\"}/*B*/"
//! );
//! ```

mod document;
mod error;
mod parser;
mod serialize;
mod subset;

pub use document::{IconFont, StylesheetDocument};
pub use error::{Error, Result, Section};
pub use parser::{parse, parse_with};
pub use serialize::{serialize, write};
pub use subset::{Subsetter, subset};
