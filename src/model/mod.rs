//! Document model shared by the parsers, the scoring engine and the reports.
//!
//! Every graded file is normalized into a [`Document`]: the raw text (used
//! for size and line counts), a [`Frontmatter`] map decoded from its
//! metadata block (or the whole JSON manifest for plugins), and the body
//! with the metadata block stripped.

mod document;
mod frontmatter;

pub use document::*;
pub use frontmatter::*;
