//! Canonical data model.
//!
//! Every scanner's JSON is normalized into a [`FindingSet`]; the sets for one
//! run form a [`Report`], which the document builder turns into a
//! format-independent [`Document`].

mod document;
mod finding;
mod report;
mod tool;

pub use document::*;
pub use finding::*;
pub use report::*;
pub use tool::*;
