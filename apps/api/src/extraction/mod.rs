//! Field extraction from plain resume text.
//!
//! Pure heuristics over lines of text: contact regexes, a section finder
//! driven by header keywords, and a fixed skill vocabulary. Uploaded files
//! are decoded to text first by [`upload`].

pub mod extractor;
pub mod handlers;
pub mod sections;
pub mod skills;
pub mod upload;
