use std::io;

use thiserror::Error;

/// All different error types this crate uses.
///
/// A page that simply is not an article is not an error, see
/// [`crate::Extraction::NotAnArticle`].
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The byline/date line did not contain exactly one "published" or
    /// "last updated" label, the page markup changed in a way we don't
    /// understand.
    #[error("Expected exactly one date label in byline, found {matches}: {line:?}")]
    MalformedByline {
        /// The complete byline/date text.
        line: String,
        /// How many labels were found.
        matches: usize,
    },
    /// Failed to read a document.
    #[error("Failed to read document")]
    ReadDocument {
        /// The underlying io error.
        #[from]
        source: io::Error,
    },
}
