//! Extracts the title, byline, date and a normalized plain text body from
//! ynet article pages.
//!
//! ```rust
//! use ynet_extract::{Extractor, YnetExtractor};
//!
//! let html = r#"<html><head><meta property="og:title" content="Title"></head><body>
//!     <span class="art_header_footer_author">Author פורסם: 10:00</span>
//!     <div class="art_body"><p>First</p><p>&nbsp;</p><p>Second</p></div>
//! </body></html>"#;
//!
//! let article = YnetExtractor::default()
//!     .extract_html(html)
//!     .unwrap()
//!     .into_article()
//!     .unwrap();
//! assert_eq!(article.title, "Title");
//! assert_eq!(article.body, "\n\nFirst\n\nSecond");
//! ```

pub use article::{Article, Extraction};
pub use config::{Config, ConfigBuilder};
pub use error::ExtractError;
pub use extract::{Extractor, YnetExtractor};
pub use text::BodyNormalizer;
pub use tree::{DocumentTree, Matcher, Query};

pub mod article;
pub mod body;
pub mod clean;
pub mod config;
mod error;
pub mod extract;
pub mod text;
pub mod tree;

/// Rexported to implement custom document trees.
pub use select;
