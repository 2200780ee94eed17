#[cfg(feature = "serde0")]
use serde::{Deserialize, Serialize};

/// The fields extracted from a real article page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
pub struct Article {
    /// The on-page title, or the `og:title` if the page has none.
    pub title: String,
    /// Author and/or section.
    pub byline: String,
    /// Publishing or last update time, as printed on the page.
    pub date: String,
    /// The subtitle followed by the normalized body text, paragraphs
    /// separated by `"\n\n"`.
    pub body: String,
}

/// The outcome of extracting a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde0", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Extraction {
    /// The page doesn't follow the article template.
    NotAnArticle,
    Article(Article),
}

impl Extraction {
    pub fn is_real_article(&self) -> bool {
        match self {
            Extraction::Article(_) => true,
            Extraction::NotAnArticle => false,
        }
    }

    pub fn article(&self) -> Option<&Article> {
        match self {
            Extraction::Article(article) => Some(article),
            Extraction::NotAnArticle => None,
        }
    }

    pub fn into_article(self) -> Option<Article> {
        match self {
            Extraction::Article(article) => Some(article),
            Extraction::NotAnArticle => None,
        }
    }
}

impl From<Article> for Extraction {
    fn from(article: Article) -> Self {
        Extraction::Article(article)
    }
}
