use std::io::Read;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use select::document::Document;
use url::Url;

use crate::article::{Article, Extraction};
use crate::config::Config;
use crate::error::ExtractError;
use crate::text::BodyNormalizer;
use crate::tree::{DocumentTree, Query};

lazy_static! {

    /// "published:" or "last updated:"
    static ref RE_DATE_LABEL: Regex = Regex::new(r"(?:פורסם|עדכון אחרון):").unwrap();

    static ref RE_ARTICLE_URL: Regex = Regex::new(r"^https?://www\.ynet\.co\.il/articles/").unwrap();

}

pub trait Extractor {
    /// The hosts whose pages this extractor understands.
    fn domains(&self) -> &[&str];

    /// Pages that link to the site's current articles.
    fn feeder_pages(&self) -> &[&str];

    /// Whether the url points to a single article.
    fn is_article_url(&self, url: &Url) -> bool;

    /// Whether the url belongs to one of the [`Extractor::domains`].
    fn handles(&self, url: &Url) -> bool {
        url.host_str()
            .map(|host| self.domains().iter().any(|domain| *domain == host))
            .unwrap_or_default()
    }

    /// Extract the article from the parsed document.
    ///
    /// Pages without the article template result in
    /// [`Extraction::NotAnArticle`], only markup we don't understand is an
    /// error.
    fn extract<D: DocumentTree>(&self, doc: &D) -> Result<Extraction, ExtractError>;

    /// Parse the html and extract the article.
    fn extract_html(&self, html: &str) -> Result<Extraction, ExtractError> {
        self.extract(&Document::from(html))
    }

    /// Read utf-8 encoded html and extract the article.
    fn extract_read<R: Read>(&self, read: R) -> Result<Extraction, ExtractError> {
        let doc = Document::from_read(read)?;
        self.extract(&doc)
    }
}

/// Extracts articles from ynet (`www.ynet.co.il`) pages.
#[derive(Debug, Clone, Default)]
pub struct YnetExtractor {
    config: Config,
}

impl YnetExtractor {
    pub const DOMAINS: [&'static str; 1] = ["www.ynet.co.il"];

    pub const FEEDER_PAGES: [&'static str; 1] = ["http://www.ynet.co.il/"];

    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Extractor for YnetExtractor {
    fn domains(&self) -> &[&str] {
        &YnetExtractor::DOMAINS
    }

    fn feeder_pages(&self) -> &[&str] {
        &YnetExtractor::FEEDER_PAGES
    }

    fn is_article_url(&self, url: &Url) -> bool {
        RE_ARTICLE_URL.is_match(url.as_str())
    }

    fn extract<D: DocumentTree>(&self, doc: &D) -> Result<Extraction, ExtractError> {
        let config = &self.config;

        let seo_title = match doc.find_first(&Query::attr(
            "meta",
            "property",
            config.title_meta_property(),
        )) {
            Some(meta) => doc.attr(meta, "content").unwrap_or_default().to_string(),
            None => {
                debug!("No {} meta, not an article", config.title_meta_property());
                return Ok(Extraction::NotAnArticle);
            }
        };

        let title = match doc.find_first(&Query::class("div", config.title_class())) {
            Some(title) => doc.text(title),
            None => {
                debug!("No title element, using {}", config.title_meta_property());
                seo_title
            }
        };

        let byline_and_date = match doc.find_first(&Query::class("span", config.byline_class())) {
            Some(line) => doc.text(line),
            None => {
                debug!("No byline, not an article");
                return Ok(Extraction::NotAnArticle);
            }
        };
        let (byline, date) = split_byline(&byline_and_date)?;

        let subtitle = doc
            .find_first(&Query::class("div", config.subtitle_class()))
            .map(|subtitle| doc.text(subtitle))
            .unwrap_or_default();

        let body = match doc
            .find_first(&Query::class("div", config.body_class()))
            .and_then(|body| doc.working_copy(body))
        {
            Some(body) => body,
            None => {
                debug!("No article body, not an article");
                return Ok(Extraction::NotAnArticle);
            }
        };
        let body = BodyNormalizer::new(config).normalize(body, &subtitle);

        Ok(Extraction::Article(Article {
            title,
            byline,
            date,
            body,
        }))
    }
}

/// Split the byline/date line at its single "published:" or
/// "last updated:" label into the trimmed byline and date.
pub fn split_byline(line: &str) -> Result<(String, String), ExtractError> {
    let labels: Vec<_> = RE_DATE_LABEL.find_iter(line).collect();
    match labels.as_slice() {
        [label] => Ok((
            line[..label.start()].trim().to_string(),
            line[label.end()..].trim().to_string(),
        )),
        _ => Err(ExtractError::MalformedByline {
            line: line.to_string(),
            matches: labels.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_published() {
        let (byline, date) = split_byline("ג'ון דו פורסם: 10:00").unwrap();
        assert_eq!(byline, "ג'ון דו");
        assert_eq!(date, "10:00");
    }

    #[test]
    fn split_last_updated() {
        let (byline, date) = split_byline(" איתי  |  ידיעות אחרונות עדכון אחרון:  10.05.14 , 18:43 ").unwrap();
        assert_eq!(byline, "איתי  |  ידיעות אחרונות");
        assert_eq!(date, "10.05.14 , 18:43");
    }

    #[test]
    fn missing_label() {
        match split_byline("ג'ון דו 10:00") {
            Err(ExtractError::MalformedByline { matches, .. }) => assert_eq!(matches, 0),
            other => panic!("unexpected {:?}", other),
        }
        // the label without its colon
        assert!(split_byline("ג'ון דו פורסם 10:00").is_err());
    }

    #[test]
    fn repeated_label() {
        match split_byline("פורסם: 09:00 עדכון אחרון: 10:00") {
            Err(ExtractError::MalformedByline { matches, .. }) => assert_eq!(matches, 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn article_urls() {
        let extractor = YnetExtractor::default();
        let article = Url::parse("http://www.ynet.co.il/articles/0,7340,L-4520437,00.html").unwrap();
        assert!(extractor.handles(&article));
        assert!(extractor.is_article_url(&article));

        let https = Url::parse("https://www.ynet.co.il/articles/0,7340,L-1,00.html").unwrap();
        assert!(extractor.is_article_url(&https));

        let home = Url::parse(extractor.feeder_pages()[0]).unwrap();
        assert!(extractor.handles(&home));
        assert!(!extractor.is_article_url(&home));

        let other = Url::parse("https://www.haaretz.co.il/articles/1").unwrap();
        assert!(!extractor.handles(&other));
        assert!(!extractor.is_article_url(&other));
    }
}
