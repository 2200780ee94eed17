use log::trace;

use crate::body::{BodyNode, Element};
use crate::clean::{clean_body, collapse_whitespace, DIVIDER};
use crate::config::Config;
use crate::tree::Query;

/// One direct child of the body container, classified by what it contributes
/// to the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Whitespace collapsed paragraph text.
    Paragraph(String),
    /// Trimmed heading text.
    Heading(String),
    /// Trimmed text of each list item.
    List(Vec<String>),
    Divider,
    Unrecognized,
}

impl Block {
    pub fn classify(node: &BodyNode) -> Block {
        let el = match node {
            BodyNode::Divider => return Block::Divider,
            BodyNode::Element(el) => el,
            BodyNode::Text(_) => return Block::Unrecognized,
        };

        match el.name() {
            "p" => Block::Paragraph(collapse_whitespace(&el.text())),
            "ul" => Block::List(
                el.descendants_named("li")
                    .into_iter()
                    .map(|li| li.text().trim().to_string())
                    .collect(),
            ),
            name if is_heading(name) => Block::Heading(el.text().trim().to_string()),
            _ => Block::Unrecognized,
        }
    }

    /// Empty paragraphs and unrecognized blocks produce no fragment.
    pub fn into_fragment(self) -> Option<Fragment> {
        match self {
            Block::Paragraph(txt) if txt.is_empty() => None,
            Block::Paragraph(txt) => Some(Fragment::Text(txt)),
            Block::Heading(txt) => Some(Fragment::Text(txt + DIVIDER)),
            Block::List(items) => Some(Fragment::Text(format!("\n{}", items.join("\n")))),
            Block::Divider => Some(Fragment::Divider),
            Block::Unrecognized => None,
        }
    }
}

/// `h` followed by one or more digits.
fn is_heading(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some('h') && {
        let level = chars.as_str();
        !level.is_empty() && level.chars().all(|c| c.is_ascii_digit())
    }
}

/// A piece of the body text before joining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A paragraph break, rendered as [`DIVIDER`].
    Divider,
    Text(String),
}

impl Fragment {
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Divider => DIVIDER,
            Fragment::Text(txt) => txt,
        }
    }
}

/// Turns the body container into the normalized article text.
#[derive(Debug, Clone)]
pub struct BodyNormalizer<'a> {
    config: &'a Config,
}

impl<'a> BodyNormalizer<'a> {
    /// Direct children of the body that carry text.
    pub const TEXT_BLOCKS: [&'static str; 3] = ["p", "ul", "h3"];

    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Normalize the body, prefixed with the subtitle.
    pub fn normalize(&self, mut body: Element, subtitle: &str) -> String {
        self.rewrite(&mut body);
        let joined = BodyNormalizer::join(subtitle, BodyNormalizer::fragments(&body));
        clean_body(&joined)
    }

    /// Replaces videos and images with placeholder paragraphs between
    /// dividers, drops side links and replaces ads with an inline
    /// placeholder.
    pub fn rewrite(&self, body: &mut Element) {
        let config = self.config;

        let videos = body.replace_all(&Query::class("div", config.video_class()), &mut || {
            isolated(config.video_placeholder())
        });
        trace!("Replaced {} videos", videos);

        let images = body.replace_all(&Query::class("div", config.image_class()), &mut || {
            isolated(config.image_placeholder())
        });
        trace!("Replaced {} images", images);

        let links = body.remove_all(&Query::class("div", config.side_link_class()));
        trace!("Removed {} side links", links);

        // ads float next to the text, so no dividers
        let ads = body.replace_all(
            &Query::class("div", config.advertisement_class()),
            &mut || vec![Element::paragraph(config.advertisement_placeholder()).into()],
        );
        trace!("Replaced {} ads", ads);
    }

    /// Fragments of the body's direct text blocks in document order.
    pub fn fragments(body: &Element) -> Vec<Fragment> {
        body.children()
            .iter()
            .filter(|node| match node {
                BodyNode::Divider => true,
                BodyNode::Element(el) => BodyNormalizer::TEXT_BLOCKS
                    .iter()
                    .any(|tag| *tag == el.name()),
                BodyNode::Text(_) => false,
            })
            .filter_map(|node| Block::classify(node).into_fragment())
            .collect()
    }

    /// Joins subtitle, a divider and the fragments with `' '`, so adjacent
    /// paragraphs are always separated. The extra spaces are removed by
    /// [`clean_body`].
    pub fn join(subtitle: &str, fragments: Vec<Fragment>) -> String {
        let mut parts = Vec::with_capacity(fragments.len() + 2);
        parts.push(Fragment::Text(subtitle.to_string()));
        parts.push(Fragment::Divider);
        parts.extend(fragments);
        parts
            .iter()
            .map(Fragment::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn isolated(placeholder: &str) -> Vec<BodyNode> {
    vec![
        BodyNode::Divider,
        Element::paragraph(placeholder).into(),
        BodyNode::Divider,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(txt: &str) -> Element {
        Element::paragraph(txt)
    }

    fn div(class: &str) -> Element {
        Element::new("div").with_attr("class", class)
    }

    fn normalize(body: Element, subtitle: &str) -> String {
        BodyNormalizer::new(&Config::default()).normalize(body, subtitle)
    }

    #[test]
    fn heading_names() {
        assert!(is_heading("h3"));
        assert!(is_heading("h12"));
        assert!(!is_heading("h"));
        assert!(!is_heading("hr"));
        assert!(!is_heading("head"));
    }

    #[test]
    fn paragraph_fragments() {
        let node = BodyNode::from(p("  a \n\t b  "));
        assert_eq!(
            Block::classify(&node).into_fragment(),
            Some(Fragment::Text("a b".to_string()))
        );
        let empty = BodyNode::from(p(" \n "));
        assert_eq!(Block::classify(&empty).into_fragment(), None);
    }

    #[test]
    fn nbsp_paragraph_with_text_is_text() {
        let node = BodyNode::from(p("\u{a0}x"));
        assert_eq!(Block::classify(&node), Block::Paragraph("x".to_string()));
    }

    #[test]
    fn heading_fragment() {
        let node = BodyNode::from(Element::new("h3").with_child(BodyNode::text(" Title ")));
        assert_eq!(
            Block::classify(&node).into_fragment(),
            Some(Fragment::Text("Title\n\n".to_string()))
        );
    }

    #[test]
    fn list_fragment() {
        let list = Element::new("ul")
            .with_child(Element::new("li").with_child(BodyNode::text(" x ")))
            .with_child(Element::new("li").with_child(BodyNode::text("y")));
        assert_eq!(
            Block::classify(&list.into()).into_fragment(),
            Some(Fragment::Text("\nx\ny".to_string()))
        );
    }

    #[test]
    fn unrecognized_blocks_are_dropped() {
        let body = Element::new("div")
            .with_child(p("a"))
            .with_child(Element::new("table").with_child(BodyNode::text("t")))
            .with_child(BodyNode::text("loose"))
            .with_child(Element::new("h4").with_child(BodyNode::text("h4")))
            .with_child(p("b"));
        assert_eq!(
            BodyNormalizer::fragments(&body),
            vec![Fragment::Text("a".to_string()), Fragment::Text("b".to_string())]
        );
    }

    #[test]
    fn joins_with_spaces() {
        let joined = BodyNormalizer::join(
            "sub",
            vec![
                Fragment::Text("a".to_string()),
                Fragment::Divider,
                Fragment::Text("b".to_string()),
            ],
        );
        assert_eq!(joined, "sub \n\n a \n\n b");
    }

    #[test]
    fn keeps_dividers() {
        let body = Element::new("div")
            .with_child(p("A"))
            .with_child(BodyNode::Divider)
            .with_child(p("B"));
        assert_eq!(normalize(body, "sub"), "sub\n\nA\n\nB");
    }

    #[test]
    fn adjacent_paragraphs_get_a_space() {
        let body = Element::new("div").with_child(p("A")).with_child(p("B"));
        assert_eq!(normalize(body, ""), "\n\nA B");
    }

    #[test]
    fn video_is_isolated() {
        let body = Element::new("div").with_child(div("art_video"));
        let txt = normalize(body, "sub");
        assert!(txt.contains("\n\n(סרטון)\n\n"), "{:?}", txt);
        assert_eq!(txt, "sub\n\n(סרטון)\n\n");
    }

    #[test]
    fn image_is_isolated() {
        let body = Element::new("div")
            .with_child(p("a"))
            .with_child(div("citv_image").with_child(Element::new("img")))
            .with_child(p("b"));
        assert_eq!(normalize(body, "sub"), "sub\n\na\n\n(תמונה)\n\nb");
    }

    #[test]
    fn ads_stay_inline() {
        let body = Element::new("div")
            .with_child(p("before"))
            .with_child(div("CAATVcompAdvertiseTv").with_child(BodyNode::text("buy")))
            .with_child(p("after"));
        assert_eq!(normalize(body, "sub"), "sub\n\nbefore (פרסומת) after");
    }

    #[test]
    fn side_links_are_removed() {
        let body = Element::new("div")
            .with_child(p("a"))
            .with_child(div("arttvgenlink").with_child(p("more news")))
            .with_child(p("b"));
        assert_eq!(normalize(body, "sub"), "sub\n\na b");
    }

    #[test]
    fn nested_placeholders_are_not_linearized() {
        let body = Element::new("div")
            .with_child(p("a"))
            .with_child(Element::new("div").with_child(div("art_video")));
        assert_eq!(normalize(body, "sub"), "sub\n\na");
    }

    #[test]
    fn configured_placeholders() {
        let config = Config::builder()
            .video_placeholder("(video)")
            .advertisement_placeholder(" (advertisement) ")
            .build();
        let body = Element::new("div")
            .with_child(p("before"))
            .with_child(div("CAATVcompAdvertiseTv"))
            .with_child(p("after"))
            .with_child(div("art_video"));
        assert_eq!(
            BodyNormalizer::new(&config).normalize(body, "sub"),
            "sub\n\nbefore (advertisement) after\n\n(video)\n\n"
        );
    }

    #[test]
    fn headings_and_lists() {
        let body = Element::new("div")
            .with_child(Element::new("h3").with_child(BodyNode::text("Head")))
            .with_child(p("text"))
            .with_child(
                Element::new("ul")
                    .with_child(Element::new("li").with_child(BodyNode::text("x")))
                    .with_child(Element::new("li").with_child(BodyNode::text("y"))),
            )
            .with_child(p("end"));
        assert_eq!(normalize(body, "sub"), "sub\n\nHead\n\ntext \nx\ny end");
    }
}
