//! Read-only queries over a parsed document.
//!
//! Extraction only relies on [`DocumentTree`], the implementation for
//! [`select::document::Document`] is the one used by default.

use select::document::Document;
use select::node::Node;
use select::predicate::{Attr, Class, Name, Predicate};

use crate::body::{BodyNode, Element, NBSP};

/// How an element is identified besides its tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher<'a> {
    /// Attribute `name` has exactly the value.
    Attr(&'a str, &'a str),
    /// The whitespace separated `class` attribute contains the class.
    Class(&'a str),
}

/// Tag name plus [`Matcher`], e.g. `meta[property="og:title"]` or
/// `div.art_body`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query<'a> {
    pub tag: &'a str,
    pub matcher: Matcher<'a>,
}

impl<'a> Query<'a> {
    pub fn attr(tag: &'a str, name: &'a str, value: &'a str) -> Self {
        Self {
            tag,
            matcher: Matcher::Attr(name, value),
        }
    }

    pub fn class(tag: &'a str, class: &'a str) -> Self {
        Self {
            tag,
            matcher: Matcher::Class(class),
        }
    }
}

impl<'a> Predicate for Query<'a> {
    fn matches(&self, node: &Node) -> bool {
        match self.matcher {
            Matcher::Attr(name, value) => Name(self.tag).and(Attr(name, value)).matches(node),
            Matcher::Class(class) => Name(self.tag).and(Class(class)).matches(node),
        }
    }
}

/// The capabilities extraction needs from a parsed document.
pub trait DocumentTree {
    /// Handle to a node of this tree.
    type Node: Copy;

    /// The first descendant matching the query, in document order.
    fn find_first(&self, query: &Query<'_>) -> Option<Self::Node>;

    /// All descendants matching the query, in document order.
    fn find_all(&self, query: &Query<'_>) -> Vec<Self::Node>;

    fn attr(&self, node: Self::Node, name: &str) -> Option<&str>;

    /// The text of the node and all its descendants.
    fn text(&self, node: Self::Node) -> String;

    /// Builds an owned copy of the node's subtree that can be rewritten
    /// without touching the document.
    ///
    /// Paragraphs whose whole text is a single non-breaking space become
    /// [`BodyNode::Divider`]s.
    fn working_copy(&self, node: Self::Node) -> Option<Element>;
}

impl DocumentTree for Document {
    type Node = usize;

    fn find_first(&self, query: &Query<'_>) -> Option<usize> {
        self.find(*query).next().map(|node| node.index())
    }

    fn find_all(&self, query: &Query<'_>) -> Vec<usize> {
        self.find(*query).map(|node| node.index()).collect()
    }

    fn attr(&self, node: usize, name: &str) -> Option<&str> {
        Node::new(self, node).and_then(|node| node.attr(name))
    }

    fn text(&self, node: usize) -> String {
        Node::new(self, node)
            .map(|node| node.text())
            .unwrap_or_default()
    }

    fn working_copy(&self, node: usize) -> Option<Element> {
        match Node::new(self, node).and_then(|node| to_body_node(&node)) {
            Some(BodyNode::Element(el)) => Some(el),
            _ => None,
        }
    }
}

fn to_body_node(node: &Node) -> Option<BodyNode> {
    if let Some(text) = node.as_text() {
        return Some(BodyNode::text(text));
    }
    // comments are skipped
    let name = node.name()?;
    if name == "p" && node.text() == NBSP {
        return Some(BodyNode::Divider);
    }

    let mut el = Element::new(name);
    for (attr, value) in node.attrs() {
        el.set_attr(attr, value);
    }
    for child in node.children() {
        if let Some(child) = to_body_node(&child) {
            el.push(child);
        }
    }
    Some(BodyNode::Element(el))
}
