//! An owned, mutable copy of the article body subtree.
//!
//! The parsed document stays untouched, all rewriting of videos, images and
//! ads happens on this copy before the text is linearized.

use crate::tree::{Matcher, Query};

/// Single non-breaking space, the publisher's marker for a paragraph break.
pub const NBSP: &str = "\u{a0}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyNode {
    Element(Element),
    Text(String),
    /// Explicit paragraph break.
    Divider,
}

impl BodyNode {
    pub fn text<T: ToString>(text: T) -> Self {
        BodyNode::Text(text.to_string())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            BodyNode::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for BodyNode {
    fn from(el: Element) -> Self {
        BodyNode::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<BodyNode>,
}

impl Element {
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A `<p>` holding only `text`.
    pub fn paragraph<T: ToString>(text: T) -> Self {
        Element::new("p").with_child(BodyNode::text(text))
    }

    pub fn with_attr<N: ToString, V: ToString>(mut self, name: N, value: V) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child<T: Into<BodyNode>>(mut self, child: T) -> Self {
        self.push(child);
        self
    }

    pub fn set_attr<N: ToString, V: ToString>(&mut self, name: N, value: V) {
        let name = name.to_string();
        let value = value.to_string();
        if let Some(attr) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            attr.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    pub fn push<T: Into<BodyNode>>(&mut self, child: T) {
        self.children.push(child.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or_default()
    }

    pub fn children(&self) -> &[BodyNode] {
        &self.children
    }

    pub fn matches(&self, query: &Query<'_>) -> bool {
        if self.name != query.tag {
            return false;
        }
        match query.matcher {
            Matcher::Attr(name, value) => self.attr(name) == Some(value),
            Matcher::Class(class) => self.has_class(class),
        }
    }

    /// Concatenated text of all descendants.
    pub fn text(&self) -> String {
        fn recur_text(el: &Element, string: &mut String) {
            for child in &el.children {
                match child {
                    BodyNode::Text(text) => string.push_str(text),
                    BodyNode::Element(el) => recur_text(el, string),
                    BodyNode::Divider => {}
                }
            }
        }

        let mut txt = String::new();
        recur_text(self, &mut txt);
        txt
    }

    /// All descendant elements named `name`, in document order.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        fn recur<'a>(el: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
            for child in el.children.iter().filter_map(BodyNode::as_element) {
                if child.name == name {
                    found.push(child);
                }
                recur(child, name, found);
            }
        }

        let mut found = Vec::new();
        recur(self, name, &mut found);
        found
    }

    /// Replaces every descendant matching `query` with the nodes returned by
    /// `replacement`. Matched nodes are not searched any further.
    ///
    /// Returns the number of replaced nodes.
    pub fn replace_all<F>(&mut self, query: &Query<'_>, replacement: &mut F) -> usize
    where
        F: FnMut() -> Vec<BodyNode>,
    {
        let mut replaced = 0;
        let children = std::mem::take(&mut self.children);
        for child in children {
            match child {
                BodyNode::Element(el) if el.matches(query) => {
                    self.children.extend(replacement());
                    replaced += 1;
                }
                BodyNode::Element(mut el) => {
                    replaced += el.replace_all(query, replacement);
                    self.children.push(BodyNode::Element(el));
                }
                other => self.children.push(other),
            }
        }
        replaced
    }

    /// Drops every descendant matching `query`.
    pub fn remove_all(&mut self, query: &Query<'_>) -> usize {
        self.replace_all(query, &mut || Vec::new())
    }
}
