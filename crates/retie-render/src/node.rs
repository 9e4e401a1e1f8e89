//! Minimal composed node tree
//!
//! Just enough structure to build a card and assert on it: elements with a
//! tag, attributes, and ordered children, plus verbatim text leaves.

use std::fmt::Write as _;

/// One node in a rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element with tag, attributes, and ordered children
    Element(Element),
    /// Verbatim text leaf (no markup interpretation)
    Text(String),
}

impl Node {
    /// Create a text leaf
    #[inline]
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Element tag, if this is an element
    #[inline]
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element(element) => Some(&element.tag),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Element(element) => element
                .children
                .iter()
                .map(Node::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }

    /// First descendant element with the given tag, depth first
    #[must_use]
    pub fn find(&self, tag: &str) -> Option<&Element> {
        let Self::Element(element) = self else {
            return None;
        };
        if element.tag == tag {
            return Some(element);
        }
        element.children.iter().find_map(|child| child.find(tag))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// Element node under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, lowercase
    pub tag: String,
    /// Attribute pairs in declaration order
    pub attrs: Vec<(String, String)>,
    /// Ordered children
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children
    #[inline]
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute
    #[inline]
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a child
    #[inline]
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Attribute value by name
    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Serialize a tree to HTML
///
/// Text leaves and attribute values are escaped here, and only here; the
/// tree itself stores author text verbatim.
#[must_use]
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(value) => out.push_str(&escape_text(value)),
        Node::Element(element) => {
            let _ = write!(out, "<{}", element.tag);
            for (name, value) in &element.attrs {
                let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
            }
            out.push('>');
            for child in &element.children {
                write_node(out, child);
            }
            let _ = write!(out, "</{}>", element.tag);
        }
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_concatenates_depth_first() {
        let tree: Node = Element::new("div")
            .child(Node::text("a"))
            .child(Element::new("p").child(Node::text("b")))
            .into();
        assert_eq!(tree.text_content(), "ab");
    }

    #[test]
    fn find_locates_nested_elements() {
        let tree: Node = Element::new("div")
            .child(Element::new("p").attr("class", "body"))
            .into();
        assert_eq!(tree.find("p").unwrap().attr_value("class"), Some("body"));
        assert!(tree.find("h1").is_none());
    }

    #[test]
    fn to_html_escapes_text_leaves() {
        let tree: Node = Element::new("p").child(Node::text("<script>&")).into();
        assert_eq!(to_html(&tree), "<p>&lt;script&gt;&amp;</p>");
    }

    #[test]
    fn to_html_escapes_attribute_values() {
        let tree: Node = Element::new("div").attr("class", "a\"b").into();
        assert_eq!(to_html(&tree), "<div class=\"a&quot;b\"></div>");
    }

    #[test]
    fn tree_stores_text_verbatim() {
        let node = Node::text("<b>raw</b>\nline");
        assert_eq!(node.text_content(), "<b>raw</b>\nline");
    }
}
