//! Typed markup model for host pages
//!
//! Pages are built as a small element tree rather than formatted strings so
//! that the same value can be serialized for the browser and queried in tests.
//!
//! Serialization rules:
//! - Text and attribute values are HTML-escaped
//! - Void elements (`meta`, `link`, `br`) have no closing tag
//! - Every other element is closed explicitly, including empty
//!   `<script>` and `<canvas>` elements

use std::fmt::Write as _;

/// Elements that never carry children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["meta", "link", "br", "hr", "img", "input"];

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element
    Element(Element),
    /// Literal text, escaped on output
    Text(String),
}

impl Node {
    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Element(el) => el.text_content(),
            Node::Text(text) => text.clone(),
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(text) => out.push_str(&escape_text(text)),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An HTML element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value for the same name
    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Shorthand for the `id` attribute
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Shorthand for the `class` attribute
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Append a child node
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several child nodes in order
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a child in place
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Tag name
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Look up an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct children
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// All descendant elements (including `self`) with the given tag, in document order
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(&mut |el: &Element| el.tag == tag, &mut found);
        found
    }

    /// All descendant elements (including `self`) whose `id` matches
    pub fn find_all_by_id(&self, id: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(&mut |el: &Element| el.get_attr("id") == Some(id), &mut found);
        found
    }

    /// First element with the given `id`
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find_all_by_id(id).into_iter().next()
    }

    fn collect<'a>(&'a self, pred: &mut dyn FnMut(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if pred(self) {
            out.push(self);
        }
        for child in &self.children {
            if let Node::Element(el) = child {
                el.collect(pred, out);
            }
        }
    }

    /// Serialize this element and its subtree
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            // Writing into a String cannot fail
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Escape text content
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value (always emitted double-quoted)
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
