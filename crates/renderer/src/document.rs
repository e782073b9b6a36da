//! In-memory element tree that charts are drawn into.
//!
//! The tree is deliberately small: elements with ordered attributes, inline
//! style properties and children. It serializes to markup that is valid both
//! as HTML and as standalone SVG/XML (every element gets an explicit closing
//! tag), and offers the id/class lookups tests and page assembly need.

use std::fmt::Write;

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Pre-rendered markup inserted verbatim.
    Raw(String),
}

/// A single element with attributes, inline styles and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute, replacing any previous value while keeping its position.
    pub fn set_attr(&mut self, name: &str, value: impl ToString) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|name| name == class))
            .unwrap_or(false)
    }

    /// Builder form of [`Element::set_style`].
    pub fn style(mut self, property: &str, value: impl ToString) -> Self {
        self.set_style(property, value);
        self
    }

    pub fn set_style(&mut self, property: &str, value: impl ToString) {
        let value = value.to_string();
        match self.styles.iter_mut().find(|(k, _)| k == property) {
            Some((_, v)) => *v = value,
            None => self.styles.push((property.to_string(), value)),
        }
    }

    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Append a text node.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Replace all children with pre-rendered markup.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.children.clear();
        self.children.push(Node::Raw(html.into()));
    }

    /// Builder form of [`Element::push`].
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append a child element and return a handle to it.
    pub fn push(&mut self, child: Element) -> &mut Element {
        self.children.push(Node::Element(child));
        match self.children.last_mut() {
            Some(Node::Element(el)) => el,
            _ => unreachable!("an element was just pushed"),
        }
    }

    /// Direct child elements, skipping text.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Concatenated text of this element and its descendants.
    ///
    /// Raw markup is included as-is.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Element(el) => out.push_str(&el.text_content()),
                Node::Text(t) | Node::Raw(t) => out.push_str(t),
            }
        }
        out
    }

    /// Depth-first search for an element with the given id, including self.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(el) => el.find_by_id_mut(id),
            _ => None,
        })
    }

    /// All descendants carrying `class`, in document order.
    pub fn select_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        for child in self.children() {
            if child.has_class(class) {
                found.push(child);
            }
            child.collect_by_class(class, found);
        }
    }

    /// Serialize this element and its subtree.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    pub fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        if !self.styles.is_empty() {
            let style = self
                .styles
                .iter()
                .map(|(k, v)| format!("{}: {};", k, v))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(out, " style=\"{}\"", escape_attr(&style));
        }
        out.push('>');
        for node in &self.children {
            match node {
                Node::Element(el) => el.write_markup(out),
                Node::Text(t) => out.push_str(&escape_text(t)),
                Node::Raw(html) => out.push_str(html),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// The drawing surface a chart renders into.
///
/// Owns a `body` element; renderers append their output to it instead of
/// reaching for any global document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTarget {
    body: Element,
}

impl Default for RenderTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget {
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
        }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn append(&mut self, element: Element) -> &mut Element {
        self.body.push(element)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_by_id_mut(id)
    }

    pub fn select_by_class(&self, class: &str) -> Vec<&Element> {
        self.body.select_by_class(class)
    }

    /// Markup of the body's children, without the `<body>` wrapper.
    pub fn inner_markup(&self) -> String {
        let mut out = String::new();
        for child in self.body.children() {
            child.write_markup(&mut out);
            out.push('\n');
        }
        out
    }
}

pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
