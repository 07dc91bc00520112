//! In-memory node tree for live presentation.
//!
//! Unlike the static page, sections are not wrapped in links: one section
//! carries the `current` class and the host moves it as the audience
//! navigates.

use crate::html::background_image_style;
use crate::types::{ContentBlock, Presentation, Slide};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};

/// Class marking the slide on screen.
pub const CURRENT_CLASS: &str = "current";
const CENTERED_CLASS: &str = "slide--centered";
const END_CLASS: &str = "slide--end";

/// An element with classes, attributes, text and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Element name, e.g. `section`.
    pub tag: String,

    /// Class list, in insertion order.
    pub classes: Vec<String>,

    /// Attributes other than `class`, in insertion order.
    pub attributes: Vec<(String, String)>,

    /// Text content, written before any children.
    pub text: Option<String>,

    /// Child elements.
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Append a class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class unless already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove every occurrence of a class.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Serialize as HTML. Void elements get no closing tag.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&encode_double_quoted_attribute(&self.classes.join(" ")));
            out.push('"');
        }
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&encode_double_quoted_attribute(value));
            out.push('"');
        }
        out.push('>');

        if self.tag == "img" {
            return;
        }

        if let Some(text) = &self.text {
            out.push_str(&encode_text(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// A presentation materialized as a tree, with one current slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideTree {
    root: Node,
    current: Option<usize>,
}

impl SlideTree {
    /// Build the tree with the first slide marked current.
    pub fn new(presentation: &Presentation) -> Self {
        let root = presentation
            .slides()
            .iter()
            .fold(Node::new("main"), |root, slide| {
                root.with_child(slide_node(slide))
            });

        let mut tree = Self {
            root,
            current: None,
        };
        tree.set_current(Some(0));
        tree
    }

    /// The `main` element holding one section per slide.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Index of the section marked current.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Move the current marker; `None` clears it. Out-of-range indices clear it too.
    pub fn set_current(&mut self, index: Option<usize>) {
        if let Some(previous) = self.current.take() {
            if let Some(section) = self.root.children.get_mut(previous) {
                section.remove_class(CURRENT_CLASS);
            }
        }

        if let Some(index) = index {
            if let Some(section) = self.root.children.get_mut(index) {
                section.add_class(CURRENT_CLASS);
                self.current = Some(index);
            }
        }
    }

    /// Serialize the sections, without the `main` wrapper.
    pub fn inner_html(&self) -> String {
        self.root.children.iter().map(Node::to_html).collect()
    }
}

fn slide_node(slide: &Slide) -> Node {
    let mut section = Node::new("section");
    if slide.is_end() {
        return section.with_class(END_CLASS);
    }
    if slide.centered {
        section = section.with_class(CENTERED_CLASS);
    }
    slide
        .blocks
        .iter()
        .fold(section, |section, block| section.with_child(block_node(block)))
}

fn block_node(block: &ContentBlock) -> Node {
    match block {
        ContentBlock::Heading { level, text } => Node::new(format!("h{}", level)).with_text(text),
        ContentBlock::Subtitle { text } | ContentBlock::Paragraph { text } => {
            Node::new("p").with_text(text)
        }
        ContentBlock::FullBleedMedia { url, .. } => Node::new("div")
            .with_class("full-bleed")
            .with_attribute("style", background_image_style(url)),
        ContentBlock::BulletList { items } => items.iter().fold(Node::new("ul"), |list, item| {
            list.with_child(Node::new("li").with_text(item))
        }),
        ContentBlock::Gallery { items } => items.iter().fold(
            Node::new("ul").with_class("gallery"),
            |gallery, item| {
                gallery.with_child(
                    Node::new("li").with_child(
                        Node::new("img")
                            .with_attribute("src", &item.url)
                            .with_attribute("alt", &item.alt),
                    ),
                )
            },
        ),
        ContentBlock::CodeBlock { lines } => Node::new("pre").with_text(lines.concat()),
    }
}
