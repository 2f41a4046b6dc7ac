//! Ordered XML document tree built from quick-xml events.
//!
//! Unlike a plain event stream, the tree keeps sibling order, attributes,
//! comments and the byte offset at which each element starts, which is what
//! the markup dialects need to attribute comments and compute line numbers.

use std::borrow::Cow;

use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A node of the document in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    /// Non-blank character data with entities decoded.
    Text(String),
    /// Raw comment body, without the `<!--`/`-->` delimiters.
    Comment(String),
}

impl XmlNode {
    /// First text found in this node, searching depth-first.
    pub fn first_text(&self) -> Option<&str> {
        match self {
            XmlNode::Text(text) => Some(text.as_str()),
            XmlNode::Element(element) => element.children.iter().find_map(XmlNode::first_text),
            XmlNode::Comment(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
    /// Byte offset of the element's `<` in the source.
    pub offset: usize,
}

impl XmlElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child that is not a comment.
    pub fn first_content(&self) -> Option<&XmlNode> {
        self.children
            .iter()
            .find(|child| !matches!(child, XmlNode::Comment(_)))
    }

    /// 1-based line of the element's start tag within `source`.
    pub fn line(&self, source: &str) -> usize {
        let end = self.offset.min(source.len());
        source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
    }
}

/// Top-level nodes of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlDocument {
    pub children: Vec<XmlNode>,
}

/// Parse markup into an ordered document tree.
///
/// Unclosed elements at end of input are closed implicitly; mismatched end
/// tags and malformed syntax are reported as errors.
pub fn parse_document(source: &str) -> Result<XmlDocument> {
    let mut reader = Reader::from_str(source);

    let mut document = XmlDocument::default();
    let mut open: Vec<XmlElement> = Vec::new();

    loop {
        let offset = reader.buffer_position() as usize;
        let event = reader
            .read_event()
            .with_context(|| format!("Malformed XML at byte {}", reader.error_position()))?;

        let node = match event {
            Event::Start(start) => {
                open.push(element_from(&start, offset)?);
                continue;
            }
            Event::Empty(start) => XmlNode::Element(element_from(&start, offset)?),
            Event::End(_) => match open.pop() {
                Some(element) => XmlNode::Element(element),
                None => continue,
            },
            Event::Text(text) => {
                let decoded = text
                    .unescape()
                    .unwrap_or_else(|_| Cow::Owned(String::from_utf8_lossy(&text).into_owned()));
                if decoded.trim().is_empty() {
                    continue;
                }
                XmlNode::Text(decoded.into_owned())
            }
            Event::CData(data) => {
                let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                if text.trim().is_empty() {
                    continue;
                }
                XmlNode::Text(text)
            }
            Event::Comment(comment) => {
                XmlNode::Comment(String::from_utf8_lossy(&comment).into_owned())
            }
            Event::Eof => break,
            _ => continue,
        };

        attach(&mut document, &mut open, node);
    }

    while let Some(element) = open.pop() {
        attach(&mut document, &mut open, XmlNode::Element(element));
    }

    Ok(document)
}

fn element_from(start: &BytesStart<'_>, offset: usize) -> Result<XmlElement> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute =
            attribute.with_context(|| format!("Malformed attribute on <{}>", name))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map(Cow::into_owned)
            .unwrap_or_else(|_| String::from_utf8_lossy(&attribute.value).into_owned());
        attributes.push((key, value));
    }

    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
        offset,
    })
}

fn attach(document: &mut XmlDocument, open: &mut [XmlElement], node: XmlNode) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => document.children.push(node),
    }
}
