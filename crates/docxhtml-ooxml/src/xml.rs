//! Namespace-resolved XML element tree
//!
//! The main document part is read once into a small owned tree. Property
//! nodes (`w:rPr`, `w:pPr`, `w:tcPr`, ...) are kept in this generic form and
//! queried by the style mapper; block and inline content is lifted into the
//! typed model in [`crate::document`].

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::error::{OoxmlError, Result};
use crate::namespaces::{Namespaces, Ns};

/// An attribute with its resolved namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    pub ns: Ns,
    pub local: String,
    pub value: String,
}

/// A node in the element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with its resolved namespace, attributes and ordered children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub ns: Ns,
    pub local: String,
    pub attributes: Vec<XmlAttribute>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Parse a complete XML part and return its root element
    pub fn parse(xml: &[u8], namespaces: &Namespaces) -> Result<Self> {
        let mut reader = NsReader::from_reader(xml);
        // Whitespace inside <w:t> is content
        reader.config_mut().trim_text(false);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    let element = open_element(&reader, e, namespaces)?;
                    stack.push(element);
                }
                Event::Empty(ref e) => {
                    let element = open_element(&reader, e, namespaces)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| {
                        OoxmlError::InvalidStructure("unbalanced end tag".to_string())
                    })?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(ref t) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = t.unescape()?;
                        if !text.is_empty() {
                            parent.children.push(XmlNode::Text(text.into_owned()));
                        }
                    }
                }
                Event::CData(ref c) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = String::from_utf8_lossy(c).into_owned();
                        parent.children.push(XmlNode::Text(text));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(OoxmlError::InvalidStructure(format!(
                "unexpected end of input inside <{}>",
                stack.last().map(|e| e.local.as_str()).unwrap_or_default()
            )));
        }

        root.ok_or_else(|| OoxmlError::InvalidStructure("document has no root element".to_string()))
    }

    /// Whether this is the WordprocessingML element `w:{local}`
    pub fn is(&self, local: &str) -> bool {
        self.ns == Ns::Main && self.local == local
    }

    /// Element children in document order
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// First `w:{local}` child
    pub fn child(&self, local: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.is(local))
    }

    /// All `w:{local}` children
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |e| e.is(local))
    }

    /// Value of the `w:{local}` attribute
    pub fn attr(&self, local: &str) -> Option<&str> {
        self.attr_in(Ns::Main, local)
    }

    /// Value of the `r:{local}` attribute
    pub fn rel_attr(&self, local: &str) -> Option<&str> {
        self.attr_in(Ns::Relationships, local)
    }

    /// Value of an attribute in a given namespace
    pub fn attr_in(&self, ns: Ns, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.ns == ns && a.local == local)
            .map(|a| a.value.as_str())
    }

    /// Concatenated direct text children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(t) => Some(t.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }
}

fn open_element(
    reader: &NsReader<&[u8]>,
    start: &BytesStart,
    namespaces: &Namespaces,
) -> Result<XmlElement> {
    let (resolved, local) = reader.resolve_element(start.name());
    let ns = classify(&resolved, namespaces);
    let local = String::from_utf8_lossy(local.as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (resolved, attr_local) = reader.resolve_attribute(attr.key);
        attributes.push(XmlAttribute {
            ns: classify(&resolved, namespaces),
            local: String::from_utf8_lossy(attr_local.as_ref()).into_owned(),
            value: attr.unescape_value()?.into_owned(),
        });
    }

    Ok(XmlElement {
        ns,
        local,
        attributes,
        children: Vec::new(),
    })
}

fn classify(resolved: &ResolveResult, namespaces: &Namespaces) -> Ns {
    match resolved {
        ResolveResult::Bound(ns) => namespaces.classify(ns.as_ref()),
        ResolveResult::Unbound | ResolveResult::Unknown(_) => Ns::None,
    }
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Element(element));
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(OoxmlError::InvalidStructure(
            "more than one root element".to_string(),
        )),
    }
}
