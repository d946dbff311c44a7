//! Element tree for the settings documents, written with quick-xml

use std::borrow::Cow;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use crate::Result;
use crate::error::Error;

const INDENT_SIZE: usize = 3;

/// An XML element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute. Attributes render in the order they are added.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Render this element as the root of a complete UTF-8 document
    pub fn to_document(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;
        self.write_to(&mut writer)?;

        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        String::from_utf8(bytes).map_err(xml_error)
    }

    fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute(Attribute {
                key: QName(key.as_bytes()),
                value: Cow::Owned(attribute_value(value).into_bytes()),
            });
        }

        if self.children.is_empty() {
            return writer.write_event(Event::Empty(start)).map_err(xml_error);
        }

        writer.write_event(Event::Start(start)).map_err(xml_error)?;
        for child in &self.children {
            child.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str()))).map_err(xml_error)
    }
}

fn xml_error(e: impl std::fmt::Display) -> Error {
    Error::Xml(e.to_string())
}

/// Escape an attribute value. Whitespace other than a space is written as
/// a character reference so parsers do not normalise it away.
fn attribute_value(value: &str) -> String {
    let escaped = quick_xml::escape::escape(value);
    if !escaped.contains(['\n', '\r', '\t']) {
        return escaped.into_owned();
    }

    escaped
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_root_self_closes() {
        let doc = Element::new("Workspace").attr("version", "1.0").to_document().unwrap();
        assert_eq!(
            doc,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Workspace version=\"1.0\"/>\n"
        );
    }

    #[test]
    fn test_children_are_indented_in_order() {
        let doc = Element::new("root")
            .child(Element::new("a").attr("k", "1"))
            .child(Element::new("b"))
            .to_document()
            .unwrap();

        assert_eq!(
            doc,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n   <a k=\"1\"/>\n   <b/>\n</root>\n"
        );
    }

    #[test]
    fn test_attribute_order_is_preserved() {
        let doc = Element::new("p").attr("z", "1").attr("a", "2").to_document().unwrap();
        assert!(doc.contains(r#"<p z="1" a="2"/>"#));
    }

    #[test]
    fn test_attribute_value_escaping() {
        assert_eq!(attribute_value(r#"a&b<c>"d'"#), "a&amp;b&lt;c&gt;&quot;d&apos;");
        assert_eq!(attribute_value("plain/path with space"), "plain/path with space");
        assert_eq!(attribute_value("a\nb\rc\td"), "a&#10;b&#13;c&#9;d");
    }

    #[test]
    fn test_escaped_value_in_document() {
        let doc = Element::new("FileRef").attr("location", "group:A & B\n.xcodeproj")
            .to_document()
            .unwrap();
        assert!(doc.contains(r#"location="group:A &amp; B&#10;.xcodeproj""#));
    }

    #[test]
    fn test_attribute_lookup() {
        let el = Element::new("FileRef").attr("location", "group:x");
        assert_eq!(el.attribute("location"), Some("group:x"));
        assert_eq!(el.attribute("missing"), None);
        assert_eq!(el.name(), "FileRef");
    }
}
