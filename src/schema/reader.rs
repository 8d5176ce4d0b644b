//! XSD reader — event-based parse into a [`SchemaNode`] tree.
//!
//! The reader mirrors document structure exactly; no schema semantics are
//! applied beyond construct-kind classification and namespace-prefix
//! stripping. Text content is attached to the enclosing construct, which
//! is how documentation bodies travel.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smol_str::SmolStr;

use super::error::SchemaError;
use super::node::SchemaNode;

/// A parsed schema document.
#[derive(Clone, Debug)]
pub struct Schema {
    /// The document root construct (`xs:schema` in well-formed input).
    pub root: SchemaNode,
}

/// Read a schema document from raw bytes.
pub fn read_schema(input: &[u8]) -> Result<Schema, SchemaError> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<SchemaNode> = Vec::new();
    let mut root: Option<SchemaNode> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(node_from_start(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let node = node_from_start(e)?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::End(_)) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| SchemaError::xml("unbalanced closing tag"))?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::Text(ref t)) => {
                if let Some(parent) = stack.last_mut() {
                    let text = t
                        .unescape()
                        .map_err(|e| SchemaError::xml(format!("Text error: {e}")))?;
                    if !text.is_empty() {
                        parent.text = Some(text.into_owned());
                    }
                }
            }
            Ok(Event::Eof) => break,
            // Declarations, comments, processing instructions, CDATA
            Ok(_) => {}
            Err(e) => return Err(SchemaError::xml(e.to_string())),
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(SchemaError::UnexpectedEof);
    }
    root.map(|root| Schema { root }).ok_or(SchemaError::MissingRoot)
}

/// Read a schema document from a file on disk.
pub fn read_schema_file(path: impl AsRef<Path>) -> Result<Schema, SchemaError> {
    let bytes = std::fs::read(path)?;
    read_schema(&bytes)
}

fn node_from_start(e: &BytesStart<'_>) -> Result<SchemaNode, SchemaError> {
    let name_bytes = e.name();
    let tag = std::str::from_utf8(name_bytes.as_ref())
        .map_err(|_| SchemaError::utf8("tag name"))?;
    let mut node = SchemaNode::new(local_name(tag));

    for attr_result in e.attributes() {
        let attr =
            attr_result.map_err(|e| SchemaError::xml(format!("Attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|_| SchemaError::utf8("attribute name"))?;
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attr
            .unescape_value()
            .map_err(|e| SchemaError::xml(format!("Attribute value error: {e}")))?;
        node.push_attribute(local_name(key), value.into_owned());
    }

    Ok(node)
}

/// Strip a namespace prefix: `xs:element` becomes `element`.
fn local_name(qualified: &str) -> SmolStr {
    match qualified.split_once(':') {
        Some((_, local)) => local.into(),
        None => qualified.into(),
    }
}

fn attach(
    stack: &mut Vec<SchemaNode>,
    root: &mut Option<SchemaNode>,
    node: SchemaNode,
) -> Result<(), SchemaError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(node);
            Ok(())
        }
        None if root.is_some() => Err(SchemaError::xml("multiple document roots")),
        None => {
            *root = Some(node);
            Ok(())
        }
    }
}
