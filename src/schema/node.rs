//! The schema construct tree.

use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;

// ============================================================================
// CONSTRUCT KINDS
// ============================================================================

/// The category of a schema subtree node.
///
/// Classification uses the lowercased local tag name. Anything outside the
/// closed set maps to [`ConstructKind::Other`], which every builder treats
/// as a no-op: unknown schema constructs degrade silently instead of
/// breaking the walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    Attribute,
    Choice,
    Sequence,
    Union,
    Enumeration,
    Annotation,
    Documentation,
    ComplexContent,
    Extension,
    Restriction,
    Element,
    ComplexType,
    SimpleType,
    Schema,
    /// Any construct the generator has no policy for.
    Other,
}

impl ConstructKind {
    /// Classify a tag's local name (namespace prefix already stripped).
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "attribute" => ConstructKind::Attribute,
            "choice" => ConstructKind::Choice,
            "sequence" => ConstructKind::Sequence,
            "union" => ConstructKind::Union,
            "enumeration" => ConstructKind::Enumeration,
            "annotation" => ConstructKind::Annotation,
            "documentation" => ConstructKind::Documentation,
            "complexcontent" => ConstructKind::ComplexContent,
            "extension" => ConstructKind::Extension,
            "restriction" => ConstructKind::Restriction,
            "element" => ConstructKind::Element,
            "complextype" => ConstructKind::ComplexType,
            "simpletype" => ConstructKind::SimpleType,
            "schema" => ConstructKind::Schema,
            _ => ConstructKind::Other,
        }
    }

    /// Get a display label for this construct kind.
    pub fn display(&self) -> &'static str {
        match self {
            ConstructKind::Attribute => "attribute",
            ConstructKind::Choice => "choice",
            ConstructKind::Sequence => "sequence",
            ConstructKind::Union => "union",
            ConstructKind::Enumeration => "enumeration",
            ConstructKind::Annotation => "annotation",
            ConstructKind::Documentation => "documentation",
            ConstructKind::ComplexContent => "complexContent",
            ConstructKind::Extension => "extension",
            ConstructKind::Restriction => "restriction",
            ConstructKind::Element => "element",
            ConstructKind::ComplexType => "complexType",
            ConstructKind::SimpleType => "simpleType",
            ConstructKind::Schema => "schema",
            ConstructKind::Other => "other",
        }
    }
}

// ============================================================================
// SCHEMA NODE
// ============================================================================

/// One node of the parsed schema tree.
///
/// Attributes keep document order and are keyed by local name; namespace
/// declarations are stripped during reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaNode {
    /// Classified construct kind.
    pub kind: ConstructKind,
    /// Local tag name as written in the document.
    pub tag: SmolStr,
    /// Attributes in document order.
    attributes: IndexMap<SmolStr, String>,
    /// Child constructs in document order.
    pub children: Vec<SchemaNode>,
    /// Inline text content (documentation bodies).
    pub text: Option<String>,
}

impl SchemaNode {
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        let tag = tag.into();
        Self {
            kind: ConstructKind::from_tag(&tag),
            tag,
            attributes: IndexMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Builder-style attribute for tree construction.
    pub fn with_attribute(mut self, name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.push_attribute(name, value);
        self
    }

    /// Builder-style child for tree construction.
    pub fn with_child(mut self, child: SchemaNode) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style text content for tree construction.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn push_attribute(&mut self, name: impl Into<SmolStr>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Look up an attribute by local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterate attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate direct children of one construct kind, in document order.
    pub fn children_of_kind(&self, kind: ConstructKind) -> impl Iterator<Item = &SchemaNode> {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// The `maxOccurs` attribute, when present.
    pub fn max_occurs(&self) -> Option<&str> {
        self.attribute("maxOccurs")
    }

    /// Inline documentation of this construct.
    ///
    /// On an annotation node this reads the nested documentation text
    /// directly; on any other node it descends through the annotation child
    /// first. Absent annotation or empty text yields `None`.
    pub fn documentation(&self) -> Option<&str> {
        match self.kind {
            ConstructKind::Annotation => self
                .children_of_kind(ConstructKind::Documentation)
                .find_map(|doc| doc.text.as_deref()),
            _ => self
                .children_of_kind(ConstructKind::Annotation)
                .find_map(SchemaNode::documentation),
        }
    }
}

/// Compact one-line rendering used verbatim in diagnostics.
impl fmt::Display for SchemaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in self.attributes() {
            write!(f, " {name}=\"{value}\"")?;
        }
        write!(f, "/>")
    }
}
