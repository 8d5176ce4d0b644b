//! Property models and their declared-type classification.

use std::sync::Arc;

/// Generic scalar type name used for primitive, list, and markup
/// properties.
pub const SCALAR_TYPE: &str = "string";

/// The resolved declared type of a property.
///
/// Exactly one classification applies to a property, which the enum makes
/// structural. Primitive, list, and markup types all render as the generic
/// scalar; only class references carry a resolved name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DeclaredType {
    /// A `*-primitive` schema type.
    Primitive,
    /// A `*-list` schema type.
    List,
    /// Embedded XHTML markup.
    Markup,
    /// A reference to another generated class.
    Class(Arc<str>),
}

impl DeclaredType {
    pub fn is_primitive(&self) -> bool {
        matches!(self, DeclaredType::Primitive)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, DeclaredType::List)
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, DeclaredType::Markup)
    }

    /// Primitive, list, and markup properties all render as plain scalars.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, DeclaredType::Class(_))
    }

    /// The type name an emitter writes for this classification.
    pub fn render(&self) -> &str {
        match self {
            DeclaredType::Primitive | DeclaredType::List | DeclaredType::Markup => SCALAR_TYPE,
            DeclaredType::Class(name) => name,
        }
    }
}

/// One modeled property of a generated class.
///
/// Created once per schema construct that yields a valid name; treat as a
/// value object after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PropertyModel {
    /// Property name as it appears in the schema.
    pub name: Arc<str>,
    /// Raw schema type reference (`html` for markup properties).
    pub type_ref: Arc<str>,
    /// Resolved declared-type classification.
    pub declared: DeclaredType,
    /// Documentation pulled from the schema, if any.
    pub documentation: Option<Arc<str>>,
    /// Whether the property holds many values.
    pub collection: bool,
}

impl PropertyModel {
    pub fn new(name: impl Into<Arc<str>>, declared: DeclaredType) -> Self {
        Self {
            name: name.into(),
            type_ref: "".into(),
            declared,
            documentation: None,
            collection: false,
        }
    }

    /// Set the raw schema type reference.
    pub fn with_type_ref(mut self, type_ref: impl Into<Arc<str>>) -> Self {
        self.type_ref = type_ref.into();
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, documentation: Option<Arc<str>>) -> Self {
        self.documentation = documentation;
        self
    }

    /// Set the collection flag.
    pub fn with_collection(mut self, collection: bool) -> Self {
        self.collection = collection;
        self
    }

    pub fn is_primitive(&self) -> bool {
        self.declared.is_primitive()
    }

    pub fn is_list(&self) -> bool {
        self.declared.is_list()
    }

    pub fn is_markup(&self) -> bool {
        self.declared.is_markup()
    }

    /// The declared type as an emitter renders it: the scalar or class
    /// name, with the collection marker appended for collections.
    pub fn rendered_type(&self) -> String {
        if self.collection {
            format!("{}[]", self.declared.render())
        } else {
            self.declared.render().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_type_classifications_are_exclusive() {
        let class = DeclaredType::Class("FHIRCoding".into());
        assert!(!class.is_primitive() && !class.is_list() && !class.is_markup());
        assert!(DeclaredType::Primitive.is_primitive());
        assert!(!DeclaredType::Primitive.is_list());
        assert!(DeclaredType::List.is_list());
        assert!(DeclaredType::Markup.is_markup());
    }

    #[test]
    fn test_scalar_types_render_as_string() {
        assert_eq!(DeclaredType::Primitive.render(), SCALAR_TYPE);
        assert_eq!(DeclaredType::List.render(), SCALAR_TYPE);
        assert_eq!(DeclaredType::Markup.render(), SCALAR_TYPE);
        assert_eq!(DeclaredType::Class("FHIRPeriod".into()).render(), "FHIRPeriod");
    }

    #[test]
    fn test_rendered_type_decorates_collections() {
        let property = PropertyModel::new("coding", DeclaredType::Class("FHIRCoding".into()))
            .with_collection(true);
        assert_eq!(property.rendered_type(), "FHIRCoding[]");

        let scalar = PropertyModel::new("value", DeclaredType::Primitive);
        assert_eq!(scalar.rendered_type(), "string");
    }
}
