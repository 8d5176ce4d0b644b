//! Class and accessor models.

use std::sync::Arc;

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};

use super::property::PropertyModel;

// ============================================================================
// ACCESSORS
// ============================================================================

/// Visibility of a synthesized accessor. Always public in the current
/// scope of the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Visibility {
    Public,
}

impl Visibility {
    pub fn display(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
        }
    }
}

/// Which accessor a [`MethodModel`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AccessorKind {
    Getter,
    Setter,
}

/// One synthesized accessor, ready for textual rendering by an external
/// template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MethodModel {
    /// Synthesized method name (`getDiv`, `setDiv`).
    pub name: Arc<str>,
    pub kind: AccessorKind,
    pub visibility: Visibility,
    /// Name of the property this accessor belongs to.
    pub property: Arc<str>,
    /// Documentation copied verbatim from the property.
    pub documentation: Option<Arc<str>>,
    /// Declared type the getter returns and the setter accepts, with the
    /// collection marker already applied.
    pub declared_type: Arc<str>,
}

// ============================================================================
// CLASS MODEL
// ============================================================================

/// The complete model of one generated class.
///
/// Created per schema element, mutated while the element's subtree is
/// walked, and considered complete once the walk returns. The parent link
/// is a symbol-table key, never an owning pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassModel {
    /// Schema element name this class was generated from.
    pub element_name: Arc<str>,
    /// Generated class name.
    pub class_name: Arc<str>,
    /// Namespace the class is placed under.
    pub namespace: Arc<str>,
    /// Class-level documentation (last annotation wins).
    pub documentation: Option<Arc<str>>,
    properties: Vec<PropertyModel>,
    /// Symbol-table key of the parent element, when the class extends one.
    pub parent: Option<Arc<str>>,
    methods: Vec<MethodModel>,
}

impl ClassModel {
    pub fn new(
        element_name: impl Into<Arc<str>>,
        class_name: impl Into<Arc<str>>,
        namespace: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            element_name: element_name.into(),
            class_name: class_name.into(),
            namespace: namespace.into(),
            documentation: None,
            properties: Vec::new(),
            parent: None,
            methods: Vec::new(),
        }
    }

    /// Append a property.
    ///
    /// A property whose name is already taken replaces the earlier one
    /// (last wins) and records a [`DiagnosticKind::DuplicateProperty`].
    pub fn push_property(&mut self, property: PropertyModel, sink: &mut DiagnosticSink) {
        if let Some(index) = self.properties.iter().position(|p| p.name == property.name) {
            sink.push(Diagnostic::warning(
                DiagnosticKind::DuplicateProperty,
                self.element_name.clone(),
                format!(
                    "property '{}' defined more than once on '{}', keeping the last definition",
                    property.name, self.element_name
                ),
            ));
            self.properties[index] = property;
            return;
        }
        self.properties.push(property);
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> &[PropertyModel] {
        &self.properties
    }

    pub fn push_method(&mut self, method: MethodModel) {
        self.methods.push(method);
    }

    /// Synthesized accessors, in property-declaration order.
    pub fn methods(&self) -> &[MethodModel] {
        &self.methods
    }
}
