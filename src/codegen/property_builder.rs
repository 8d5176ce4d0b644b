//! Property construction from schema constructs.
//!
//! One property-bearing construct (attribute, sequence member, choice
//! branch) becomes at most one [`PropertyModel`]. Constructs without a
//! usable identifier degrade to a diagnostic and are skipped; the owning
//! class keeps everything else.

use std::sync::Arc;

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::model::{ClassModel, DeclaredType, PropertyModel};
use crate::schema::{ConstructKind, SchemaNode};
use crate::symbols::SymbolTable;

use super::type_resolver::classify_type;

/// Prefix marking embedded-markup references (`xhtml:div`).
pub const MARKUP_PREFIX: &str = "xhtml:";

/// Dispatch one property-bearing construct onto a class.
pub fn implement_property(
    table: &SymbolTable,
    class: &mut ClassModel,
    node: &SchemaNode,
    sink: &mut DiagnosticSink,
) {
    match node.kind {
        ConstructKind::Attribute => implement_attribute(table, class, node, sink),
        ConstructKind::Choice => implement_choice(table, class, node, sink),
        ConstructKind::Sequence => implement_sequence(table, class, node, sink),
        ConstructKind::Union | ConstructKind::Enumeration => {
            // Not modeled yet.
            sink.push(Diagnostic::info(
                DiagnosticKind::UnsupportedConstruct,
                class.element_name.clone(),
                format!(
                    "{} constructs are not modeled yet, skipping: {node}",
                    node.kind.display()
                ),
            ));
        }
        _ => {}
    }
}

/// Build one property from an element-like construct.
///
/// `doc_override` and `max_occurs_override` take precedence over the
/// construct's own annotation and `maxOccurs` attribute: a choice passes
/// its shared values down to every branch, an attribute forces scalar
/// cardinality. Returns `None` when no valid identifier exists; the
/// diagnostic is already recorded by then.
pub fn build_property(
    table: &SymbolTable,
    owner: &Arc<str>,
    node: &SchemaNode,
    doc_override: Option<Arc<str>>,
    max_occurs_override: Option<&str>,
    sink: &mut DiagnosticSink,
) -> Option<PropertyModel> {
    let documentation =
        doc_override.or_else(|| node.documentation().map(Arc::from));

    let max_occurs = max_occurs_override.or_else(|| node.max_occurs());
    let collection = max_occurs.is_some_and(|m| !m.is_empty() && is_collection(m));

    let name = node.attribute("name").unwrap_or("");
    let type_ref = node.attribute("type").unwrap_or("");
    let reference = node.attribute("ref").unwrap_or("");

    if name.is_empty() {
        if reference.is_empty() {
            sink.push(Diagnostic::warning(
                DiagnosticKind::MissingIdentifier,
                owner.clone(),
                format!(
                    "construct on '{owner}' has no 'name' or 'ref' attribute, \
                     cannot create a property for it: {node}"
                ),
            ));
            return None;
        }

        // Markup references bypass ordinary type resolution entirely.
        if let Some(markup_name) = reference.strip_prefix(MARKUP_PREFIX) {
            return Some(
                PropertyModel::new(markup_name, DeclaredType::Markup)
                    .with_type_ref("html")
                    .with_documentation(documentation)
                    .with_collection(collection),
            );
        }

        sink.push(Diagnostic::warning(
            DiagnosticKind::UnresolvedReference,
            owner.clone(),
            format!("unable to determine property name on '{owner}' with ref \"{reference}\": {node}"),
        ));
        return None;
    }

    Some(
        PropertyModel::new(name, classify_type(type_ref, table))
            .with_type_ref(type_ref)
            .with_documentation(documentation)
            .with_collection(collection),
    )
}

/// `maxOccurs` values that mark a property as a collection: `unbounded`
/// (any casing) or an integer strictly greater than one.
pub fn is_collection(max_occurs: &str) -> bool {
    max_occurs.eq_ignore_ascii_case("unbounded")
        || max_occurs.parse::<i64>().is_ok_and(|n| n > 1)
}

/// A sequence with direct element children yields one property per child,
/// each using its own local documentation and cardinality. A sequence
/// without them is a wrapper; only its nested choices are walked.
fn implement_sequence(
    table: &SymbolTable,
    class: &mut ClassModel,
    sequence: &SchemaNode,
    sink: &mut DiagnosticSink,
) {
    if sequence.children_of_kind(ConstructKind::Element).next().is_none() {
        for choice in sequence.children_of_kind(ConstructKind::Choice) {
            implement_choice(table, class, choice, sink);
        }
        return;
    }

    let owner = class.element_name.clone();
    for element in sequence.children_of_kind(ConstructKind::Element) {
        if let Some(property) = build_property(table, &owner, element, None, None, sink) {
            class.push_property(property, sink);
        }
    }
}

/// Every branch of a choice shares the choice's own cardinality and
/// documentation.
fn implement_choice(
    table: &SymbolTable,
    class: &mut ClassModel,
    choice: &SchemaNode,
    sink: &mut DiagnosticSink,
) {
    let max_occurs = choice.max_occurs();
    let documentation: Option<Arc<str>> = choice.documentation().map(Arc::from);

    let owner = class.element_name.clone();
    for element in choice.children_of_kind(ConstructKind::Element) {
        if let Some(property) =
            build_property(table, &owner, element, documentation.clone(), max_occurs, sink)
        {
            class.push_property(property, sink);
        }
    }
}

/// Attributes are never collections.
fn implement_attribute(
    table: &SymbolTable,
    class: &mut ClassModel,
    attribute: &SchemaNode,
    sink: &mut DiagnosticSink,
) {
    let owner = class.element_name.clone();
    if let Some(property) = build_property(table, &owner, attribute, None, Some("1"), sink) {
        class.push_property(property, sink);
    }
}
