//! Class-model construction — the walk over one element's schema subtree.
//!
//! Direct children are dispatched by construct kind; complex content nests
//! one level of extension/restriction, which also carries the parent link.
//! The walk never fails: unknown constructs are ignored and malformed ones
//! degrade through the property builder's diagnostics.

use crate::diagnostics::DiagnosticSink;
use crate::model::ClassModel;
use crate::schema::{ConstructKind, SchemaNode};
use crate::symbols::{SymbolEntry, SymbolTable};

use super::accessors::implement_accessors;
use super::property_builder::implement_property;

/// Build the complete class model for one symbol-table entry.
///
/// Walks the entry's subtree in lexical order, then synthesizes accessors
/// for every discovered property in declaration order.
pub fn build_class(
    table: &SymbolTable,
    entry: &SymbolEntry,
    sink: &mut DiagnosticSink,
) -> ClassModel {
    let mut class = ClassModel::new(
        entry.element_name.clone(),
        entry.class_name.clone(),
        entry.namespace.clone(),
    );
    tracing::trace!(element = %entry.element_name, "building class model");

    for child in &entry.node.children {
        match child.kind {
            ConstructKind::Attribute
            | ConstructKind::Choice
            | ConstructKind::Sequence
            | ConstructKind::Union => implement_property(table, &mut class, child, sink),
            ConstructKind::Annotation => {
                // Last annotation wins; schema practice has at most one.
                class.documentation = child.documentation().map(Into::into);
            }
            ConstructKind::ComplexContent => {
                parse_complex_content(table, child, &mut class, sink);
            }
            ConstructKind::Restriction => parse_restriction(table, child, &mut class, sink),
            _ => {}
        }
    }

    implement_accessors(&mut class);
    class
}

fn parse_complex_content(
    table: &SymbolTable,
    complex_content: &SchemaNode,
    class: &mut ClassModel,
    sink: &mut DiagnosticSink,
) {
    for child in &complex_content.children {
        match child.kind {
            ConstructKind::Extension => parse_extension(table, child, class, sink),
            ConstructKind::Restriction => parse_restriction(table, child, class, sink),
            _ => {}
        }
    }
}

fn parse_restriction(
    table: &SymbolTable,
    restriction: &SchemaNode,
    class: &mut ClassModel,
    sink: &mut DiagnosticSink,
) {
    determine_parent(table, restriction, class);
    for child in &restriction.children {
        match child.kind {
            ConstructKind::Attribute
            | ConstructKind::Choice
            | ConstructKind::Union
            | ConstructKind::Sequence
            | ConstructKind::Enumeration => implement_property(table, class, child, sink),
            _ => {}
        }
    }
}

fn parse_extension(
    table: &SymbolTable,
    extension: &SchemaNode,
    class: &mut ClassModel,
    sink: &mut DiagnosticSink,
) {
    determine_parent(table, extension, class);
    for child in &extension.children {
        match child.kind {
            ConstructKind::Attribute
            | ConstructKind::Choice
            | ConstructKind::Sequence
            | ConstructKind::Union
            | ConstructKind::Enumeration => implement_property(table, class, child, sink),
            _ => {}
        }
    }
}

/// Resolve the parent link from an extension or restriction base reference.
///
/// Schema-builtin (`xs`-prefixed) bases and names absent from the symbol
/// table leave the class parentless; neither is an error.
fn determine_parent(table: &SymbolTable, node: &SchemaNode, class: &mut ClassModel) {
    let Some(base) = base_type_of(node) else {
        return;
    };
    if base.starts_with("xs") {
        return;
    }
    match table.resolve(base) {
        Some(entry) => class.parent = Some(entry.element_name.clone()),
        None => tracing::debug!(
            class = %class.element_name,
            base,
            "base element not in symbol table, class stays parentless"
        ),
    }
}

/// Base-type reference of an extension or restriction construct.
fn base_type_of(node: &SchemaNode) -> Option<&str> {
    match node.kind {
        ConstructKind::Extension | ConstructKind::Restriction => node.attribute("base"),
        _ => None,
    }
}
