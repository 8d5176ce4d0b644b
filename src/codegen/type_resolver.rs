//! Type classification for schema type references.
//!
//! Deliberately substring-based: the FHIR schemas mark primitive and list
//! types with reserved name suffixes rather than a structured type system,
//! and everything else is a reference to another generated class.

use crate::model::DeclaredType;
use crate::symbols::SymbolTable;

/// Marker substring identifying primitive schema types.
pub const PRIMITIVE_MARKER: &str = "-primitive";

/// Marker substring identifying list schema types.
pub const LIST_MARKER: &str = "-list";

/// Classify a raw type reference.
///
/// The primitive check runs first, so a reference matching both markers is
/// primitive. Unmarked references resolve through the symbol table, which
/// applies its own fallback when the name is unknown.
pub fn classify_type(type_ref: &str, table: &SymbolTable) -> DeclaredType {
    if type_ref.contains(PRIMITIVE_MARKER) {
        DeclaredType::Primitive
    } else if type_ref.contains(LIST_MARKER) {
        DeclaredType::List
    } else {
        DeclaredType::Class(table.declared_type_for(type_ref))
    }
}
