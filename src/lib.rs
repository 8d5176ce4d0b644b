//! # fhirgen-base
//!
//! Core library for FHIR XSD schema loading, class modeling, and accessor
//! synthesis.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! codegen     → class/property builders, type resolution, accessors
//!   ↓
//! symbols     → SymbolTable built from schema roots
//!   ↓
//! model       → ClassModel/PropertyModel/MethodModel, naming policy
//!   ↓
//! schema      → ConstructKind, SchemaNode tree, XSD reader
//!   ↓
//! diagnostics → severity/kind taxonomy, collecting sink
//! config      → explicit generation configuration
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use fhirgen::{Generator, GeneratorConfig, read_schema_file};
//!
//! let schema = read_schema_file("fhir-base.xsd")?;
//! let generator = Generator::new(GeneratorConfig::new("App::Fhir"));
//! let output = generator.generate_from_schemas(&[schema]);
//!
//! for class in output.classes.values() {
//!     // hand each ClassModel to a code emitter
//! }
//! ```

// ============================================================================
// MODULES (dependency order: diagnostics/config → schema → model → symbols
// → codegen)
// ============================================================================

/// Non-fatal problem reporting for generation runs
pub mod diagnostics;

/// Generation configuration
pub mod config;

/// Schema construct tree and XSD reader
pub mod schema;

/// Class-model value types and naming policy
pub mod model;

/// Symbol table: the schema element registry
pub mod symbols;

/// The generator core: builders, type resolution, accessor synthesis
pub mod codegen;

// Re-export commonly needed items
pub use codegen::{GenerationOutput, Generator};
pub use config::GeneratorConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Severity};
pub use model::{AccessorKind, ClassModel, DeclaredType, MethodModel, PropertyModel, Visibility};
pub use schema::{
    ConstructKind, Schema, SchemaError, SchemaNode, read_schema, read_schema_file,
};
pub use symbols::{SymbolEntry, SymbolTable};
