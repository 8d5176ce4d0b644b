//! Schema construct tree and XSD reader.
//!
//! The generator core consumes an already-parsed, namespace-stripped view
//! of an XML Schema document. This module provides that view:
//!
//! ```text
//! ┌──────────────┐
//! │  .xsd bytes  │
//! └──────┬───────┘
//!        ▼
//! ┌──────────────────────────────────────────────┐
//! │ reader: quick-xml event loop                 │
//! │  - strips namespace prefixes to local names  │
//! │  - classifies tags into ConstructKind        │
//! │  - captures documentation text               │
//! └──────┬───────────────────────────────────────┘
//!        ▼
//! ┌──────────────────────────────────────────────┐
//! │ Schema { root: SchemaNode }                  │
//! │  SchemaNode: kind, tag, attributes, children │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Reading is the only fatal surface of the crate: a document that cannot
//! be parsed produces a [`SchemaError`]. Once a tree exists, every
//! downstream problem is a [`Diagnostic`](crate::diagnostics::Diagnostic).

mod error;
mod node;
mod reader;

pub use error::SchemaError;
pub use node::{ConstructKind, SchemaNode};
pub use reader::{Schema, read_schema, read_schema_file};
