//! Class-model value types.
//!
//! These are the outputs of generation: one [`ClassModel`] per schema
//! element, holding the [`PropertyModel`]s discovered during the subtree
//! walk and the [`MethodModel`] accessors synthesized from them. All types
//! here are plain data, ready for an external emitter to render.

mod class;
pub mod naming;
mod property;

pub use class::{AccessorKind, ClassModel, MethodModel, Visibility};
pub use property::{DeclaredType, PropertyModel, SCALAR_TYPE};
