//! Accessor synthesis — getter/setter derivation for modeled properties.

use crate::model::naming;
use crate::model::{AccessorKind, ClassModel, MethodModel, PropertyModel, Visibility};

/// Derive the getter/setter pair for one property.
///
/// Names follow the capitalize-and-prefix scheme (`div` → `getDiv` /
/// `setDiv`), both accessors are public, and documentation is copied
/// verbatim from the property. The declared type is the property's
/// rendered type, collection marker included, for the getter's return and
/// the setter's parameter alike.
pub fn synthesize_accessors(property: &PropertyModel) -> [MethodModel; 2] {
    let suffix = naming::accessor_suffix(&property.name);
    let declared_type: std::sync::Arc<str> = property.rendered_type().into();

    let getter = MethodModel {
        name: format!("get{suffix}").into(),
        kind: AccessorKind::Getter,
        visibility: Visibility::Public,
        property: property.name.clone(),
        documentation: property.documentation.clone(),
        declared_type: declared_type.clone(),
    };
    let setter = MethodModel {
        name: format!("set{suffix}").into(),
        kind: AccessorKind::Setter,
        visibility: Visibility::Public,
        property: property.name.clone(),
        documentation: property.documentation.clone(),
        declared_type,
    };
    [getter, setter]
}

/// Synthesize accessors for every property of a finished class, in
/// property-declaration order.
pub fn implement_accessors(class: &mut ClassModel) {
    let methods: Vec<MethodModel> = class
        .properties()
        .iter()
        .flat_map(synthesize_accessors)
        .collect();
    for method in methods {
        class.push_method(method);
    }
}
