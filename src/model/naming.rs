//! Naming policy for generated classes and accessors.
//!
//! Schema element names arrive dotted (`Patient.Contact`) or hyphenated
//! (`boolean-primitive`); class names flatten those boundaries into
//! upper-camel segments under a fixed `FHIR` prefix.

/// Class name for a schema element name.
///
/// `Patient.Contact` becomes `FHIRPatientContact`, `boolean-primitive`
/// becomes `FHIRBooleanPrimitive`.
pub fn class_name_for(element_name: &str) -> String {
    let mut out = String::with_capacity(element_name.len() + 4);
    out.push_str("FHIR");
    for segment in element_name.split(['.', '-', '_']) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Accessor suffix for a property name: `div` becomes `Div`, yielding
/// `getDiv` / `setDiv`.
pub fn accessor_suffix(property_name: &str) -> String {
    let mut chars = property_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
