#![allow(clippy::unwrap_used)]

#[path = "helpers/mod.rs"]
mod helpers;

use fhirgen::{DeclaredType, DiagnosticKind};
use helpers::OUTPUT;

/// Test that one class exists per named type, in document order
#[test]
fn test_one_class_per_named_type() {
    let names: Vec<_> = OUTPUT.classes.keys().map(|k| k.as_ref()).collect();
    assert_eq!(
        names,
        [
            "Element",
            "Extension",
            "Identifier",
            "HumanName",
            "Coding",
            "CodeableConcept",
            "Narrative",
            "Patient",
            "code-primitive",
            "NarrativeStatus-list",
            "SampledDataDataType",
        ]
    );
}

/// Test class naming and the configured namespace
#[test]
fn test_class_names_and_namespace() {
    let narrative = &OUTPUT.classes["Narrative"];
    assert_eq!(narrative.class_name.as_ref(), "FHIRNarrative");
    assert_eq!(narrative.namespace.as_ref(), "App::Fhir");

    let status = &OUTPUT.classes["NarrativeStatus-list"];
    assert_eq!(status.class_name.as_ref(), "FHIRNarrativeStatusList");
}

/// Test that extensions link their parent class
#[test]
fn test_parent_links_resolve_through_symbol_table() {
    assert_eq!(OUTPUT.classes["Extension"].parent.as_deref(), Some("Element"));
    assert_eq!(OUTPUT.classes["Patient"].parent.as_deref(), Some("Element"));
    // Restriction bases resolve the same way.
    assert_eq!(
        OUTPUT.classes["NarrativeStatus-list"].parent.as_deref(),
        Some("code-primitive")
    );
    // xs builtins never become parents.
    assert!(OUTPUT.classes["code-primitive"].parent.is_none());
}

/// Test the markup reference on Narrative
#[test]
fn test_narrative_div_is_markup() {
    let narrative = &OUTPUT.classes["Narrative"];
    let div = narrative
        .properties()
        .iter()
        .find(|p| p.name.as_ref() == "div")
        .unwrap();

    assert!(div.is_markup());
    assert_eq!(div.type_ref.as_ref(), "html");
    assert_eq!(div.rendered_type(), "string");

    let status = narrative
        .properties()
        .iter()
        .find(|p| p.name.as_ref() == "status")
        .unwrap();
    assert!(status.is_list());
}

/// Test cardinality and documentation of sequence members
#[test]
fn test_codeable_concept_properties() {
    let concept = &OUTPUT.classes["CodeableConcept"];
    let names: Vec<_> = concept.properties().iter().map(|p| p.name.as_ref()).collect();
    assert_eq!(names, ["coding", "text"]);

    let coding = &concept.properties()[0];
    assert!(coding.collection);
    assert_eq!(coding.declared, DeclaredType::Class("FHIRCoding".into()));
    assert_eq!(
        coding.documentation.as_deref(),
        Some("Code defined by a terminology system.")
    );

    let text = &concept.properties()[1];
    assert!(!text.collection);
    assert!(text.is_primitive());
}

/// Test that choice branches share the choice's cardinality and docs
#[test]
fn test_patient_choice_branches() {
    let patient = &OUTPUT.classes["Patient"];
    let names: Vec<_> = patient.properties().iter().map(|p| p.name.as_ref()).collect();
    assert_eq!(
        names,
        ["deceasedBoolean", "deceasedDateTime", "identifier", "name"]
    );

    for name in ["deceasedBoolean", "deceasedDateTime"] {
        let branch = patient
            .properties()
            .iter()
            .find(|p| p.name.as_ref() == name)
            .unwrap();
        assert!(branch.collection);
        assert_eq!(
            branch.documentation.as_deref(),
            Some("Indicates if the individual is deceased.")
        );
    }
}

/// Test accessor synthesis across a generated class
#[test]
fn test_accessors_per_property() {
    let concept = &OUTPUT.classes["CodeableConcept"];
    let names: Vec<_> = concept.methods().iter().map(|m| m.name.as_ref()).collect();
    assert_eq!(names, ["getCoding", "setCoding", "getText", "setText"]);

    let get_coding = &concept.methods()[0];
    assert_eq!(get_coding.declared_type.as_ref(), "FHIRCoding[]");
    assert_eq!(
        get_coding.documentation.as_deref(),
        Some("Code defined by a terminology system.")
    );
}

/// Test that malformed and unsupported constructs degrade to diagnostics
#[test]
fn test_diagnostics_are_collected_not_fatal() {
    // The nameless element on Patient.
    let missing: Vec<_> = OUTPUT
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::MissingIdentifier)
        .collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].class.as_ref(), "Patient");

    // The union and the two enumerations.
    let unsupported: Vec<_> = OUTPUT
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::UnsupportedConstruct)
        .map(|d| d.class.as_ref())
        .collect();
    assert_eq!(
        unsupported,
        [
            "NarrativeStatus-list",
            "NarrativeStatus-list",
            "SampledDataDataType"
        ]
    );

    // Nothing else went wrong.
    assert_eq!(OUTPUT.diagnostics.len(), missing.len() + unsupported.len());
}

/// Test that the documented base class carries its annotation
#[test]
fn test_class_documentation() {
    assert_eq!(
        OUTPUT.classes["Element"].documentation.as_deref(),
        Some("Base definition for all elements.")
    );
    assert!(OUTPUT.classes["Identifier"].documentation.is_none());
}
