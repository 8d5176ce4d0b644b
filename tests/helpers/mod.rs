//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use fhirgen::{GenerationOutput, Generator, GeneratorConfig, read_schema};
use once_cell::sync::Lazy;

/// A trimmed-down rendition of the FHIR base schema: enough structure to
/// exercise inheritance, choices, markup references, and the diagnostic
/// paths in one pass.
pub const FIXTURE_XSD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns:xhtml="http://www.w3.org/1999/xhtml">
  <xs:complexType name="Element">
    <xs:annotation>
      <xs:documentation>Base definition for all elements.</xs:documentation>
    </xs:annotation>
    <xs:sequence>
      <xs:element name="extension" type="Extension" minOccurs="0" maxOccurs="unbounded"/>
    </xs:sequence>
    <xs:attribute name="id" type="id-primitive"/>
  </xs:complexType>
  <xs:complexType name="Extension">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:attribute name="url" type="uri-primitive"/>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Identifier"/>
  <xs:complexType name="HumanName"/>
  <xs:complexType name="Coding">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:sequence>
          <xs:element name="system" type="uri-primitive" minOccurs="0"/>
          <xs:element name="code" type="code-primitive" minOccurs="0"/>
          <xs:element name="display" type="string-primitive" minOccurs="0"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="CodeableConcept">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:sequence>
          <xs:element name="coding" type="Coding" minOccurs="0" maxOccurs="unbounded">
            <xs:annotation>
              <xs:documentation>Code defined by a terminology system.</xs:documentation>
            </xs:annotation>
          </xs:element>
          <xs:element name="text" type="string-primitive" minOccurs="0"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Narrative">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:sequence>
          <xs:element name="status" type="NarrativeStatus-list" minOccurs="1"/>
          <xs:element ref="xhtml:div" minOccurs="1"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Patient">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:sequence>
          <xs:choice maxOccurs="unbounded">
            <xs:annotation>
              <xs:documentation>Indicates if the individual is deceased.</xs:documentation>
            </xs:annotation>
            <xs:element name="deceasedBoolean" type="boolean-primitive"/>
            <xs:element name="deceasedDateTime" type="dateTime-primitive"/>
          </xs:choice>
        </xs:sequence>
        <xs:sequence>
          <xs:element name="identifier" type="Identifier" minOccurs="0" maxOccurs="unbounded"/>
          <xs:element name="name" type="HumanName" minOccurs="0" maxOccurs="unbounded"/>
          <xs:element minOccurs="0"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:simpleType name="code-primitive">
    <xs:restriction base="xs:string"/>
  </xs:simpleType>
  <xs:simpleType name="NarrativeStatus-list">
    <xs:restriction base="code-primitive">
      <xs:enumeration value="generated"/>
      <xs:enumeration value="additional"/>
    </xs:restriction>
  </xs:simpleType>
  <xs:simpleType name="SampledDataDataType">
    <xs:union memberTypes="decimal-primitive code-primitive"/>
  </xs:simpleType>
</xs:schema>"#;

/// One generation run over the fixture, shared across suites.
pub static OUTPUT: Lazy<GenerationOutput> = Lazy::new(|| {
    let schema = read_schema(FIXTURE_XSD.as_bytes()).expect("fixture schema must parse");
    Generator::new(GeneratorConfig::new("App::Fhir")).generate_from_schemas(&[schema])
});
