use std::sync::Arc;

use indexmap::IndexMap;

use crate::config::GeneratorConfig;
use crate::model::naming;
use crate::schema::{ConstructKind, Schema, SchemaNode};

/// One resolved schema element.
#[derive(Clone, Debug)]
pub struct SymbolEntry {
    /// Schema element name - the table key.
    pub element_name: Arc<str>,
    /// Class name the generator will emit for this element.
    pub class_name: Arc<str>,
    /// Namespace the class is placed under.
    pub namespace: Arc<str>,
    /// Handle to the element's schema subtree.
    pub node: Arc<SchemaNode>,
}

/// Registry of all schema elements that warrant a generated class.
pub struct SymbolTable {
    /// Entries in insertion order, keyed by element name.
    entries: IndexMap<Arc<str>, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Build the table from parsed schema documents.
    ///
    /// Registers every named complex and simple type found directly under
    /// each schema root, in document order. The first registration of a
    /// name wins; later ones are dropped with a trace.
    pub fn build(schemas: &[Schema], config: &GeneratorConfig) -> Self {
        let mut table = Self::new();
        for schema in schemas {
            for child in &schema.root.children {
                match child.kind {
                    ConstructKind::ComplexType | ConstructKind::SimpleType => {
                        if let Some(name) = child.attribute("name") {
                            table.insert(name, config, child.clone());
                        }
                    }
                    _ => {}
                }
            }
        }
        tracing::debug!(elements = table.len(), "symbol table built");
        table
    }

    /// Register one element. The first registration of a name wins.
    pub fn insert(&mut self, element_name: &str, config: &GeneratorConfig, node: SchemaNode) {
        if self.entries.contains_key(element_name) {
            tracing::trace!(
                element = element_name,
                "already registered, keeping first definition"
            );
            return;
        }
        let element_name: Arc<str> = element_name.into();
        let entry = SymbolEntry {
            element_name: element_name.clone(),
            class_name: naming::class_name_for(&element_name).into(),
            namespace: config.output_namespace.clone(),
            node: Arc::new(node),
        };
        self.entries.insert(element_name, entry);
    }

    /// Look up an element by its schema name.
    pub fn resolve(&self, element_name: &str) -> Option<&SymbolEntry> {
        self.entries.get(element_name)
    }

    /// Rendered declared-type name for a type reference.
    ///
    /// Falls back to the registration naming policy when the reference does
    /// not resolve, so dangling references still render plausibly.
    pub fn declared_type_for(&self, type_ref: &str) -> Arc<str> {
        match self.resolve(type_ref) {
            Some(entry) => entry.class_name.clone(),
            None => naming::class_name_for(type_ref).into(),
        }
    }

    /// Iterate entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
            .field("entries", &self.entries.len())
            .finish()
    }
}
