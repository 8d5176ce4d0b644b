//! Whole-table generation drive.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::config::GeneratorConfig;
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::model::ClassModel;
use crate::schema::Schema;
use crate::symbols::SymbolTable;

use super::class_builder::build_class;

/// Output of a full generation run.
#[derive(Debug)]
pub struct GenerationOutput {
    /// Built classes in symbol-table order, keyed by schema element name.
    pub classes: IndexMap<Arc<str>, ClassModel>,
    /// Everything non-fatal that happened along the way.
    pub diagnostics: Vec<Diagnostic>,
}

/// Drives class building over a full symbol table.
#[derive(Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build the symbol table from parsed schemas, then generate.
    pub fn generate_from_schemas(&self, schemas: &[Schema]) -> GenerationOutput {
        let table = SymbolTable::build(schemas, &self.config);
        self.generate(&table)
    }

    /// Build a class model for every table entry, in table order, then
    /// check the finished parent links for cycles.
    pub fn generate(&self, table: &SymbolTable) -> GenerationOutput {
        let mut sink = DiagnosticSink::new();
        let mut classes = IndexMap::with_capacity(table.len());

        for entry in table.entries() {
            let class = build_class(table, entry, &mut sink);
            classes.insert(entry.element_name.clone(), class);
        }

        detect_parent_cycles(&classes, &mut sink);
        tracing::debug!(
            classes = classes.len(),
            diagnostics = sink.len(),
            "generation run complete"
        );

        GenerationOutput {
            classes,
            diagnostics: sink.into_vec(),
        }
    }
}

/// Flag every class whose parent chain revisits a class.
///
/// Links are left intact; beyond detection, invalid inheritance is the
/// emitter's concern.
fn detect_parent_cycles(classes: &IndexMap<Arc<str>, ClassModel>, sink: &mut DiagnosticSink) {
    for (name, class) in classes {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        visited.insert(name.as_ref());

        let mut current = class.parent.as_deref();
        while let Some(parent) = current {
            if !visited.insert(parent) {
                sink.push(Diagnostic::error(
                    DiagnosticKind::CyclicParent,
                    name.clone(),
                    format!("inheritance chain of '{name}' revisits '{parent}'"),
                ));
                break;
            }
            current = classes.get(parent).and_then(|c| c.parent.as_deref());
        }
    }
}
