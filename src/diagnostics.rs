//! Diagnostics — non-fatal generation problems.
//!
//! The generator never aborts on a malformed schema fragment: a bad
//! construct degrades one property, not the whole class. Every skipped
//! construct or lossy policy decision is recorded here and logged through
//! `tracing`, so a generation run can be audited against schema coverage.

use std::sync::Arc;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// The category of a generation diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DiagnosticKind {
    /// A property-bearing construct carries neither a `name` nor a `ref`
    /// attribute.
    MissingIdentifier,
    /// A `ref` attribute is present but is neither a markup reference nor
    /// otherwise resolvable.
    UnresolvedReference,
    /// A schema construct the generator does not model yet (union,
    /// enumeration).
    UnsupportedConstruct,
    /// Two properties of one class collapsed to the same generated name;
    /// the later definition replaced the earlier one.
    DuplicateProperty,
    /// A chain of parent links revisits a class.
    CyclicParent,
}

impl DiagnosticKind {
    /// Get a display label for this diagnostic kind.
    pub fn display(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingIdentifier => "missing identifier",
            DiagnosticKind::UnresolvedReference => "unresolved reference",
            DiagnosticKind::UnsupportedConstruct => "unsupported construct",
            DiagnosticKind::DuplicateProperty => "duplicate property",
            DiagnosticKind::CyclicParent => "cyclic parent",
        }
    }
}

/// A non-fatal problem encountered while building class models.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// The diagnostic category.
    pub kind: DiagnosticKind,
    /// Schema element name of the class being built when this occurred.
    pub class: Arc<str>,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(kind: DiagnosticKind, class: Arc<str>, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            class,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(kind: DiagnosticKind, class: Arc<str>, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            class,
            message: message.into(),
        }
    }

    /// Create a new info diagnostic.
    pub fn info(kind: DiagnosticKind, class: Arc<str>, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Info,
            kind,
            class,
            message: message.into(),
        }
    }
}

// ============================================================================
// SINK
// ============================================================================

/// Collects the diagnostics of one generation run.
///
/// Pushing a diagnostic also logs it: `warn!` for errors and warnings,
/// `debug!` for informational entries.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it at a level matching its severity.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error | Severity::Warning => tracing::warn!(
                kind = diagnostic.kind.display(),
                class = %diagnostic.class,
                "{}",
                diagnostic.message
            ),
            Severity::Info => tracing::debug!(
                kind = diagnostic.kind.display(),
                class = %diagnostic.class,
                "{}",
                diagnostic.message
            ),
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterate over the collected diagnostics in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Consume the sink, yielding the collected diagnostics.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
