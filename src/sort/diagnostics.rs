//! Diagnostics — non-fatal findings reported alongside a sort.
//!
//! Nothing in here changes the ordering. Cycles and references to types
//! outside the analyzed set are reported so callers can surface them.

use std::sync::Arc;

use crate::base::Name;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

/// A diagnostic message about one declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Identifier of the declaration the diagnostic is about.
    pub subject: Name,
    /// Severity level.
    pub severity: Severity,
    /// Diagnostic code (e.g., "W0001").
    pub code: Option<&'static str>,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Other declaration involved, if any.
    pub related: Option<Name>,
}

impl Diagnostic {
    fn new(subject: Name, severity: Severity, message: impl Into<Arc<str>>) -> Self {
        Self {
            subject,
            severity,
            code: None,
            message: message.into(),
            related: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(subject: Name, message: impl Into<Arc<str>>) -> Self {
        Self::new(subject, Severity::Warning, message)
    }

    /// Create a new informational diagnostic.
    pub fn info(subject: Name, message: impl Into<Arc<str>>) -> Self {
        Self::new(subject, Severity::Info, message)
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the related declaration.
    pub fn with_related(mut self, related: Name) -> Self {
        self.related = Some(related);
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes produced by the sorter.
pub mod codes {
    /// Dependency cycle: the relative order of its members is arbitrary.
    pub const DEPENDENCY_CYCLE: &str = "W0001";
    /// Base type that is not one of the analyzed declarations.
    pub const UNRESOLVED_BASE_TYPE: &str = "I0001";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics while a plan is inspected.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add a cycle warning for the edge `from → to` that closed a cycle.
    pub fn dependency_cycle(&mut self, from: &Name, to: &Name) {
        let message = if from == to {
            format!("'{}' depends on itself", from)
        } else {
            format!(
                "dependency cycle between '{}' and '{}': their relative order is arbitrary",
                from, to
            )
        };
        self.add(
            Diagnostic::warning(from.clone(), message)
                .with_code(codes::DEPENDENCY_CYCLE)
                .with_related(to.clone()),
        );
    }

    /// Add a note that `base` names no analyzed declaration.
    pub fn unresolved_base_type(&mut self, declaration: &Name, base: &str) {
        self.add(
            Diagnostic::info(
                declaration.clone(),
                format!("base type '{}' is outside the analyzed declarations", base),
            )
            .with_code(codes::UNRESOLVED_BASE_TYPE),
        );
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
