//! Edge-inference rules.
//!
//! Each rule looks at one declaration and proposes the declarations it
//! depends on. Rules are independent; the sorter merges their output into the
//! graph, where a pair of vertices keeps a single edge no matter how many
//! rules propose it.

use std::fmt;

use tracing::trace;

use super::context::InferenceContext;
use crate::base::{Name, QUALIFIED_SEPARATOR};
use crate::model::TypeDeclaration;

/// A source of dependency edges.
///
/// Implementations push the names of the declarations `declaration` depends on
/// into `out`. Names should come from the [`InferenceContext`]; the sorter
/// drops anything that is not an analyzed declaration, as well as self edges.
pub trait EdgeRule: fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn infer(
        &self,
        declaration: &TypeDeclaration,
        ctx: &InferenceContext<'_>,
        out: &mut Vec<Name>,
    );
}

/// Edges from a declaration to each listed base type that is itself analyzed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaseTypeRule;

impl EdgeRule for BaseTypeRule {
    fn name(&self) -> &'static str {
        "base-type"
    }

    fn infer(
        &self,
        declaration: &TypeDeclaration,
        ctx: &InferenceContext<'_>,
        out: &mut Vec<Name>,
    ) {
        out.extend(
            declaration
                .base_types
                .iter()
                .filter_map(|base| ctx.resolve(base)),
        );
    }
}

/// Edges from a declaration to every declaration qualified under an import.
///
/// For each import `I` other than the declaration's own identifier, every
/// declaration named `I.<anything>` becomes a dependency. This is a textual
/// prefix heuristic, not symbol resolution: it does not check whether the
/// declaration actually mentions those types.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImportPrefixRule;

impl EdgeRule for ImportPrefixRule {
    fn name(&self) -> &'static str {
        "import-prefix"
    }

    fn infer(
        &self,
        declaration: &TypeDeclaration,
        ctx: &InferenceContext<'_>,
        out: &mut Vec<Name>,
    ) {
        for (import, members) in ctx.import_scopes() {
            if *import == declaration.identifier {
                continue;
            }
            out.extend(members.iter().cloned());
        }
    }
}

/// Edges from a declaration to the types its method bodies call into.
///
/// Resolution is by name only. A target type that equals an analyzed
/// identifier resolves to it. An unqualified target otherwise matches the
/// last segment of exactly one declaration. Qualified targets that are not
/// analyzed, and invocations with no target type, no candidate, or several
/// candidates, are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct InvocationRule;

impl EdgeRule for InvocationRule {
    fn name(&self) -> &'static str {
        "invocation"
    }

    fn infer(
        &self,
        declaration: &TypeDeclaration,
        ctx: &InferenceContext<'_>,
        out: &mut Vec<Name>,
    ) {
        for invocation in declaration.invocations() {
            let Some(target) = invocation.target_type.as_deref() else {
                continue;
            };

            if let Some(name) = ctx.resolve(target) {
                out.push(name);
                continue;
            }

            // A qualified name that is not analyzed belongs to another namespace.
            if target.contains(QUALIFIED_SEPARATOR) {
                trace!(
                    "[INVOCATION] {}: '{}' on '{}' is outside the analyzed set",
                    declaration.identifier,
                    invocation.method_name,
                    target
                );
                continue;
            }

            match ctx.declarations_named(target) {
                [only] => out.push(only.clone()),
                [] => trace!(
                    "[INVOCATION] {}: '{}' on '{}' matches no declaration",
                    declaration.identifier,
                    invocation.method_name,
                    target
                ),
                candidates => trace!(
                    "[INVOCATION] {}: '{}' on '{}' is ambiguous ({} candidates)",
                    declaration.identifier,
                    invocation.method_name,
                    target,
                    candidates.len()
                ),
            }
        }
    }
}
