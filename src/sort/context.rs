//! Per-sort lookup tables shared by the edge rules.

use std::cell::OnceCell;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::base::{Name, NameInterner, QUALIFIED_SEPARATOR, is_qualified_under, simple_name};
use crate::model::{ImportDirective, TypeDeclaration};

/// An import together with the declarations that live under it.
type ImportScope<'a> = (&'a str, Vec<Name>);

/// What an [`EdgeRule`](super::EdgeRule) may look up while inferring edges.
///
/// Built once per sort call. Every [`Name`] handed out is the interned vertex
/// name of an analyzed declaration, so rules can only point at known vertices
/// when they go through this context.
#[derive(Debug)]
pub struct InferenceContext<'a> {
    declarations: &'a [TypeDeclaration],
    names: NameInterner,
    /// Distinct import identifiers in first-seen order.
    imports: Vec<&'a str>,
    import_scopes: OnceCell<Vec<ImportScope<'a>>>,
    by_simple_name: OnceCell<FxHashMap<&'a str, Vec<Name>>>,
}

impl<'a> InferenceContext<'a> {
    /// Intern every declaration identifier and deduplicate the imports.
    ///
    /// Identifiers are expected to be unique already.
    pub(crate) fn new(
        declarations: &'a [TypeDeclaration],
        imports: &'a [ImportDirective],
    ) -> Self {
        let mut names = NameInterner::with_capacity(declarations.len());
        for declaration in declarations {
            names.intern(&declaration.identifier);
        }

        let mut seen = FxHashSet::default();
        let imports = imports
            .iter()
            .map(|import| import.identifier.as_str())
            .filter(|import| seen.insert(*import))
            .collect();

        Self {
            declarations,
            names,
            imports,
            import_scopes: OnceCell::new(),
            by_simple_name: OnceCell::new(),
        }
    }

    /// The vertex name for `identifier`, if it is an analyzed declaration.
    pub fn resolve(&self, identifier: &str) -> Option<Name> {
        self.names.get(identifier)
    }

    /// Whether `identifier` is an analyzed declaration.
    pub fn is_declared(&self, identifier: &str) -> bool {
        self.names.get(identifier).is_some()
    }

    /// Distinct import identifiers in first-seen order.
    pub fn imports(&self) -> &[&'a str] {
        &self.imports
    }

    /// Each import with the declarations qualified under it (`Import.*`),
    /// in declaration order. Computed on first use.
    pub fn import_scopes(&self) -> &[ImportScope<'a>] {
        self.import_scopes.get_or_init(|| self.build_import_scopes())
    }

    /// Declarations whose last name segment is `simple`, in declaration order.
    pub fn declarations_named(&self, simple: &str) -> &[Name] {
        self.by_simple_name
            .get_or_init(|| self.build_simple_name_index())
            .get(simple)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Sorted identifiers make every `Import.` prefix a contiguous range, so each
    /// import costs one binary search plus its matches.
    fn build_import_scopes(&self) -> Vec<ImportScope<'a>> {
        let mut sorted: Vec<(&str, usize)> = self
            .declarations
            .iter()
            .enumerate()
            .map(|(index, declaration)| (declaration.identifier.as_str(), index))
            .collect();
        sorted.sort_unstable();

        let mut prefix = String::new();
        self.imports
            .iter()
            .map(|&import| {
                prefix.clear();
                prefix.push_str(import);
                prefix.push(QUALIFIED_SEPARATOR);

                let start =
                    sorted.partition_point(|(identifier, _)| *identifier < prefix.as_str());
                let mut indices: Vec<usize> = sorted[start..]
                    .iter()
                    .take_while(|(identifier, _)| is_qualified_under(identifier, import))
                    .map(|&(_, index)| index)
                    .collect();
                indices.sort_unstable();

                let members = indices
                    .into_iter()
                    .filter_map(|index| self.resolve(&self.declarations[index].identifier))
                    .collect();
                (import, members)
            })
            .collect()
    }

    fn build_simple_name_index(&self) -> FxHashMap<&'a str, Vec<Name>> {
        let mut index: FxHashMap<&'a str, Vec<Name>> = FxHashMap::default();
        for declaration in self.declarations {
            if let Some(name) = self.resolve(&declaration.identifier) {
                index
                    .entry(simple_name(&declaration.identifier))
                    .or_default()
                    .push(name);
            }
        }
        index
    }
}
