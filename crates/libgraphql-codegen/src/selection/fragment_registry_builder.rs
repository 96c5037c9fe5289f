use crate::ir::Field;
use crate::ir::Fragment;
use crate::ir::InlineFragment;
use crate::loc;
use crate::selection::FragmentRegistry;
use indexmap::IndexMap;
use std::collections::HashSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<FragmentRegistryBuildError>>;

/// Collects the fragments of one or more IR documents and builds an
/// immutable [`FragmentRegistry`].
///
/// ```
/// use libgraphql_codegen::ir::CodegenIr;
/// use libgraphql_codegen::selection::FragmentRegistryBuilder;
///
/// let ir = CodegenIr::from_str(r#"{
///   "fragments": [{
///     "fragmentName": "UserFields",
///     "typeCondition": "User",
///     "fields": [{ "responseName": "id", "fieldName": "id", "type": "ID!" }]
///   }]
/// }"#, None).unwrap();
///
/// let mut builder = FragmentRegistryBuilder::new();
/// builder.add_fragments(ir.fragments()).unwrap();
/// let registry = builder.build().unwrap();
/// assert!(registry.fragments().contains_key("UserFields"));
/// ```
#[derive(Debug)]
pub struct FragmentRegistryBuilder<'ir> {
    fragments: IndexMap<String, &'ir Fragment>,
}

impl<'ir> FragmentRegistryBuilder<'ir> {
    pub fn new() -> Self {
        Self {
            fragments: IndexMap::new(),
        }
    }

    /// Add a fragment to the registry.
    ///
    /// Returns an error if a fragment with the same name already exists.
    pub fn add_fragment(
        &mut self,
        fragment: &'ir Fragment,
    ) -> std::result::Result<(), FragmentRegistryBuildError> {
        let name = fragment.name();

        if let Some(existing) = self.fragments.get(name) {
            return Err(FragmentRegistryBuildError::DuplicateFragmentDefinition {
                fragment_name: name.to_string(),
                first_def_location: existing.def_location(),
                second_def_location: fragment.def_location(),
            });
        }

        self.fragments.insert(name.to_string(), fragment);
        Ok(())
    }

    /// Add every fragment in `fragments`, collecting all duplicate errors
    /// rather than stopping at the first.
    pub fn add_fragments(&mut self, fragments: &'ir [Fragment]) -> Result<()> {
        let errors: Vec<_> = fragments.iter()
            .filter_map(|fragment| self.add_fragment(fragment).err())
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(())
    }

    /// Build the [`FragmentRegistry`], reporting every spread cycle and every
    /// spread of an undefined fragment at once.
    pub fn build(self) -> Result<FragmentRegistry<'ir>> {
        let mut errors = Vec::new();
        errors.extend(self.validate_no_cycles());
        errors.extend(self.validate_fragment_references());

        if !errors.is_empty() {
            return Err(errors);
        }

        log::debug!("Built fragment registry with {} fragments.", self.fragments.len());
        Ok(FragmentRegistry {
            fragments: self.fragments,
        })
    }

    fn validate_no_cycles(&self) -> Vec<FragmentRegistryBuildError> {
        let mut cycle_errors = Vec::new();
        let mut seen_normalized_cycles = HashSet::new();

        for fragment_name in self.fragments.keys() {
            let mut path = Vec::new();
            let mut visiting = HashSet::new();
            self.check_fragment_cycles(
                fragment_name,
                &mut path,
                &mut visiting,
                &mut cycle_errors,
                &mut seen_normalized_cycles,
            );
        }

        cycle_errors
    }

    fn check_fragment_cycles(
        &self,
        fragment_name: &str,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        errors: &mut Vec<FragmentRegistryBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        if visiting.contains(fragment_name) {
            path.push(fragment_name.to_string());
            let normalized = normalize_cycle(path);
            if seen_normalized.insert(normalized) {
                errors.push(FragmentRegistryBuildError::FragmentCycleDetected {
                    cycle_path: path.clone(),
                });
            }
            path.pop();
            return;
        }

        // Undefined fragments are reported by `validate_fragment_references`.
        let Some(fragment) = self.fragments.get(fragment_name) else {
            return;
        };

        path.push(fragment_name.to_string());
        visiting.insert(fragment_name.to_string());

        for spread_name in spread_names(
            fragment.fields(),
            fragment.fragment_spreads(),
            fragment.inline_fragments(),
        ) {
            self.check_fragment_cycles(
                spread_name,
                path,
                visiting,
                errors,
                seen_normalized,
            );
        }

        path.pop();
        visiting.remove(fragment_name);
    }

    fn validate_fragment_references(&self) -> Vec<FragmentRegistryBuildError> {
        let mut errors = Vec::new();

        for (fragment_name, fragment) in &self.fragments {
            let mut reported = HashSet::new();
            for spread_name in spread_names(
                fragment.fields(),
                fragment.fragment_spreads(),
                fragment.inline_fragments(),
            ) {
                if !self.fragments.contains_key(spread_name)
                    && reported.insert(spread_name) {
                    errors.push(FragmentRegistryBuildError::UndefinedFragmentReference {
                        fragment_name: fragment_name.to_string(),
                        undefined_fragment: spread_name.to_string(),
                        reference_location: fragment.def_location(),
                    });
                }
            }
        }

        errors
    }
}

impl Default for FragmentRegistryBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Every fragment name spread anywhere inside one selection set (including
/// nested field selections and inline fragments), in document order. Does
/// not follow the spreads themselves.
fn spread_names<'a>(
    fields: &'a [Field],
    fragment_spreads: &'a [String],
    inline_fragments: &'a [InlineFragment],
) -> Vec<&'a str> {
    let mut names = Vec::new();
    collect_spread_names(fields, fragment_spreads, inline_fragments, &mut names);
    names
}

fn collect_spread_names<'a>(
    fields: &'a [Field],
    fragment_spreads: &'a [String],
    inline_fragments: &'a [InlineFragment],
    names: &mut Vec<&'a str>,
) {
    for field in fields {
        collect_spread_names(
            field.fields(),
            field.fragment_spreads(),
            field.inline_fragments(),
            names,
        );
    }
    names.extend(fragment_spreads.iter().map(String::as_str));
    for inline_fragment in inline_fragments {
        collect_spread_names(
            inline_fragment.fields(),
            inline_fragment.fragment_spreads(),
            &[],
            names,
        );
    }
}

/// Rotates a cycle (`[B, C, A, B]`) so it starts at its lexicographically
/// smallest fragment (`[A, B, C, A]`), making rotations of the same cycle
/// compare equal.
fn normalize_cycle(cycle: &[String]) -> Vec<String> {
    let Some((_, cycle_without_repeat)) = cycle.split_last() else {
        return Vec::new();
    };

    let min_idx = cycle_without_repeat.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut normalized = Vec::with_capacity(cycle.len());
    normalized.extend_from_slice(&cycle_without_repeat[min_idx..]);
    normalized.extend_from_slice(&cycle_without_repeat[..min_idx]);
    if let Some(first) = normalized.first().cloned() {
        normalized.push(first);
    }
    normalized
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentRegistryBuildError {
    #[error("Duplicate fragment definition: '{fragment_name}'")]
    DuplicateFragmentDefinition {
        fragment_name: String,
        first_def_location: loc::SourceLocation,
        second_def_location: loc::SourceLocation,
    },

    #[error("Fragment cycle detected: {}", .cycle_path.join(" → "))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error("Fragment '{fragment_name}' references undefined fragment '{undefined_fragment}'")]
    UndefinedFragmentReference {
        fragment_name: String,
        undefined_fragment: String,
        reference_location: loc::SourceLocation,
    },
}
