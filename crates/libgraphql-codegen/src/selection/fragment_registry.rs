use crate::CompileError;
use crate::ir::Fragment;
use indexmap::IndexMap;
use std::sync::OnceLock;

fn empty_fragment_registry() -> &'static FragmentRegistry<'static> {
    static EMPTY_FRAGMENT_REGISTRY: OnceLock<FragmentRegistry> = OnceLock::new();
    EMPTY_FRAGMENT_REGISTRY.get_or_init(|| {
        FragmentRegistry {
            fragments: IndexMap::new(),
        }
    })
}

/// Every named fragment available to a compilation run, keyed by name.
///
/// Only [`FragmentRegistryBuilder`](crate::selection::FragmentRegistryBuilder)
/// creates non-empty registries, so a registry never contains spread cycles
/// or spreads of undefined fragments.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentRegistry<'ir> {
    pub(super) fragments: IndexMap<String, &'ir Fragment>,
}
impl<'ir> FragmentRegistry<'ir> {
    pub fn empty() -> &'static FragmentRegistry<'static> {
        empty_fragment_registry()
    }

    pub fn fragments(&self) -> &IndexMap<String, &'ir Fragment> {
        &self.fragments
    }

    pub fn get(&self, fragment_name: &str) -> Result<&'ir Fragment, CompileError> {
        self.fragments.get(fragment_name).copied().ok_or_else(|| {
            CompileError::UnresolvedFragmentReference {
                fragment_name: fragment_name.to_string(),
            }
        })
    }
}
