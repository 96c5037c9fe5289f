use crate::ir::TypeDeclaration;
use crate::ir::TypeDeclarationKind;
use crate::types::BuiltinScalar;
use crate::types::LeafKind;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Read-only classification of named schema types that appear as leaves
/// (fields without a nested selection).
///
/// Implementations are shared across every operation compiled in a run and
/// must not change while any compilation is in flight.
pub trait TypeResolver: Sync {
    fn resolve_leaf(&self, type_name: &str) -> LeafKind;
}

/// Resolves leaves from the enum declarations in the IR's `typesUsed` plus a
/// user-provided custom scalar mapping. Anything that is neither a built-in
/// scalar nor a known enum is treated as a custom scalar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaTypeResolver {
    custom_type_map: IndexMap<String, String>,
    enum_names: HashSet<String>,
}
impl SchemaTypeResolver {
    pub fn new(
        types_used: &[TypeDeclaration],
        custom_type_map: IndexMap<String, String>,
    ) -> Self {
        let enum_names = types_used.iter()
            .filter(|decl| decl.kind() == &TypeDeclarationKind::EnumType)
            .map(|decl| decl.name().to_string())
            .collect();

        Self {
            custom_type_map,
            enum_names,
        }
    }
}

#[inherent::inherent]
impl TypeResolver for SchemaTypeResolver {
    pub fn resolve_leaf(&self, type_name: &str) -> LeafKind {
        if let Some(scalar) = BuiltinScalar::from_name(type_name) {
            LeafKind::Scalar { scalar }
        } else if self.enum_names.contains(type_name) {
            LeafKind::Enum
        } else {
            LeafKind::CustomScalar {
                mapped_type: self.custom_type_map.get(type_name).cloned(),
            }
        }
    }
}
