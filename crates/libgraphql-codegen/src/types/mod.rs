mod leaf_kind;
mod type_ref;
mod type_resolver;

pub use leaf_kind::BuiltinScalar;
pub use leaf_kind::LeafKind;
pub use type_ref::TypeRef;
pub use type_ref::TypeRefParseError;
pub use type_resolver::SchemaTypeResolver;
pub use type_resolver::TypeResolver;
