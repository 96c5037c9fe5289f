mod fragment_registry;
mod fragment_registry_builder;
mod selection_type_builder;

pub use fragment_registry::FragmentRegistry;
pub use fragment_registry_builder::FragmentRegistryBuildError;
pub use fragment_registry_builder::FragmentRegistryBuilder;
pub use selection_type_builder::DATA_TYPE_NAME;
pub use selection_type_builder::SelectionTypeBuilder;

#[cfg(test)]
mod tests;
