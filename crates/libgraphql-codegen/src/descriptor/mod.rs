//! Language-agnostic output consumed by source emitters.

mod generated_type;
mod type_descriptor;

pub use generated_type::GeneratedType;
pub use generated_type::GeneratedVariable;
pub use generated_type::MarkerCapability;
pub use generated_type::Provenance;
pub use type_descriptor::FieldSource;
pub use type_descriptor::Member;
pub use type_descriptor::TypeDescriptor;
