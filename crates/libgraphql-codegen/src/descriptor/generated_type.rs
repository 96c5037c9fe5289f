use crate::descriptor::TypeDescriptor;
use crate::ir::OperationKind;
use crate::types::TypeRef;
use indexmap::IndexSet;

/// Capabilities an emitted type must declare conformance to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum MarkerCapability {
    /// The type is the result data of an operation. Every operation's root
    /// `Data` type carries this so that (de)serialization code can recognize
    /// operation results uniformly.
    OperationData,
}

/// The compiled form of one operation, ready for a source emitter.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedType {
    pub(crate) operation_name: String,
    pub(crate) kind: OperationKind,
    pub(crate) is_query: bool,
    pub(crate) is_mutation: bool,
    pub(crate) is_subscription: bool,
    pub(crate) data: TypeDescriptor,
    pub(crate) conforms_to: Vec<MarkerCapability>,
    pub(crate) with_builder: bool,
    pub(crate) variables: Vec<GeneratedVariable>,
    pub(crate) source_text: String,
    pub(crate) provenance: Provenance,
}
impl GeneratedType {
    pub fn conforms_to(&self, capability: MarkerCapability) -> bool {
        self.conforms_to.contains(&capability)
    }

    /// The root result record. Always named `Data`.
    pub fn data(&self) -> &TypeDescriptor {
        &self.data
    }

    pub fn is_mutation(&self) -> bool {
        self.is_mutation
    }

    pub fn is_query(&self) -> bool {
        self.is_query
    }

    pub fn is_subscription(&self) -> bool {
        self.is_subscription
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn marker_capabilities(&self) -> &[MarkerCapability] {
        &self.conforms_to
    }

    /// The canonical operation name.
    pub fn operation_name(&self) -> &str {
        self.operation_name.as_str()
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn source_text(&self) -> &str {
        self.source_text.as_str()
    }

    /// Operation variables in declaration order.
    pub fn variables(&self) -> &[GeneratedVariable] {
        &self.variables
    }

    /// Whether the emitter should also synthesize a builder for the `Data`
    /// type.
    pub fn with_builder(&self) -> bool {
        self.with_builder
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedVariable {
    pub(crate) name: String,
    pub(crate) type_ref: TypeRef,
}
impl GeneratedVariable {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}

/// Opaque identity data carried from the IR to the emitter unchanged.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub(crate) operation_id: String,
    pub(crate) file_path: String,
    pub(crate) fragments_referenced: IndexSet<String>,
}
impl Provenance {
    pub fn file_path(&self) -> &str {
        self.file_path.as_str()
    }

    pub fn fragments_referenced(&self) -> &IndexSet<String> {
        &self.fragments_referenced
    }

    pub fn operation_id(&self) -> &str {
        self.operation_id.as_str()
    }
}
