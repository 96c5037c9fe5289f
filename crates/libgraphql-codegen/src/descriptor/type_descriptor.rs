use crate::types::LeafKind;
use crate::types::TypeRef;

/// A record type laid out from one level of a selection set.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub(crate) name: String,
    pub(crate) schema_type_name: String,
    pub(crate) members: Vec<Member>,
    pub(crate) fragment_refs: Vec<String>,
}
impl TypeDescriptor {
    /// Names of the fragments spread directly at this level, in first-seen
    /// order. The emitter resolves these into the fragment types this
    /// record exposes.
    pub fn fragment_refs(&self) -> &[String] {
        &self.fragment_refs
    }

    pub fn member(&self, response_name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.response_name == response_name)
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Name of the emitted type. Unique within one operation.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The schema type whose fields this record selects.
    pub fn schema_type_name(&self) -> &str {
        self.schema_type_name.as_str()
    }
}

/// One member of a [`TypeDescriptor`], mirroring a selected field.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub(crate) response_name: String,
    pub(crate) field_name: String,
    pub(crate) field_type: TypeRef,
    pub(crate) leaf_kind: LeafKind,
    pub(crate) nested: Option<TypeDescriptor>,
    pub(crate) conditional: bool,
    pub(crate) description: Option<String>,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) source: FieldSource,
}
impl Member {
    /// True when the member may be absent from a response even if its type
    /// is non-null: every selection contributing it is guarded by
    /// `@include`/`@skip` or sits in a type-conditioned fragment.
    pub fn conditional(&self) -> bool {
        self.conditional
    }

    /// Present iff the schema field is deprecated.
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn field_type(&self) -> &TypeRef {
        &self.field_type
    }

    pub fn leaf_kind(&self) -> &LeafKind {
        &self.leaf_kind
    }

    /// The record laid out for this member's nested selection, if any.
    pub fn nested(&self) -> Option<&TypeDescriptor> {
        self.nested.as_ref()
    }

    pub fn response_name(&self) -> &str {
        self.response_name.as_str()
    }

    /// Where the first selection contributing this member came from.
    pub fn source(&self) -> &FieldSource {
        &self.source
    }
}

/// Which part of a selection set contributed a field.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "name")]
pub enum FieldSource {
    Direct,
    FragmentSpread(String),
    InlineFragment(String),
}
impl std::fmt::Display for FieldSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "direct selection"),
            Self::FragmentSpread(name) => write!(f, "fragment `{name}`"),
            Self::InlineFragment(type_condition) =>
                write!(f, "inline fragment on `{type_condition}`"),
        }
    }
}
