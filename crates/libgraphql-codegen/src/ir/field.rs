use crate::ir::InlineFragment;

/// A selected schema field, as written in an operation or fragment.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub(crate) response_name: String,
    pub(crate) field_name: String,

    /// The field's declared result type in GraphQL type syntax.
    #[serde(rename = "type")]
    pub(crate) type_: String,

    #[serde(default)]
    pub(crate) is_conditional: bool,

    #[serde(default)]
    pub(crate) fields: Vec<Field>,

    #[serde(default)]
    pub(crate) fragment_spreads: Vec<String>,

    #[serde(default)]
    pub(crate) inline_fragments: Vec<InlineFragment>,

    #[serde(default)]
    pub(crate) description: Option<String>,

    #[serde(default)]
    pub(crate) is_deprecated: bool,

    #[serde(default)]
    pub(crate) deprecation_reason: Option<String>,
}
impl Field {
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fragment_spreads(&self) -> &[String] {
        &self.fragment_spreads
    }

    /// Whether this field carries a nested selection of its own (sub-fields,
    /// fragment spreads, or inline fragments).
    pub fn has_selection(&self) -> bool {
        !self.fields.is_empty()
            || !self.fragment_spreads.is_empty()
            || !self.inline_fragments.is_empty()
    }

    pub fn inline_fragments(&self) -> &[InlineFragment] {
        &self.inline_fragments
    }

    /// True when the selection is guarded by `@include` or `@skip`.
    pub fn is_conditional(&self) -> bool {
        self.is_conditional
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    /// The alias if one was given, otherwise the field name.
    pub fn response_name(&self) -> &str {
        self.response_name.as_str()
    }

    pub fn type_str(&self) -> &str {
        self.type_.as_str()
    }
}
