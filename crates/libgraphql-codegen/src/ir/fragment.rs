use crate::ir::Field;
use crate::ir::InlineFragment;
use crate::loc;

/// A named fragment definition (`fragment UserFields on User { ... }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub(crate) fragment_name: String,

    #[serde(default)]
    pub(crate) source: String,

    pub(crate) type_condition: String,

    #[serde(default)]
    pub(crate) possible_types: Vec<String>,

    #[serde(default)]
    pub(crate) fields: Vec<Field>,

    #[serde(default)]
    pub(crate) fragment_spreads: Vec<String>,

    #[serde(default)]
    pub(crate) inline_fragments: Vec<InlineFragment>,

    #[serde(default)]
    pub(crate) file_path: String,
}
impl Fragment {
    pub fn def_location(&self) -> loc::SourceLocation {
        loc::SourceLocation::from_ir_path(&self.file_path)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fragment_spreads(&self) -> &[String] {
        &self.fragment_spreads
    }

    pub fn inline_fragments(&self) -> &[InlineFragment] {
        &self.inline_fragments
    }

    pub fn name(&self) -> &str {
        self.fragment_name.as_str()
    }

    pub fn possible_types(&self) -> &[String] {
        &self.possible_types
    }

    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
