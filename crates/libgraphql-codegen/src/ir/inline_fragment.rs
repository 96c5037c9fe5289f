use crate::ir::Field;

/// An inline fragment (`... on User { ... }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineFragment {
    pub(crate) type_condition: String,

    #[serde(default)]
    pub(crate) possible_types: Vec<String>,

    #[serde(default)]
    pub(crate) fields: Vec<Field>,

    #[serde(default)]
    pub(crate) fragment_spreads: Vec<String>,
}
impl InlineFragment {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fragment_spreads(&self) -> &[String] {
        &self.fragment_spreads
    }

    pub fn possible_types(&self) -> &[String] {
        &self.possible_types
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
