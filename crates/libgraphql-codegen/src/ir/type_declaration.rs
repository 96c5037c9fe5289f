/// A schema type the front-end reports as used by the compiled documents.
///
/// Only enum declarations influence descriptor layout: they tell leaf
/// resolution which named types are enums rather than custom scalars.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct TypeDeclaration {
    pub(crate) kind: TypeDeclarationKind,
    pub(crate) name: String,

    #[serde(default)]
    pub(crate) description: Option<String>,

    #[serde(default)]
    pub(crate) values: Vec<EnumValueDeclaration>,
}
impl TypeDeclaration {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn kind(&self) -> &TypeDeclarationKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &[EnumValueDeclaration] {
        &self.values
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
pub enum TypeDeclarationKind {
    EnumType,
    InputObjectType,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValueDeclaration {
    pub(crate) name: String,

    #[serde(default)]
    pub(crate) description: Option<String>,

    #[serde(default)]
    pub(crate) is_deprecated: bool,
}
impl EnumValueDeclaration {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
