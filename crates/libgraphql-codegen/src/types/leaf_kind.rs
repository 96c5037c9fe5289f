/// What a member's innermost named type resolves to.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum LeafKind {
    /// The member carries a nested selection and is laid out as its own
    /// record.
    Composite,

    /// A scalar outside of the built-in set. `mapped_type` is the
    /// target-language type configured for it, if any.
    CustomScalar {
        mapped_type: Option<String>,
    },

    Enum,

    Scalar {
        scalar: BuiltinScalar,
    },
}
impl LeafKind {
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum BuiltinScalar {
    Boolean,
    Float,
    ID,
    Int,
    String,
}
impl BuiltinScalar {
    pub fn from_name(type_name: &str) -> Option<Self> {
        match type_name {
            "Boolean" => Some(Self::Boolean),
            "Float" => Some(Self::Float),
            "ID" => Some(Self::ID),
            "Int" => Some(Self::Int),
            "String" => Some(Self::String),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }
}
