/// A variable declared by an operation, e.g. `$id: ID!`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Variable {
    pub(crate) name: String,

    /// GraphQL type syntax, e.g. `"[ID!]!"`.
    #[serde(rename = "type")]
    pub(crate) type_: String,
}
impl Variable {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_str(&self) -> &str {
        self.type_.as_str()
    }
}
