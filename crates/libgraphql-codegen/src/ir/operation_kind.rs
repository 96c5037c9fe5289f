/// The three kinds of GraphQL operation, without any of the operation's
/// metadata.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// Parses the `operationType` value written by the front-end.
    ///
    /// Matching is exact: `"Query"` or `" query"` are not recognized.
    pub fn from_ir_str(operation_type: &str) -> Option<Self> {
        match operation_type {
            "mutation" => Some(Self::Mutation),
            "query" => Some(Self::Query),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    /// The `operationType` spelling used by the front-end IR.
    pub fn ir_name(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// The suffix appended to operation names under semantic naming. This
    /// is also the default name of the schema's root type for the kind.
    pub fn semantic_suffix(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ir_name())
    }
}
