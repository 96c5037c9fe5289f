use crate::CompileError;
use crate::ir::Field;
use crate::ir::OperationKind;
use crate::ir::Variable;
use crate::loc;
use indexmap::IndexSet;

/// A named query, mutation, or subscription as reported by the front-end.
///
/// The `operationType` is kept exactly as the IR spelled it. Use
/// [`Operation::kind()`] to obtain the typed [`OperationKind`]; it fails for
/// values outside of `query`, `mutation`, and `subscription` instead of
/// guessing.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub(crate) operation_name: String,
    pub(crate) operation_type: String,

    #[serde(default)]
    pub(crate) variables: Vec<Variable>,

    #[serde(default)]
    pub(crate) source: String,

    #[serde(default)]
    pub(crate) fields: Vec<Field>,

    #[serde(default)]
    pub(crate) file_path: String,

    #[serde(default)]
    pub(crate) fragments_referenced: IndexSet<String>,

    #[serde(default)]
    pub(crate) operation_id: String,
}
impl Operation {
    /// The [`loc::SourceLocation`] of the document that defined this
    /// operation.
    pub fn def_location(&self) -> loc::SourceLocation {
        loc::SourceLocation::from_ir_path(&self.file_path)
    }

    /// The top-level selection set, in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn file_path(&self) -> &str {
        self.file_path.as_str()
    }

    /// Names of every fragment spread (transitively) into this operation.
    pub fn fragments_referenced(&self) -> &IndexSet<String> {
        &self.fragments_referenced
    }

    pub fn kind(&self) -> Result<OperationKind, CompileError> {
        OperationKind::from_ir_str(&self.operation_type).ok_or_else(|| {
            CompileError::UnrecognizedOperationKind {
                location: self.def_location(),
                operation_name: self.operation_name.to_owned(),
                operation_type: self.operation_type.to_owned(),
            }
        })
    }

    /// The operation name exactly as the developer wrote it.
    pub fn name(&self) -> &str {
        self.operation_name.as_str()
    }

    pub fn operation_id(&self) -> &str {
        self.operation_id.as_str()
    }

    /// The raw `operationType` value from the IR.
    pub fn operation_type(&self) -> &str {
        self.operation_type.as_str()
    }

    /// The original operation text, verbatim.
    pub fn source_text(&self) -> &str {
        self.source.as_str()
    }

    /// Declared variables, in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
}
