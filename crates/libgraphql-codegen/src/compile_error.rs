use crate::descriptor::FieldSource;
use crate::loc;
use crate::types::TypeRefParseError;
use thiserror::Error;

/// Why a single operation failed to compile.
///
/// Every variant is scoped to one operation: a batch compilation records it
/// and moves on to the next operation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CompileError {
    #[error(
        "Conflicting selections for `{response_name}` on `{parent_type_name}`: \
        `{first_shape}` (from {first_source}) vs `{second_shape}` (from \
        {second_source})"
    )]
    FieldShapeConflict {
        parent_type_name: String,
        response_name: String,
        first_shape: String,
        first_source: FieldSource,
        second_shape: String,
        second_source: FieldSource,
    },

    #[error("`{name}` declares a malformed type reference: {err}")]
    MalformedTypeReference {
        name: String,
        err: TypeRefParseError,
    },

    #[error(
        "Operation `{operation_name}` ({location}) has an unrecognized \
        operation type `{operation_type}`; expected one of `query`, \
        `mutation`, or `subscription`"
    )]
    UnrecognizedOperationKind {
        location: loc::SourceLocation,
        operation_name: String,
        operation_type: String,
    },

    #[error("Reference to undefined fragment `{fragment_name}`")]
    UnresolvedFragmentReference {
        fragment_name: String,
    },
}
