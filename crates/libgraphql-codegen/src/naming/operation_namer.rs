use crate::CompileError;
use crate::ir::Operation;
use crate::ir::OperationKind;

/// Derives the canonical, externally visible name of an operation.
pub struct OperationNamer;
impl OperationNamer {
    /// The canonical name for `operation`.
    ///
    /// The raw name is capitalized. Under semantic naming the kind's suffix
    /// (`Query`, `Mutation` or `Subscription`) is appended unless the
    /// capitalized name already ends with it. An empty raw name still
    /// receives the suffix, yielding just `"Query"` (etc).
    ///
    /// Fails with [`CompileError::UnrecognizedOperationKind`] when the
    /// operation's raw type is not one of the three known kinds, even when
    /// semantic naming is off.
    pub fn canonical_name(
        operation: &Operation,
        use_semantic_naming: bool,
    ) -> Result<String, CompileError> {
        let kind = operation.kind()?;
        Ok(Self::with_semantic_suffix(
            capitalize(operation.name()),
            kind,
            use_semantic_naming,
        ))
    }

    /// Applies the suffixing rule to an already-capitalized candidate.
    /// Idempotent: feeding the output back in returns it unchanged.
    pub fn with_semantic_suffix(
        base_name: String,
        kind: OperationKind,
        use_semantic_naming: bool,
    ) -> String {
        let suffix = kind.semantic_suffix();
        if use_semantic_naming && !base_name.ends_with(suffix) {
            base_name + suffix
        } else {
            base_name
        }
    }
}

/// Upper-cases the first character of `name` if it is lower-case, leaving the
/// rest untouched.
///
/// Only the first `char` is considered: a name starting with a base letter
/// followed by combining marks keeps its marks as-is, and characters whose
/// upper-case form is longer (e.g. `ß` -> `SS`) expand.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            first.to_uppercase().chain(chars).collect()
        },
        _ => name.to_string(),
    }
}
