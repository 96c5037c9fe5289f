//! Compiles GraphQL operations, as described by the front-end's JSON IR, into
//! language-agnostic result-type descriptors ([`GeneratedType`]) that a source
//! emitter turns into statically-typed data-access classes.
//!
//! The pipeline for a single operation is:
//!
//! 1. [`naming::OperationNamer`] derives the canonical operation name.
//! 2. [`selection::SelectionTypeBuilder`] lays out the `Data` result record
//!    from the operation's selection set (merging fragment spreads and inline
//!    fragments).
//! 3. [`OperationCompiler`] tags the result and attaches provenance.

mod compile_error;
mod compiler;
mod config;
pub mod descriptor;
mod file_reader;
pub mod ir;
pub mod loc;
pub mod naming;
pub mod selection;
pub mod types;

pub use compile_error::CompileError;
pub use compiler::CompileReport;
pub use compiler::OperationCompiler;
pub use compiler::OperationFailure;
pub use config::CodeGenerationConfig;
pub use config::ConfigLoadError;
pub use descriptor::GeneratedType;
pub use descriptor::MarkerCapability;
pub use descriptor::TypeDescriptor;
pub use file_reader::ReadContentError;
