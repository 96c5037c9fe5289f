//! Input records produced by the GraphQL front-end.
//!
//! These mirror the JSON intermediate representation the front-end writes
//! after parsing and type-checking a set of executable documents. They are
//! read-only here: nothing in this crate mutates an IR record after loading.

mod codegen_ir;
mod field;
mod fragment;
mod inline_fragment;
mod operation;
mod operation_kind;
mod type_declaration;
mod variable;

pub use codegen_ir::CodegenIr;
pub use codegen_ir::IrLoadError;
pub use field::Field;
pub use fragment::Fragment;
pub use inline_fragment::InlineFragment;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use type_declaration::EnumValueDeclaration;
pub use type_declaration::TypeDeclaration;
pub use type_declaration::TypeDeclarationKind;
pub use variable::Variable;
