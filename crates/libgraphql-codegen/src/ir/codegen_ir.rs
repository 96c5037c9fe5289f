use crate::ReadContentError;
use crate::file_reader;
use crate::ir::Fragment;
use crate::ir::Operation;
use crate::ir::TypeDeclaration;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, IrLoadError>;

/// One IR document as written by the front-end: every operation and
/// fragment found in a set of executable documents, plus the schema types
/// those documents use.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenIr {
    #[serde(default)]
    pub(crate) operations: Vec<Operation>,

    #[serde(default)]
    pub(crate) fragments: Vec<Fragment>,

    #[serde(default)]
    pub(crate) types_used: Vec<TypeDeclaration>,
}
impl CodegenIr {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_json_document(file_path)
            .map_err(|e| IrLoadError::FileReadError(Box::new(e)))?;

        Self::from_str(content, Some(file_path))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<Self> {
        let ir: CodegenIr = serde_json::from_str(content.as_ref())
            .map_err(|err| IrLoadError::ParseError {
                file_path: file_path.map(Path::to_path_buf),
                err: Arc::new(err),
            })?;

        log::debug!(
            "Loaded IR with {} operations, {} fragments and {} used types.",
            ir.operations.len(),
            ir.fragments.len(),
            ir.types_used.len(),
        );
        Ok(ir)
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn types_used(&self) -> &[TypeDeclaration] {
        &self.types_used
    }
}

#[derive(Debug, Error)]
pub enum IrLoadError {
    #[error("Failure while trying to read an IR file from disk: {0}")]
    FileReadError(Box<ReadContentError>),

    #[error("Error parsing IR document{}: {err}", format_file_path(.file_path))]
    ParseError {
        file_path: Option<PathBuf>,
        err: Arc<serde_json::Error>,
    },
}

fn format_file_path(file_path: &Option<PathBuf>) -> String {
    match file_path {
        Some(path) => format!(" at {}", path.display()),
        None => String::new(),
    }
}
