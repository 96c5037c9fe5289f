use crate::ReadContentError;
use crate::file_reader;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Options that steer compilation. Loaded from JSON with camelCase keys;
/// every key is optional.
///
/// ```
/// use libgraphql_codegen::CodeGenerationConfig;
///
/// let config = CodeGenerationConfig::from_str(
///     r#"{ "generateModelBuilder": true, "customTypeMap": { "Date": "java.util.Date" } }"#,
///     None,
/// ).unwrap();
/// assert!(config.use_semantic_naming);
/// assert!(config.generate_model_builder);
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeGenerationConfig {
    /// Append the operation kind (`Query`, `Mutation`, `Subscription`) to
    /// operation names that don't already end with it.
    pub use_semantic_naming: bool,

    /// Ask the emitter to also synthesize a builder for each `Data` type.
    pub generate_model_builder: bool,

    /// Custom scalar name -> target-language type.
    pub custom_type_map: IndexMap<String, String>,
}
impl CodeGenerationConfig {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_json_document(file_path)
            .map_err(|e| ConfigLoadError::FileReadError(Box::new(e)))?;

        Self::from_str(content, Some(file_path))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(content.as_ref())
            .map_err(|err| ConfigLoadError::ParseError {
                file_path: file_path.map(Path::to_path_buf),
                err: Arc::new(err),
            })
    }
}
impl Default for CodeGenerationConfig {
    fn default() -> Self {
        Self {
            use_semantic_naming: true,
            generate_model_builder: false,
            custom_type_map: IndexMap::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failure while trying to read a config file from disk: {0}")]
    FileReadError(Box<ReadContentError>),

    #[error("Error parsing config file {file_path:?}: {err}")]
    ParseError {
        file_path: Option<PathBuf>,
        err: Arc<serde_json::Error>,
    },
}
