use std::path::Path;
use std::path::PathBuf;

/// Where an IR element was defined.
///
/// The front-end IR only records the path of the document each operation or
/// fragment was read from, so locations are file-granular.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum SourceLocation {
    /// The element was defined in the GraphQL document at this path.
    File(PathBuf),

    /// The IR did not record where the element came from.
    Unknown,
}
impl SourceLocation {
    pub fn from_ir_path(file_path: &str) -> Self {
        if file_path.is_empty() {
            Self::Unknown
        } else {
            Self::File(PathBuf::from(file_path))
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path.as_path()),
            Self::Unknown => None,
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Unknown => write!(f, "<unknown location>"),
        }
    }
}
