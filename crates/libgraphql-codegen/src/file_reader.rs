use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Reads an IR or config document. Both are JSON, so the content must be
/// UTF-8; anything else surfaces as an `InvalidData` read error.
pub(crate) fn read_json_document(file_path: &Path) -> Result<String, ReadContentError> {
    if !file_path.is_file() {
        return Err(ReadContentError::NotAFile(file_path.to_path_buf()));
    }

    log::trace!("Reading JSON document at {file_path:?}.");
    std::fs::read_to_string(file_path).map_err(|err| ReadContentError::Unreadable {
        file_path: file_path.to_path_buf(),
        err,
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("Path {0:?} is not a file")]
    NotAFile(PathBuf),

    #[error("Failed to read {file_path:?} as UTF-8 text: {err}")]
    Unreadable {
        file_path: PathBuf,
        err: std::io::Error,
    },
}
impl std::cmp::PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotAFile(a), Self::NotAFile(b)) => a == b,
            (
                Self::Unreadable { file_path: a_path, err: a_err },
                Self::Unreadable { file_path: b_path, err: b_err },
            ) => a_path == b_path && a_err.kind() == b_err.kind(),
            _ => false,
        }
    }
}
