use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

/// Read an SDL file from disk as UTF-8 text.
pub(crate) fn read_content(file_path: &Path) -> Result<String, ReadContentError> {
    let io_error = |err: std::io::Error| ReadContentError::Io {
        file_path: file_path.to_path_buf(),
        kind: err.kind(),
        message: err.to_string(),
    };

    if !std::fs::metadata(file_path).map_err(io_error)?.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    std::fs::read_to_string(file_path).map_err(|err| match err.kind() {
        ErrorKind::InvalidData => ReadContentError::NotUtf8(file_path.to_path_buf()),
        _ => io_error(err),
    })
}

/// Why a schema file could not be read. The underlying [`std::io::Error`] is
/// flattened to its kind and message so the error stays comparable.
#[derive(Clone, Debug, Eq, thiserror::Error, PartialEq)]
pub enum ReadContentError {
    #[error("Failed to read schema file {file_path:?}: {message}")]
    Io {
        file_path: PathBuf,
        kind: ErrorKind,
        message: String,
    },

    #[error("Schema file {0:?} is not valid UTF-8")]
    NotUtf8(PathBuf),

    #[error("Schema path {0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
