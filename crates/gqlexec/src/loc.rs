use std::path::Path;
use std::path::PathBuf;

/// A line/column position within an executable (query) document.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}
impl std::convert::From<graphql_parser::Pos> for SourcePosition {
    fn from(pos: graphql_parser::Pos) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
        }
    }
}

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(
        file: P,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.as_ref().to_path_buf(),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where a named type was defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaDefLocation {
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl std::convert::From<FilePosition> for SchemaDefLocation {
    fn from(pos: FilePosition) -> Self {
        Self::Schema(pos)
    }
}
impl std::fmt::Display for SchemaDefLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<builtin>"),
            Self::Schema(pos) => write!(f, "{pos}"),
        }
    }
}
