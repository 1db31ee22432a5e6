use crate::loc::SourcePosition;
use crate::Value;
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// The outcome of [`execute()`](crate::execute).
///
/// `data` is `None` only when execution could not begin (see
/// [`RequestError`]) or when a non-null violation propagated all the way to
/// the root. An empty `errors` list means complete success.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub data: Option<IndexMap<String, Value>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ExecutionError>,
}
impl ExecutionResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}
impl std::convert::From<RequestError> for ExecutionResult {
    fn from(err: RequestError) -> Self {
        Self {
            data: None,
            errors: vec![ExecutionError {
                locations: vec![],
                message: err.to_string(),
                path: vec![],
            }],
        }
    }
}

/// An error localized to a position in the response.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExecutionError {
    pub message: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SourcePosition>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,
}

/// One step of an [`ExecutionError`]'s response path: a response key or a
/// list index.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

/// Failures that prevent execution from starting at all.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("Must provide operation name if query contains multiple operations.")]
    AmbiguousOperation,

    #[error("Must provide an operation.")]
    NoOperation,

    #[error("Schema is not configured for mutations.")]
    NoMutationType,

    #[error("Subscription operations are not supported.")]
    SubscriptionNotSupported,

    #[error("Unknown operation named \"{operation_name}\".")]
    UnknownOperation {
        operation_name: String,
    },

    #[error("{message}")]
    VariableCoercion {
        message: String,
        variable_name: String,
    },
}
