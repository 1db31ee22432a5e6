use crate::ast;
use crate::execution::PathSegment;
use crate::execution::RawValue;
use crate::schema::Schema;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;
use std::any::Any;
use std::fmt::Display;

/// Error type for errors raised by resolvers.
///
/// Any type implementing [`Display`] converts into a `FieldError`, so
/// resolvers can use `?` on their own error types:
///
/// ```rust
/// use gqlexec::FieldResult;
/// use gqlexec::RawValue;
///
/// fn parse_count(raw: &str) -> FieldResult<RawValue> {
///     let count: i64 = raw.parse()?;
///     Ok(RawValue::Int(count))
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    message: String,
}
impl<T: Display> From<T> for FieldError {
    fn from(e: T) -> FieldError {
        FieldError {
            message: format!("{e}"),
        }
    }
}
impl FieldError {
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// The result of resolving the raw value of a field.
pub type FieldResult<T> = Result<T, FieldError>;

/// Everything a resolver receives.
pub struct ResolveParams<'a> {
    /// Coerced argument values, with defaults applied. Arguments that were
    /// neither supplied nor defaulted are absent.
    pub args: &'a IndexMap<String, Value>,

    /// The per-request context passed to
    /// [`ExecuteParams::with_context()`](crate::ExecuteParams::with_context).
    pub context: &'a (dyn Any + Send + Sync),

    pub info: &'a ResolveInfo<'a>,

    /// The raw value of the parent object.
    pub source: &'a RawValue,
}
impl ResolveParams<'_> {
    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    /// Borrow the request context as a concrete type.
    pub fn context<T: Any>(&self) -> Option<&T> {
        self.context.downcast_ref::<T>()
    }
}

/// Information about the field being resolved.
pub struct ResolveInfo<'a> {
    pub field_name: &'a str,

    /// Every query AST node selecting this field under the same response key.
    pub field_nodes: &'a [&'a ast::query::Field],

    pub parent_type_name: &'a str,
    pub path: &'a ResponsePath<'a>,
    pub return_type: &'a TypeAnnotation,
    pub schema: &'a Schema,
    pub variable_values: &'a IndexMap<String, Value>,
}

/// The position of a value in the response, as a linked list from the
/// current position back up to the root.
#[derive(Clone, Copy, Debug)]
pub enum ResponsePath<'a> {
    Root,
    Key(&'a str, &'a ResponsePath<'a>),
    Index(usize, &'a ResponsePath<'a>),
}
impl<'a> ResponsePath<'a> {
    pub(crate) fn key(&'a self, key: &'a str) -> ResponsePath<'a> {
        ResponsePath::Key(key, self)
    }

    pub(crate) fn index(&'a self, idx: usize) -> ResponsePath<'a> {
        ResponsePath::Index(idx, self)
    }

    pub fn to_segments(&self) -> Vec<PathSegment> {
        let mut segments = vec![];
        let mut current = self;
        loop {
            match current {
                ResponsePath::Root => break,
                ResponsePath::Key(key, parent) => {
                    segments.push(PathSegment::Key(key.to_string()));
                    current = parent;
                },
                ResponsePath::Index(idx, parent) => {
                    segments.push(PathSegment::Index(*idx));
                    current = parent;
                },
            }
        }
        segments.reverse();
        segments
    }
}
