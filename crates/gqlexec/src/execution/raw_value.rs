use crate::execution::FieldResult;
use crate::execution::ResolveParams;
use crate::Value;
use indexmap::IndexMap;
use std::any::Any;
use std::sync::Arc;

type GetterFn = dyn Fn() -> FieldResult<RawValue> + Send + Sync;
type MethodFn = dyn Fn(&ResolveParams<'_>) -> FieldResult<RawValue> + Send + Sync;

/// A value produced by a resolver (or supplied as the root value) before it
/// has been completed against its declared type.
///
/// Plain data maps directly onto the scalar, list, and map variants.
/// Application objects that should be traversed by default field resolution
/// implement [`ObjectSource`] and are wrapped with [`RawValue::object()`].
/// Anything else can ride along as [`RawValue::Opaque`]; the engine never
/// inspects or calls opaque values, only hands them to resolvers.
#[derive(Clone, Default)]
pub enum RawValue {
    #[default]
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<RawValue>),
    Map(IndexMap<String, RawValue>),
    Object(Arc<dyn ObjectSource>),
    Opaque(Arc<dyn Any + Send + Sync>),
}
impl RawValue {
    pub fn object(source: impl ObjectSource) -> Self {
        Self::Object(Arc::new(source))
    }

    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Arc::new(value))
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Borrow the concrete value behind an [`RawValue::Object`] or
    /// [`RawValue::Opaque`].
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Object(source) => {
                let source: &dyn ObjectSource = source.as_ref();
                let source: &dyn Any = source;
                source.downcast_ref::<T>()
            },
            Self::Opaque(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Look up a member by name the same way default field resolution does,
    /// without invoking it.
    pub fn member(&self, name: &str) -> Option<Member> {
        match self {
            Self::Map(entries) => entries.get(name).cloned().map(Member::Value),
            Self::Object(source) => source.member(name),
            _ => None,
        }
    }

    /// The concrete type name this value reports for itself, if any. Used to
    /// resolve interface and union values when no type-resolution hook
    /// applies.
    pub fn reported_type_name(&self) -> Option<&str> {
        match self {
            Self::Map(entries) => entries.get("__typename")?.as_str(),
            Self::Object(source) => source.type_name(),
            _ => None,
        }
    }

    /// Convert plain data into a [`Value`]. Fails (returns `None`) if any
    /// part of the value is an [`RawValue::Object`] or [`RawValue::Opaque`].
    pub fn to_plain_value(&self) -> Option<Value> {
        Some(match self {
            Self::Null => Value::Null,
            Self::Boolean(b) => Value::Boolean(*b),
            Self::Int(i) => Value::Int(*i),
            Self::Float(f) => Value::Float(*f),
            Self::String(s) => Value::String(s.clone()),
            Self::List(items) => Value::List(
                items.iter()
                    .map(|item| item.to_plain_value())
                    .collect::<Option<_>>()?,
            ),
            Self::Map(entries) => Value::Object(
                entries.iter()
                    .map(|(key, item)| Some((key.clone(), item.to_plain_value()?)))
                    .collect::<Option<_>>()?,
            ),
            Self::Object(_) | Self::Opaque(_) => return None,
        })
    }
}
impl std::fmt::Debug for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Object(source) => write!(
                f,
                "Object({})",
                source.type_name().unwrap_or("<anonymous>"),
            ),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}
impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::Map(entries) => {
                f.write_str("{")?;
                for (idx, (key, item)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                f.write_str("}")
            },
            Self::Object(source) => match source.type_name() {
                Some(type_name) => write!(f, "<{type_name} object>"),
                None => f.write_str("<object>"),
            },
            Self::Opaque(_) => f.write_str("<opaque value>"),
        }
    }
}

impl std::convert::From<()> for RawValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}
impl std::convert::From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}
impl std::convert::From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<u32> for RawValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}
impl std::convert::From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<RawValue>> std::convert::From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
impl<T: Into<RawValue>> std::convert::From<Vec<T>> for RawValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
impl std::convert::From<IndexMap<String, RawValue>> for RawValue {
    fn from(entries: IndexMap<String, RawValue>) -> Self {
        Self::Map(entries)
    }
}
impl std::convert::From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Boolean(b) => Self::Boolean(b),
            Value::Int(i) => Self::Int(i),
            Value::Float(f) => Self::Float(f),
            Value::String(s) => Self::String(s),
            Value::List(items) => Self::List(items.into_iter().map(Into::into).collect()),
            Value::Object(entries) => Self::Map(
                entries.into_iter()
                    .map(|(key, item)| (key, item.into()))
                    .collect(),
            ),
        }
    }
}
impl std::convert::From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(i) => Self::Int(i),
                None => number.as_f64().map(Self::Float).unwrap_or_default(),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) =>
                Self::List(items.into_iter().map(Into::into).collect()),
            serde_json::Value::Object(entries) => Self::Map(
                entries.into_iter()
                    .map(|(key, item)| (key, item.into()))
                    .collect(),
            ),
        }
    }
}

/// An application value that default field resolution can look into.
///
/// This replaces runtime reflection: a type opts into default resolution by
/// listing the members (by exact, case-sensitive field name) it exposes.
/// Unlisted members are invisible to queries.
pub trait ObjectSource: Any + Send + Sync {
    fn member(&self, name: &str) -> Option<Member>;

    /// The name of the object type this value belongs to, used when the
    /// value appears in an interface- or union-typed position.
    fn type_name(&self) -> Option<&str> {
        None
    }
}

/// A member exposed by an [`ObjectSource`].
#[derive(Clone)]
pub enum Member {
    /// A plain value, returned as-is.
    Value(RawValue),

    /// A zero-argument accessor, invoked on each lookup.
    Getter(Arc<GetterFn>),

    /// An accessor that receives the field's [`ResolveParams`] (coerced
    /// arguments, context, and resolution info).
    Method(Arc<MethodFn>),
}
impl Member {
    pub fn value(value: impl Into<RawValue>) -> Self {
        Self::Value(value.into())
    }

    pub fn getter<F>(getter_fn: F) -> Self
    where
        F: Fn() -> FieldResult<RawValue> + Send + Sync + 'static,
    {
        Self::Getter(Arc::new(getter_fn))
    }

    pub fn method<F>(method_fn: F) -> Self
    where
        F: Fn(&ResolveParams<'_>) -> FieldResult<RawValue> + Send + Sync + 'static,
    {
        Self::Method(Arc::new(method_fn))
    }
}
impl std::fmt::Debug for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Getter(_) => f.write_str("Getter(..)"),
            Self::Method(_) => f.write_str("Method(..)"),
        }
    }
}
