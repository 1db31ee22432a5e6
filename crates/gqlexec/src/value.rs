use crate::ast;
use indexmap::IndexMap;

/// A fully-resolved GraphQL value.
///
/// This is the shape of both coerced inputs (arguments, variables) and
/// serialized outputs (the `data` of an
/// [`ExecutionResult`](crate::ExecutionResult)). It serializes to and
/// deserializes from the corresponding JSON shape.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        if let Self::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Convert an AST literal into a [`Value`], substituting any variable
    /// references with their (already coerced) values. Variables that were not
    /// provided become [`Value::Null`].
    ///
    /// Enum literals have no dedicated representation and become strings.
    pub(crate) fn from_ast(
        ast_value: &ast::query::Value,
        variables: &IndexMap<String, Value>,
    ) -> Self {
        use graphql_parser::query::Value as AstValue;
        match ast_value {
            AstValue::Variable(var_name) =>
                variables.get(var_name).cloned().unwrap_or_default(),

            AstValue::Int(number) =>
                number.as_i64().map(Value::Int).unwrap_or_default(),

            AstValue::Float(value) =>
                Value::Float(*value),

            AstValue::String(value) =>
                Value::String(value.clone()),

            AstValue::Boolean(value) =>
                Value::Boolean(*value),

            AstValue::Null =>
                Value::Null,

            AstValue::Enum(value) =>
                Value::String(value.clone()),

            AstValue::List(values) =>
                Value::List(values.iter().map(|ast_value|
                    Value::from_ast(ast_value, variables)
                ).collect()),

            AstValue::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value, variables))
                ).collect()),
        }
    }

    /// A short, human-readable name for the kind of this value. Used in
    /// coercion error messages.
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "Boolean",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::List(_) => "List",
            Self::Object(_) => "Object",
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(fl) => write!(f, "{fl}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(items) => write!(
                f,
                "[{}]",
                items.iter()
                    .map(|item| item.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Object(entries) => write!(
                f,
                "{{{}}}",
                entries.iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<Value>> std::convert::From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
