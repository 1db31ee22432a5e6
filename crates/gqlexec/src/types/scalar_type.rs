use crate::execution::RawValue;
use crate::Value;
use std::sync::Arc;
use std::sync::OnceLock;

type SerializeFn = dyn Fn(&RawValue) -> Result<Value, String> + Send + Sync;
type ParseValueFn = dyn Fn(&Value) -> Result<Value, String> + Send + Sync;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars).
///
/// A scalar carries two coercion functions: `serialize` converts a raw
/// resolved value into an output [`Value`], and `parse_value` validates and
/// normalizes an input [`Value`] (from a query literal or a variable).
#[derive(Clone)]
pub struct ScalarType {
    description: Option<String>,
    name: String,
    parse_value: Arc<ParseValueFn>,
    serialize: Arc<SerializeFn>,
}
impl ScalarType {
    pub fn new<S, P>(name: impl Into<String>, serialize: S, parse_value: P) -> Self
    where
        S: Fn(&RawValue) -> Result<Value, String> + Send + Sync + 'static,
        P: Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            description: None,
            name: name.into(),
            parse_value: Arc::new(parse_value),
            serialize: Arc::new(serialize),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Coerce an input value (already stripped of variables) into the form
    /// resolvers receive.
    pub fn parse_value(&self, value: &Value) -> Result<Value, String> {
        (self.parse_value)(value)
    }

    /// Coerce a raw resolved value into an output value.
    pub fn serialize(&self, raw: &RawValue) -> Result<Value, String> {
        (self.serialize)(raw)
    }
}
impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// The five built-in scalars, in [`TypeId`](crate::types::TypeId) order.
pub(crate) fn builtin_scalars() -> &'static [ScalarType; 5] {
    static SCALARS: OnceLock<[ScalarType; 5]> = OnceLock::new();
    SCALARS.get_or_init(|| [
        ScalarType::new("String", serialize_string, parse_string)
            .with_description("UTF-8 character sequence."),
        ScalarType::new("Int", serialize_int, parse_int)
            .with_description("Signed 32-bit integer."),
        ScalarType::new("Float", serialize_float, parse_float)
            .with_description("Signed double-precision floating-point value."),
        ScalarType::new("Boolean", serialize_boolean, parse_boolean)
            .with_description("`true` or `false`."),
        ScalarType::new("ID", serialize_string, parse_id)
            .with_description("A unique identifier, serialized as a string."),
    ])
}

fn cannot_represent(type_name: &str, raw: &RawValue) -> String {
    format!("{type_name} cannot represent value: {raw}")
}

fn serialize_string(raw: &RawValue) -> Result<Value, String> {
    match raw {
        RawValue::Null => Ok(Value::Null),
        RawValue::Boolean(b) => Ok(Value::String(b.to_string())),
        RawValue::Float(f) => Ok(Value::String(f.to_string())),
        RawValue::Int(i) => Ok(Value::String(i.to_string())),
        RawValue::String(s) => Ok(Value::String(s.clone())),
        RawValue::List(_)
        | RawValue::Map(_)
        | RawValue::Object(_)
        | RawValue::Opaque(_)
            => Err(cannot_represent("String", raw)),
    }
}

fn int_from_f64(f: f64) -> Option<i64> {
    let in_range = f >= i32::MIN as f64 && f <= i32::MAX as f64;
    if f.fract() == 0.0 && in_range {
        Some(f as i64)
    } else {
        None
    }
}

fn serialize_int(raw: &RawValue) -> Result<Value, String> {
    let int = match raw {
        RawValue::Null => return Ok(Value::Null),
        RawValue::Boolean(b) => Some(i64::from(*b)),
        RawValue::Float(f) => int_from_f64(*f),
        RawValue::Int(i) => i32::try_from(*i).ok().map(i64::from),
        RawValue::String(s) => s.trim()
            .parse::<f64>()
            .ok()
            .and_then(int_from_f64),
        RawValue::List(_)
        | RawValue::Map(_)
        | RawValue::Object(_)
        | RawValue::Opaque(_)
            => None,
    };
    int.map(Value::Int)
        .ok_or_else(|| cannot_represent("Int", raw))
}

fn serialize_float(raw: &RawValue) -> Result<Value, String> {
    let float = match raw {
        RawValue::Null => return Ok(Value::Null),
        RawValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
        RawValue::Float(f) => Some(*f).filter(|f| f.is_finite()),
        RawValue::Int(i) => Some(*i as f64),
        RawValue::String(s) => s.trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite()),
        RawValue::List(_)
        | RawValue::Map(_)
        | RawValue::Object(_)
        | RawValue::Opaque(_)
            => None,
    };
    float.map(Value::Float)
        .ok_or_else(|| cannot_represent("Float", raw))
}

fn serialize_boolean(raw: &RawValue) -> Result<Value, String> {
    let boolean = match raw {
        RawValue::Null => return Ok(Value::Null),
        RawValue::Boolean(b) => Some(*b),
        RawValue::Float(f) => Some(*f != 0.0),
        RawValue::Int(i) => Some(*i != 0),
        RawValue::String(s) => match s.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        RawValue::List(_)
        | RawValue::Map(_)
        | RawValue::Object(_)
        | RawValue::Opaque(_)
            => None,
    };
    boolean.map(Value::Boolean)
        .ok_or_else(|| cannot_represent("Boolean", raw))
}

fn parse_string(value: &Value) -> Result<Value, String> {
    match value {
        Value::String(_) => Ok(value.clone()),
        _ => Err(format!("String cannot represent a non string value: {value}")),
    }
}

fn parse_int(value: &Value) -> Result<Value, String> {
    match value {
        Value::Int(i) if i32::try_from(*i).is_ok() => Ok(value.clone()),
        Value::Int(_) => Err(format!(
            "Int cannot represent non 32-bit signed integer value: {value}",
        )),
        _ => Err(format!("Int cannot represent non-integer value: {value}")),
    }
}

fn parse_float(value: &Value) -> Result<Value, String> {
    match value {
        Value::Float(_) => Ok(value.clone()),
        Value::Int(i) => Ok(Value::Float(*i as f64)),
        _ => Err(format!("Float cannot represent non numeric value: {value}")),
    }
}

fn parse_boolean(value: &Value) -> Result<Value, String> {
    match value {
        Value::Boolean(_) => Ok(value.clone()),
        _ => Err(format!("Boolean cannot represent a non boolean value: {value}")),
    }
}

fn parse_id(value: &Value) -> Result<Value, String> {
    match value {
        Value::String(_) => Ok(value.clone()),
        Value::Int(i) => Ok(Value::String(i.to_string())),
        _ => Err(format!("ID cannot represent value: {value}")),
    }
}
