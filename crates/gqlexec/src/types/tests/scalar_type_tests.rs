use crate::execution::RawValue;
use crate::types::GraphQLType;
use crate::types::ScalarType;
use crate::types::TypeArena;
use crate::types::TypeId;
use crate::Value;

fn builtin(type_id: TypeId) -> ScalarType {
    let arena = TypeArena::new();
    match arena.get(type_id) {
        Some(GraphQLType::Scalar(scalar)) => scalar.as_ref().clone(),
        other => panic!("expected a builtin scalar, found {other:?}"),
    }
}

mod serialize {
    use super::*;

    #[test]
    fn string_stringifies_numbers_and_booleans() {
        let string = builtin(TypeId::STRING);

        assert_eq!(string.serialize(&RawValue::from("foo")), Ok(Value::from("foo")));
        assert_eq!(string.serialize(&RawValue::Int(1)), Ok(Value::from("1")));
        assert_eq!(string.serialize(&RawValue::Boolean(true)), Ok(Value::from("true")));
        assert_eq!(string.serialize(&RawValue::Null), Ok(Value::Null));
    }

    #[test]
    fn string_rejects_composite_values() {
        let string = builtin(TypeId::STRING);

        assert!(string.serialize(&RawValue::List(vec![])).is_err());
    }

    #[test]
    fn int_passes_numbers_through() {
        let int = builtin(TypeId::INT);

        assert_eq!(int.serialize(&RawValue::Int(640)), Ok(Value::Int(640)));
        assert_eq!(int.serialize(&RawValue::Float(480.0)), Ok(Value::Int(480)));
        assert_eq!(int.serialize(&RawValue::from("42")), Ok(Value::Int(42)));
        assert_eq!(int.serialize(&RawValue::Boolean(true)), Ok(Value::Int(1)));
    }

    #[test]
    fn int_rejects_out_of_range_and_fractional_values() {
        let int = builtin(TypeId::INT);

        assert_eq!(
            int.serialize(&RawValue::Int(i64::from(i32::MAX) + 1)),
            Err("Int cannot represent value: 2147483648".to_string()),
        );
        assert!(int.serialize(&RawValue::Float(1.5)).is_err());
        assert!(int.serialize(&RawValue::from("forty-two")).is_err());
    }

    #[test]
    fn float_accepts_numbers_and_numeric_strings() {
        let float = builtin(TypeId::FLOAT);

        assert_eq!(float.serialize(&RawValue::Float(1.5)), Ok(Value::Float(1.5)));
        assert_eq!(float.serialize(&RawValue::Int(2)), Ok(Value::Float(2.0)));
        assert_eq!(float.serialize(&RawValue::from("2.5")), Ok(Value::Float(2.5)));
        assert!(float.serialize(&RawValue::Float(f64::NAN)).is_err());
    }

    #[test]
    fn boolean_accepts_booleans_and_numbers() {
        let boolean = builtin(TypeId::BOOLEAN);

        assert_eq!(boolean.serialize(&RawValue::Boolean(false)), Ok(Value::Boolean(false)));
        assert_eq!(boolean.serialize(&RawValue::Int(3)), Ok(Value::Boolean(true)));
        assert_eq!(boolean.serialize(&RawValue::from("true")), Ok(Value::Boolean(true)));
        assert!(boolean.serialize(&RawValue::from("yes")).is_err());
    }

    #[test]
    fn id_serializes_as_string() {
        let id = builtin(TypeId::ID);

        assert_eq!(id.serialize(&RawValue::Int(7)), Ok(Value::from("7")));
        assert_eq!(id.serialize(&RawValue::from("a1")), Ok(Value::from("a1")));
    }
}

mod parse_value {
    use super::*;

    #[test]
    fn int_rejects_values_outside_32_bits() {
        let int = builtin(TypeId::INT);

        assert_eq!(int.parse_value(&Value::Int(5)), Ok(Value::Int(5)));
        assert!(int.parse_value(&Value::Int(i64::from(i32::MIN) - 1)).is_err());
        assert!(int.parse_value(&Value::from("5")).is_err());
    }

    #[test]
    fn float_widens_ints() {
        let float = builtin(TypeId::FLOAT);

        assert_eq!(float.parse_value(&Value::Int(3)), Ok(Value::Float(3.0)));
        assert!(float.parse_value(&Value::Boolean(true)).is_err());
    }

    #[test]
    fn string_accepts_only_strings() {
        let string = builtin(TypeId::STRING);

        assert_eq!(string.parse_value(&Value::from("x")), Ok(Value::from("x")));
        assert!(string.parse_value(&Value::Int(1)).is_err());
    }

    #[test]
    fn id_accepts_strings_and_ints() {
        let id = builtin(TypeId::ID);

        assert_eq!(id.parse_value(&Value::Int(12)), Ok(Value::from("12")));
        assert_eq!(id.parse_value(&Value::from("abc")), Ok(Value::from("abc")));
        assert!(id.parse_value(&Value::Float(1.0)).is_err());
    }
}

#[test]
fn custom_scalar_uses_its_own_coercion() {
    let upper = ScalarType::new(
        "Upper",
        |raw: &RawValue| raw.as_str()
            .map(|s| Value::String(s.to_uppercase()))
            .ok_or_else(|| "Upper wants a string".to_string()),
        |value: &Value| Ok(value.clone()),
    ).with_description("Upper-cased text.");

    assert_eq!(upper.name(), "Upper");
    assert_eq!(upper.description(), Some("Upper-cased text."));
    assert_eq!(upper.serialize(&RawValue::from("abc")), Ok(Value::from("ABC")));
    assert_eq!(
        upper.serialize(&RawValue::Int(1)),
        Err("Upper wants a string".to_string()),
    );
}
