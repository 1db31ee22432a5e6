use crate::ast;
use crate::execution::RequestError;
use crate::schema::Schema;
use crate::types::Argument;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use crate::Value;
use graphql_parser::query::Value as AstValue;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, String>;

/// Build the argument map handed to a resolver.
///
/// For each declared argument: a supplied literal (or variable) is coerced to
/// the argument's type; otherwise the declared default applies; otherwise a
/// non-null argument is an error and a nullable one is left out.
pub(super) fn coerce_argument_values(
    schema: &Schema,
    arg_defs: &IndexMap<String, Argument>,
    ast_args: &[(String, ast::query::Value)],
    variables: &IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>> {
    let mut coerced = IndexMap::new();
    for (arg_name, arg_def) in arg_defs {
        let arg_type = arg_def.type_annotation();
        let ast_value = ast_args.iter()
            .find(|(name, _)| name == arg_name)
            .map(|(_, value)| value);

        let provided = match ast_value {
            Some(AstValue::Variable(var_name)) if !variables.contains_key(var_name) =>
                None,
            other => other,
        };

        let Some(ast_value) = provided else {
            if let Some(default_value) = arg_def.default_value() {
                let value = coerce_value(schema, default_value, arg_type)
                    .map_err(|err| format!(
                        "Argument \"{arg_name}\" has invalid default value {default_value}. {err}",
                    ))?;
                coerced.insert(arg_name.to_string(), value);
            } else if arg_type.is_non_null() {
                let type_str = arg_type.to_graphql_string(schema.arena());
                return Err(match ast_value {
                    Some(AstValue::Variable(var_name)) => format!(
                        "Argument \"{arg_name}\" of required type \"{type_str}\" \
                        was provided the variable \"${var_name}\" which was not \
                        provided a runtime value.",
                    ),
                    _ => format!(
                        "Argument \"{arg_name}\" of required type \"{type_str}\" \
                        was not provided.",
                    ),
                });
            }
            continue;
        };

        let value = coerce_literal(schema, ast_value, arg_type, variables)
            .map_err(|err| format!(
                "Argument \"{arg_name}\" has invalid value {ast_value}. {err}",
            ))?;
        coerced.insert(arg_name.to_string(), value);
    }
    Ok(coerced)
}

/// Coerce a query literal to `type_annot`. Variables are substituted from
/// `variables`, which must already be coerced.
pub(super) fn coerce_literal(
    schema: &Schema,
    ast_value: &ast::query::Value,
    type_annot: &TypeAnnotation,
    variables: &IndexMap<String, Value>,
) -> Result<Value> {
    if let AstValue::Variable(var_name) = ast_value {
        let value = variables.get(var_name).cloned().unwrap_or_default();
        if value.is_null() && type_annot.is_non_null() {
            return Err(format!(
                "Expected non-null value of type \"{}\" for variable \"${var_name}\".",
                type_annot.to_graphql_string(schema.arena()),
            ));
        }
        return Ok(value);
    }

    match type_annot {
        TypeAnnotation::NonNull(inner) => {
            if matches!(ast_value, AstValue::Null) {
                return Err(format!(
                    "Expected \"{}\", found null.",
                    type_annot.to_graphql_string(schema.arena()),
                ));
            }
            coerce_literal(schema, ast_value, inner, variables)
        },

        _ if matches!(ast_value, AstValue::Null) => Ok(Value::Null),

        TypeAnnotation::List(item_type) => match ast_value {
            AstValue::List(items) => items.iter()
                .map(|item| coerce_literal(schema, item, item_type, variables))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            single => Ok(Value::List(vec![
                coerce_literal(schema, single, item_type, variables)?,
            ])),
        },

        TypeAnnotation::Named(type_id) => match schema.type_by_id(*type_id) {
            Some(GraphQLType::Scalar(scalar)) => {
                let value = match ast_value {
                    AstValue::Int(number) => number.as_i64()
                        .map(Value::Int)
                        .ok_or_else(|| format!(
                            "{} cannot represent an integer literal this large.",
                            scalar.name(),
                        ))?,
                    AstValue::Enum(enum_value) => return Err(format!(
                        "{} cannot represent the enum literal {enum_value}.",
                        scalar.name(),
                    )),
                    AstValue::List(_) | AstValue::Object(_) => return Err(format!(
                        "{} cannot represent a non-scalar literal.",
                        scalar.name(),
                    )),
                    other => Value::from_ast(other, variables),
                };
                scalar.parse_value(&value)
            },

            Some(GraphQLType::InputObject(input_obj)) => match ast_value {
                AstValue::Object(entries) => {
                    for key in entries.keys() {
                        if !input_obj.fields().contains_key(key) {
                            return Err(format!(
                                "Field \"{key}\" is not defined by type \"{}\".",
                                input_obj.name(),
                            ));
                        }
                    }
                    coerce_input_object_fields(schema, input_obj, |field_name, field_type| {
                        let field_value = entries.get(field_name)?;
                        if let AstValue::Variable(var_name) = field_value
                            && !variables.contains_key(var_name) {
                            return None;
                        }
                        Some(coerce_literal(schema, field_value, field_type, variables))
                    })
                },
                _ => Err(format!("Expected type \"{}\" to be an object.", input_obj.name())),
            },

            Some(output_type) => Err(format!(
                "The \"{}\" type cannot be used as an input type.",
                output_type.name(),
            )),

            None => Err(format!("Unknown type {type_id}.")),
        },
    }
}

/// Coerce a runtime (variable) value to `type_annot`.
pub(super) fn coerce_value(
    schema: &Schema,
    value: &Value,
    type_annot: &TypeAnnotation,
) -> Result<Value> {
    match type_annot {
        TypeAnnotation::NonNull(inner) => {
            if value.is_null() {
                return Err(format!(
                    "Expected non-nullable type \"{}\" not to be null.",
                    type_annot.to_graphql_string(schema.arena()),
                ));
            }
            coerce_value(schema, value, inner)
        },

        _ if value.is_null() => Ok(Value::Null),

        TypeAnnotation::List(item_type) => match value {
            Value::List(items) => items.iter()
                .map(|item| coerce_value(schema, item, item_type))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            single => Ok(Value::List(vec![coerce_value(schema, single, item_type)?])),
        },

        TypeAnnotation::Named(type_id) => match schema.type_by_id(*type_id) {
            Some(GraphQLType::Scalar(scalar)) => scalar.parse_value(value),

            Some(GraphQLType::InputObject(input_obj)) => match value {
                Value::Object(entries) => {
                    for key in entries.keys() {
                        if !input_obj.fields().contains_key(key) {
                            return Err(format!(
                                "Field \"{key}\" is not defined by type \"{}\".",
                                input_obj.name(),
                            ));
                        }
                    }
                    coerce_input_object_fields(schema, input_obj, |field_name, field_type| {
                        entries.get(field_name)
                            .map(|field_value| coerce_value(schema, field_value, field_type))
                    })
                },
                _ => Err(format!(
                    "Expected type \"{}\" to be an object, got {}.",
                    input_obj.name(),
                    value.kind_name(),
                )),
            },

            Some(output_type) => Err(format!(
                "The \"{}\" type cannot be used as an input type.",
                output_type.name(),
            )),

            None => Err(format!("Unknown type {type_id}.")),
        },
    }
}

fn coerce_input_object_fields<F>(
    schema: &Schema,
    input_obj: &InputObjectType,
    mut coerce_field: F,
) -> Result<Value>
where
    F: FnMut(&str, &TypeAnnotation) -> Option<Result<Value>>,
{
    let mut coerced = IndexMap::new();
    for (field_name, field_def) in input_obj.fields() {
        let field_type = field_def.type_annotation();
        match coerce_field(field_name, field_type) {
            Some(value) => {
                let value = value.map_err(|err| format!(
                    "In field \"{field_name}\": {err}",
                ))?;
                coerced.insert(field_name.to_string(), value);
            },
            None => if let Some(default_value) = field_def.default_value() {
                let value = coerce_value(schema, default_value, field_type)
                    .map_err(|err| format!(
                        "Field \"{}.{field_name}\" has invalid default value \
                        {default_value}. {err}",
                        input_obj.name(),
                    ))?;
                coerced.insert(field_name.to_string(), value);
            } else if field_type.is_non_null() {
                return Err(format!(
                    "Field \"{}.{field_name}\" of required type \"{}\" was not provided.",
                    input_obj.name(),
                    field_type.to_graphql_string(schema.arena()),
                ));
            },
        }
    }
    Ok(Value::Object(coerced))
}

/// Coerce the request's raw variable values against the operation's variable
/// definitions. Missing variables take their declared default; a missing
/// non-null variable without a default fails the whole request.
pub(super) fn coerce_variable_values(
    schema: &Schema,
    var_defs: &[ast::query::VariableDefinition],
    inputs: &IndexMap<String, Value>,
) -> std::result::Result<IndexMap<String, Value>, RequestError> {
    let mut coerced = IndexMap::new();
    for var_def in var_defs {
        let var_name = var_def.name.as_str();
        let var_error = |message: String| RequestError::VariableCoercion {
            message,
            variable_name: var_name.to_string(),
        };

        let Some(var_type) = type_annotation_from_ast(schema, &var_def.var_type) else {
            return Err(var_error(format!(
                "Variable \"${var_name}\" expected value of type \"{}\" which cannot \
                be used as an input type.",
                var_def.var_type,
            )));
        };
        let is_input_type = schema.type_by_id(var_type.innermost_type_id())
            .is_some_and(|type_| type_.is_input_type());
        if !is_input_type {
            return Err(var_error(format!(
                "Variable \"${var_name}\" expected value of type \"{}\" which cannot \
                be used as an input type.",
                var_def.var_type,
            )));
        }

        match inputs.get(var_name) {
            Some(value) => {
                let value = coerce_value(schema, value, &var_type)
                    .map_err(|err| var_error(format!(
                        "Variable \"${var_name}\" got invalid value {value}; {err}",
                    )))?;
                coerced.insert(var_name.to_string(), value);
            },

            None => if let Some(default_value) = &var_def.default_value {
                let value = coerce_literal(schema, default_value, &var_type, &IndexMap::new())
                    .map_err(|err| var_error(format!(
                        "Variable \"${var_name}\" has invalid default value \
                        {default_value}; {err}",
                    )))?;
                coerced.insert(var_name.to_string(), value);
            } else if var_type.is_non_null() {
                return Err(var_error(format!(
                    "Variable \"${var_name}\" of required type \"{}\" was not provided.",
                    var_def.var_type,
                )));
            },
        }
    }
    Ok(coerced)
}

/// Resolve a query-document type reference against the schema's registry.
pub(super) fn type_annotation_from_ast(
    schema: &Schema,
    ast_type: &ast::query::Type,
) -> Option<TypeAnnotation> {
    use graphql_parser::query::Type;
    Some(match ast_type {
        Type::ListType(inner) =>
            TypeAnnotation::list(type_annotation_from_ast(schema, inner)?),
        Type::NamedType(type_name) =>
            TypeAnnotation::named(schema.type_id(type_name)?),
        Type::NonNullType(inner) =>
            TypeAnnotation::non_null(type_annotation_from_ast(schema, inner)?),
    })
}
