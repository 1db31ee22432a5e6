use crate::ast;
use crate::execution::argument_coercion::coerce_argument_values;
use crate::execution::default_resolver::resolve_by_member;
use crate::execution::field_collector::FieldCollector;
use crate::execution::field_collector::GroupedFields;
use crate::execution::ExecutionError;
use crate::execution::ExecutionStrategy;
use crate::execution::RawValue;
use crate::execution::ResolveInfo;
use crate::execution::ResolveParams;
use crate::execution::ResponsePath;
use crate::operation::FragmentRegistry;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::ResolveTypeFn;
use crate::types::TypeAnnotation;
use crate::types::TypeId;
use crate::Value;
use indexmap::IndexMap;
use rayon::prelude::*;
use std::any::Any;

/// A non-null violation travelling up to the nearest nullable position. The
/// error that caused it has already been recorded.
#[derive(Debug)]
pub(super) struct NullBubble;

type Completion = Result<Value, NullBubble>;
type Errors = Vec<ExecutionError>;

/// Per-request state shared (read-only) by every field resolution.
pub(super) struct ExecutionContext<'a, 'doc> {
    pub context: &'a (dyn Any + Send + Sync),
    pub fragments: FragmentRegistry<'doc>,
    pub schema: &'a Schema,
    pub strategy: ExecutionStrategy,
    pub variables: IndexMap<String, Value>,
}
impl<'doc> ExecutionContext<'_, 'doc> {
    pub fn collect_fields(
        &self,
        object_type_id: TypeId,
        selection_sets: impl IntoIterator<Item = &'doc ast::query::SelectionSet>,
    ) -> GroupedFields<'doc> {
        FieldCollector::new(self.schema, &self.fragments, &self.variables, object_type_id)
            .collect(selection_sets)
    }

    /// Execute every collected field of `object_type` against `source`.
    ///
    /// All fields are completed even when one of them fails; a non-null
    /// violation in any field is reported only after its siblings ran.
    pub fn execute_fields(
        &self,
        object_type: &ObjectType,
        source: &RawValue,
        fields: &GroupedFields<'doc>,
        path: &ResponsePath<'_>,
        force_serial: bool,
        errors: &mut Errors,
    ) -> Result<IndexMap<String, Value>, NullBubble> {
        let mut data = IndexMap::with_capacity(fields.len());
        let mut bubbled = false;

        if force_serial || self.strategy == ExecutionStrategy::Serial {
            for (response_key, field_nodes) in fields {
                match self.execute_field(object_type, source, response_key, field_nodes, path, errors) {
                    Ok(value) => {
                        data.insert(response_key.to_string(), value);
                    },
                    Err(NullBubble) => bubbled = true,
                }
            }
        } else {
            let completed: Vec<_> = fields.par_iter()
                .map(|(response_key, field_nodes)| {
                    let mut field_errors = vec![];
                    let completion = self.execute_field(
                        object_type,
                        source,
                        response_key,
                        field_nodes,
                        path,
                        &mut field_errors,
                    );
                    (*response_key, completion, field_errors)
                })
                .collect();

            for (response_key, completion, field_errors) in completed {
                errors.extend(field_errors);
                match completion {
                    Ok(value) => {
                        data.insert(response_key.to_string(), value);
                    },
                    Err(NullBubble) => bubbled = true,
                }
            }
        }

        if bubbled {
            Err(NullBubble)
        } else {
            Ok(data)
        }
    }

    fn execute_field(
        &self,
        object_type: &ObjectType,
        source: &RawValue,
        response_key: &str,
        field_nodes: &[&'doc ast::query::Field],
        parent_path: &ResponsePath<'_>,
        errors: &mut Errors,
    ) -> Completion {
        let path = parent_path.key(response_key);
        let Some(field_node) = field_nodes.first() else {
            return Ok(Value::Null);
        };
        if field_node.name == "__typename" {
            return Ok(Value::String(object_type.name().to_string()));
        }
        let Some(field_def) = object_type.field(&field_node.name) else {
            return Ok(Value::Null);
        };
        let return_type = field_def.type_annotation();

        log::trace!("resolving field `{}.{}`", object_type.name(), field_node.name);

        let info = ResolveInfo {
            field_name: &field_node.name,
            field_nodes,
            parent_type_name: object_type.name(),
            path: &path,
            return_type,
            schema: self.schema,
            variable_values: &self.variables,
        };

        let args = match coerce_argument_values(
            self.schema,
            field_def.arguments(),
            &field_node.arguments,
            &self.variables,
        ) {
            Ok(args) => args,
            Err(message) => {
                errors.push(field_error(message, field_nodes, &path));
                return null_or_bubble(return_type);
            },
        };

        let params = ResolveParams {
            args: &args,
            context: self.context,
            info: &info,
            source,
        };
        let resolved = match field_def.resolver() {
            Some(resolver) => resolver.call(&params),
            None => resolve_by_member(&params),
        };

        match resolved {
            Ok(raw) => self.complete_value(return_type, field_nodes, &info, &raw, &path, errors),
            Err(err) => {
                log::trace!(
                    "resolver for `{}.{}` failed: {}",
                    object_type.name(),
                    field_node.name,
                    err.message(),
                );
                errors.push(field_error(err.message(), field_nodes, &path));
                null_or_bubble(return_type)
            },
        }
    }

    /// Complete `raw` against `return_type`. Nullable positions absorb a
    /// bubbling non-null violation from below and become null.
    fn complete_value(
        &self,
        return_type: &TypeAnnotation,
        field_nodes: &[&'doc ast::query::Field],
        info: &ResolveInfo<'_>,
        raw: &RawValue,
        path: &ResponsePath<'_>,
        errors: &mut Errors,
    ) -> Completion {
        match return_type {
            TypeAnnotation::NonNull(inner) => {
                let value = self.complete_nullable(inner, field_nodes, info, raw, path, errors)?;
                if value.is_null() {
                    errors.push(field_error(
                        format!(
                            "Cannot return null for non-nullable field {}.{}.",
                            info.parent_type_name,
                            info.field_name,
                        ),
                        field_nodes,
                        path,
                    ));
                    return Err(NullBubble);
                }
                Ok(value)
            },

            _ => Ok(
                self.complete_nullable(return_type, field_nodes, info, raw, path, errors)
                    .unwrap_or(Value::Null)
            ),
        }
    }

    fn complete_nullable(
        &self,
        return_type: &TypeAnnotation,
        field_nodes: &[&'doc ast::query::Field],
        info: &ResolveInfo<'_>,
        raw: &RawValue,
        path: &ResponsePath<'_>,
        errors: &mut Errors,
    ) -> Completion {
        if raw.is_null() {
            return Ok(Value::Null);
        }

        match return_type {
            // Nested non-null wrappers never make it into a built schema.
            TypeAnnotation::NonNull(_) =>
                self.complete_value(return_type, field_nodes, info, raw, path, errors),

            TypeAnnotation::List(item_type) => {
                let RawValue::List(items) = raw else {
                    errors.push(field_error(
                        format!(
                            "User Error: expected iterable, but did not find one \
                            for field {}.{}.",
                            info.parent_type_name,
                            info.field_name,
                        ),
                        field_nodes,
                        path,
                    ));
                    return Err(NullBubble);
                };

                let mut completed = Vec::with_capacity(items.len());
                let mut bubbled = false;
                for (idx, item) in items.iter().enumerate() {
                    let item_path = path.index(idx);
                    match self.complete_value(item_type, field_nodes, info, item, &item_path, errors) {
                        Ok(value) => completed.push(value),
                        Err(NullBubble) => bubbled = true,
                    }
                }
                if bubbled {
                    Err(NullBubble)
                } else {
                    Ok(Value::List(completed))
                }
            },

            TypeAnnotation::Named(type_id) => match self.schema.type_by_id(*type_id) {
                Some(GraphQLType::Scalar(scalar)) => scalar.serialize(raw)
                    .map_err(|message| {
                        errors.push(field_error(message, field_nodes, path));
                        NullBubble
                    }),

                Some(GraphQLType::Object(object_type)) =>
                    self.complete_object(object_type, *type_id, field_nodes, info, raw, path, errors),

                Some(GraphQLType::Interface(iface)) => {
                    let runtime_type_id = self.resolve_runtime_type(
                        *type_id,
                        iface.name(),
                        iface.resolve_type(),
                        info,
                        raw,
                        path,
                        errors,
                    )?;
                    self.complete_runtime_object(runtime_type_id, field_nodes, info, raw, path, errors)
                },

                Some(GraphQLType::Union(union_type)) => {
                    let runtime_type_id = self.resolve_runtime_type(
                        *type_id,
                        union_type.name(),
                        union_type.resolve_type(),
                        info,
                        raw,
                        path,
                        errors,
                    )?;
                    self.complete_runtime_object(runtime_type_id, field_nodes, info, raw, path, errors)
                },

                Some(GraphQLType::InputObject(_)) | None => {
                    errors.push(field_error(
                        format!(
                            "Field {}.{} does not have an output type.",
                            info.parent_type_name,
                            info.field_name,
                        ),
                        field_nodes,
                        path,
                    ));
                    Err(NullBubble)
                },
            },
        }
    }

    fn complete_runtime_object(
        &self,
        object_type_id: TypeId,
        field_nodes: &[&'doc ast::query::Field],
        info: &ResolveInfo<'_>,
        raw: &RawValue,
        path: &ResponsePath<'_>,
        errors: &mut Errors,
    ) -> Completion {
        match self.schema.object_type(object_type_id) {
            Some(object_type) =>
                self.complete_object(object_type, object_type_id, field_nodes, info, raw, path, errors),
            None => Err(NullBubble),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn complete_object(
        &self,
        object_type: &ObjectType,
        object_type_id: TypeId,
        field_nodes: &[&'doc ast::query::Field],
        info: &ResolveInfo<'_>,
        raw: &RawValue,
        path: &ResponsePath<'_>,
        errors: &mut Errors,
    ) -> Completion {
        if let Some(is_type_of) = object_type.is_type_of()
            && !is_type_of.call(raw, info) {
            errors.push(field_error(
                format!(
                    "Expected value of type \"{}\" but got: {raw}.",
                    object_type.name(),
                ),
                field_nodes,
                path,
            ));
            return Err(NullBubble);
        }

        let sub_fields = self.collect_fields(
            object_type_id,
            field_nodes.iter().map(|node| &node.selection_set),
        );
        self.execute_fields(object_type, raw, &sub_fields, path, false, errors)
            .map(Value::Object)
    }

    /// Determine the concrete object type of a value in an interface- or
    /// union-typed position: the abstract type's `resolve_type` hook first,
    /// then each possible type's `is_type_of` hook, then the name the value
    /// reports for itself.
    #[allow(clippy::too_many_arguments)]
    fn resolve_runtime_type(
        &self,
        abstract_type_id: TypeId,
        abstract_type_name: &str,
        resolve_type: Option<&ResolveTypeFn>,
        info: &ResolveInfo<'_>,
        raw: &RawValue,
        path: &ResponsePath<'_>,
        errors: &mut Errors,
    ) -> Result<TypeId, NullBubble> {
        let possible_types = self.schema.possible_types(abstract_type_id);
        let runtime_type_name = resolve_type
            .and_then(|resolve_type_fn| resolve_type_fn.call(raw, info))
            .or_else(|| possible_types.iter()
                .filter_map(|type_id| self.schema.object_type(*type_id))
                .find(|object_type| object_type.is_type_of()
                    .is_some_and(|is_type_of| is_type_of.call(raw, info)))
                .map(|object_type| object_type.name().to_string()))
            .or_else(|| raw.reported_type_name().map(str::to_string));

        let Some(runtime_type_name) = runtime_type_name else {
            errors.push(field_error(
                format!(
                    "Abstract type \"{abstract_type_name}\" must resolve to an Object \
                    type at runtime for field \"{}.{}\". Either the \
                    \"{abstract_type_name}\" type should provide a \"resolveType\" \
                    function or each possible type should provide an \"isTypeOf\" \
                    function.",
                    info.parent_type_name,
                    info.field_name,
                ),
                info.field_nodes,
                path,
            ));
            return Err(NullBubble);
        };

        match self.schema.type_id(&runtime_type_name) {
            Some(type_id) if possible_types.contains(&type_id) => Ok(type_id),
            _ => {
                errors.push(field_error(
                    format!(
                        "Runtime Object type \"{runtime_type_name}\" is not a possible \
                        type for \"{abstract_type_name}\".",
                    ),
                    info.field_nodes,
                    path,
                ));
                Err(NullBubble)
            },
        }
    }
}

fn field_error(
    message: impl Into<String>,
    field_nodes: &[&ast::query::Field],
    path: &ResponsePath<'_>,
) -> ExecutionError {
    ExecutionError {
        locations: field_nodes.iter()
            .map(|node| node.position.into())
            .collect(),
        message: message.into(),
        path: path.to_segments(),
    }
}

fn null_or_bubble(return_type: &TypeAnnotation) -> Completion {
    if return_type.is_non_null() {
        Err(NullBubble)
    } else {
        Ok(Value::Null)
    }
}
