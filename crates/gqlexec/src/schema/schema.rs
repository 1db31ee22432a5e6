use crate::operation::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectType;
use crate::types::TypeArena;
use crate::types::TypeId;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The root operation types a [`Schema`] is built from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaConfig {
    /// Required.
    pub query: Option<TypeId>,
    pub mutation: Option<TypeId>,
}

/// Represents a fully typechecked and immutable GraphQL schema.
///
/// A [`Schema`] is only ever produced by a successful [`Schema::new()`]: every
/// type reachable from its root operation types has a unique name, is free of
/// definition errors, and passed validation (including interface
/// conformance). It is safe to share across threads and executions.
#[derive(Clone, Debug)]
pub struct Schema {
    arena: TypeArena,
    mutation_type: Option<TypeId>,
    possible_types: HashMap<TypeId, Vec<TypeId>>,
    query_type: TypeId,
    type_map: IndexMap<String, TypeId>,
}
impl Schema {
    /// Build a schema from the types in `arena`, rooted at the operation types
    /// in `config`.
    ///
    /// Fails if no Query type is given, if a root is not an object type, if
    /// the Query and Mutation roots are the same type, if any reachable type
    /// carries a definition error, or if registry construction or validation
    /// fails. A partially built [`Schema`] is never returned.
    pub fn new(arena: TypeArena, config: SchemaConfig) -> Result<Self> {
        if let Some(err) = arena.detached_errors().first() {
            return Err(SchemaBuildError::UnattributedTypeDefinitionError {
                err: err.clone(),
            });
        }

        let query_type = config.query
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        check_root_type(&arena, OperationKind::Query, query_type)?;
        if let Some(mutation_type) = config.mutation {
            check_root_type(&arena, OperationKind::Mutation, mutation_type)?;

            // > The query, mutation, and subscription root types must all be
            // > different types if provided.
            //
            // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
            if mutation_type == query_type {
                return Err(SchemaBuildError::NonUniqueOperationTypes {
                    reused_type_name:
                        arena.type_name(query_type).unwrap_or_default().to_string(),
                    operation1: OperationKind::Query,
                    operation2: OperationKind::Mutation,
                });
            }
        }

        let mut types_map_builder = TypesMapBuilder::new(&arena);
        types_map_builder.visit_root(query_type)?;
        if let Some(mutation_type) = config.mutation {
            types_map_builder.visit_root(mutation_type)?;
        }
        for builtin_scalar_id in TypeId::BUILTIN_SCALARS {
            types_map_builder.visit_root(builtin_scalar_id)?;
        }
        let type_map = types_map_builder.into_types_map()?;

        let possible_types = type_map.values()
            .filter_map(|type_id| {
                let possible_ids = match arena.get(*type_id)? {
                    GraphQLType::Interface(iface) => iface.implementations(),
                    GraphQLType::Union(union_) => union_.members(),
                    _ => return None,
                };
                Some((*type_id, possible_ids.to_vec()))
            })
            .collect();

        log::debug!(
            "built schema with {} types (query root: `{}`)",
            type_map.len(),
            arena.type_name(query_type).unwrap_or_default(),
        );

        Ok(Self {
            arena,
            mutation_type: config.mutation,
            possible_types,
            query_type,
            type_map,
        })
    }

    /// The [`TypeArena`] this schema was built from. It may contain types
    /// that are unreachable from the schema's roots and therefore absent from
    /// [`Schema::type_map()`].
    pub fn arena(&self) -> &TypeArena {
        &self.arena
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// The directives every schema supports: `@include` and `@skip`.
    pub fn directives(&self) -> &'static [Directive] {
        Directive::BUILTINS
    }

    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.type_id(type_name)
            .and_then(|type_id| self.arena.get(type_id))
    }

    /// Indicates if `object_id` is one of the possible runtime types of the
    /// abstract type `abstract_id`.
    pub fn is_possible_type(&self, abstract_id: TypeId, object_id: TypeId) -> bool {
        self.possible_types(abstract_id).contains(&object_id)
    }

    /// The id of this [`Schema`]'s Mutation root operation type (if one was
    /// configured).
    pub fn mutation_type(&self) -> Option<TypeId> {
        self.mutation_type
    }

    pub fn object_type(&self, type_id: TypeId) -> Option<&ObjectType> {
        self.arena.get(type_id)?.as_object()
    }

    /// The object types that values of an interface or union type may have at
    /// runtime. Empty for any other kind of type.
    pub fn possible_types(&self, abstract_id: TypeId) -> &[TypeId] {
        self.possible_types
            .get(&abstract_id)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    /// The id of this [`Schema`]'s Query root operation type.
    pub fn query_type(&self) -> TypeId {
        self.query_type
    }

    pub fn type_by_id(&self, type_id: TypeId) -> Option<&GraphQLType> {
        self.arena.get(type_id)
    }

    pub fn type_id(&self, type_name: &str) -> Option<TypeId> {
        self.type_map.get(type_name).copied()
    }

    /// Every type reachable from this schema's roots, keyed by name, in the
    /// order the registry traversal discovered them.
    pub fn type_map(&self) -> &IndexMap<String, TypeId> {
        &self.type_map
    }
}

fn check_root_type(
    arena: &TypeArena,
    operation: OperationKind,
    type_id: TypeId,
) -> Result<()> {
    let Some(type_) = arena.get(type_id) else {
        return Err(SchemaBuildError::UndefinedTypeId { type_id });
    };
    if let Some(err) = arena.def_error(type_id) {
        return Err(SchemaBuildError::TypeDefinitionError {
            type_name: type_.name().to_string(),
            err: err.clone(),
        });
    }
    if !matches!(type_, GraphQLType::Object(_)) {
        return Err(SchemaBuildError::InvalidRootOperationType {
            kind: GraphQLTypeKind::from(type_),
            operation,
            type_name: type_.name().to_string(),
        });
    }
    Ok(())
}
