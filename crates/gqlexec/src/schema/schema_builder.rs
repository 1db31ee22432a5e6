use crate::ast;
use crate::execution::FieldResult;
use crate::execution::RawValue;
use crate::execution::ResolveInfo;
use crate::execution::ResolveParams;
use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::ReadContentError;
use crate::schema::Schema;
use crate::schema::SchemaConfig;
use crate::schema::TypeValidationError;
use crate::types::Argument;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectTypeConfig;
use crate::types::InterfaceTypeConfig;
use crate::types::ObjectTypeConfig;
use crate::types::ResolveTypeFn;
use crate::types::Resolver;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::TypeArena;
use crate::types::TypeDefinitionError;
use crate::types::TypeId;
use crate::types::UnionTypeConfig;
use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`] from SDL.
///
/// Every loaded document is parsed eagerly, but types are only materialized
/// by [`SchemaBuilder::build()`]: first every named type is registered (so
/// that types may refer to one another regardless of definition order or
/// file), then fields, interfaces, union members, and type extensions are
/// attached.
///
/// SDL carries no resolvers, so fields default to member lookup on their
/// parent value unless a resolver is attached with
/// [`SchemaBuilder::resolver()`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    documents: Vec<(PathBuf, ast::schema::Document)>,
    resolve_type_fns: Vec<(String, ResolveTypeFn)>,
    resolvers: Vec<(String, String, Resolver)>,
    str_load_counter: u16,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Result<Schema> {
        let (arena, config) = self.build_arena()?;
        Schema::new(arena, config)
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;
        log::debug!(
            "parsed {} schema definitions from {}",
            ast_doc.definitions.len(),
            file_path.display(),
        );
        self.documents.push((file_path, ast_doc));

        Ok(self)
    }

    /// Attach a resolver to `type_name.field_name`. The field must be defined
    /// (or added by an extension) in one of the loaded documents.
    pub fn resolver<F>(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver_fn: F,
    ) -> Self
    where
        F: Fn(&ResolveParams<'_>) -> FieldResult<RawValue> + Send + Sync + 'static,
    {
        self.resolvers.push((
            type_name.into(),
            field_name.into(),
            Resolver::new(resolver_fn),
        ));
        self
    }

    /// Attach a `resolve_type` hook to the interface or union named
    /// `type_name`.
    pub fn resolve_type<F>(mut self, type_name: impl Into<String>, resolve_type_fn: F) -> Self
    where
        F: Fn(&RawValue, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.resolve_type_fns.push((
            type_name.into(),
            ResolveTypeFn::new(resolve_type_fn),
        ));
        self
    }

    fn build_arena(self) -> Result<(TypeArena, SchemaConfig)> {
        let mut state = SdlBuildState::new(self.resolve_type_fns);

        for (file_path, doc) in &self.documents {
            for def in &doc.definitions {
                state.register_def(file_path, def)?;
            }
        }
        for (file_path, doc) in &self.documents {
            for def in &doc.definitions {
                state.attach_def(file_path, def)?;
            }
        }

        for (type_name, field_name, resolver) in self.resolvers {
            let field = state.type_ids
                .get(&type_name)
                .map(|(type_id, _)| *type_id)
                .and_then(|type_id| state.arena.field_mut(type_id, &field_name));
            let Some(field) = field else {
                return Err(SchemaBuildError::UndefinedResolverTarget {
                    field_name,
                    type_name,
                });
            };
            field.set_resolver(resolver);
        }

        if let Some((type_name, _)) = state.resolve_type_fns.first() {
            return Err(SchemaBuildError::UndefinedResolveTypeTarget {
                type_name: type_name.to_string(),
            });
        }

        let query = match &state.query_type {
            Some(def) => Some(state.root_type_id(def)?),
            None => state.type_ids.get("Query").map(|(type_id, _)| *type_id),
        };
        let mutation = match &state.mutation_type {
            Some(def) => Some(state.root_type_id(def)?),
            None => state.type_ids.get("Mutation").map(|(type_id, _)| *type_id),
        };

        Ok((state.arena, SchemaConfig { query, mutation }))
    }
}

struct SdlBuildState {
    arena: TypeArena,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    resolve_type_fns: Vec<(String, ResolveTypeFn)>,
    type_ids: HashMap<String, (TypeId, loc::SchemaDefLocation)>,
}
impl SdlBuildState {
    fn new(resolve_type_fns: Vec<(String, ResolveTypeFn)>) -> Self {
        let arena = TypeArena::new();
        let type_ids = TypeId::BUILTIN_SCALARS
            .iter()
            .filter_map(|type_id| Some((
                arena.type_name(*type_id)?.to_string(),
                (*type_id, loc::SchemaDefLocation::GraphQLBuiltIn),
            )))
            .collect();
        Self {
            arena,
            mutation_type: None,
            query_type: None,
            resolve_type_fns,
            type_ids,
        }
    }

    fn register_def(
        &mut self,
        file_path: &Path,
        def: &ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        use graphql_parser::schema::TypeDefinition;
        match def {
            Definition::DirectiveDefinition(directive_def) =>
                Err(SchemaBuildError::UnsupportedDirectiveDefinition {
                    directive_name: directive_def.name.to_string(),
                    location: loc::FilePosition::from_pos(
                        file_path,
                        directive_def.position,
                    ).into(),
                }),

            Definition::SchemaDefinition(schema_def) =>
                self.visit_schemablock_def(file_path, schema_def),

            // Extensions are applied once every type is registered.
            Definition::TypeExtension(_) => Ok(()),

            Definition::TypeDefinition(TypeDefinition::Enum(enum_def)) =>
                Err(SchemaBuildError::UnsupportedEnumType {
                    type_name: enum_def.name.to_string(),
                    location: loc::FilePosition::from_pos(
                        file_path,
                        enum_def.position,
                    ).into(),
                }),

            Definition::TypeDefinition(TypeDefinition::InputObject(def)) => {
                let location = loc::FilePosition::from_pos(file_path, def.position);
                self.check_unique_name(&def.name, &location)?;
                let mut config = InputObjectTypeConfig::new(def.name.as_str());
                if let Some(description) = &def.description {
                    config = config.with_description(description.as_str());
                }
                let type_id = self.arena.add_input_object(config);
                self.register_type_id(&def.name, type_id, location);
                Ok(())
            },

            Definition::TypeDefinition(TypeDefinition::Interface(def)) => {
                let location = loc::FilePosition::from_pos(file_path, def.position);
                self.check_unique_name(&def.name, &location)?;
                let mut config = InterfaceTypeConfig::new(def.name.as_str());
                if let Some(description) = &def.description {
                    config = config.with_description(description.as_str());
                }
                if let Some(resolve_type_fn) = self.take_resolve_type_fn(&def.name) {
                    config.resolve_type = Some(resolve_type_fn);
                }
                let type_id = self.arena.add_interface(config);
                self.register_type_id(&def.name, type_id, location);
                Ok(())
            },

            Definition::TypeDefinition(TypeDefinition::Object(def)) => {
                let location = loc::FilePosition::from_pos(file_path, def.position);
                self.check_unique_name(&def.name, &location)?;
                let mut config = ObjectTypeConfig::new(def.name.as_str());
                if let Some(description) = &def.description {
                    config = config.with_description(description.as_str());
                }
                let type_id = self.arena.add_object(config);
                self.register_type_id(&def.name, type_id, location);
                Ok(())
            },

            Definition::TypeDefinition(TypeDefinition::Scalar(def)) => {
                let location = loc::FilePosition::from_pos(file_path, def.position);
                self.check_unique_name(&def.name, &location)?;
                let mut scalar = ScalarType::new(
                    def.name.as_str(),
                    serialize_custom_scalar,
                    |value: &Value| Ok(value.clone()),
                );
                if let Some(description) = &def.description {
                    scalar = scalar.with_description(description.as_str());
                }
                let type_id = self.arena.add_scalar(scalar);
                self.register_type_id(&def.name, type_id, location);
                Ok(())
            },

            Definition::TypeDefinition(TypeDefinition::Union(def)) => {
                let location = loc::FilePosition::from_pos(file_path, def.position);
                self.check_unique_name(&def.name, &location)?;
                let mut config = UnionTypeConfig::new(def.name.as_str());
                if let Some(description) = &def.description {
                    config = config.with_description(description.as_str());
                }
                if let Some(resolve_type_fn) = self.take_resolve_type_fn(&def.name) {
                    config.resolve_type = Some(resolve_type_fn);
                }
                let type_id = self.arena.add_union(config);
                self.register_type_id(&def.name, type_id, location);
                Ok(())
            },
        }
    }

    fn attach_def(
        &mut self,
        file_path: &Path,
        def: &ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        use graphql_parser::schema::TypeDefinition;
        use graphql_parser::schema::TypeExtension;
        match def {
            Definition::DirectiveDefinition(_)
            | Definition::SchemaDefinition(_)
            | Definition::TypeDefinition(TypeDefinition::Enum(_))
            | Definition::TypeDefinition(TypeDefinition::Scalar(_))
                => Ok(()),

            Definition::TypeDefinition(TypeDefinition::InputObject(def)) =>
                self.attach_input_fields(file_path, &def.name, &def.fields),

            Definition::TypeDefinition(TypeDefinition::Interface(def)) => {
                self.check_no_interface_inheritance(
                    file_path,
                    &def.name,
                    &def.implements_interfaces,
                    def.position,
                )?;
                self.attach_fields(file_path, &def.name, &def.fields)
            },

            Definition::TypeDefinition(TypeDefinition::Object(def)) => {
                self.attach_interfaces(
                    file_path,
                    &def.name,
                    &def.implements_interfaces,
                    def.position,
                )?;
                self.attach_fields(file_path, &def.name, &def.fields)
            },

            Definition::TypeDefinition(TypeDefinition::Union(def)) =>
                self.attach_union_members(file_path, &def.name, &def.types, def.position),

            Definition::TypeExtension(TypeExtension::Enum(ext)) =>
                Err(SchemaBuildError::UnsupportedEnumType {
                    type_name: ext.name.to_string(),
                    location: loc::FilePosition::from_pos(file_path, ext.position).into(),
                }),

            Definition::TypeExtension(TypeExtension::InputObject(ext)) => {
                self.check_extension_target(
                    file_path,
                    &ext.name,
                    ext.position,
                    GraphQLTypeKind::InputObject,
                )?;
                self.attach_input_fields(file_path, &ext.name, &ext.fields)
            },

            Definition::TypeExtension(TypeExtension::Interface(ext)) => {
                self.check_extension_target(
                    file_path,
                    &ext.name,
                    ext.position,
                    GraphQLTypeKind::Interface,
                )?;
                self.check_no_interface_inheritance(
                    file_path,
                    &ext.name,
                    &ext.implements_interfaces,
                    ext.position,
                )?;
                self.attach_fields(file_path, &ext.name, &ext.fields)
            },

            Definition::TypeExtension(TypeExtension::Object(ext)) => {
                self.check_extension_target(
                    file_path,
                    &ext.name,
                    ext.position,
                    GraphQLTypeKind::Object,
                )?;
                self.attach_interfaces(
                    file_path,
                    &ext.name,
                    &ext.implements_interfaces,
                    ext.position,
                )?;
                self.attach_fields(file_path, &ext.name, &ext.fields)
            },

            Definition::TypeExtension(TypeExtension::Scalar(ext)) =>
                self.check_extension_target(
                    file_path,
                    &ext.name,
                    ext.position,
                    GraphQLTypeKind::Scalar,
                ),

            Definition::TypeExtension(TypeExtension::Union(ext)) => {
                self.check_extension_target(
                    file_path,
                    &ext.name,
                    ext.position,
                    GraphQLTypeKind::Union,
                )?;
                self.attach_union_members(file_path, &ext.name, &ext.types, ext.position)
            },
        }
    }

    fn attach_fields(
        &mut self,
        file_path: &Path,
        type_name: &str,
        fields: &[ast::schema::Field],
    ) -> Result<()> {
        let type_id = self.lookup(type_name)?;
        for ast_field in fields {
            let mut field = Field::new(
                self.type_annotation(file_path, &ast_field.field_type, ast_field.position)?,
            );
            if let Some(description) = &ast_field.description {
                field = field.with_description(description.as_str());
            }
            for ast_arg in &ast_field.arguments {
                let mut arg = Argument::new(
                    self.type_annotation(file_path, &ast_arg.value_type, ast_arg.position)?,
                );
                if let Some(description) = &ast_arg.description {
                    arg = arg.with_description(description.as_str());
                }
                if let Some(default_value) = &ast_arg.default_value {
                    arg = arg.with_default_value(
                        Value::from_ast(default_value, &IndexMap::new()),
                    );
                }
                field = field.with_argument(ast_arg.name.as_str(), arg);
            }
            self.arena.add_field_config(type_id, ast_field.name.as_str(), field);
        }
        Ok(())
    }

    fn attach_input_fields(
        &mut self,
        file_path: &Path,
        type_name: &str,
        fields: &[ast::schema::InputValue],
    ) -> Result<()> {
        let type_id = self.lookup(type_name)?;
        for ast_field in fields {
            let mut field = InputField::new(
                self.type_annotation(file_path, &ast_field.value_type, ast_field.position)?,
            );
            if let Some(description) = &ast_field.description {
                field = field.with_description(description.as_str());
            }
            if let Some(default_value) = &ast_field.default_value {
                field = field.with_default_value(
                    Value::from_ast(default_value, &IndexMap::new()),
                );
            }
            self.arena.add_input_field_config(type_id, ast_field.name.as_str(), field);
        }
        Ok(())
    }

    fn attach_interfaces(
        &mut self,
        file_path: &Path,
        type_name: &str,
        interface_names: &[String],
        position: graphql_parser::Pos,
    ) -> Result<()> {
        let type_id = self.lookup(type_name)?;
        for iface_name in interface_names {
            let iface_id = self.lookup_ref(file_path, iface_name, position)?;
            self.arena.add_implemented_interface(type_id, iface_id);
        }
        Ok(())
    }

    fn attach_union_members(
        &mut self,
        file_path: &Path,
        type_name: &str,
        member_names: &[String],
        position: graphql_parser::Pos,
    ) -> Result<()> {
        let type_id = self.lookup(type_name)?;
        for member_name in member_names {
            let member_id = self.lookup_ref(file_path, member_name, position)?;
            self.arena.add_union_member(type_id, member_id);
        }
        Ok(())
    }

    fn check_extension_target(
        &self,
        file_path: &Path,
        type_name: &str,
        position: graphql_parser::Pos,
        expected_kind: GraphQLTypeKind,
    ) -> Result<()> {
        let extension_loc: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, position).into();
        let Some((type_id, _)) = self.type_ids.get(type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: type_name.to_string(),
                extension_loc,
            });
        };
        let actual_kind = self.arena.get(*type_id).map(GraphQLTypeKind::from);
        if actual_kind != Some(expected_kind) {
            return Err(SchemaBuildError::InvalidExtensionType {
                type_name: type_name.to_string(),
                extension_loc,
            });
        }
        Ok(())
    }

    fn check_no_interface_inheritance(
        &self,
        file_path: &Path,
        interface_name: &str,
        implements_interfaces: &[String],
        position: graphql_parser::Pos,
    ) -> Result<()> {
        if implements_interfaces.is_empty() {
            return Ok(());
        }
        Err(SchemaBuildError::UnsupportedInterfaceInheritance {
            interface_name: interface_name.to_string(),
            location: loc::FilePosition::from_pos(file_path, position).into(),
        })
    }

    fn check_unique_name(
        &self,
        type_name: &str,
        location: &loc::FilePosition,
    ) -> Result<()> {
        if let Some((_, def1)) = self.type_ids.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: def1.to_owned(),
                def2: location.to_owned().into(),
            });
        }
        Ok(())
    }

    fn lookup(&self, type_name: &str) -> Result<TypeId> {
        self.type_ids
            .get(type_name)
            .map(|(type_id, _)| *type_id)
            .ok_or_else(|| SchemaBuildError::ExtensionOfUndefinedType {
                type_name: type_name.to_string(),
                extension_loc: loc::SchemaDefLocation::GraphQLBuiltIn,
            })
    }

    fn lookup_ref(
        &self,
        file_path: &Path,
        type_name: &str,
        position: graphql_parser::Pos,
    ) -> Result<TypeId> {
        self.type_ids
            .get(type_name)
            .map(|(type_id, _)| *type_id)
            .ok_or_else(|| SchemaBuildError::UndefinedTypeName {
                ref_location: loc::FilePosition::from_pos(file_path, position).into(),
                undefined_type_name: type_name.to_string(),
            })
    }

    fn register_type_id(
        &mut self,
        type_name: &str,
        type_id: TypeId,
        location: loc::FilePosition,
    ) {
        self.type_ids.insert(type_name.to_string(), (type_id, location.into()));
    }

    fn root_type_id(&self, def: &NamedTypeDefLocation) -> Result<TypeId> {
        self.type_ids
            .get(&def.type_name)
            .map(|(type_id, _)| *type_id)
            .ok_or_else(|| SchemaBuildError::UndefinedTypeName {
                ref_location: def.def_location.to_owned(),
                undefined_type_name: def.type_name.to_string(),
            })
    }

    fn take_resolve_type_fn(&mut self, type_name: &str) -> Option<ResolveTypeFn> {
        let idx = self.resolve_type_fns
            .iter()
            .position(|(name, _)| name == type_name)?;
        Some(self.resolve_type_fns.remove(idx).1)
    }

    fn type_annotation(
        &self,
        file_path: &Path,
        ast_type: &ast::schema::Type,
        position: graphql_parser::Pos,
    ) -> Result<TypeAnnotation> {
        use graphql_parser::schema::Type;
        Ok(match ast_type {
            Type::ListType(inner) =>
                TypeAnnotation::list(self.type_annotation(file_path, inner, position)?),
            Type::NamedType(type_name) =>
                TypeAnnotation::named(self.lookup_ref(file_path, type_name, position)?),
            Type::NonNullType(inner) =>
                TypeAnnotation::non_null(self.type_annotation(file_path, inner, position)?),
        })
    }

    fn visit_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: &ast::schema::SchemaDefinition,
    ) -> Result<()> {
        if schema_def.subscription.is_some() {
            return Err(SchemaBuildError::UnsupportedSubscriptionOperation {
                location: loc::FilePosition::from_pos(
                    file_path,
                    schema_def.position,
                ).into(),
            });
        }

        if let Some(type_name) = &schema_def.query {
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name.to_string(),
                file_path,
                schema_def.position,
            );
            if let Some(existing_typedef_loc) = &self.query_type {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: OperationKind::Query,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            self.query_type = Some(typedef_loc);
        }

        if let Some(type_name) = &schema_def.mutation {
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name.to_string(),
                file_path,
                schema_def.position,
            );
            if let Some(existing_typedef_loc) = &self.mutation_type {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: OperationKind::Mutation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            self.mutation_type = Some(typedef_loc);
        }

        Ok(())
    }
}

/// Custom scalars declared in SDL pass plain values through unchanged.
fn serialize_custom_scalar(raw: &RawValue) -> std::result::Result<Value, String> {
    raw.to_plain_value()
        .ok_or_else(|| format!("Custom scalar cannot represent value: {raw}"))
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple definitions of the same operation were defined")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "Schema must contain unique named types but contains multiple types \
        named \"{type_name}\"."
    )]
    DuplicateTypeName {
        type_name: String,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error(
        "Attempted to extend `{type_name}` using an extension for a different \
        kind of type"
    )]
    InvalidExtensionType {
        type_name: String,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error(
        "The {operation} root operation type must be an object type, but \
        `{type_name}` is a {} type",
        kind.name(),
    )]
    InvalidRootOperationType {
        kind: GraphQLTypeKind,
        operation: OperationKind,
        type_name: String,
    },

    #[error(
        "A NonNull type must wrap a nullable type, but `{type_annotation}` \
        wraps a NonNull type"
    )]
    NestedNonNullType {
        type_annotation: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1:?} and {operation2:?} root operation are defined with \
        the same GraphQL type (`{reused_type_name}`), but this is not allowed \
        in GraphQL. All root operations must be defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationKind,
        operation2: OperationKind,
    },

    #[error("Error parsing schema file {}: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<ReadContentError>),

    #[error("The `{type_name}` type has a definition error: {err}")]
    TypeDefinitionError {
        type_name: String,
        err: TypeDefinitionError,
    },

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error("A type-definition error was recorded outside of any type: {err}")]
    UnattributedTypeDefinitionError {
        err: TypeDefinitionError,
    },

    #[error(
        "A resolver was provided for `{type_name}.{field_name}`, but no such \
        field is defined"
    )]
    UndefinedResolverTarget {
        field_name: String,
        type_name: String,
    },

    #[error(
        "A resolve_type function was provided for `{type_name}`, but no \
        interface or union with that name is defined"
    )]
    UndefinedResolveTypeTarget {
        type_name: String,
    },

    #[error("A type was referenced by id {type_id}, but no such type exists")]
    UndefinedTypeId {
        type_id: TypeId,
    },

    #[error("There is no type defined with the name `{undefined_type_name}`")]
    UndefinedTypeName {
        ref_location: loc::SchemaDefLocation,
        undefined_type_name: String,
    },

    #[error("Custom directive definitions (`@{directive_name}`) are not supported")]
    UnsupportedDirectiveDefinition {
        directive_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Enum types (`{type_name}`) are not supported")]
    UnsupportedEnumType {
        type_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error(
        "Interfaces implementing other interfaces are not supported, but \
        `{interface_name}` declares one"
    )]
    UnsupportedInterfaceInheritance {
        interface_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Subscription operations are not supported")]
    UnsupportedSubscriptionOperation {
        location: loc::SchemaDefLocation,
    },
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SchemaDefLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: &Path,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file, pos).into(),
            type_name,
        }
    }
}
