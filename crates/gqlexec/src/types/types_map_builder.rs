use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeValidator;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::TypeAnnotation;
use crate::types::TypeArena;
use crate::types::TypeId;
use crate::types::UnionTypeValidator;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Collects every named type reachable from a set of root types into a
/// name-keyed registry.
///
/// The traversal is depth-first. A type whose name is already registered
/// stops the descent when it is the same [`TypeId`] (this is what makes
/// self-referential type graphs terminate) and fails the build when it is a
/// different type that happens to share the name.
#[derive(Debug)]
pub struct TypesMapBuilder<'a> {
    arena: &'a TypeArena,
    types: IndexMap<String, TypeId>,
}
impl<'a> TypesMapBuilder<'a> {
    pub fn new(arena: &'a TypeArena) -> Self {
        Self {
            arena,
            types: IndexMap::new(),
        }
    }

    /// Register `type_id` and everything reachable from it.
    pub fn visit_root(&mut self, type_id: TypeId) -> Result<()> {
        self.visit_type(type_id)
    }

    fn visit_annotation(&mut self, annot: &'a TypeAnnotation) -> Result<()> {
        match annot {
            TypeAnnotation::List(inner) => self.visit_annotation(inner),
            TypeAnnotation::Named(type_id) => self.visit_type(*type_id),
            TypeAnnotation::NonNull(inner) => {
                if inner.is_non_null() {
                    return Err(SchemaBuildError::NestedNonNullType {
                        type_annotation: annot.to_graphql_string(self.arena),
                    });
                }
                self.visit_annotation(inner)
            },
        }
    }

    fn visit_fields(&mut self, fields: &'a IndexMap<String, Field>) -> Result<()> {
        for field in fields.values() {
            for arg in field.arguments().values() {
                self.visit_annotation(arg.type_annotation())?;
            }
            self.visit_annotation(field.type_annotation())?;
        }
        Ok(())
    }

    fn visit_type(&mut self, type_id: TypeId) -> Result<()> {
        let Some(type_) = self.arena.get(type_id) else {
            return Err(SchemaBuildError::UndefinedTypeId { type_id });
        };

        let type_name = type_.name();
        if type_name.is_empty() {
            log::debug!("skipping unnamed type {type_id}");
            return Ok(());
        }

        if let Some(err) = self.arena.def_error(type_id) {
            return Err(SchemaBuildError::TypeDefinitionError {
                type_name: type_name.to_string(),
                err: err.clone(),
            });
        }

        if let Some(registered_id) = self.types.get(type_name) {
            if *registered_id == type_id {
                return Ok(());
            }
            return Err(SchemaBuildError::DuplicateTypeName {
                type_name: type_name.to_string(),
            });
        }
        self.types.insert(type_name.to_string(), type_id);

        match type_ {
            GraphQLType::Scalar(_) => (),

            GraphQLType::Union(union_) => {
                for member_id in union_.members() {
                    self.visit_type(*member_id)?;
                }
            },

            GraphQLType::Interface(iface) => {
                for impl_id in iface.implementations() {
                    self.visit_type(*impl_id)?;
                }
                self.visit_fields(iface.fields())?;
            },

            GraphQLType::Object(obj) => {
                for iface_id in obj.interfaces() {
                    self.visit_type(*iface_id)?;
                }
                self.visit_fields(obj.fields())?;
            },

            GraphQLType::InputObject(input_obj) => {
                for field in input_obj.fields().values() {
                    self.visit_annotation(field.type_annotation())?;
                }
            },
        }

        Ok(())
    }

    /// Run cross-type validation over every registered type and return the
    /// registry, or every validation error found.
    ///
    /// Validation runs only after traversal has finished so that each
    /// interface's set of implementations is complete.
    pub fn into_types_map(self) -> Result<IndexMap<String, TypeId>> {
        let mut errors = vec![];
        for type_id in self.types.values() {
            let Some(type_) = self.arena.get(*type_id) else {
                continue;
            };
            match type_ {
                GraphQLType::Scalar(_) => (),

                GraphQLType::InputObject(type_) => errors.append(
                    &mut InputObjectTypeValidator::new(type_, self.arena)
                        .validate()
                ),

                GraphQLType::Interface(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::for_interface(type_, self.arena)
                        .validate()
                ),

                GraphQLType::Object(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::for_object(type_, self.arena)
                        .validate()
                ),

                GraphQLType::Union(type_) => errors.append(
                    &mut UnionTypeValidator::new(type_, self.arena)
                        .validate()
                ),
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        log::debug!("registered {} types", self.types.len());
        Ok(self.types)
    }
}
