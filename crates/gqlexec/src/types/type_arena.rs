use crate::types::scalar_type::builtin_scalars;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InputObjectTypeConfig;
use crate::types::InterfaceType;
use crate::types::InterfaceTypeConfig;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ObjectTypeConfig;
use crate::types::ScalarType;
use crate::types::TypeDefinitionError;
use crate::types::UnionType;
use crate::types::UnionTypeConfig;
use indexmap::IndexMap;

/// Stable identity of a named type within a [`TypeArena`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TypeId(pub(crate) u32);
impl TypeId {
    pub const STRING: TypeId = TypeId(0);
    pub const INT: TypeId = TypeId(1);
    pub const FLOAT: TypeId = TypeId(2);
    pub const BOOLEAN: TypeId = TypeId(3);
    pub const ID: TypeId = TypeId(4);

    pub(crate) const BUILTIN_SCALARS: [TypeId; 5] = [
        Self::STRING,
        Self::INT,
        Self::FLOAT,
        Self::BOOLEAN,
        Self::ID,
    ];

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}
impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
struct TypeEntry {
    def_error: Option<TypeDefinitionError>,
    type_: GraphQLType,
}

/// Owns every named type definition authored for a schema.
///
/// Types reference one another by [`TypeId`], so mutually recursive types are
/// authored by adding each type first and attaching fields afterwards with
/// [`TypeArena::add_field_config()`].
///
/// Mistakes made while authoring (invalid names, duplicate fields, and so on)
/// do not fail immediately. They are recorded on the offending type and fail
/// [`Schema::new()`](crate::schema::Schema::new) if that type is reachable
/// from a root operation type.
#[derive(Clone, Debug)]
pub struct TypeArena {
    detached_errors: Vec<TypeDefinitionError>,
    entries: Vec<TypeEntry>,
}
impl TypeArena {
    /// Create an arena pre-populated with the built-in `String`, `Int`,
    /// `Float`, `Boolean`, and `ID` scalars at their fixed [`TypeId`]s.
    pub fn new() -> Self {
        Self {
            detached_errors: vec![],
            entries: builtin_scalars()
                .iter()
                .map(|scalar| TypeEntry {
                    def_error: None,
                    type_: GraphQLType::Scalar(Box::new(scalar.clone())),
                })
                .collect(),
        }
    }

    pub fn add_scalar(&mut self, scalar: ScalarType) -> TypeId {
        let def_error = validate_name(scalar.name());
        self.push_entry(GraphQLType::Scalar(Box::new(scalar)), def_error)
    }

    pub fn add_object(&mut self, config: ObjectTypeConfig) -> TypeId {
        let ObjectTypeConfig {
            description,
            fields,
            interfaces,
            is_type_of,
            name,
        } = config;
        let def_error = validate_name(&name);
        let type_id = self.push_entry(
            GraphQLType::Object(Box::new(ObjectType {
                data: ObjectOrInterfaceTypeData {
                    description,
                    fields: IndexMap::new(),
                    name,
                },
                interfaces: vec![],
                is_type_of,
            })),
            def_error,
        );
        for interface_id in interfaces {
            self.add_implemented_interface(type_id, interface_id);
        }
        for (field_name, field) in fields {
            self.add_field_config(type_id, field_name, field);
        }
        type_id
    }

    pub fn add_interface(&mut self, config: InterfaceTypeConfig) -> TypeId {
        let InterfaceTypeConfig {
            description,
            fields,
            name,
            resolve_type,
        } = config;
        let def_error = validate_name(&name);
        let type_id = self.push_entry(
            GraphQLType::Interface(Box::new(InterfaceType {
                data: ObjectOrInterfaceTypeData {
                    description,
                    fields: IndexMap::new(),
                    name,
                },
                implementations: vec![],
                resolve_type,
            })),
            def_error,
        );
        for (field_name, field) in fields {
            self.add_field_config(type_id, field_name, field);
        }
        type_id
    }

    pub fn add_union(&mut self, config: UnionTypeConfig) -> TypeId {
        let UnionTypeConfig {
            description,
            members,
            name,
            resolve_type,
        } = config;
        let def_error = validate_name(&name);
        let type_id = self.push_entry(
            GraphQLType::Union(Box::new(UnionType {
                description,
                members: vec![],
                name,
                resolve_type,
            })),
            def_error,
        );
        for member_id in members {
            self.add_union_member(type_id, member_id);
        }
        type_id
    }

    pub fn add_input_object(&mut self, config: InputObjectTypeConfig) -> TypeId {
        let InputObjectTypeConfig {
            description,
            fields,
            name,
        } = config;
        let def_error = validate_name(&name);
        let type_id = self.push_entry(
            GraphQLType::InputObject(Box::new(InputObjectType {
                description,
                fields: IndexMap::new(),
                name,
            })),
            def_error,
        );
        for (field_name, field) in fields {
            self.add_input_field_config(type_id, field_name, field);
        }
        type_id
    }

    /// Attach a field to an object or interface type after the type has been
    /// added. This is how mutually recursive types are authored: add both
    /// types, then attach the fields that refer to one another.
    pub fn add_field_config(
        &mut self,
        type_id: TypeId,
        field_name: impl Into<String>,
        field: Field,
    ) {
        let field_name = field_name.into();
        let mut errors = vec![];
        if let Some(err) = validate_name(&field_name) {
            errors.push(err);
        }
        for arg_name in field.arguments().keys() {
            if let Some(err) = validate_name(arg_name) {
                errors.push(err);
            }
        }

        let Some(entry) = self.entry_mut(type_id) else {
            return;
        };
        let type_name = entry.type_.name().to_string();
        for argument_name in &field.duplicate_argument_names {
            errors.push(TypeDefinitionError::DuplicateArgumentName {
                argument_name: argument_name.to_string(),
                field_name: field_name.to_string(),
                type_name: type_name.to_string(),
            });
        }
        let fields = match &mut entry.type_ {
            GraphQLType::Interface(iface) => &mut iface.data.fields,
            GraphQLType::Object(obj) => &mut obj.data.fields,
            type_ => {
                errors.push(TypeDefinitionError::UnsupportedOperationForTypeKind {
                    kind: GraphQLTypeKind::from(&*type_),
                    operation: "add an output field",
                    type_name,
                });
                return self.record_errors(type_id, errors);
            },
        };
        if fields.contains_key(&field_name) {
            errors.push(TypeDefinitionError::DuplicateFieldName {
                field_name,
                type_name,
            });
        } else {
            fields.insert(field_name, field);
        }
        self.record_errors(type_id, errors);
    }

    /// Record that `object_id` implements `interface_id`. The object also
    /// becomes one of the interface's implementations.
    pub fn add_implemented_interface(
        &mut self,
        object_id: TypeId,
        interface_id: TypeId,
    ) {
        if self.get(interface_id).is_none() {
            return self.record_errors(object_id, vec![
                TypeDefinitionError::UnknownTypeId { type_id: interface_id },
            ]);
        }

        let Some(entry) = self.entry_mut(object_id) else {
            return;
        };
        let err = match &mut entry.type_ {
            GraphQLType::Object(obj) if obj.interfaces.contains(&interface_id) =>
                Some(TypeDefinitionError::DuplicateInterfaceImplementsDeclaration {
                    interface_id,
                    type_name: obj.name().to_string(),
                }),
            GraphQLType::Object(obj) => {
                obj.interfaces.push(interface_id);
                None
            },
            type_ => Some(TypeDefinitionError::UnsupportedOperationForTypeKind {
                kind: GraphQLTypeKind::from(&*type_),
                operation: "implement an interface",
                type_name: type_.name().to_string(),
            }),
        };
        if let Some(err) = err {
            return self.record_errors(object_id, vec![err]);
        }

        // Non-interface targets are reported by schema validation.
        if let Some(GraphQLType::Interface(iface)) =
            self.entry_mut(interface_id).map(|entry| &mut entry.type_)
            && !iface.implementations.contains(&object_id) {
            iface.implementations.push(object_id);
        }
    }

    pub fn add_union_member(&mut self, union_id: TypeId, member_id: TypeId) {
        if self.get(member_id).is_none() {
            return self.record_errors(union_id, vec![
                TypeDefinitionError::UnknownTypeId { type_id: member_id },
            ]);
        }

        let Some(entry) = self.entry_mut(union_id) else {
            return;
        };
        let err = match &mut entry.type_ {
            GraphQLType::Union(union_) if union_.members.contains(&member_id) =>
                Some(TypeDefinitionError::DuplicateUnionMember {
                    member_id,
                    type_name: union_.name().to_string(),
                }),
            GraphQLType::Union(union_) => {
                union_.members.push(member_id);
                None
            },
            type_ => Some(TypeDefinitionError::UnsupportedOperationForTypeKind {
                kind: GraphQLTypeKind::from(&*type_),
                operation: "add a union member",
                type_name: type_.name().to_string(),
            }),
        };
        if let Some(err) = err {
            self.record_errors(union_id, vec![err]);
        }
    }

    pub fn add_input_field_config(
        &mut self,
        type_id: TypeId,
        field_name: impl Into<String>,
        field: InputField,
    ) {
        let field_name = field_name.into();
        let mut errors: Vec<_> = validate_name(&field_name).into_iter().collect();
        let Some(entry) = self.entry_mut(type_id) else {
            return;
        };
        match &mut entry.type_ {
            GraphQLType::InputObject(input_obj) => {
                if input_obj.fields.contains_key(&field_name) {
                    errors.push(TypeDefinitionError::DuplicateFieldName {
                        field_name,
                        type_name: input_obj.name().to_string(),
                    });
                } else {
                    input_obj.fields.insert(field_name, field);
                }
            },
            type_ => errors.push(TypeDefinitionError::UnsupportedOperationForTypeKind {
                kind: GraphQLTypeKind::from(&*type_),
                operation: "add an input field",
                type_name: type_.name().to_string(),
            }),
        }
        self.record_errors(type_id, errors);
    }

    /// The definition-time error recorded for a type, if any. Only the first
    /// error recorded against a type is kept.
    pub fn def_error(&self, type_id: TypeId) -> Option<&TypeDefinitionError> {
        self.entries.get(type_id.index())
            .and_then(|entry| entry.def_error.as_ref())
    }

    /// Definition errors that could not be attributed to any type in this
    /// arena (e.g. fields attached to a [`TypeId`] from another arena).
    pub fn detached_errors(&self) -> &[TypeDefinitionError] {
        &self.detached_errors
    }

    pub fn get(&self, type_id: TypeId) -> Option<&GraphQLType> {
        self.entries.get(type_id.index()).map(|entry| &entry.type_)
    }

    /// All ids in this arena, in the order types were added.
    pub fn ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        (0..self.entries.len()).map(|idx| TypeId(idx as u32))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Find the first type added with the given name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.entries.iter()
            .position(|entry| entry.type_.name() == name)
            .map(|idx| TypeId(idx as u32))
    }

    pub fn type_name(&self, type_id: TypeId) -> Option<&str> {
        self.get(type_id).map(|type_| type_.name())
    }

    pub(crate) fn field_mut(
        &mut self,
        type_id: TypeId,
        field_name: &str,
    ) -> Option<&mut Field> {
        match &mut self.entry_mut(type_id)?.type_ {
            GraphQLType::Interface(iface) => iface.data.fields.get_mut(field_name),
            GraphQLType::Object(obj) => obj.data.fields.get_mut(field_name),
            _ => None,
        }
    }

    fn entry_mut(&mut self, type_id: TypeId) -> Option<&mut TypeEntry> {
        if type_id.index() >= self.entries.len() {
            self.detached_errors.push(TypeDefinitionError::UnknownTypeId { type_id });
            return None;
        }
        self.entries.get_mut(type_id.index())
    }

    fn push_entry(
        &mut self,
        type_: GraphQLType,
        def_error: Option<TypeDefinitionError>,
    ) -> TypeId {
        let type_id = TypeId(self.entries.len() as u32);
        if let Some(err) = &def_error {
            log::debug!("definition error recorded on type {type_id}: {err}");
        }
        self.entries.push(TypeEntry { def_error, type_ });
        type_id
    }

    fn record_errors(&mut self, type_id: TypeId, errors: Vec<TypeDefinitionError>) {
        let Some(entry) = self.entries.get_mut(type_id.index()) else {
            self.detached_errors.extend(errors);
            return;
        };
        for err in errors {
            log::debug!(
                "definition error recorded on type `{}`: {err}",
                entry.type_.name(),
            );
            if entry.def_error.is_none() {
                entry.def_error = Some(err);
            }
        }
    }
}
impl std::default::Default for TypeArena {
    fn default() -> Self {
        Self::new()
    }
}

/// https://spec.graphql.org/October2021/#Name
fn validate_name(name: &str) -> Option<TypeDefinitionError> {
    if name.starts_with("__") {
        return Some(TypeDefinitionError::InvalidDunderPrefixedName {
            name: name.to_string(),
        });
    }

    let mut chars = name.chars();
    let valid_start = chars.next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic());
    let valid_rest = chars.all(|c| c == '_' || c.is_ascii_alphanumeric());
    if valid_start && valid_rest {
        None
    } else {
        Some(TypeDefinitionError::InvalidName {
            name: name.to_string(),
        })
    }
}
