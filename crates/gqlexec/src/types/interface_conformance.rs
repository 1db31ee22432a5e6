use crate::schema::TypeValidationError;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeArena;

/// Verify that `object` satisfies the field contract of `iface`.
///
/// Conformance is invariant: every interface field must exist on the object
/// with a structurally equal type (see
/// [`TypeAnnotation::is_equal_type()`](crate::types::TypeAnnotation::is_equal_type)),
/// and the argument set of each such field must match the interface's
/// exactly, by name and by type. An empty result means `object` conforms.
pub fn check_implements(
    arena: &TypeArena,
    object: &ObjectType,
    iface: &InterfaceType,
) -> Vec<TypeValidationError> {
    let mut errors = vec![];
    let type_name = object.name();
    let interface_name = iface.name();

    for (field_name, iface_field) in iface.fields() {
        let Some(object_field) = object.field(field_name) else {
            errors.push(TypeValidationError::MissingInterfaceSpecifiedField {
                field_name: field_name.to_string(),
                interface_name: interface_name.to_string(),
                type_name: type_name.to_string(),
            });
            continue;
        };

        let iface_field_type = iface_field.type_annotation();
        let object_field_type = object_field.type_annotation();
        if !object_field_type.is_equal_type(iface_field_type) {
            errors.push(TypeValidationError::InvalidInterfaceSpecifiedFieldType {
                expected_field_type: iface_field_type.to_graphql_string(arena),
                field_name: field_name.to_string(),
                interface_name: interface_name.to_string(),
                invalid_field_type: object_field_type.to_graphql_string(arena),
                type_name: type_name.to_string(),
            });
        }

        let object_args = object_field.arguments();
        for (arg_name, iface_arg) in iface_field.arguments() {
            let Some(object_arg) = object_args.get(arg_name) else {
                errors.push(
                    TypeValidationError::MissingInterfaceSpecifiedFieldParameter {
                        field_name: field_name.to_string(),
                        interface_name: interface_name.to_string(),
                        missing_parameter_name: arg_name.to_string(),
                        type_name: type_name.to_string(),
                    }
                );
                continue;
            };

            let iface_arg_type = iface_arg.type_annotation();
            let object_arg_type = object_arg.type_annotation();
            if !object_arg_type.is_equal_type(iface_arg_type) {
                errors.push(
                    TypeValidationError::InvalidInterfaceSpecifiedFieldParameterType {
                        expected_parameter_type: iface_arg_type.to_graphql_string(arena),
                        field_name: field_name.to_string(),
                        interface_name: interface_name.to_string(),
                        invalid_parameter_type: object_arg_type.to_graphql_string(arena),
                        parameter_name: arg_name.to_string(),
                        type_name: type_name.to_string(),
                    }
                );
            }
        }

        let iface_args = iface_field.arguments();
        for arg_name in object_args.keys() {
            if !iface_args.contains_key(arg_name) {
                errors.push(
                    TypeValidationError::UnexpectedAdditionalParameterOnInterfaceSpecifiedField {
                        field_name: field_name.to_string(),
                        interface_name: interface_name.to_string(),
                        parameter_name: arg_name.to_string(),
                        type_name: type_name.to_string(),
                    }
                );
            }
        }
    }

    errors
}
