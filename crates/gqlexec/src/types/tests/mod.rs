mod input_object_type_validator_tests;
mod object_or_interface_type_validator_tests;
mod scalar_type_tests;
mod type_annotation_tests;
