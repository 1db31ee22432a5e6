mod fragment_registry_tests;
mod operation_tests;
