use crate::types::Field;
use indexmap::IndexMap;

/// Behavior shared by the two field-bearing output types:
/// [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
pub trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn field(&self, name: &str) -> Option<&Field>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn name(&self) -> &str;
}
