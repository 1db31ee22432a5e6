use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug)]
pub(super) struct ObjectOrInterfaceTypeData {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) name: String,
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
