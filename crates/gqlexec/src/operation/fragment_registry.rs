use crate::ast;
use graphql_parser::query::Definition;
use std::collections::HashMap;

/// The named fragments of a query document, looked up by fragment spreads
/// during field collection.
///
/// When a document defines the same fragment name more than once, the first
/// definition wins.
#[derive(Clone, Debug, Default)]
pub struct FragmentRegistry<'doc> {
    fragments: HashMap<&'doc str, &'doc ast::query::FragmentDefinition>,
}
impl<'doc> FragmentRegistry<'doc> {
    pub fn from_document(document: &'doc ast::query::Document) -> Self {
        let mut fragments = HashMap::new();
        for def in &document.definitions {
            if let Definition::Fragment(fragment) = def {
                fragments.entry(fragment.name.as_str()).or_insert(fragment);
            }
        }
        Self { fragments }
    }

    pub fn get(&self, fragment_name: &str) -> Option<&'doc ast::query::FragmentDefinition> {
        self.fragments.get(fragment_name).copied()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
