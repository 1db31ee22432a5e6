use crate::ast;
use crate::operation::FragmentRegistry;
use crate::schema::Schema;
use crate::types::TypeId;
use crate::Value;
use graphql_parser::query::Selection;
use graphql_parser::query::TypeCondition;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Selected fields grouped by response key, in first-occurrence order.
pub(super) type GroupedFields<'doc> = IndexMap<&'doc str, Vec<&'doc ast::query::Field>>;

/// Walks a selection set against a concrete object type, flattening
/// fragments and applying `@skip` / `@include`.
pub(super) struct FieldCollector<'a, 'doc> {
    fragments: &'a FragmentRegistry<'doc>,
    object_type_id: TypeId,
    schema: &'a Schema,
    variables: &'a IndexMap<String, Value>,
    visited_fragments: HashSet<&'doc str>,
}
impl<'a, 'doc> FieldCollector<'a, 'doc> {
    pub fn new(
        schema: &'a Schema,
        fragments: &'a FragmentRegistry<'doc>,
        variables: &'a IndexMap<String, Value>,
        object_type_id: TypeId,
    ) -> Self {
        Self {
            fragments,
            object_type_id,
            schema,
            variables,
            visited_fragments: HashSet::new(),
        }
    }

    pub fn collect(
        mut self,
        selection_sets: impl IntoIterator<Item = &'doc ast::query::SelectionSet>,
    ) -> GroupedFields<'doc> {
        let mut grouped = IndexMap::new();
        for selection_set in selection_sets {
            self.collect_into(selection_set, &mut grouped);
        }
        grouped
    }

    fn collect_into(
        &mut self,
        selection_set: &'doc ast::query::SelectionSet,
        grouped: &mut GroupedFields<'doc>,
    ) {
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    if is_excluded(&field.directives, self.variables) {
                        continue;
                    }
                    if field.name != "__typename" && !self.object_has_field(&field.name) {
                        log::debug!(
                            "Skipping selection of unknown field `{}` on type #{}.",
                            field.name,
                            self.object_type_id.index(),
                        );
                        continue;
                    }
                    let response_key = field.alias.as_deref().unwrap_or(&field.name);
                    grouped.entry(response_key).or_default().push(field);
                },

                Selection::FragmentSpread(spread) => {
                    if is_excluded(&spread.directives, self.variables) {
                        continue;
                    }
                    let fragment_name = spread.fragment_name.as_str();
                    if !self.visited_fragments.insert(fragment_name) {
                        continue;
                    }
                    let Some(fragment) = self.fragments.get(fragment_name) else {
                        log::debug!("Skipping spread of unknown fragment `{fragment_name}`.");
                        continue;
                    };
                    if self.condition_applies(Some(&fragment.type_condition)) {
                        self.collect_into(&fragment.selection_set, grouped);
                    }
                },

                Selection::InlineFragment(inline) => {
                    if is_excluded(&inline.directives, self.variables) {
                        continue;
                    }
                    if self.condition_applies(inline.type_condition.as_ref()) {
                        self.collect_into(&inline.selection_set, grouped);
                    }
                },
            }
        }
    }

    fn condition_applies(&self, condition: Option<&ast::query::TypeCondition>) -> bool {
        let Some(TypeCondition::On(type_name)) = condition else {
            return true;
        };
        match self.schema.type_id(type_name) {
            Some(cond_id) if cond_id == self.object_type_id => true,
            Some(cond_id) => self.schema.is_possible_type(cond_id, self.object_type_id),
            None => false,
        }
    }

    fn object_has_field(&self, field_name: &str) -> bool {
        self.schema.object_type(self.object_type_id)
            .is_some_and(|obj| obj.field(field_name).is_some())
    }
}

/// `@skip(if: true)` or `@include(if: false)` exclude a selection. An `if`
/// argument that does not evaluate to a boolean leaves the selection in.
pub(super) fn is_excluded(
    directives: &[ast::query::Directive],
    variables: &IndexMap<String, Value>,
) -> bool {
    for directive in directives {
        let condition = directive.arguments.iter()
            .find(|(arg_name, _)| arg_name == "if")
            .and_then(|(_, value)| Value::from_ast(value, variables).as_bool());
        match (directive.name.as_str(), condition) {
            ("skip", Some(true)) | ("include", Some(false)) => return true,
            _ => (),
        }
    }
    false
}
