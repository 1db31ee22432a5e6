use crate::ast;
use crate::execution::RequestError;
use crate::operation::OperationKind;
use graphql_parser::query::Definition;
use graphql_parser::query::OperationDefinition;

/// A borrowed view of one executable operation in a query document.
#[derive(Clone, Copy, Debug)]
pub struct Operation<'doc> {
    kind: OperationKind,
    name: Option<&'doc str>,
    selection_set: &'doc ast::query::SelectionSet,
    variable_definitions: &'doc [ast::query::VariableDefinition],
}
impl<'doc> Operation<'doc> {
    pub fn from_ast(operation: &'doc ast::query::OperationDefinition) -> Self {
        let kind = OperationKind::from_ast(operation);
        let (name, selection_set, variable_definitions) = match operation {
            OperationDefinition::SelectionSet(selection_set) =>
                (None, selection_set, &[][..]),
            OperationDefinition::Query(query) => (
                query.name.as_deref(),
                &query.selection_set,
                query.variable_definitions.as_slice(),
            ),
            OperationDefinition::Mutation(mutation) => (
                mutation.name.as_deref(),
                &mutation.selection_set,
                mutation.variable_definitions.as_slice(),
            ),
            OperationDefinition::Subscription(subscription) => (
                subscription.name.as_deref(),
                &subscription.selection_set,
                subscription.variable_definitions.as_slice(),
            ),
        };
        Self {
            kind,
            name,
            selection_set,
            variable_definitions,
        }
    }

    /// Pick the operation to run from `document`.
    ///
    /// Without an `operation_name` the document must contain exactly one
    /// operation. With one, the operation of that name is chosen.
    pub fn select(
        document: &'doc ast::query::Document,
        operation_name: Option<&str>,
    ) -> Result<Self, RequestError> {
        let mut operations = document.definitions.iter()
            .filter_map(|def| match def {
                Definition::Operation(op) => Some(Self::from_ast(op)),
                Definition::Fragment(_) => None,
            });

        match operation_name {
            Some(operation_name) => operations
                .find(|op| op.name == Some(operation_name))
                .ok_or_else(|| RequestError::UnknownOperation {
                    operation_name: operation_name.to_string(),
                }),

            None => match (operations.next(), operations.next()) {
                (Some(op), None) => Ok(op),
                (Some(_), Some(_)) => Err(RequestError::AmbiguousOperation),
                (None, _) => Err(RequestError::NoOperation),
            },
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&'doc str> {
        self.name
    }

    pub fn selection_set(&self) -> &'doc ast::query::SelectionSet {
        self.selection_set
    }

    pub fn variable_definitions(&self) -> &'doc [ast::query::VariableDefinition] {
        self.variable_definitions
    }
}
