use crate::ast;

/// The kind of an executable operation, or of the root operation type that
/// serves it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub(crate) fn from_ast(operation: &ast::query::OperationDefinition) -> Self {
        use graphql_parser::query::OperationDefinition;
        match operation {
            OperationDefinition::Mutation(_) => Self::Mutation,
            OperationDefinition::Query(_)
            | OperationDefinition::SelectionSet(_)
                => Self::Query,
            OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        })
    }
}
