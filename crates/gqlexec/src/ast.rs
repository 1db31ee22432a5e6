//! Owned aliases over the `graphql-parser` AST.
//!
//! Parsing is not part of this crate's job; these aliases pin the parser's
//! generic AST to `'static, String` so documents can be stored and passed
//! around freely.

pub mod query {
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type Field = graphql_parser::query::Field<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
    pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
    pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
    pub type Value = graphql_parser::query::Value<'static, String>;
    pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

    /// Parse an executable document into an owned AST.
    pub fn parse(source: &str) -> Result<Document, ParseError> {
        graphql_parser::query::parse_query::<String>(source)
            .map(|doc| doc.into_static())
    }
}

pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type UnionType = graphql_parser::schema::UnionType<'static, String>;
    pub type Value = graphql_parser::schema::Value<'static, String>;

    /// Parse a schema (SDL) document into an owned AST.
    pub fn parse(source: &str) -> Result<Document, ParseError> {
        graphql_parser::schema::parse_schema::<String>(source)
            .map(|doc| doc.into_static())
    }
}
