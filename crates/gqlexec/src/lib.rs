//! A GraphQL type registry, schema validator, and execution engine.
//!
//! Schemas are authored into a [`TypeArena`](types::TypeArena) (either
//! programmatically or from SDL via [`SchemaBuilder`](schema::SchemaBuilder)),
//! validated once into an immutable [`Schema`], and then executed against any
//! number of parsed query documents with [`execute()`].

pub mod ast;
pub mod execution;
mod file_reader;
pub mod loc;
pub mod operation;
pub mod schema;
pub mod types;
mod value;

pub use execution::execute;
pub use execution::ExecuteParams;
pub use execution::ExecutionError;
pub use execution::ExecutionResult;
pub use execution::ExecutionStrategy;
pub use execution::FieldError;
pub use execution::FieldResult;
pub use execution::Member;
pub use execution::ObjectSource;
pub use execution::RawValue;
pub use execution::ResolveInfo;
pub use execution::ResolveParams;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaConfig;
pub use value::Value;
