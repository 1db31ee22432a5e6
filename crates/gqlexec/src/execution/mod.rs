mod argument_coercion;
mod default_resolver;
mod execute;
mod execution_result;
mod executor;
mod field_collector;
mod raw_value;
mod resolve_params;

pub use execute::execute;
pub use execute::ExecuteParams;
pub use execute::ExecutionStrategy;
pub use execution_result::ExecutionError;
pub use execution_result::ExecutionResult;
pub use execution_result::PathSegment;
pub use execution_result::RequestError;
pub use raw_value::Member;
pub use raw_value::ObjectSource;
pub use raw_value::RawValue;
pub use resolve_params::FieldError;
pub use resolve_params::FieldResult;
pub use resolve_params::ResolveInfo;
pub use resolve_params::ResolveParams;
pub use resolve_params::ResponsePath;

#[cfg(test)]
mod tests;
