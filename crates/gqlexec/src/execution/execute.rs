use crate::ast;
use crate::execution::argument_coercion::coerce_variable_values;
use crate::execution::executor::ExecutionContext;
use crate::execution::executor::NullBubble;
use crate::execution::ExecutionResult;
use crate::execution::RawValue;
use crate::execution::RequestError;
use crate::execution::ResponsePath;
use crate::operation::FragmentRegistry;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::Value;
use indexmap::IndexMap;
use std::any::Any;

/// How sibling fields of one selection set are resolved.
///
/// Both strategies produce identical results: values and errors are merged in
/// response-key order. Mutation root fields always run serially.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ExecutionStrategy {
    /// One field after another, in document order.
    #[default]
    Serial,

    /// Sibling fields fan out over the rayon thread pool. Resolvers must be
    /// safe to call concurrently.
    Parallel,
}

/// Inputs to [`execute()`].
pub struct ExecuteParams<'a> {
    context: &'a (dyn Any + Send + Sync),
    document: &'a ast::query::Document,
    operation_name: Option<String>,
    root_value: RawValue,
    schema: &'a Schema,
    strategy: ExecutionStrategy,
    variable_values: IndexMap<String, Value>,
}
impl<'a> ExecuteParams<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::query::Document) -> Self {
        Self {
            context: &(),
            document,
            operation_name: None,
            root_value: RawValue::Null,
            schema,
            strategy: ExecutionStrategy::default(),
            variable_values: IndexMap::new(),
        }
    }

    /// A per-request value made available to every resolver through
    /// [`ResolveParams::context()`](crate::ResolveParams::context).
    pub fn with_context(mut self, context: &'a (dyn Any + Send + Sync)) -> Self {
        self.context = context;
        self
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_root_value(mut self, root_value: impl Into<RawValue>) -> Self {
        self.root_value = root_value.into();
        self
    }

    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Raw variable values, coerced against the operation's variable
    /// definitions before execution starts.
    pub fn with_variable_values(mut self, variable_values: IndexMap<String, Value>) -> Self {
        self.variable_values = variable_values;
        self
    }
}

/// Execute one operation of a parsed query document.
///
/// Field-level failures never abort execution: they are collected into
/// [`ExecutionResult::errors`] next to whatever data could be produced.
/// Failures that prevent execution from starting (no matching operation,
/// invalid variables) yield no data and a single error.
pub fn execute(params: ExecuteParams<'_>) -> ExecutionResult {
    match execute_impl(params) {
        Ok(result) => result,
        Err(err) => {
            log::debug!("request failed before execution: {err}");
            err.into()
        },
    }
}

fn execute_impl(params: ExecuteParams<'_>) -> Result<ExecutionResult, RequestError> {
    let schema = params.schema;
    let operation = Operation::select(params.document, params.operation_name.as_deref())?;

    let root_type_id = match operation.kind() {
        OperationKind::Query => schema.query_type(),
        OperationKind::Mutation => schema.mutation_type()
            .ok_or(RequestError::NoMutationType)?,
        OperationKind::Subscription => return Err(RequestError::SubscriptionNotSupported),
    };
    let Some(root_type) = schema.object_type(root_type_id) else {
        return Err(RequestError::NoOperation);
    };

    let variables = coerce_variable_values(
        schema,
        operation.variable_definitions(),
        &params.variable_values,
    )?;

    let ctx = ExecutionContext {
        context: params.context,
        fragments: FragmentRegistry::from_document(params.document),
        schema,
        strategy: params.strategy,
        variables,
    };

    log::debug!(
        "executing {} operation {} on `{}` ({:?})",
        operation.kind(),
        operation.name().unwrap_or("<anonymous>"),
        root_type.name(),
        params.strategy,
    );

    let fields = ctx.collect_fields(root_type_id, [operation.selection_set()]);
    let mut errors = vec![];
    let data = match ctx.execute_fields(
        root_type,
        &params.root_value,
        &fields,
        &ResponsePath::Root,
        operation.kind() == OperationKind::Mutation,
        &mut errors,
    ) {
        Ok(data) => Some(data),
        Err(NullBubble) => None,
    };

    Ok(ExecutionResult { data, errors })
}
