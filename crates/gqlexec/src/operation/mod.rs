mod fragment_registry;
#[allow(clippy::module_inception)]
mod operation;
mod operation_kind;

pub use fragment_registry::FragmentRegistry;
pub use operation::Operation;
pub use operation_kind::OperationKind;

#[cfg(test)]
mod tests;
