mod constraint_operation_error;
mod propagation_status;

pub use constraint_operation_error::ConstraintOperationError;
pub use propagation_status::PropagationStatus;
