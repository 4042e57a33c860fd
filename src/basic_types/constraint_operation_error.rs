use thiserror::Error;

use crate::engine::variables::VarId;
#[cfg(doc)]
use crate::Model;

/// Errors related to adding constraints to the [`Model`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// Error which indicates that a constraint was added after the [`Model`] was finalised. The
    /// constraint store is frozen at that point since the variables hold references into it.
    #[error("adding the constraint failed because the model has been finalised")]
    ModelFinalized,
    /// Error which indicates that a constraint references a variable which is not part of the
    /// [`Model`].
    #[error("the constraint references the variable {0} which is not in the model")]
    UnknownVariable(VarId),
}
