use crate::engine::domain::EmptyDomain;

/// The result of propagating a constraint. Propagation either succeeds, possibly after narrowing
/// the domains of the unassigned participants, or it reports that some participant's domain was
/// wiped out.
pub type PropagationStatus = Result<(), EmptyDomain>;
