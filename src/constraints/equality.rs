use crate::basic_types::PropagationStatus;
use crate::constraints::Evaluation;
use crate::engine::assignment::Assignment;
use crate::engine::variables::VarId;

/// The constraint `lhs = rhs`.
///
/// A specialisation of the binary relation with the equality comparator and no offset: the
/// propagation collapses the unassigned side straight to the assigned side's value.
#[derive(Clone, Copy, Debug)]
pub struct Equality {
    lhs: VarId,
    rhs: VarId,
}

impl Equality {
    pub(crate) fn new(lhs: VarId, rhs: VarId) -> Self {
        Equality { lhs, rhs }
    }

    pub(crate) fn variables(&self) -> Vec<VarId> {
        vec![self.lhs, self.rhs]
    }

    pub(crate) fn evaluate(&self, assignment: &Assignment) -> Evaluation {
        match (assignment.value(self.lhs), assignment.value(self.rhs)) {
            (Some(lhs_value), Some(rhs_value)) => {
                if lhs_value == rhs_value {
                    Evaluation::Satisfied
                } else {
                    Evaluation::Violated
                }
            }
            _ => Evaluation::Unknown,
        }
    }

    pub(crate) fn propagate(&self, assignment: &mut Assignment) -> PropagationStatus {
        match (assignment.value(self.lhs), assignment.value(self.rhs)) {
            (None, Some(rhs_value)) => assignment.retain_value(self.lhs, rhs_value),
            (Some(lhs_value), None) => assignment.retain_value(self.rhs, lhs_value),
            _ => Ok(()),
        }
    }
}
