use crate::basic_types::PropagationStatus;
use crate::constraints::Evaluation;
use crate::engine::assignment::Assignment;
use crate::engine::variables::VarId;

/// The constraint `target = augend + addend − subtrahend`.
///
/// Propagation fires only when the three right-hand-side variables are instantiated while the
/// target is not; the target's domain is then narrowed to the combined value. The symmetric
/// patterns (three of the four assigned with the target among them) would permit the same
/// inference on the remaining variable, but are left to the search.
#[derive(Clone, Copy, Debug)]
pub struct CombinedEquality {
    target: VarId,
    augend: VarId,
    addend: VarId,
    subtrahend: VarId,
}

impl CombinedEquality {
    pub(crate) fn new(target: VarId, augend: VarId, addend: VarId, subtrahend: VarId) -> Self {
        CombinedEquality {
            target,
            augend,
            addend,
            subtrahend,
        }
    }

    pub(crate) fn variables(&self) -> Vec<VarId> {
        vec![self.target, self.augend, self.addend, self.subtrahend]
    }

    pub(crate) fn evaluate(&self, assignment: &Assignment) -> Evaluation {
        match (
            assignment.value(self.target),
            assignment.value(self.augend),
            assignment.value(self.addend),
            assignment.value(self.subtrahend),
        ) {
            (
                Some(target_value),
                Some(augend_value),
                Some(addend_value),
                Some(subtrahend_value),
            ) => {
                if target_value == augend_value + addend_value - subtrahend_value {
                    Evaluation::Satisfied
                } else {
                    Evaluation::Violated
                }
            }
            _ => Evaluation::Unknown,
        }
    }

    pub(crate) fn propagate(&self, assignment: &mut Assignment) -> PropagationStatus {
        match (
            assignment.value(self.target),
            assignment.value(self.augend),
            assignment.value(self.addend),
            assignment.value(self.subtrahend),
        ) {
            (None, Some(augend_value), Some(addend_value), Some(subtrahend_value)) => assignment
                .retain_value(
                    self.target,
                    augend_value + addend_value - subtrahend_value,
                ),
            _ => Ok(()),
        }
    }
}
