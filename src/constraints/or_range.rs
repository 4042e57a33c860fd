use crate::basic_types::PropagationStatus;
use crate::constraints::Evaluation;
use crate::engine::assignment::Assignment;
use crate::engine::domain::Interval;
use crate::engine::variables::VarId;

/// The constraint `first ∈ [lower, upper) ∨ second ∈ [lower, upper)`.
///
/// Propagation is deliberately a no-op. Narrowing through a disjunction of range memberships
/// requires case-splitting which this engine does not perform, so the constraint only rejects
/// complete instantiations; this is correct, merely weaker than it could be.
#[derive(Clone, Copy, Debug)]
pub struct OrRange {
    first: VarId,
    second: VarId,
    range: Interval,
}

impl OrRange {
    pub(crate) fn new(first: VarId, second: VarId, range: Interval) -> Self {
        OrRange {
            first,
            second,
            range,
        }
    }

    pub(crate) fn variables(&self) -> Vec<VarId> {
        vec![self.first, self.second]
    }

    pub(crate) fn evaluate(&self, assignment: &Assignment) -> Evaluation {
        match (
            assignment.value(self.first),
            assignment.value(self.second),
        ) {
            (Some(first_value), Some(second_value)) => {
                if self.range.contains(first_value) || self.range.contains(second_value) {
                    Evaluation::Satisfied
                } else {
                    Evaluation::Violated
                }
            }
            _ => Evaluation::Unknown,
        }
    }

    pub(crate) fn propagate(&self, _assignment: &mut Assignment) -> PropagationStatus {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::domain::Domain;
    use crate::engine::test_helper::assignment_over;

    #[test]
    fn satisfied_when_either_side_is_in_range() {
        let (variables, mut assignment) =
            assignment_over(vec![Domain::from_bounds(0, 10), Domain::from_bounds(0, 10)]);
        let constraint = OrRange::new(variables[0], variables[1], Interval::new(3, 6));

        assignment.assign(variables[0], 9);
        assignment.assign(variables[1], 4);

        assert_eq!(constraint.evaluate(&assignment), Evaluation::Satisfied);
    }

    #[test]
    fn violated_when_neither_side_is_in_range() {
        let (variables, mut assignment) =
            assignment_over(vec![Domain::from_bounds(0, 10), Domain::from_bounds(0, 10)]);
        let constraint = OrRange::new(variables[0], variables[1], Interval::new(3, 6));

        assignment.assign(variables[0], 9);
        assignment.assign(variables[1], 6);

        assert_eq!(constraint.evaluate(&assignment), Evaluation::Violated);
    }

    #[test]
    fn propagation_never_narrows() {
        let (variables, mut assignment) =
            assignment_over(vec![Domain::from_bounds(0, 10), Domain::from_bounds(0, 10)]);
        let constraint = OrRange::new(variables[0], variables[1], Interval::new(3, 6));

        assignment.assign(variables[0], 9);
        constraint.propagate(&mut assignment).expect("always ok");

        assert_eq!(
            assignment.current_domain(variables[1]),
            &Domain::from_bounds(0, 10)
        );
    }
}
