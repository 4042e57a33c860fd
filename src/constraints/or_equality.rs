use crate::basic_types::PropagationStatus;
use crate::constraints::Evaluation;
use crate::engine::assignment::Assignment;
use crate::engine::variables::VarId;

/// The constraint `target = first ∨ target = second`.
///
/// Propagation only fires in the one pattern which permits a deterministic inference: both
/// alternatives instantiated while the target is not, in which case the target's domain is
/// narrowed to the alternatives' values. Every other pattern would require disjunctive reasoning
/// and is left to the search.
#[derive(Clone, Copy, Debug)]
pub struct OrEquality {
    target: VarId,
    first: VarId,
    second: VarId,
}

impl OrEquality {
    pub(crate) fn new(target: VarId, first: VarId, second: VarId) -> Self {
        OrEquality {
            target,
            first,
            second,
        }
    }

    pub(crate) fn variables(&self) -> Vec<VarId> {
        vec![self.target, self.first, self.second]
    }

    pub(crate) fn evaluate(&self, assignment: &Assignment) -> Evaluation {
        match (
            assignment.value(self.target),
            assignment.value(self.first),
            assignment.value(self.second),
        ) {
            (Some(target_value), Some(first_value), Some(second_value)) => {
                if target_value == first_value || target_value == second_value {
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
            assignment.value(self.first),
            assignment.value(self.second),
        ) {
            (None, Some(first_value), Some(second_value)) => {
                assignment.retain_either(self.target, first_value, second_value)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::domain::Domain;
    use crate::engine::domain::EmptyDomain;
    use crate::engine::test_helper::assignment_over;

    #[test]
    fn both_alternatives_narrow_the_target() {
        let (variables, mut assignment) = assignment_over(vec![
            Domain::from_bounds(0, 10),
            Domain::from_bounds(0, 10),
            Domain::from_bounds(0, 10),
        ]);
        let constraint = OrEquality::new(variables[0], variables[1], variables[2]);

        assignment.assign(variables[1], 3);
        assignment.assign(variables[2], 8);
        constraint
            .propagate(&mut assignment)
            .expect("both alternatives are members");

        assert_eq!(
            assignment.current_domain(variables[0]),
            &Domain::Values(vec![3, 8])
        );
    }

    #[test]
    fn one_assigned_alternative_does_not_propagate() {
        let (variables, mut assignment) = assignment_over(vec![
            Domain::from_bounds(0, 10),
            Domain::from_bounds(0, 10),
            Domain::from_bounds(0, 10),
        ]);
        let constraint = OrEquality::new(variables[0], variables[1], variables[2]);

        assignment.assign(variables[1], 3);
        constraint.propagate(&mut assignment).expect("nothing to do");

        assert_eq!(
            assignment.current_domain(variables[0]),
            &Domain::from_bounds(0, 10)
        );
    }

    #[test]
    fn alternatives_outside_the_target_domain_wipe_it_out() {
        let (variables, mut assignment) = assignment_over(vec![
            Domain::from_bounds(0, 3),
            Domain::from_bounds(0, 10),
            Domain::from_bounds(0, 10),
        ]);
        let constraint = OrEquality::new(variables[0], variables[1], variables[2]);

        assignment.assign(variables[1], 5);
        assignment.assign(variables[2], 9);

        assert_eq!(constraint.propagate(&mut assignment), Err(EmptyDomain));
    }

    #[test]
    fn evaluation_verdicts() {
        let (variables, mut assignment) = assignment_over(vec![
            Domain::from_bounds(0, 10),
            Domain::from_bounds(0, 10),
            Domain::from_bounds(0, 10),
        ]);
        let constraint = OrEquality::new(variables[0], variables[1], variables[2]);

        assignment.assign(variables[0], 8);
        assignment.assign(variables[1], 3);
        assert_eq!(constraint.evaluate(&assignment), Evaluation::Unknown);

        assignment.assign(variables[2], 8);
        assert_eq!(constraint.evaluate(&assignment), Evaluation::Satisfied);

        assignment.unassign(variables[2]);
        assignment.assign(variables[2], 4);
        assert_eq!(constraint.evaluate(&assignment), Evaluation::Violated);
    }
}
