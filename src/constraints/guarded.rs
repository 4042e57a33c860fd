use crate::basic_types::PropagationStatus;
use crate::constraints::BinaryRelation;
use crate::constraints::Evaluation;
use crate::engine::assignment::Assignment;
use crate::engine::variables::VarId;

/// A binary relation which is only enforced while its guard variable agrees with the required
/// polarity: the relation is *armed* when the guard's truthiness (value ≠ 0) equals
/// `enforce_if`.
///
/// This is the half-reified form `guard → relation`. Besides forwarding to the inner relation
/// when armed, the constraint can also narrow the guard itself: once both operands are
/// instantiated and the relation is violated, the guard must fall on the non-arming side.
#[derive(Clone, Copy, Debug)]
pub struct GuardedRelation {
    relation: BinaryRelation,
    guard: VarId,
    enforce_if: bool,
}

impl GuardedRelation {
    pub(crate) fn new(relation: BinaryRelation, guard: VarId, enforce_if: bool) -> Self {
        GuardedRelation {
            relation,
            guard,
            enforce_if,
        }
    }

    pub(crate) fn variables(&self) -> Vec<VarId> {
        let mut variables = self.relation.variables();
        variables.push(self.guard);
        variables
    }

    fn arms(&self, guard_value: i32) -> bool {
        (guard_value != 0) == self.enforce_if
    }

    pub(crate) fn evaluate(&self, assignment: &Assignment) -> Evaluation {
        match assignment.value(self.guard) {
            Some(guard_value) if !self.arms(guard_value) => Evaluation::Satisfied,
            Some(_) => self.relation.evaluate(assignment),
            // The implication holds whichever way the guard falls once the relation itself is
            // satisfied; otherwise there is no verdict yet.
            None => match self.relation.evaluate(assignment) {
                Evaluation::Satisfied => Evaluation::Satisfied,
                _ => Evaluation::Unknown,
            },
        }
    }

    pub(crate) fn propagate(&self, assignment: &mut Assignment) -> PropagationStatus {
        match assignment.value(self.guard) {
            Some(guard_value) if self.arms(guard_value) => self.relation.propagate(assignment),
            Some(_) => Ok(()),
            None => {
                if self.relation.evaluate(assignment) == Evaluation::Violated {
                    // The relation can no longer hold, so the guard must not arm it.
                    if self.enforce_if {
                        assignment.retain_value(self.guard, 0)
                    } else {
                        assignment.remove_value(self.guard, 0)
                    }
                } else {
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Comparator;
    use crate::engine::domain::Domain;
    use crate::engine::domain::Interval;
    use crate::engine::test_helper::assignment_over;

    fn guarded_less_than() -> (Vec<VarId>, Assignment, GuardedRelation) {
        let (variables, assignment) = assignment_over(vec![
            Domain::from_bounds(0, 10),
            Domain::from_bounds(0, 10),
            Domain::boolean(),
        ]);
        let constraint = GuardedRelation::new(
            BinaryRelation::new(variables[0], Comparator::Less, variables[1], 0),
            variables[2],
            true,
        );
        (variables, assignment, constraint)
    }

    #[test]
    fn an_armed_guard_forwards_propagation() {
        let (variables, mut assignment, constraint) = guarded_less_than();

        assignment.assign(variables[2], 1);
        assignment.assign(variables[1], 4);
        constraint.propagate(&mut assignment).expect("not wiped out");

        assert_eq!(
            assignment.current_domain(variables[0]),
            &Domain::Ranges(vec![Interval::new(0, 4)])
        );
    }

    #[test]
    fn a_disarmed_guard_suppresses_the_relation() {
        let (variables, mut assignment, constraint) = guarded_less_than();

        assignment.assign(variables[2], 0);
        assignment.assign(variables[1], 4);
        constraint.propagate(&mut assignment).expect("nothing to do");

        assert_eq!(
            assignment.current_domain(variables[0]),
            &Domain::from_bounds(0, 10)
        );

        assignment.assign(variables[0], 9);
        assert_eq!(constraint.evaluate(&assignment), Evaluation::Satisfied);
    }

    #[test]
    fn a_violated_relation_narrows_the_unassigned_guard() {
        let (variables, mut assignment, constraint) = guarded_less_than();

        assignment.assign(variables[0], 7);
        assignment.assign(variables[1], 3);
        constraint.propagate(&mut assignment).expect("0 is a member");

        assert_eq!(
            assignment.current_domain(variables[2]),
            &Domain::Values(vec![0])
        );
    }

    #[test]
    fn an_inverted_guard_is_narrowed_away_from_zero() {
        let (variables, mut assignment) = assignment_over(vec![
            Domain::from_bounds(0, 10),
            Domain::from_bounds(0, 10),
            Domain::boolean(),
        ]);
        let constraint = GuardedRelation::new(
            BinaryRelation::new(variables[0], Comparator::Less, variables[1], 0),
            variables[2],
            false,
        );

        assignment.assign(variables[0], 7);
        assignment.assign(variables[1], 3);
        constraint.propagate(&mut assignment).expect("1 is a member");

        assert_eq!(
            assignment.current_domain(variables[2]),
            &Domain::Values(vec![1])
        );
    }

    #[test]
    fn a_satisfied_relation_leaves_the_guard_open() {
        let (variables, mut assignment, constraint) = guarded_less_than();

        assignment.assign(variables[0], 2);
        assignment.assign(variables[1], 5);
        constraint.propagate(&mut assignment).expect("nothing to do");

        assert_eq!(
            assignment.current_domain(variables[2]),
            &Domain::boolean()
        );
        assert_eq!(constraint.evaluate(&assignment), Evaluation::Satisfied);
    }
}
