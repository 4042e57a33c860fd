use crate::basic_types::PropagationStatus;
use crate::constraints::Evaluation;
use crate::engine::assignment::Assignment;
use crate::engine::variables::VarId;

/// The constraint that all participating variables take pairwise distinct values.
///
/// Enforcement is incremental: validation checks the most recently assigned participant against
/// the other assigned ones, and propagation removes the freshly assigned value from every other
/// participant's domain. This is plain pairwise exclusion, sufficient for forward checking; the
/// Hall-interval style filtering of stronger all-different propagators is not attempted.
#[derive(Clone, Debug)]
pub struct AllDifferent {
    variables: Vec<VarId>,
}

impl AllDifferent {
    pub(crate) fn new(variables: Vec<VarId>) -> Self {
        AllDifferent { variables }
    }

    pub(crate) fn variables(&self) -> Vec<VarId> {
        self.variables.clone()
    }

    /// Checks `last_assigned` against the other assigned participants. The verdict is relative
    /// to the latest assignment: earlier pairs were validated when their second member was
    /// assigned.
    pub(crate) fn evaluate(&self, assignment: &Assignment, last_assigned: VarId) -> Evaluation {
        let Some(last_value) = assignment.value(last_assigned) else {
            return Evaluation::Unknown;
        };

        let mut all_assigned = true;
        for &vid in &self.variables {
            if vid == last_assigned {
                continue;
            }
            match assignment.value(vid) {
                Some(value) if value == last_value => return Evaluation::Violated,
                Some(_) => {}
                None => all_assigned = false,
            }
        }

        if all_assigned {
            Evaluation::Satisfied
        } else {
            Evaluation::Unknown
        }
    }

    /// Removes the value of `last_assigned` from every other unassigned participant's domain.
    pub(crate) fn propagate(
        &self,
        assignment: &mut Assignment,
        last_assigned: VarId,
    ) -> PropagationStatus {
        let Some(last_value) = assignment.value(last_assigned) else {
            return Ok(());
        };

        for &vid in &self.variables {
            if vid == last_assigned || assignment.is_assigned(vid) {
                continue;
            }
            assignment.remove_value(vid, last_value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::domain::Domain;
    use crate::engine::domain::EmptyDomain;
    use crate::engine::domain::Interval;
    use crate::engine::test_helper::assignment_over;

    fn three_variables() -> (Vec<VarId>, Assignment) {
        assignment_over(vec![
            Domain::from_bounds(0, 3),
            Domain::from_bounds(0, 3),
            Domain::from_bounds(0, 3),
        ])
    }

    #[test]
    fn the_assigned_value_is_removed_from_the_other_participants() {
        let (variables, mut assignment) = three_variables();
        let constraint = AllDifferent::new(variables.clone());

        assignment.assign(variables[1], 1);
        constraint
            .propagate(&mut assignment, variables[1])
            .expect("not wiped out");

        assert_eq!(
            assignment.current_domain(variables[0]),
            &Domain::Ranges(vec![Interval::new(0, 1), Interval::new(2, 3)])
        );
        assert_eq!(
            assignment.current_domain(variables[2]),
            &Domain::Ranges(vec![Interval::new(0, 1), Interval::new(2, 3)])
        );
        // The assigned participant itself is left alone.
        assert_eq!(
            assignment.current_domain(variables[1]),
            &Domain::from_bounds(0, 3)
        );
    }

    #[test]
    fn a_singleton_neighbour_wipes_out() {
        let (variables, mut assignment) = assignment_over(vec![
            Domain::from_bounds(0, 3),
            Domain::singleton(2),
            Domain::from_bounds(0, 3),
        ]);
        let constraint = AllDifferent::new(variables.clone());

        assignment.assign(variables[0], 2);

        assert_eq!(
            constraint.propagate(&mut assignment, variables[0]),
            Err(EmptyDomain)
        );
    }

    #[test]
    fn a_duplicate_is_detected_on_the_latest_assignment() {
        let (variables, mut assignment) = three_variables();
        let constraint = AllDifferent::new(variables.clone());

        assignment.assign(variables[0], 2);
        assert_eq!(
            constraint.evaluate(&assignment, variables[0]),
            Evaluation::Unknown
        );

        assignment.assign(variables[2], 2);
        assert_eq!(
            constraint.evaluate(&assignment, variables[2]),
            Evaluation::Violated
        );
    }

    #[test]
    fn distinct_complete_instantiations_are_satisfied() {
        let (variables, mut assignment) = three_variables();
        let constraint = AllDifferent::new(variables.clone());

        assignment.assign(variables[0], 0);
        assignment.assign(variables[1], 2);
        assignment.assign(variables[2], 1);

        for &vid in &variables {
            assert_eq!(constraint.evaluate(&assignment, vid), Evaluation::Satisfied);
        }
    }
}
