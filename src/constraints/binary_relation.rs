use crate::basic_types::PropagationStatus;
use crate::constraints::Evaluation;
use crate::engine::assignment::Assignment;
use crate::engine::variables::VarId;

/// The comparison operator of a [`BinaryRelation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparator {
    Equal,
    NotEqual,
    GreaterOrEqual,
    Greater,
    LessOrEqual,
    Less,
}

impl Comparator {
    /// Whether `lhs comparator rhs` holds.
    pub fn holds(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Comparator::Equal => lhs == rhs,
            Comparator::NotEqual => lhs != rhs,
            Comparator::GreaterOrEqual => lhs >= rhs,
            Comparator::Greater => lhs > rhs,
            Comparator::LessOrEqual => lhs <= rhs,
            Comparator::Less => lhs < rhs,
        }
    }
}

/// The constraint `lhs comparator (rhs + offset)`.
///
/// As soon as one side is instantiated, the other side's domain is narrowed to the values which
/// can still satisfy the relation: a single retained or removed value for the equality
/// comparators, a bound adjustment for the inequalities.
#[derive(Clone, Copy, Debug)]
pub struct BinaryRelation {
    lhs: VarId,
    rhs: VarId,
    comparator: Comparator,
    offset: i32,
}

impl BinaryRelation {
    pub(crate) fn new(lhs: VarId, comparator: Comparator, rhs: VarId, offset: i32) -> Self {
        BinaryRelation {
            lhs,
            rhs,
            comparator,
            offset,
        }
    }

    pub(crate) fn variables(&self) -> Vec<VarId> {
        vec![self.lhs, self.rhs]
    }

    pub(crate) fn evaluate(&self, assignment: &Assignment) -> Evaluation {
        match (assignment.value(self.lhs), assignment.value(self.rhs)) {
            (Some(lhs_value), Some(rhs_value)) => {
                if self.comparator.holds(lhs_value, rhs_value + self.offset) {
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
            (None, Some(rhs_value)) => self.narrow_lhs(assignment, rhs_value + self.offset),
            (Some(lhs_value), None) => self.narrow_rhs(assignment, lhs_value - self.offset),
            _ => Ok(()),
        }
    }

    /// Narrows the left-hand side against `target = rhs + offset`.
    fn narrow_lhs(&self, assignment: &mut Assignment, target: i32) -> PropagationStatus {
        match self.comparator {
            Comparator::Equal => assignment.retain_value(self.lhs, target),
            Comparator::NotEqual => assignment.remove_value(self.lhs, target),
            Comparator::GreaterOrEqual => assignment.tighten_lower_bound(self.lhs, target),
            Comparator::Greater => assignment.tighten_lower_bound(self.lhs, target + 1),
            Comparator::LessOrEqual => assignment.tighten_upper_bound(self.lhs, target),
            Comparator::Less => assignment.tighten_upper_bound(self.lhs, target - 1),
        }
    }

    /// Narrows the right-hand side against `target = lhs − offset`; the comparator mirrors.
    fn narrow_rhs(&self, assignment: &mut Assignment, target: i32) -> PropagationStatus {
        match self.comparator {
            Comparator::Equal => assignment.retain_value(self.rhs, target),
            Comparator::NotEqual => assignment.remove_value(self.rhs, target),
            Comparator::GreaterOrEqual => assignment.tighten_upper_bound(self.rhs, target),
            Comparator::Greater => assignment.tighten_upper_bound(self.rhs, target - 1),
            Comparator::LessOrEqual => assignment.tighten_lower_bound(self.rhs, target),
            Comparator::Less => assignment.tighten_lower_bound(self.rhs, target + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::domain::Domain;
    use crate::engine::domain::EmptyDomain;
    use crate::engine::domain::Interval;
    use crate::engine::test_helper::assignment_over;

    #[test]
    fn evaluation_requires_both_sides() {
        let (variables, mut assignment) =
            assignment_over(vec![Domain::from_bounds(0, 5), Domain::from_bounds(0, 5)]);
        let relation = BinaryRelation::new(variables[0], Comparator::Less, variables[1], 0);

        assert_eq!(relation.evaluate(&assignment), Evaluation::Unknown);

        assignment.assign(variables[0], 2);
        assert_eq!(relation.evaluate(&assignment), Evaluation::Unknown);

        assignment.assign(variables[1], 4);
        assert_eq!(relation.evaluate(&assignment), Evaluation::Satisfied);
    }

    #[test]
    fn evaluation_applies_the_offset() {
        let (variables, mut assignment) =
            assignment_over(vec![Domain::from_bounds(0, 5), Domain::from_bounds(0, 5)]);
        let relation = BinaryRelation::new(variables[0], Comparator::Equal, variables[1], 2);

        assignment.assign(variables[0], 3);
        assignment.assign(variables[1], 1);

        assert_eq!(relation.evaluate(&assignment), Evaluation::Satisfied);
    }

    #[test]
    fn assigning_the_rhs_narrows_the_lhs() {
        let (variables, mut assignment) =
            assignment_over(vec![Domain::from_bounds(0, 10), Domain::from_bounds(0, 10)]);
        let relation = BinaryRelation::new(variables[0], Comparator::Less, variables[1], 0);

        assignment.assign(variables[1], 4);
        relation.propagate(&mut assignment).expect("not wiped out");

        assert_eq!(
            assignment.current_domain(variables[0]),
            &Domain::Ranges(vec![Interval::new(0, 4)])
        );
    }

    #[test]
    fn assigning_the_lhs_narrows_the_rhs_with_the_mirrored_comparator() {
        let (variables, mut assignment) =
            assignment_over(vec![Domain::from_bounds(0, 10), Domain::from_bounds(0, 10)]);
        let relation = BinaryRelation::new(variables[0], Comparator::Less, variables[1], 1);

        // x0 < x1 + 1 and x0 = 4 implies x1 > 3.
        assignment.assign(variables[0], 4);
        relation.propagate(&mut assignment).expect("not wiped out");

        assert_eq!(
            assignment.current_domain(variables[1]),
            &Domain::Ranges(vec![Interval::new(4, 10)])
        );
    }

    #[test]
    fn equality_comparator_collapses_to_a_singleton() {
        let (variables, mut assignment) =
            assignment_over(vec![Domain::from_bounds(0, 10), Domain::from_bounds(0, 10)]);
        let relation = BinaryRelation::new(variables[0], Comparator::Equal, variables[1], 3);

        assignment.assign(variables[1], 2);
        relation.propagate(&mut assignment).expect("not wiped out");

        assert_eq!(
            assignment.current_domain(variables[0]),
            &Domain::Values(vec![5])
        );
    }

    #[test]
    fn not_equal_comparator_punches_a_hole() {
        let (variables, mut assignment) =
            assignment_over(vec![Domain::from_bounds(0, 5), Domain::from_bounds(0, 5)]);
        let relation = BinaryRelation::new(variables[0], Comparator::NotEqual, variables[1], 0);

        assignment.assign(variables[1], 2);
        relation.propagate(&mut assignment).expect("not wiped out");

        assert_eq!(
            assignment.current_domain(variables[0]),
            &Domain::Ranges(vec![Interval::new(0, 2), Interval::new(3, 5)])
        );
    }

    #[test]
    fn propagation_reports_a_wiped_out_domain() {
        let (variables, mut assignment) =
            assignment_over(vec![Domain::from_bounds(0, 3), Domain::from_bounds(0, 10)]);
        let relation =
            BinaryRelation::new(variables[0], Comparator::GreaterOrEqual, variables[1], 0);

        assignment.assign(variables[1], 7);

        assert_eq!(relation.propagate(&mut assignment), Err(EmptyDomain));
    }

    #[test]
    fn propagation_without_an_assigned_side_is_a_no_op() {
        let (variables, mut assignment) =
            assignment_over(vec![Domain::from_bounds(0, 5), Domain::from_bounds(0, 5)]);
        let relation = BinaryRelation::new(variables[0], Comparator::Greater, variables[1], 0);

        relation.propagate(&mut assignment).expect("nothing to do");

        assert_eq!(
            assignment.current_domain(variables[0]),
            &Domain::from_bounds(0, 5)
        );
        assert_eq!(
            assignment.current_domain(variables[1]),
            &Domain::from_bounds(0, 5)
        );
    }
}
