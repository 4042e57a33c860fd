use log::debug;

use crate::basic_types::ConstraintOperationError;
use crate::basic_types::PropagationStatus;
use crate::constraints::Constraint;
use crate::constraints::ConstraintRef;
use crate::constraints::Evaluation;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::assignment::Assignment;
use crate::engine::domain::Domain;
use crate::engine::variables::VarId;
use crate::engine::variables::Variable;
use crate::parsnip_assert_simple;
use crate::variable_names::VariableNames;

/// A constraint satisfaction problem: the variables, their initial domains, and the constraints
/// posted over them.
///
/// A model is built up programmatically, [finalised](Model::finalize) exactly once, and solved
/// through [`Model::forward_checking_step`] against an [`Assignment`] which holds all the mutable
/// search state. Finalising wires every constraint into the variables it mentions and freezes the
/// constraint store, which is what keeps the [`ConstraintRef`]s stored in the variables valid.
#[derive(Debug, Default)]
pub struct Model {
    variables: KeyedVec<VarId, Variable>,
    initial_domains: KeyedVec<VarId, Domain>,
    /// The constraint store: a contiguous vector of uniform-size slots (see
    /// [`crate::constraints::MAX_CONSTRAINT_SIZE`]).
    constraints: Vec<Constraint>,
    variable_names: VariableNames,
    finalized: bool,
}

impl Model {
    /// Adds a variable with the half-open initial domain `[lower, upper)`. Requires
    /// `lower < upper`.
    pub fn add_int_var(&mut self, lower: i32, upper: i32) -> VarId {
        self.add_int_var_with_domain(Domain::from_bounds(lower, upper))
    }

    /// Adds a variable with the given initial domain.
    pub fn add_int_var_with_domain(&mut self, domain: Domain) -> VarId {
        parsnip_assert_simple!(
            !self.finalized,
            "variables cannot be added to a finalised model"
        );
        parsnip_assert_simple!(!domain.is_empty(), "an initial domain cannot be empty");
        let vid: VarId = self.variables.push(Variable::default());
        let _ = self.initial_domains.push(domain);
        vid
    }

    /// Adds a variable fixed to `value`.
    pub fn add_fixed_var(&mut self, value: i32) -> VarId {
        self.add_int_var_with_domain(Domain::singleton(value))
    }

    /// Adds a variable with the domain `{0, 1}`.
    pub fn add_bool_var(&mut self) -> VarId {
        self.add_int_var_with_domain(Domain::boolean())
    }

    /// Adds a named variable with the half-open initial domain `[lower, upper)`.
    pub fn add_named_int_var(
        &mut self,
        lower: i32,
        upper: i32,
        name: impl Into<String>,
    ) -> VarId {
        let vid = self.add_int_var(lower, upper);
        self.variable_names.add(vid, name.into());
        vid
    }

    /// Adds a named variable fixed to `value`.
    pub fn add_named_fixed_var(&mut self, value: i32, name: impl Into<String>) -> VarId {
        let vid = self.add_fixed_var(value);
        self.variable_names.add(vid, name.into());
        vid
    }

    /// Adds a named variable with the domain `{0, 1}`.
    pub fn add_named_bool_var(&mut self, name: impl Into<String>) -> VarId {
        let vid = self.add_bool_var();
        self.variable_names.add(vid, name.into());
        vid
    }

    /// Posts `constraint` to the model. The constraint is copied into the constraint store; the
    /// returned reference identifies it there.
    ///
    /// Posting fails if the model has already been finalised, or if the constraint mentions a
    /// variable which was never added.
    pub fn add_constraint(
        &mut self,
        constraint: Constraint,
    ) -> Result<ConstraintRef, ConstraintOperationError> {
        if self.finalized {
            return Err(ConstraintOperationError::ModelFinalized);
        }
        for vid in constraint.variables() {
            if vid.index() >= self.variables.len() {
                return Err(ConstraintOperationError::UnknownVariable(vid));
            }
        }

        let reference = ConstraintRef::create_from_index(self.constraints.len());
        self.constraints.push(constraint);
        Ok(reference)
    }

    /// Freezes the model: every constraint is wired into the constraint lists of the variables it
    /// mentions. Must be called exactly once, after all variables and constraints have been added
    /// and before the first solve.
    pub fn finalize(&mut self) {
        parsnip_assert_simple!(!self.finalized, "a model can only be finalised once");

        for (index, constraint) in self.constraints.iter().enumerate() {
            let reference = ConstraintRef::create_from_index(index);
            for vid in constraint.variables() {
                self.variables[vid].link_constraint(reference);
            }
        }
        self.finalized = true;

        debug!(
            "finalised model with {} variables and {} constraints",
            self.variables.len(),
            self.constraints.len()
        );
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// The ids of all variables, in insertion order.
    pub fn variable_ids(&self) -> impl Iterator<Item = VarId> {
        self.variables.keys()
    }

    /// The initial domain the variable was added with.
    pub fn initial_domain(&self, vid: VarId) -> &Domain {
        &self.initial_domains[vid]
    }

    /// The name the variable was added with, if any.
    pub fn variable_name(&self, vid: VarId) -> Option<&str> {
        self.variable_names.get_name(vid)
    }

    /// The constraint behind a reference returned by [`Model::add_constraint`].
    pub fn constraint(&self, reference: ConstraintRef) -> &Constraint {
        &self.constraints[reference.index()]
    }

    /// Runs one step of the forward-checking search: picks the next unassigned variable and tries
    /// every value of its current domain, validating and propagating the constraints linked to
    /// the variable and recursing on success. Returns `true` iff a complete satisfying assignment
    /// was found, in which case the assignment is left in place and
    /// [`Assignment::value`] yields the solution.
    ///
    /// On `false` every tentative assignment has been undone: all variables are unassigned and
    /// every saved-domain frame has been popped.
    ///
    /// The model must have been finalised, and `assignment` must have been
    /// [reset](Assignment::reset) against this model.
    pub fn forward_checking_step(&self, assignment: &mut Assignment) -> bool {
        parsnip_assert_simple!(
            self.finalized,
            "the model must be finalised before solving"
        );

        if assignment.is_complete() {
            return true;
        }

        assignment.push_frame();

        let vid = assignment.next_unassigned();
        let candidates: Vec<i32> = assignment.current_domain(vid).iter().collect();

        for value in candidates {
            assignment.assign(vid, value);

            if !self.validate(assignment, vid) {
                assignment.unassign(vid);
                continue;
            }

            if self.propagate(assignment, vid).is_err() {
                assignment.unassign(vid);
                assignment.restore_step();
                continue;
            }

            if self.forward_checking_step(assignment) {
                return true;
            }

            assignment.unassign(vid);
            assignment.restore_step();
        }

        assignment.pop_frame();
        false
    }

    /// Evaluates every constraint linked to `last_assigned`; `false` iff one of them is violated
    /// by the tentative assignment.
    fn validate(&self, assignment: &mut Assignment, last_assigned: VarId) -> bool {
        for &reference in self.variables[last_assigned].linked_constraints() {
            assignment.statistics.validated_constraints += 1;
            let verdict = self.constraints[reference.index()].evaluate(assignment, last_assigned);
            if verdict == Evaluation::Violated {
                return false;
            }
        }
        true
    }

    /// Applies the arc-consistency pass of every constraint linked to `last_assigned`, stopping
    /// at the first wiped-out domain.
    fn propagate(&self, assignment: &mut Assignment, last_assigned: VarId) -> PropagationStatus {
        for &reference in self.variables[last_assigned].linked_constraints() {
            assignment.statistics.propagation_passes += 1;
            self.constraints[reference.index()].propagate(assignment, last_assigned)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::constraints::Comparator;
    use crate::containers::StorageKey;

    #[test]
    fn finalising_links_constraints_to_their_variables() {
        let mut model = Model::default();
        let x = model.add_int_var(0, 3);
        let y = model.add_int_var(0, 3);
        let z = model.add_int_var(0, 3);

        let first = model
            .add_constraint(constraints::equality(x, y))
            .expect("the model is not finalised");
        let second = model
            .add_constraint(constraints::all_different(vec![x, y, z]))
            .expect("the model is not finalised");
        model.finalize();

        assert_eq!(model.variables[x].linked_constraints(), &[first, second]);
        assert_eq!(model.variables[y].linked_constraints(), &[first, second]);
        assert_eq!(model.variables[z].linked_constraints(), &[second]);
    }

    #[test]
    fn constraints_cannot_be_added_after_finalising() {
        let mut model = Model::default();
        let x = model.add_int_var(0, 3);
        let y = model.add_int_var(0, 3);
        model.finalize();

        let result = model.add_constraint(constraints::equality(x, y));

        assert_eq!(result, Err(ConstraintOperationError::ModelFinalized));
    }

    #[test]
    fn constraints_over_unknown_variables_are_rejected() {
        let mut model = Model::default();
        let x = model.add_int_var(0, 3);
        let unknown = VarId::create_from_index(7);

        let result = model.add_constraint(constraints::equality(x, unknown));

        assert_eq!(
            result,
            Err(ConstraintOperationError::UnknownVariable(unknown))
        );
    }

    #[test]
    fn variable_ids_are_dense_and_in_insertion_order() {
        let mut model = Model::default();
        let x = model.add_int_var(0, 3);
        let y = model.add_fixed_var(5);
        let z = model.add_bool_var();

        let ids: Vec<VarId> = model.variable_ids().collect();
        assert_eq!(ids, vec![x, y, z]);
        assert_eq!(model.initial_domain(y), &Domain::singleton(5));
        assert_eq!(model.initial_domain(z), &Domain::boolean());
    }

    #[test]
    fn named_variables_remember_their_names() {
        let mut model = Model::default();
        let x = model.add_named_int_var(0, 3, "x");
        let y = model.add_bool_var();

        assert_eq!(model.variable_name(x), Some("x"));
        assert_eq!(model.variable_name(y), None);
    }

    #[test]
    fn a_single_variable_model_solves_to_its_first_value() {
        let mut model = Model::default();
        let x = model.add_int_var(4, 8);
        model.finalize();

        let mut assignment = Assignment::default();
        assignment.reset(&model);

        assert!(model.forward_checking_step(&mut assignment));
        assert_eq!(assignment.value(x), Some(4));
        assert_eq!(assignment.statistics().assigned_variables, 1);
    }

    #[test]
    fn validation_rejects_a_violated_constraint() {
        let mut model = Model::default();
        let x = model.add_fixed_var(2);
        let y = model.add_fixed_var(2);
        // OrRange does not propagate, so the violation is only caught by validation once both
        // variables are instantiated.
        let _ = model.add_constraint(constraints::or_range(x, y, 0, 2));
        model.finalize();

        let mut assignment = Assignment::default();
        assignment.reset(&model);

        assert!(!model.forward_checking_step(&mut assignment));
        // The first level propagates once; the second never gets past validation.
        assert_eq!(assignment.statistics().validated_constraints, 2);
        assert_eq!(assignment.statistics().propagation_passes, 1);
    }

    #[test]
    fn propagation_wipe_out_fails_the_search() {
        let mut model = Model::default();
        let x = model.add_fixed_var(2);
        let y = model.add_fixed_var(2);
        let _ = model.add_constraint(constraints::binary(x, Comparator::NotEqual, y, 0));
        model.finalize();

        let mut assignment = Assignment::default();
        assignment.reset(&model);

        assert!(!model.forward_checking_step(&mut assignment));
        assert_eq!(assignment.statistics().propagation_passes, 1);
    }
}
