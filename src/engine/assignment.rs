use crate::basic_types::PropagationStatus;
use crate::containers::KeyedVec;
use crate::engine::domain::Domain;
use crate::engine::domain_trail::DomainTrail;
use crate::engine::solver_statistics::SolverStatistics;
use crate::engine::variables::VarId;
use crate::model::Model;
use crate::parsnip_assert_moderate;
use crate::parsnip_assert_simple;
use crate::statistics::LogStatistics;
use crate::statistics::StatisticLogger;

/// The mutable state of one solve: the current instantiations, the narrowed domains, and the
/// saved-domain frames which undo narrowing on backtrack.
///
/// An [`Assignment`] is initialised from a [`Model`] with [`Assignment::reset`] and then driven
/// by [`Model::forward_checking_step`]. The model itself is never mutated by a solve, so a single
/// model may back several assignments, each solved on its own thread.
#[derive(Debug, Default)]
pub struct Assignment {
    /// How many variables are instantiated at the current depth.
    assigned_count: usize,
    /// The instantiation of every variable, `None` while unassigned.
    values: KeyedVec<VarId, Option<i32>>,
    /// The live domains, narrowed as the search progresses.
    current_domains: KeyedVec<VarId, Domain>,
    /// Snapshots for undoing the narrowing performed at each search level.
    trail: DomainTrail,
    /// The order in which the search instantiates variables; fixed at reset.
    assign_order: Vec<VarId>,
    pub(crate) statistics: SolverStatistics,
}

impl Assignment {
    /// Prepares this assignment for solving `model`: every variable becomes unassigned, the
    /// current domains are copied from the model's initial domains, and the instantiation order
    /// is fixed to ascending initial domain size (variable id breaking ties). Putting the
    /// smallest domains first places the fixed variables up front and gives the search its
    /// first-fail flavour.
    pub fn reset(&mut self, model: &Model) {
        self.assigned_count = 0;

        self.values.clear();
        self.current_domains.clear();
        for vid in model.variable_ids() {
            let _ = self.values.push(None);
            let _ = self.current_domains.push(model.initial_domain(vid).clone());
        }

        self.trail.clear();

        self.assign_order = model.variable_ids().collect();
        self.assign_order
            .sort_by_key(|&vid| (model.initial_domain(vid).len(), vid));

        self.statistics = SolverStatistics::default();
    }

    /// Whether every variable of the model is instantiated.
    pub fn is_complete(&self) -> bool {
        self.assigned_count == self.values.len()
    }

    /// The value assigned to `vid`, or `None` while the variable is unassigned.
    pub fn value(&self, vid: VarId) -> Option<i32> {
        self.values[vid]
    }

    pub fn is_assigned(&self, vid: VarId) -> bool {
        self.values[vid].is_some()
    }

    /// The current (possibly narrowed) domain of `vid`.
    pub fn current_domain(&self, vid: VarId) -> &Domain {
        &self.current_domains[vid]
    }

    /// The counters accumulated since the last [`Assignment::reset`].
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Emits the statistics of this assignment through the configured statistic logging.
    pub fn log_statistics(&self) {
        self.statistics
            .log_statistics(&StatisticLogger::default());
    }

    /// The number of active search levels. A successful solve leaves its levels (and the
    /// narrowing they performed) in place; an exhausted one unwinds back to zero.
    pub fn search_depth(&self) -> usize {
        self.trail.depth()
    }

    pub(crate) fn assign(&mut self, vid: VarId, value: i32) {
        parsnip_assert_moderate!(self.values[vid].is_none());
        self.values[vid] = Some(value);
        self.assigned_count += 1;
        self.statistics.assigned_variables += 1;
    }

    pub(crate) fn unassign(&mut self, vid: VarId) {
        parsnip_assert_moderate!(self.values[vid].is_some());
        self.values[vid] = None;
        self.assigned_count -= 1;
    }

    /// The variable the search instantiates next. The instantiation order is fixed and the
    /// search never skips a position, so the next unassigned variable is found in constant time.
    pub(crate) fn next_unassigned(&self) -> VarId {
        parsnip_assert_simple!(!self.is_complete());
        let vid = self.assign_order[self.assigned_count];
        parsnip_assert_moderate!(self.values[vid].is_none());
        vid
    }

    pub(crate) fn push_frame(&mut self) {
        self.trail.push_frame();
    }

    pub(crate) fn pop_frame(&mut self) {
        self.trail.pop_frame();
    }

    /// Undoes every domain narrowing performed at the current search level.
    pub(crate) fn restore_step(&mut self) {
        self.trail.restore_into(&mut self.current_domains);
    }

    /// Keeps only `value` in the domain of `vid`.
    pub(crate) fn retain_value(&mut self, vid: VarId, value: i32) -> PropagationStatus {
        self.trail.record_once(vid, &self.current_domains[vid]);
        self.current_domains[vid].retain_value(value)?;
        Ok(())
    }

    /// Keeps only `first` and `second` in the domain of `vid`.
    pub(crate) fn retain_either(
        &mut self,
        vid: VarId,
        first: i32,
        second: i32,
    ) -> PropagationStatus {
        self.trail.record_once(vid, &self.current_domains[vid]);
        self.current_domains[vid].retain_either(first, second)?;
        Ok(())
    }

    /// Removes `value` from the domain of `vid`.
    pub(crate) fn remove_value(&mut self, vid: VarId, value: i32) -> PropagationStatus {
        self.trail.record_once(vid, &self.current_domains[vid]);
        self.current_domains[vid].remove_value(value)?;
        Ok(())
    }

    /// Removes every value smaller than `bound` from the domain of `vid`.
    pub(crate) fn tighten_lower_bound(&mut self, vid: VarId, bound: i32) -> PropagationStatus {
        self.trail.record_once(vid, &self.current_domains[vid]);
        self.current_domains[vid].tighten_lower_bound(bound)?;
        Ok(())
    }

    /// Removes every value greater than `bound` from the domain of `vid`.
    pub(crate) fn tighten_upper_bound(&mut self, vid: VarId, bound: i32) -> PropagationStatus {
        self.trail.record_once(vid, &self.current_domains[vid]);
        self.current_domains[vid].tighten_upper_bound(bound)?;
        Ok(())
    }
}
