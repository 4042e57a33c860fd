use crate::create_statistics_struct;

create_statistics_struct!(
    /// Counters describing the work performed by one solve.
    ///
    /// The counters are deterministic: two solves of the same model produce identical values.
    SolverStatistics {
        /// The number of constraint evaluations performed while validating tentative assignments
        validated_constraints: u64,
        /// The number of arc-consistency passes applied after assignments
        propagation_passes: u64,
        /// The number of variable assignments attempted by the search
        assigned_variables: u64,
});
