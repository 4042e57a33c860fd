//! Helpers for unit tests which exercise constraints against a live [`Assignment`] without
//! driving the full search.

use crate::engine::assignment::Assignment;
use crate::engine::domain::Domain;
use crate::engine::variables::VarId;
use crate::model::Model;

/// Builds a finalised model holding one variable per given domain, and an assignment which has
/// been reset against it with one search frame already pushed (propagation requires an active
/// frame to snapshot into).
pub(crate) fn assignment_over(domains: Vec<Domain>) -> (Vec<VarId>, Assignment) {
    let mut model = Model::default();
    let variables = domains
        .into_iter()
        .map(|domain| model.add_int_var_with_domain(domain))
        .collect();
    model.finalize();

    let mut assignment = Assignment::default();
    assignment.reset(&model);
    assignment.push_frame();

    (variables, assignment)
}
