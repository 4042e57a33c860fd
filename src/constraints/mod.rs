//! Defines the constraints that Parsnip provides out of the box which can be added to the
//! [`Model`].
//!
//! A constraint is a relation over variables. Every kind provides two operations to the search:
//! an evaluation (the satisfaction verdict under the current instantiations) and an
//! arc-consistency pass (narrowing the domains of unassigned participants whenever the posted
//! relation permits a deterministic inference).
//!
//! # Example
//! ```
//! # use parsnip_solver::constraints;
//! # use parsnip_solver::Model;
//! let mut model = Model::default();
//!
//! let a = model.add_int_var(0, 3);
//! let b = model.add_int_var(0, 3);
//!
//! let _ = model.add_constraint(constraints::equality(a, b));
//! ```

mod all_different;
mod binary_relation;
mod combined_equality;
mod equality;
mod guarded;
mod or_equality;
mod or_range;

pub use all_different::AllDifferent;
pub use binary_relation::BinaryRelation;
pub use binary_relation::Comparator;
pub use combined_equality::CombinedEquality;
pub use equality::Equality;
pub use guarded::GuardedRelation;
pub use or_equality::OrEquality;
pub use or_range::OrRange;

use crate::basic_types::PropagationStatus;
use crate::containers::StorageKey;
use crate::engine::assignment::Assignment;
use crate::engine::domain::Interval;
use crate::engine::variables::VarId;
#[cfg(doc)]
use crate::Model;

/// The satisfaction verdict of a constraint under the current instantiations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// Not every participating variable is instantiated yet, so there is no verdict.
    Unknown,
    Satisfied,
    Violated,
}

/// A stable reference to a constraint in the [`Model`]'s constraint store.
///
/// References are indices rather than pointers; they stay valid because the store is frozen once
/// the model is finalised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConstraintRef {
    index: u32,
}

impl StorageKey for ConstraintRef {
    fn index(&self) -> usize {
        self.index as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintRef {
            index: index as u32,
        }
    }
}

/// The maximum size, in bytes, of one constraint slot in the model's constraint store. The store
/// is a contiguous vector of uniform-size slots, so every kind must fit; this is checked at
/// compile time below.
pub const MAX_CONSTRAINT_SIZE: usize = 48;

const _: () = assert!(std::mem::size_of::<Constraint>() <= MAX_CONSTRAINT_SIZE);

/// One posted constraint, tagged by kind.
///
/// The kinds are value types: a constraint is copied into the model's store when posted, and the
/// search dispatches on the tag. New kinds can be added here without touching the search engine,
/// which only ever calls [`Constraint::evaluate`] and [`Constraint::propagate`].
#[derive(Clone, Debug)]
pub enum Constraint {
    BinaryRelation(BinaryRelation),
    Equality(Equality),
    OrEquality(OrEquality),
    CombinedEquality(CombinedEquality),
    OrRange(OrRange),
    AllDifferent(AllDifferent),
    GuardedRelation(GuardedRelation),
}

impl Constraint {
    /// The variables this constraint mentions. The model links the constraint into each of their
    /// constraint lists when it is finalised.
    pub fn variables(&self) -> Vec<VarId> {
        match self {
            Constraint::BinaryRelation(constraint) => constraint.variables(),
            Constraint::Equality(constraint) => constraint.variables(),
            Constraint::OrEquality(constraint) => constraint.variables(),
            Constraint::CombinedEquality(constraint) => constraint.variables(),
            Constraint::OrRange(constraint) => constraint.variables(),
            Constraint::AllDifferent(constraint) => constraint.variables(),
            Constraint::GuardedRelation(constraint) => constraint.variables(),
        }
    }

    /// Evaluates this constraint under the instantiations of `assignment`. `last_assigned` is the
    /// variable instantiated most recently; kinds with many participants use it to verify only
    /// what the latest assignment could have changed.
    pub fn evaluate(&self, assignment: &Assignment, last_assigned: VarId) -> Evaluation {
        match self {
            Constraint::BinaryRelation(constraint) => constraint.evaluate(assignment),
            Constraint::Equality(constraint) => constraint.evaluate(assignment),
            Constraint::OrEquality(constraint) => constraint.evaluate(assignment),
            Constraint::CombinedEquality(constraint) => constraint.evaluate(assignment),
            Constraint::OrRange(constraint) => constraint.evaluate(assignment),
            Constraint::AllDifferent(constraint) => constraint.evaluate(assignment, last_assigned),
            Constraint::GuardedRelation(constraint) => constraint.evaluate(assignment),
        }
    }

    /// Narrows the domains of the unassigned participants as far as the relation permits, given
    /// that `last_assigned` was just instantiated. Returns [`EmptyDomain`] iff some participant's
    /// domain was wiped out.
    ///
    /// [`EmptyDomain`]: crate::EmptyDomain
    pub fn propagate(
        &self,
        assignment: &mut Assignment,
        last_assigned: VarId,
    ) -> PropagationStatus {
        match self {
            Constraint::BinaryRelation(constraint) => constraint.propagate(assignment),
            Constraint::Equality(constraint) => constraint.propagate(assignment),
            Constraint::OrEquality(constraint) => constraint.propagate(assignment),
            Constraint::CombinedEquality(constraint) => constraint.propagate(assignment),
            Constraint::OrRange(constraint) => constraint.propagate(assignment),
            Constraint::AllDifferent(constraint) => {
                constraint.propagate(assignment, last_assigned)
            }
            Constraint::GuardedRelation(constraint) => constraint.propagate(assignment),
        }
    }
}

/// Creates the constraint `lhs comparator (rhs + offset)`.
pub fn binary(lhs: VarId, comparator: Comparator, rhs: VarId, offset: i32) -> Constraint {
    Constraint::BinaryRelation(BinaryRelation::new(lhs, comparator, rhs, offset))
}

/// Creates the constraint `lhs = rhs`.
pub fn equality(lhs: VarId, rhs: VarId) -> Constraint {
    Constraint::Equality(Equality::new(lhs, rhs))
}

/// Creates the constraint `target = first ∨ target = second`.
pub fn or_equality(target: VarId, first: VarId, second: VarId) -> Constraint {
    Constraint::OrEquality(OrEquality::new(target, first, second))
}

/// Creates the constraint `target = augend + addend − subtrahend`.
pub fn combined_equality(
    target: VarId,
    augend: VarId,
    addend: VarId,
    subtrahend: VarId,
) -> Constraint {
    Constraint::CombinedEquality(CombinedEquality::new(target, augend, addend, subtrahend))
}

/// Creates the constraint `first ∈ [lower, upper) ∨ second ∈ [lower, upper)`.
pub fn or_range(first: VarId, second: VarId, lower: i32, upper: i32) -> Constraint {
    Constraint::OrRange(OrRange::new(first, second, Interval::new(lower, upper)))
}

/// Creates the constraint that all of `variables` take pairwise distinct values.
pub fn all_different(variables: impl Into<Vec<VarId>>) -> Constraint {
    Constraint::AllDifferent(AllDifferent::new(variables.into()))
}

/// Creates the constraint `lhs comparator (rhs + offset)`, enforced only while `guard` holds a
/// non-zero value.
pub fn enforced_if(
    lhs: VarId,
    comparator: Comparator,
    rhs: VarId,
    offset: i32,
    guard: VarId,
) -> Constraint {
    Constraint::GuardedRelation(GuardedRelation::new(
        BinaryRelation::new(lhs, comparator, rhs, offset),
        guard,
        true,
    ))
}

/// Creates the constraint `lhs comparator (rhs + offset)`, enforced only while `guard` holds the
/// value zero.
pub fn enforced_unless(
    lhs: VarId,
    comparator: Comparator,
    rhs: VarId,
    offset: i32,
    guard: VarId,
) -> Constraint {
    Constraint::GuardedRelation(GuardedRelation::new(
        BinaryRelation::new(lhs, comparator, rhs, offset),
        guard,
        false,
    ))
}
