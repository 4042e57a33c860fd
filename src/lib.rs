//! # Parsnip
//! Parsnip is a small constraint satisfaction solver over finite integer domains. It searches
//! with chronological backtracking augmented with forward checking: after every tentative
//! assignment the domains of the unassigned neighbours are narrowed through the posted
//! constraints, and a wiped-out domain prunes the branch before the search commits to it.
//!
//! The solver is deliberately minimal. There is no objective function, no solution enumeration,
//! no restarts, and no learning; a model is either satisfiable (and one complete assignment is
//! produced) or it is not.
//!
//! # Using Parsnip
//! The first step to solving a problem is creating a [`Model`] and **adding variables**:
//! ```rust
//! # use parsnip_solver::Model;
//! let mut model = Model::default();
//!
//! // Two variables with the half-open initial domain [0, 10), and two fixed variables.
//! let x = model.add_int_var(0, 10);
//! let y = model.add_int_var(0, 10);
//! let six = model.add_fixed_var(6);
//! let five = model.add_fixed_var(5);
//! ```
//!
//! Then we can **add constraints** over those variables:
//! ```rust
//! # use parsnip_solver::Model;
//! # use parsnip_solver::Comparator;
//! # use parsnip_solver::constraints;
//! # let mut model = Model::default();
//! # let x = model.add_int_var(0, 10);
//! # let y = model.add_int_var(0, 10);
//! # let six = model.add_fixed_var(6);
//! # let five = model.add_fixed_var(5);
//! let _ = model.add_constraint(constraints::binary(x, Comparator::Less, six, 0));
//! let _ = model.add_constraint(constraints::binary(x, Comparator::GreaterOrEqual, five, 0));
//! let _ = model.add_constraint(constraints::binary(y, Comparator::LessOrEqual, six, 0));
//! let _ = model.add_constraint(constraints::binary(y, Comparator::Greater, five, 0));
//! ```
//!
//! Once every variable and constraint has been added, the model is **finalised** (which freezes
//! the constraint store and wires each constraint into the variables it mentions), and an
//! [`Assignment`] is initialised from it. **Finding a solution** is then a single call:
//! ```rust
//! # use parsnip_solver::Model;
//! # use parsnip_solver::Assignment;
//! # use parsnip_solver::Comparator;
//! # use parsnip_solver::constraints;
//! # let mut model = Model::default();
//! # let x = model.add_int_var(0, 10);
//! # let y = model.add_int_var(0, 10);
//! # let six = model.add_fixed_var(6);
//! # let five = model.add_fixed_var(5);
//! # let _ = model.add_constraint(constraints::binary(x, Comparator::Less, six, 0));
//! # let _ = model.add_constraint(constraints::binary(x, Comparator::GreaterOrEqual, five, 0));
//! # let _ = model.add_constraint(constraints::binary(y, Comparator::LessOrEqual, six, 0));
//! # let _ = model.add_constraint(constraints::binary(y, Comparator::Greater, five, 0));
//! model.finalize();
//!
//! let mut assignment = Assignment::default();
//! assignment.reset(&model);
//!
//! let satisfiable = model.forward_checking_step(&mut assignment);
//!
//! assert!(satisfiable);
//! assert_eq!(assignment.value(x), Some(5));
//! assert_eq!(assignment.value(y), Some(6));
//! ```
//!
//! A [`Model`] is immutable once finalised, so a single model may back any number of independent
//! [`Assignment`]s; all mutable search state lives in the assignment.
//!
//! ## Feature flags
//! - `debug-checks`: Enable expensive internal consistency assertions. Turning this on slows
//!   down the solver considerably, so it is turned off by default.

pub mod constraints;
pub mod containers;
pub mod statistics;

mod basic_types;
mod engine;
mod model;
mod variable_names;

#[doc(hidden)]
#[path = "parsnip_asserts.rs"]
pub mod asserts;

pub use basic_types::ConstraintOperationError;
pub use basic_types::PropagationStatus;
pub use constraints::Comparator;
pub use constraints::Constraint;
pub use constraints::ConstraintRef;
pub use constraints::Evaluation;
pub use engine::assignment::Assignment;
pub use engine::domain::Domain;
pub use engine::domain::EmptyDomain;
pub use engine::domain::Interval;
pub use engine::solver_statistics::SolverStatistics;
pub use engine::variables::VarId;
pub use model::Model;
