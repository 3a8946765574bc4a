//! Chooses between two production strategies for a square resource problem.
//!
//! maximize   sum_{j} c[j] * x[j]
//! where      sum_{j} a[i][j] * x[j] uses resource i, and b[i] of it is available
//!
//! - a *solo* option puts everything into one variable
//! - the *balanced* option solves `a * x = b`, so every resource is used up
//!
//! ```
//! use allocation::{decide, ProblemSpec, Strategy};
//!
//! let spec = ProblemSpec::new(
//!     2,
//!     vec![-150.0, -100.0],
//!     vec![vec![4.0, 5.0], vec![3.0, 1.0]],
//!     vec![80.0, 80.0],
//! )
//! .unwrap();
//! let decision = decide(&spec).unwrap();
//! assert_eq!(decision.strategy, Strategy::Solo(0));
//! ```

mod config;
mod decide;
mod error;
mod linear;
mod problem;
mod report;

pub use crate::config::{Config, SoloRule};
pub use crate::decide::{decide, decide_with, evaluate, Decision, Evaluation, Strategy};
pub use crate::error::Error;
pub use crate::problem::ProblemSpec;
pub use crate::report::Report;
