//! Perturbative foot-point solver.

pub mod coefficients;
pub mod solver;

pub use coefficients::{zeta_coefficients, ZetaCoefficients};
pub use solver::{solve_foot_point, FootPointSolver, RadialAltitude, RadialBase, ZetaOrder};
