pub mod errors;
pub mod gauss;

pub use gauss::{solve_linear_system, solve_linear_system_with, LinearSolution, Strategy};
