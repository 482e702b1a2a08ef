pub mod correction_policy;
pub mod departure_time_solver;
pub mod solve_error;
pub mod solver_params;
pub mod solver_result;
