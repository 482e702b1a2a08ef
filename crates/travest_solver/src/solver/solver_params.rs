use super::{correction_policy::CorrectionPolicy, solve_error::SolveError};

pub const DEFAULT_MAX_ITERATIONS: u32 = 25;

#[derive(Clone, Debug)]
pub struct SolverParams {
    /// Maximum number of correction iterations after the seed query
    pub max_iterations: u32,
    pub correction: CorrectionPolicy,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            correction: CorrectionPolicy::FullStep,
        }
    }
}

impl SolverParams {
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.max_iterations == 0 {
            return Err(SolveError::InvalidParams(
                "max_iterations must be positive".to_string(),
            ));
        }

        match self.correction {
            CorrectionPolicy::Damped { gain } if !(gain > 0.0 && gain <= 1.0) => Err(
                SolveError::InvalidParams(format!("damping gain must be in (0, 1], got {gain}")),
            ),
            _ => Ok(()),
        }
    }
}
