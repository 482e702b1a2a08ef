use jiff::SignedDuration;

/// How much of the observed arrival error is removed from the departure
/// candidate on each iteration.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum CorrectionPolicy {
    /// Subtract the whole error (gain 1).
    #[default]
    FullStep,

    /// Subtract `gain * error`, rounded to whole seconds. `gain` must be in `(0, 1]`.
    Damped { gain: f64 },
}

impl CorrectionPolicy {
    /// Returns the amount to subtract from the current departure candidate.
    pub fn step(&self, arrival_error: SignedDuration) -> SignedDuration {
        match self {
            CorrectionPolicy::FullStep => arrival_error,
            CorrectionPolicy::Damped { gain } => {
                let secs = (arrival_error.as_secs_f64() * gain).round() as i64;

                // A step rounded to zero would stall the candidate
                if secs == 0 && !arrival_error.is_zero() {
                    SignedDuration::from_secs(arrival_error.signum() as i64)
                } else {
                    SignedDuration::from_secs(secs)
                }
            }
        }
    }
}
