use std::io::{BufRead, Write};

use jiff::civil::{Date, DateTime};
use tracing::debug;
use travest_solver::solver::{
    correction_policy::CorrectionPolicy, solver_params::SolverParams,
};

use crate::{
    estimate::EstimateArgs,
    parsers::{parse_arrival_date, parse_arrival_time},
    prompt::Prompter,
    settings::SettingsStore,
};

pub const API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";

pub const DEFAULT_ORIGIN: &str = "Roseville, CA";
pub const DEFAULT_DESTINATION: &str = "Marriott Marquis, Mission Street, San Francisco";
pub const DEFAULT_ARRIVAL_TIME: &str = "8:00";

/// Everything a solve needs, resolved from flags, prompts and settings.
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    pub origin: String,
    pub destination: String,
    pub desired_arrival: DateTime,
    pub api_key: String,
    pub solver: SolverParams,
}

impl EstimateConfig {
    /// Prompts for every location, date or time flag that was omitted and
    /// validates the result. `today` anchors the default arrival date.
    pub fn resolve<R, W>(
        args: &EstimateArgs,
        api_key: String,
        today: Date,
        prompter: &mut Prompter<R, W>,
    ) -> anyhow::Result<Self>
    where
        R: BufRead,
        W: Write,
    {
        let origin = match &args.origin {
            Some(origin) => origin.clone(),
            None => prompter.ask_with_default("Start Address", DEFAULT_ORIGIN)?,
        };

        let destination = match &args.destination {
            Some(destination) => destination.clone(),
            None => prompter.ask_with_default("Destination Address", DEFAULT_DESTINATION)?,
        };

        let arrival_date = match args.arrival_date {
            Some(date) => date,
            None => {
                let default = today.tomorrow()?.strftime("%m/%d/%Y").to_string();
                parse_arrival_date(&prompter.ask_with_default("Arrival Date", &default)?)?
            }
        };

        let arrival_time = match args.arrival_time {
            Some(time) => time,
            None => parse_arrival_time(
                &prompter.ask_with_default("Desired Arrival Time", DEFAULT_ARRIVAL_TIME)?,
            )?,
        };

        if api_key.trim().is_empty() {
            anyhow::bail!("A Google Maps API key is required");
        }

        let solver = SolverParams {
            max_iterations: args.max_iterations,
            correction: match args.damping {
                Some(gain) => CorrectionPolicy::Damped { gain },
                None => CorrectionPolicy::FullStep,
            },
        };
        solver.validate()?;

        Ok(Self {
            origin,
            destination,
            desired_arrival: arrival_date.to_datetime(arrival_time),
            api_key,
            solver,
        })
    }
}

/// The `--api-key` flag wins over the environment, which wins over the
/// settings file. The settings file prompts for a key when it has none.
pub fn resolve_api_key<R, W>(
    flag: Option<&str>,
    env: Option<String>,
    store: &SettingsStore,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
{
    if let Some(api_key) = flag {
        debug!("Using API key from command line");
        return Ok(api_key.to_string());
    }

    if let Some(api_key) = env.filter(|key| !key.trim().is_empty()) {
        debug!("Using API key from {}", API_KEY_ENV_VAR);
        return Ok(api_key);
    }

    let settings = store.load_or_prompt(prompter)?;
    Ok(settings.api_key.unwrap_or_default())
}
