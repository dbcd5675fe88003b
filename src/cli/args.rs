use std::path::PathBuf;

use clap::Parser;
use flip_sat::{
    config::{Config, Heuristic, WalkProbability},
    types::err::{self},
};

/// Searches for a valuation satisfying a formula by incremental local search.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The DIMACS form CNF file to read
    pub file: PathBuf,

    /// The heuristic used to choose atoms to flip: gsat, gwsat, gsatTabu, hsat, hwsat, walksat, walksatTabu, or customsat (the default, and the fallback for unknown names)
    #[arg(long, default_value = "customsat")]
    pub heuristic: String,

    /// The probability of a random walk on each flip, for heuristics which walk
    #[arg(long)]
    pub walk_probability: Option<WalkProbability>,

    /// The count of flips following a flip of an atom during which the atom is tabu
    #[arg(long)]
    pub tabu_tenure: Option<usize>,

    /// The maximum count of flips in each attempt
    #[arg(long)]
    pub max_flips: Option<usize>,

    /// The maximum count of attempts
    #[arg(long)]
    pub max_restarts: Option<usize>,

    /// The seed of the source of randomness
    #[arg(long)]
    pub seed: Option<u64>,

    /// Display a satisfying valuation, if one is found
    #[arg(short, long, default_value_t = false)]
    pub model: bool,
}

impl Args {
    /// The default configuration, revised by any options given.
    ///
    /// Fails if some option is out of bounds.
    pub fn config(&self) -> Result<Config, err::ConfigError> {
        let mut config = Config::default();

        config.heuristic.value = match self.heuristic.parse::<Heuristic>() {
            Ok(heuristic) => heuristic,
            Err(never) => match never {},
        };

        if let Some(value) = self.walk_probability {
            config.walk_probability.value = value;
        }

        if let Some(value) = self.tabu_tenure {
            config.tabu_tenure.value = value;
        }

        if let Some(value) = self.max_flips {
            config.max_flips.value = value;
        }

        if let Some(value) = self.max_restarts {
            config.max_restarts.value = value;
        }

        if let Some(value) = self.seed {
            config.seed.value = value;
        }

        config.validate()?;
        Ok(config)
    }
}
