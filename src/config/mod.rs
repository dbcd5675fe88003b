/*!
Configuration of a context.

All configuration of a solve is contained in a [Config], which is fixed when a [context](crate::context) is built.

Each option is a [ConfigOption], carrying bounds alongside its value.
Options may be revised freely before a context is built, and are [validated](Config::validate) when a context is built.

```rust
# use flip_sat::config::{Config, Heuristic};
let mut config = Config::default();
config.heuristic.value = "walksat".parse().unwrap();
config.walk_probability.value = 0.5;
assert!(config.validate().is_ok());

config.walk_probability.value = 1.5;
assert!(config.validate().is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod heuristic;
pub use heuristic::Heuristic;

use crate::types::err::{self};

/// The probability of a random walk, where a random walk is permitted.
pub type WalkProbability = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The heuristic used to choose an atom to flip.
    pub heuristic: ConfigOption<Heuristic>,

    /// The probability of a random walk on each flip, for heuristics with a random walk.
    pub walk_probability: ConfigOption<WalkProbability>,

    /// For tabu heuristics, the count of flips following a flip of an atom during which the atom may not be flipped.
    pub tabu_tenure: ConfigOption<usize>,

    /// The maximum count of flips in each attempt.
    pub max_flips: ConfigOption<usize>,

    /// The maximum count of attempts, each from a fresh random valuation.
    pub max_restarts: ConfigOption<usize>,

    /// The seed of the source of randomness.
    pub seed: ConfigOption<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            heuristic: ConfigOption {
                name: "heuristic",
                min: Heuristic::MIN,
                max: Heuristic::MAX,
                value: Heuristic::Custom,
            },

            walk_probability: ConfigOption {
                name: "walk_probability",
                min: 0.0,
                max: 1.0,
                value: 0.2,
            },

            tabu_tenure: ConfigOption {
                name: "tabu_tenure",
                min: 0,
                max: usize::MAX,
                value: 5,
            },

            max_flips: ConfigOption {
                name: "max_flips",
                min: 1,
                max: usize::MAX,
                value: 1000,
            },

            max_restarts: ConfigOption {
                name: "max_restarts",
                min: 1,
                max: usize::MAX,
                value: 50,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 42,
            },
        }
    }
}

impl Config {
    /// Ok if the value of each option is within the bounds of the option, and otherwise an error naming the first option found out of bounds.
    pub fn validate(&self) -> Result<(), err::ConfigError> {
        if !self.heuristic.in_bounds() {
            return Err(err::ConfigError::OutOfBounds(self.heuristic.name));
        }

        if !self.walk_probability.in_bounds() {
            return Err(err::ConfigError::OutOfBounds(self.walk_probability.name));
        }

        if !self.tabu_tenure.in_bounds() {
            return Err(err::ConfigError::OutOfBounds(self.tabu_tenure.name));
        }

        if !self.max_flips.in_bounds() {
            return Err(err::ConfigError::OutOfBounds(self.max_flips.name));
        }

        if !self.max_restarts.in_bounds() {
            return Err(err::ConfigError::OutOfBounds(self.max_restarts.name));
        }

        if !self.seed.in_bounds() {
            return Err(err::ConfigError::OutOfBounds(self.seed.name));
        }

        Ok(())
    }
}
