/*!
The context, within which a formula is solved.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over its source of randomness, and a context fixes the source of randomness to [MinimalPCG32](crate::generic::random::MinimalPCG32).

A context owns:
- The [configuration](crate::config) of the solve.
- The [formula](crate::db::formula), which is not mutated.
- A [tracker](crate::db::tracker) for the current valuation, and a [selector](crate::heuristics) of atoms to flip.
- The best valuation found in the current attempt, and across all attempts.

# Example
```rust
# use flip_sat::config::{Config, Heuristic};
# use flip_sat::context::{Context, ContextState};
# use flip_sat::db::formula::Formula;
# use flip_sat::reports::Report;
let formula = Formula::from_clauses(3, vec![vec![1, 2], vec![-1, 3], vec![-2, -3], vec![-3]]).unwrap();

let mut config = Config::default();
config.heuristic.value = Heuristic::WalkSAT;

let mut the_context = Context::from_config(config, formula).unwrap();
assert_eq!(the_context.state, ContextState::Idle);

let result = the_context.solve().unwrap();
assert_eq!(result.report(), Report::Solved);
assert_eq!(the_context.best_literals(), vec![-1, 2, -3]);
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// No attempt has been made.
    Idle,

    /// An attempt is to begin from a fresh valuation.
    Restarting,

    /// An attempt is in progress.
    Flipping,

    /// A valuation satisfying the formula has been found.
    Solved,

    /// The flip and restart budgets were exhausted without finding a satisfying valuation.
    Exhausted,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Restarting => write!(f, "Restarting"),
            Self::Flipping => write!(f, "Flipping"),
            Self::Solved => write!(f, "Solved"),
            Self::Exhausted => write!(f, "Exhausted"),
        }
    }
}
