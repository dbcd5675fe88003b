use rand::{Rng, SeedableRng};

use crate::{
    config::Config,
    db::{formula::Formula, tracker::Tracker},
    heuristics::Selector,
    reports::Report,
    structures::{
        literal::CLiteral,
        valuation::{CValuation, Valuation},
    },
    types::err::{self, ErrorKind},
};

use super::{ContextState, Counters};

/// A valuation, together with a count of clauses the valuation leaves unsatisfied.
#[derive(Clone, Debug)]
pub struct Record {
    /// A count of unsatisfied clauses.
    pub objective: usize,

    /// The valuation.
    pub valuation: CValuation,
}

/// A generic context, parameterised to a source of randomness.
///
/// The source of randomness is seeded from the configuration, and so a solve is determined by the configuration and formula of the context.
///
/// # Example
///
/// ```rust
/// # use flip_sat::context::GenericContext;
/// # use flip_sat::generic::random::MinimalPCG32;
/// # use flip_sat::config::Config;
/// # use flip_sat::db::formula::Formula;
/// let formula = Formula::from_clauses(2, vec![vec![1, 2]]).unwrap();
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default(), formula);
/// assert!(context.is_ok());
/// ```
pub struct GenericContext<R: Rng + SeedableRng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The formula.
    pub formula: Formula,

    /// The current valuation, and information derived from it.
    /// See [db::tracker](crate::db::tracker) for details.
    pub tracker: Tracker,

    /// The heuristic used to choose atoms to flip.
    pub selector: Selector,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// The best valuation found across all attempts.
    ///
    /// Before any attempt the objective is greater than the count of clauses, and the valuation is empty.
    pub(crate) best: Record,

    /// The objective of the best valuation found in the current attempt.
    pub(crate) attempt_best: usize,
}

impl<R: Rng + SeedableRng> GenericContext<R> {
    /// Creates a context to solve the formula from some given configuration.
    ///
    /// Fails if some option of the configuration is out of bounds, or if storage for the atoms of the formula cannot be allocated.
    pub fn from_config(config: Config, formula: Formula) -> Result<Self, ErrorKind> {
        config.validate()?;

        let unsolved = formula.clause_count() + 1;

        Ok(Self {
            counters: Counters::default(),
            tracker: Tracker::new(&formula)?,
            selector: Selector::from_config(&config),
            state: ContextState::Idle,
            rng: R::seed_from_u64(config.seed.value),
            best: Record {
                objective: unsolved,
                valuation: CValuation::default(),
            },
            attempt_best: unsolved,

            formula,
            config,
        })
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Idle | ContextState::Restarting | ContextState::Flipping => {
                Report::Unknown
            }
            ContextState::Solved => Report::Solved,
            ContextState::Exhausted => Report::Exhausted,
        }
    }

    /// A count of clauses unsatisfied by the best valuation found.
    ///
    /// Before a solve, the count of clauses plus one.
    pub fn best_objective(&self) -> usize {
        self.best.objective
    }

    /// The best valuation found, with the value of atom *a* at index *a - 1*.
    ///
    /// Before a solve, the valuation is empty.
    pub fn best_valuation(&self) -> &[bool] {
        &self.best.valuation
    }

    /// The best valuation found, as a literal for each atom in order.
    pub fn best_literals(&self) -> Vec<CLiteral> {
        self.best.valuation.literals().collect()
    }

    /// Notes the current valuation of the tracker, if it improves on the best valuation of the attempt or of the solve.
    pub(crate) fn note_valuation(&mut self) {
        let objective = self.tracker.objective();

        if objective < self.attempt_best {
            self.attempt_best = objective;
        }

        if objective < self.best.objective {
            self.best.objective = objective;
            self.best.valuation.clear();
            self.best
                .valuation
                .extend_from_slice(self.tracker.valuation());

            log::debug!(target: crate::misc::log::targets::RESTART, "Best objective {objective} at flip {} of attempt {}", self.tracker.flips(), self.counters.restarts);
        }
    }

    /// Confirms the best valuation satisfies the formula, independently of the tracker.
    pub(crate) fn confirm_best(&self) -> Result<(), ErrorKind> {
        use crate::procedures::check::{check_valuation, Verdict};

        match check_valuation(&self.formula, &self.best.valuation) {
            Verdict::Pass => Ok(()),

            Verdict::Fail(violated) => {
                log::error!(target: crate::misc::log::targets::CHECK, "{violated} clauses unsatisfied by a reported solution");
                self.tracker.verify(&self.formula)?;
                Err(err::ErrorKind::from(err::ConsistencyError::CheckerFailure {
                    violated,
                }))
            }
        }
    }
}
