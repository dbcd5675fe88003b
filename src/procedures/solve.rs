//! Searches for a valuation satisfying the formula of a context.
//!
//! # Overview
//!
//! A solve is a sequence of *attempts*, each beginning from a fresh random valuation and consisting of a sequence of *flips*.
//! On each flip the [selector](crate::heuristics::Selector) of the context chooses an atom, and the [tracker](crate::db::tracker) flips the value of the atom.
//!
//! The solve is a loop over the [state](crate::context::ContextState) of the context:
//!
//! ```none
//!                         +----------------------------------------------+
//!                         |                                              |
//!                         ⌄                                              |
//! +------+          +------------+          +----------+                 |
//! | Idle |--------->| Restarting |--------->| Flipping |--+--------------+
//! +------+          +------------+          +----------+  |   if the flip budget is exhausted, and
//!    |                                                    |   the restart budget is not
//!    |                                                    |
//!    |                                                    +-----> Solved, if no clause is unsatisfied
//!    |                                                    |
//!    +----------------------------------------------------+-----> Exhausted, if both budgets are exhausted
//! ```
//!
//! - An attempt ends after `max_flips` flips, or when no clause is unsatisfied, or when the selector has no atom to flip.
//! - At most `max_restarts` attempts are made.
//! - Throughout, the best valuation of the current attempt and the best valuation across all attempts are recorded.
//!   The best of the current attempt is used by tabu heuristics, and the best across all attempts is the result of the solve.
//!
//! Exhausting the budgets is not an error, though local search is incomplete and so exhausting the budgets says nothing about whether the formula is satisfiable.
//!
//! On finding a satisfying valuation the valuation is [checked](crate::procedures::check) independently of the tracker.
//! A failed check is an error, and indicates an issue with the library.
//!
//! # Example
//!
//! ```rust
//! # use flip_sat::config::Config;
//! # use flip_sat::context::Context;
//! # use flip_sat::db::formula::Formula;
//! # use flip_sat::reports::Report;
//! let formula = Formula::from_clauses(1, vec![vec![1], vec![-1]]).unwrap();
//!
//! let mut config = Config::default();
//! config.max_flips.value = 20;
//! config.max_restarts.value = 3;
//!
//! let mut the_context = Context::from_config(config, formula).unwrap();
//! let result = the_context.solve().unwrap();
//!
//! assert_eq!(result.report(), Report::Exhausted);
//! assert_eq!(result.best_objective, 1);
//! assert_eq!(result.restarts, 3);
//! ```

use rand::{Rng, SeedableRng};

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    reports::SolveReport,
    types::err::ErrorKind,
};

impl<R: Rng + SeedableRng> GenericContext<R> {
    /// Searches for a valuation satisfying the formula, within the flip and restart budgets of the configuration.
    ///
    /// Once the solve has finished, further calls return the same report without further search.
    pub fn solve(&mut self) -> Result<SolveReport, ErrorKind> {
        let total_time = std::time::Instant::now();

        'solve_loop: loop {
            match self.state {
                ContextState::Idle => {
                    self.state = match self.best.objective {
                        0 => ContextState::Solved,
                        _ if self.counters.restarts < self.config.max_restarts.value => {
                            ContextState::Restarting
                        }
                        _ => ContextState::Exhausted,
                    };
                }

                ContextState::Restarting => {
                    self.restart();
                    self.state = ContextState::Flipping;
                }

                ContextState::Flipping => {
                    self.attempt();

                    self.state = if self.tracker.objective() == 0 {
                        ContextState::Solved
                    } else if self.counters.restarts < self.config.max_restarts.value {
                        ContextState::Restarting
                    } else {
                        ContextState::Exhausted
                    };
                }

                ContextState::Solved | ContextState::Exhausted => break 'solve_loop,
            }
        }

        self.counters.time += total_time.elapsed();

        if self.state == ContextState::Solved {
            self.confirm_best()?;
        }

        log::info!(target: targets::RESTART, "{} after {} flips over {} attempts, best objective {}", self.state, self.counters.total_flips, self.counters.restarts, self.best.objective);

        Ok(self.solve_report())
    }

    /// Begins a fresh attempt from a random valuation.
    fn restart(&mut self) {
        self.counters.restarts += 1;

        self.tracker.randomize(&mut self.rng);
        self.tracker.recompute(&self.formula);
        self.tracker.clear_history();

        self.attempt_best = self.tracker.objective();
        self.note_valuation();

        log::debug!(target: targets::RESTART, "Attempt {} from objective {}", self.counters.restarts, self.attempt_best);
    }

    /// Flips until the flip budget is exhausted, no clause is unsatisfied, or no atom is selected.
    fn attempt(&mut self) {
        let max_flips = self.config.max_flips.value;

        while self.tracker.flips() < max_flips && self.tracker.objective() > 0 {
            let Some(atom) = self.selector.select(
                &self.formula,
                &self.tracker,
                self.attempt_best,
                &mut self.rng,
            ) else {
                log::debug!(target: targets::RESTART, "Attempt {} ended without a selection", self.counters.restarts);
                break;
            };

            self.tracker.flip(&self.formula, atom);
            self.counters.total_flips += 1;

            self.note_valuation();
        }
    }

    /// A report of the solve, so far.
    pub fn solve_report(&self) -> SolveReport {
        SolveReport {
            flips: self.counters.total_flips,
            restarts: self.counters.restarts,
            best_objective: self.best.objective,
        }
    }
}
