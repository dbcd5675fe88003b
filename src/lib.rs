//! A library for searching for satisfying valuations of boolean formulas written in conjunctive normal form by incremental local search.
//!
//! flip_sat implements the GSAT/WalkSAT family of stochastic local search procedures.
//! A candidate valuation is repeatedly revised by flipping the value of a single atom, with the aim of reducing the number of unsatisfied clauses.
//!
//! Local search is incomplete: a formula may be shown satisfiable by finding a valuation, but a failure to find a valuation says nothing about unsatisfiability.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built from a [configuration](crate::config) and a [formula](crate::db::formula), which may be read from a [DIMACS](crate::builder::dimacs) representation.
//!
//! Internally, a solve is viewed in terms of a few structures:
//! - The formula, stored in an immutable [Formula](crate::db::formula::Formula) together with an index from literals to the clauses they occur in.
//! - A [Tracker](crate::db::tracker::Tracker), which stores a full valuation together with the clauses unsatisfied on that valuation and, for each atom, how many clauses a flip of the atom would make or break.
//! - A [Selector](crate::heuristics::Selector), which reads the tracker and decides which atom to flip next.
//!
//! The tracker is updated incrementally on each flip, touching only those clauses which contain the flipped atom.
//!
//! Useful starting points, then, may be:
//! - The [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [tracker](crate::db::tracker) for the incremental bookkeeping.
//! - The [heuristics] for the supported ways of choosing an atom to flip.
//!
//! If you're in search of cnf formulas consider:
//! - The SATLIB benchmark problems at [www.cs.ubc.ca/~hoos/SATLIB/benchm.html](https://www.cs.ubc.ca/~hoos/SATLIB/benchm.html)
//!
//! # Example
//!
//! ```rust
//! # use flip_sat::config::{Config, Heuristic};
//! # use flip_sat::context::Context;
//! # use flip_sat::db::formula::Formula;
//! # use flip_sat::reports::Report;
//! let mut dimacs = vec![];
//! let _ = std::io::Write::write(&mut dimacs, b"
//! p cnf 2 3
//!  1  2 0
//! -1  2 0
//!  1 -2 0
//! ");
//!
//! let formula = Formula::read_dimacs(dimacs.as_slice()).unwrap();
//!
//! let mut config = Config::default();
//! config.heuristic.value = Heuristic::GSAT;
//!
//! let mut the_context = Context::from_config(config, formula).unwrap();
//! let result = the_context.solve().unwrap();
//!
//! assert_eq!(result.report(), Report::Solved);
//! assert_eq!(the_context.best_literals(), vec![1, 2]);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No log implementation is provided.
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) restarts may be followed with `RUST_LOG=restart=debug …`.

#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod heuristics;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
