#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::io::BufReader;

use clap::Parser;
use flip_sat::{
    context::Context,
    db::formula::Formula,
    reports::Report,
    structures::valuation::Valuation,
    types::err::{self},
};

mod args;
use args::Args;

/// Exit code on finding a satisfying valuation.
const EXIT_SOLVED: i32 = 10;

/// Exit code on exhausting the budgets of a solve.
const EXIT_EXHAUSTED: i32 = 30;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {}", err::ErrorKind::from(e));
            std::process::exit(1);
        }
    };

    println!("c Reading DIMACS file from {:?}", args.file);

    let file = match std::fs::File::open(&args.file) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file");
            std::process::exit(1);
        }
    };

    let formula = match Formula::read_dimacs(BufReader::new(&file)) {
        Ok(formula) => formula,
        Err(e) => {
            println!("c Parse error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "c Atoms: {}, clauses: {}, tautologies skipped: {}",
        formula.atom_count(),
        formula.clause_count(),
        formula.tautology_count()
    );

    println!("c Heuristic: {}", config.heuristic.value);
    println!("c Walk probability: {}", config.walk_probability.value);
    println!("c Tabu tenure: {}", config.tabu_tenure.value);
    println!("c Max flips: {}", config.max_flips.value);
    println!("c Max restarts: {}", config.max_restarts.value);
    println!("c Seed: {}", config.seed.value);

    let mut the_context = match Context::from_config(config, formula) {
        Ok(context) => context,
        Err(e) => {
            println!("c Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let result = match the_context.solve() {
        Ok(result) => result,
        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(2);
        }
    };

    println!("c Flips: {}", result.flips);
    println!("c Restarts: {}", result.restarts);
    println!("c Best objective: {}", result.best_objective);
    println!("c Time: {:.2?}", the_context.counters.time);

    println!("s {}", result.report());

    if args.model && result.report() == Report::Solved {
        println!("v {}", the_context.best_valuation().as_dimacs());
    }

    match result.report() {
        Report::Solved => std::process::exit(EXIT_SOLVED),
        Report::Exhausted | Report::Unknown => std::process::exit(EXIT_EXHAUSTED),
    }
}
