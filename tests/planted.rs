use flip_sat::{
    config::{Config, Heuristic},
    context::Context,
    db::formula::Formula,
    generic::random::MinimalPCG32,
    procedures::check::{check_valuation, Verdict},
    reports::Report,
};
use rand::SeedableRng;

/// Solves planted 3-SAT formulas, each with a satisfying valuation by construction, and checks the valuation found.
fn solve_planted(heuristic: Heuristic, atom_count: usize, clause_count: usize, seed: u64) {
    let mut rng = MinimalPCG32::seed_from_u64(seed);

    for _ in 0..5 {
        let (formula, hidden) = Formula::planted_k_sat(&mut rng, 3, atom_count, clause_count).unwrap();
        assert_eq!(check_valuation(&formula, &hidden), Verdict::Pass);

        let mut config = Config::default();
        config.heuristic.value = heuristic;
        config.max_flips.value = 10_000;
        config.max_restarts.value = 20;

        let mut the_context = Context::from_config(config, formula).unwrap();
        let result = the_context.solve().unwrap();

        assert_eq!(result.report(), Report::Solved, "{heuristic}");
        assert!(result.flips <= 10_000 * 20);
        assert_eq!(
            check_valuation(&the_context.formula, the_context.best_valuation()),
            Verdict::Pass
        );
    }
}

mod planted {
    use super::*;

    #[test]
    fn walksat() {
        solve_planted(Heuristic::WalkSAT, 40, 140, 1);
    }

    #[test]
    fn walksat_tabu() {
        solve_planted(Heuristic::WalkSATTabu, 40, 140, 2);
    }

    #[test]
    fn gwsat() {
        solve_planted(Heuristic::GWSAT, 40, 140, 3);
    }

    #[test]
    fn hwsat() {
        solve_planted(Heuristic::HWSAT, 40, 140, 4);
    }

    #[test]
    fn gsat_tabu() {
        solve_planted(Heuristic::GSATTabu, 40, 140, 5);
    }

    #[test]
    fn custom() {
        solve_planted(Heuristic::Custom, 40, 140, 6);
    }
}

mod consistency {
    use rand::Rng;

    use super::*;
    use flip_sat::db::tracker::Tracker;

    #[test]
    fn tracker_after_solve_flips() {
        let mut rng = MinimalPCG32::seed_from_u64(99);
        let formula = Formula::random_k_sat(&mut rng, 3, 50, 215).unwrap();

        let mut tracker = Tracker::new(&formula).unwrap();
        tracker.randomize(&mut rng);
        tracker.recompute(&formula);

        for _ in 0..2_000 {
            let atom = rng.gen_range(1..=formula.atom_count() as u32);
            tracker.flip(&formula, atom);
        }

        assert!(tracker.verify(&formula).is_ok());
        assert_eq!(
            check_valuation(&formula, tracker.valuation()) == Verdict::Pass,
            tracker.objective() == 0
        );
    }
}
