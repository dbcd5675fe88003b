use flip_sat::{
    config::{Config, Heuristic},
    context::Context,
    db::formula::Formula,
    procedures::check::{check_valuation, Verdict},
    reports::Report,
};

const HEURISTICS: [Heuristic; 8] = [
    Heuristic::GSAT,
    Heuristic::GWSAT,
    Heuristic::GSATTabu,
    Heuristic::HSAT,
    Heuristic::HWSAT,
    Heuristic::WalkSAT,
    Heuristic::WalkSATTabu,
    Heuristic::Custom,
];

/// (x1 ∨ x2), (¬x1 ∨ x2), (x1 ∨ ¬x2), satisfied only when both atoms are true.
fn tiny_formula() -> Formula {
    Formula::from_clauses(2, vec![vec![1, 2], vec![-1, 2], vec![1, -2]]).unwrap()
}

mod basic {
    use super::*;

    #[test]
    fn tiny_gsat() {
        let mut config = Config::default();
        config.heuristic.value = Heuristic::GSAT;
        config.max_flips.value = 50;
        config.max_restarts.value = 5;
        config.seed.value = 2024;

        let mut the_context = Context::from_config(config, tiny_formula()).unwrap();
        let result = the_context.solve().unwrap();

        assert_eq!(result.best_objective, 0);
        assert_eq!(the_context.report(), Report::Solved);
        assert_eq!(the_context.best_valuation(), &[true, true]);
    }

    #[test]
    fn tiny_every_heuristic() {
        for heuristic in HEURISTICS {
            let mut config = Config::default();
            config.heuristic.value = heuristic;
            config.max_flips.value = 50;
            config.max_restarts.value = 5;

            let mut the_context = Context::from_config(config, tiny_formula()).unwrap();
            let result = the_context.solve().unwrap();

            assert_eq!(result.report(), Report::Solved, "{heuristic}");
            assert_eq!(the_context.best_literals(), vec![1, 2], "{heuristic}");
        }
    }

    #[test]
    fn contradiction_exhausts() {
        for heuristic in HEURISTICS {
            let formula = Formula::from_clauses(1, vec![vec![1], vec![-1]]).unwrap();

            let mut config = Config::default();
            config.heuristic.value = heuristic;
            config.max_flips.value = 25;
            config.max_restarts.value = 4;

            let mut the_context = Context::from_config(config, formula).unwrap();
            let result = the_context.solve().unwrap();

            assert_eq!(result.best_objective, 1, "{heuristic}");
            assert_eq!(result.restarts, 4, "{heuristic}");
            assert_eq!(the_context.report(), Report::Exhausted, "{heuristic}");
        }
    }

    #[test]
    fn empty_clause_beside_units() {
        for heuristic in HEURISTICS {
            for seed in 0..10 {
                let mut clauses = vec![vec![]];
                clauses.extend((1..=20).map(|atom| vec![atom]));
                let formula = Formula::from_clauses(20, clauses).unwrap();

                let mut config = Config::default();
                config.heuristic.value = heuristic;
                config.max_flips.value = 1000;
                config.max_restarts.value = 3;
                config.seed.value = seed;

                let mut the_context = Context::from_config(config, formula).unwrap();
                let result = the_context.solve().unwrap();

                assert_eq!(result.best_objective, 1, "{heuristic} {seed}");
                assert_eq!(result.flips, 3000, "{heuristic} {seed}");
                assert_eq!(the_context.best_literals(), (1..=20).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn solved_passes_check() {
        let formula = Formula::from_clauses(
            5,
            vec![
                vec![1, -2, 3],
                vec![-1, 4],
                vec![2, -4, 5],
                vec![-3, -5],
                vec![-1, -2, -5],
                vec![3, 4],
            ],
        )
        .unwrap();

        for heuristic in HEURISTICS {
            let mut config = Config::default();
            config.heuristic.value = heuristic;

            let mut the_context = Context::from_config(config, formula.clone()).unwrap();
            let result = the_context.solve().unwrap();

            assert_eq!(result.report(), Report::Solved, "{heuristic}");
            assert_eq!(
                check_valuation(&the_context.formula, the_context.best_valuation()),
                Verdict::Pass
            );
        }
    }

    #[test]
    fn same_seed_same_solve() {
        let formula = Formula::from_clauses(
            4,
            vec![
                vec![1, 2, 3],
                vec![-1, -2],
                vec![-2, -3],
                vec![-1, -3],
                vec![4, -1],
                vec![-4, 2, 3],
            ],
        )
        .unwrap();

        for heuristic in HEURISTICS {
            let mut config = Config::default();
            config.heuristic.value = heuristic;
            config.seed.value = 7;

            let mut a = Context::from_config(config.clone(), formula.clone()).unwrap();
            let mut b = Context::from_config(config, formula.clone()).unwrap();

            assert_eq!(a.solve().unwrap(), b.solve().unwrap(), "{heuristic}");
            assert_eq!(a.best_valuation(), b.best_valuation(), "{heuristic}");
        }
    }

    #[test]
    fn out_of_bounds_config() {
        let mut config = Config::default();
        config.walk_probability.value = -0.1;

        assert!(Context::from_config(config, tiny_formula()).is_err());
    }

    #[test]
    fn unknown_heuristic_is_custom() {
        let mut config = Config::default();
        config.heuristic.value = "not_a_heuristic".parse().unwrap();
        assert_eq!(config.heuristic.value, Heuristic::Custom);

        let mut the_context = Context::from_config(config, tiny_formula()).unwrap();
        assert!(the_context.solve().is_ok());
    }

    #[test]
    fn unknown_before_solve() {
        let the_context = Context::from_config(Config::default(), tiny_formula()).unwrap();
        assert_eq!(the_context.report(), Report::Unknown);
        assert!(the_context.best_valuation().is_empty());
    }
}
