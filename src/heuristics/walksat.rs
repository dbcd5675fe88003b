use rand::{seq::SliceRandom, Rng};

use crate::{
    db::{formula::Formula, tracker::Tracker},
    structures::{atom::Atom, clause::Clause, literal::Literal},
};

use super::{any_atom, is_tabu, Selector};

impl Selector {
    pub(super) fn walksat(
        &mut self,
        formula: &Formula,
        tracker: &Tracker,
        rng: &mut impl Rng,
    ) -> Option<Atom> {
        let Some(clause) = self.unsatisfied_clause(formula, tracker, rng) else {
            return any_atom(formula, rng);
        };

        self.ties.clear();
        self.ties
            .extend(clause.atoms().filter(|atom| tracker.break_count(*atom) == 0));
        if !self.ties.is_empty() {
            return self.choose_tie(rng);
        }

        if self.walk(rng) {
            return clause.choose(rng).map(|literal| literal.atom());
        }

        self.keep_max(clause.atoms(), |atom| -(tracker.break_count(atom) as isize));
        self.choose_tie(rng)
    }

    pub(super) fn walksat_tabu(
        &mut self,
        formula: &Formula,
        tracker: &Tracker,
        rng: &mut impl Rng,
    ) -> Option<Atom> {
        let Some(clause) = self.unsatisfied_clause(formula, tracker, rng) else {
            return any_atom(formula, rng);
        };
        let tenure = self.tabu_tenure;

        self.keep_max(
            clause
                .atoms()
                .filter(|atom| !is_tabu(tracker, tenure, *atom)),
            |atom| -(tracker.break_count(atom) as isize),
        );

        if self.ties.is_empty() {
            self.ties.extend(clause.atoms());
            self.keep_least_recent(tracker);
        }

        self.choose_tie(rng)
    }
}

#[cfg(test)]
mod walksat_tests {
    use rand::SeedableRng;

    use crate::{config::Heuristic, generic::random::MinimalPCG32};

    use super::*;

    #[test]
    fn prefers_no_break() {
        // On the all false valuation (1 2 3) is unsatisfied.
        // Atom 1 breaks (-1 4) and atom 2 breaks (-2 5), though atom 3 breaks nothing.
        let formula = Formula::from_clauses(
            5,
            vec![vec![1, 2, 3], vec![-1, 4], vec![-2, 5], vec![-3, -4]],
        )
        .unwrap();
        let mut tracker = Tracker::new(&formula).unwrap();
        tracker.recompute(&formula);
        assert_eq!(tracker.break_count(3), 0);

        let mut selector = Selector::new(Heuristic::WalkSAT, 1.0, 0);
        let mut rng = MinimalPCG32::seed_from_u64(9);

        for _ in 0..20 {
            assert_eq!(selector.select(&formula, &tracker, 1, &mut rng), Some(3));
        }
    }

    #[test]
    fn min_break_without_walk() {
        // On the all false valuation (1 2) is unsatisfied.
        // Atom 1 breaks two clauses, atom 2 breaks one.
        let formula = Formula::from_clauses(
            4,
            vec![vec![1, 2], vec![-1, 3], vec![-1, 4], vec![-2, 3]],
        )
        .unwrap();
        let mut tracker = Tracker::new(&formula).unwrap();
        tracker.recompute(&formula);

        let mut selector = Selector::new(Heuristic::WalkSAT, 0.0, 0);
        let mut rng = MinimalPCG32::seed_from_u64(9);

        for _ in 0..20 {
            assert_eq!(selector.select(&formula, &tracker, 1, &mut rng), Some(2));
        }
    }

    #[test]
    fn walk_probability_out_of_unit_range() {
        // As in min_break_without_walk, atom 2 is the only choice without a walk.
        let formula = Formula::from_clauses(
            4,
            vec![vec![1, 2], vec![-1, 3], vec![-1, 4], vec![-2, 3]],
        )
        .unwrap();
        let mut tracker = Tracker::new(&formula).unwrap();
        tracker.recompute(&formula);

        let mut rng = MinimalPCG32::seed_from_u64(4);

        for walk_probability in [-0.5, f64::NAN] {
            let mut selector = Selector::new(Heuristic::WalkSAT, walk_probability, 0);
            for _ in 0..20 {
                assert_eq!(selector.select(&formula, &tracker, 1, &mut rng), Some(2));
            }
        }

        let mut selector = Selector::new(Heuristic::WalkSAT, 1.5, 0);
        let walks = (0..50)
            .map(|_| selector.select(&formula, &tracker, 1, &mut rng))
            .collect::<Vec<_>>();
        assert!(walks.contains(&Some(1)));
        assert!(walks.iter().all(|atom| *atom == Some(1) || *atom == Some(2)));
    }

    #[test]
    fn tabu_skips_recent() {
        let formula = Formula::from_clauses(3, vec![vec![1, 2, 3]]).unwrap();
        let mut tracker = Tracker::new(&formula).unwrap();
        tracker.recompute(&formula);

        // Flipping atom 1 twice leaves the clause unsatisfied, with atom 1 tabu.
        tracker.flip(&formula, 1);
        tracker.flip(&formula, 1);

        let mut selector = Selector::new(Heuristic::WalkSATTabu, 0.0, 3);
        let mut rng = MinimalPCG32::seed_from_u64(9);

        // As two flips have been made, atoms 2 and 3 remain tabu from the start of the attempt.
        // So, the least recent atoms are chosen.
        for _ in 0..20 {
            let atom = selector.select(&formula, &tracker, 1, &mut rng);
            assert!(atom == Some(2) || atom == Some(3));
        }

        selector.tabu_tenure = 1;
        for _ in 0..20 {
            let atom = selector.select(&formula, &tracker, 1, &mut rng);
            assert!(atom == Some(2) || atom == Some(3));
        }
    }

    #[test]
    fn empty_clause_passed_over() {
        // On the all false valuation the empty clause and (2) are unsatisfied.
        let formula = Formula::from_clauses(3, vec![vec![], vec![1, -3], vec![2], vec![-3]])
            .unwrap();
        let mut tracker = Tracker::new(&formula).unwrap();
        tracker.recompute(&formula);
        assert_eq!(tracker.objective(), 2);

        let mut rng = MinimalPCG32::seed_from_u64(5);

        for heuristic in [Heuristic::WalkSAT, Heuristic::WalkSATTabu, Heuristic::Custom] {
            let mut selector = Selector::new(heuristic, 0.5, 0);
            for _ in 0..20 {
                assert_eq!(selector.select(&formula, &tracker, 2, &mut rng), Some(2));
            }
        }

        // With only the empty clause unsatisfied, any atom may be chosen.
        tracker.flip(&formula, 2);
        assert_eq!(tracker.objective(), 1);

        for heuristic in [Heuristic::WalkSAT, Heuristic::WalkSATTabu, Heuristic::Custom] {
            let mut selector = Selector::new(heuristic, 0.5, 0);
            for _ in 0..20 {
                let atom = selector.select(&formula, &tracker, 1, &mut rng);
                assert!(matches!(atom, Some(1..=3)));
            }
        }
    }
}
