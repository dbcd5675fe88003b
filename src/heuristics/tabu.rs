use rand::Rng;

use crate::{
    db::{formula::Formula, tracker::Tracker},
    structures::atom::Atom,
};

use super::{is_tabu, Selector};

impl Selector {
    pub(super) fn gsat_tabu(
        &mut self,
        formula: &Formula,
        tracker: &Tracker,
        attempt_best: usize,
        rng: &mut impl Rng,
    ) -> Option<Atom> {
        let tenure = self.tabu_tenure;
        let objective = tracker.objective() as isize;
        let aspires = |atom: Atom| objective - tracker.net_gain(atom) < attempt_best as isize;

        self.keep_max(
            formula
                .atoms()
                .filter(|atom| !is_tabu(tracker, tenure, *atom) || aspires(*atom)),
            |atom| tracker.net_gain(atom),
        );

        if self.ties.is_empty() {
            self.keep_max(formula.atoms(), |atom| tracker.net_gain(atom));
            self.keep_least_recent(tracker);
        }

        self.choose_tie(rng)
    }
}

#[cfg(test)]
mod tabu_tests {
    use rand::SeedableRng;

    use crate::{config::Heuristic, generic::random::MinimalPCG32};

    use super::*;

    /// Two copies of (1) and the clause (-2), with every atom valued false and atom 1 flipped last.
    ///
    /// The tracker has objective 2, and only atom 1 has positive gain.
    fn aspiration_scenario() -> (Formula, Tracker) {
        let formula = Formula::from_clauses(3, vec![vec![1], vec![1], vec![-2]]).unwrap();
        let mut tracker = Tracker::new(&formula).unwrap();
        tracker.set_valuation(&[true, false, false]);
        tracker.recompute(&formula);

        tracker.flip(&formula, 1);
        tracker.flip(&formula, 3);
        tracker.flip(&formula, 3);
        tracker.flip(&formula, 2);
        tracker.flip(&formula, 2);
        tracker.flip(&formula, 1);
        tracker.flip(&formula, 1);

        assert_eq!(tracker.objective(), 2);
        assert_eq!(tracker.net_gain(1), 2);
        assert_eq!(tracker.net_gain(2), -1);
        assert_eq!(tracker.net_gain(3), 0);
        (formula, tracker)
    }

    #[test]
    fn aspiration_overrides_tabu() {
        let (formula, tracker) = aspiration_scenario();

        let mut selector = Selector::new(Heuristic::GSATTabu, 0.0, 1);
        let mut rng = MinimalPCG32::seed_from_u64(5);

        // Flipping atom 1 gives an objective of 0, an improvement on 2.
        assert!(is_tabu(&tracker, 1, 1));
        assert_eq!(selector.select(&formula, &tracker, 2, &mut rng), Some(1));
    }

    #[test]
    fn tabu_without_aspiration() {
        let (formula, tracker) = aspiration_scenario();

        let mut selector = Selector::new(Heuristic::GSATTabu, 0.0, 1);
        let mut rng = MinimalPCG32::seed_from_u64(5);

        // With a best of 0 no flip aspires, so the best non-tabu atom is taken.
        assert_eq!(selector.select(&formula, &tracker, 0, &mut rng), Some(3));
    }

    #[test]
    fn all_tabu() {
        let (formula, tracker) = aspiration_scenario();

        let mut selector = Selector::new(Heuristic::GSATTabu, 0.0, 100);
        let mut rng = MinimalPCG32::seed_from_u64(5);

        // Every atom is tabu, so the choice is among atoms of maximum gain.
        assert_eq!(selector.select(&formula, &tracker, 0, &mut rng), Some(1));
    }
}
