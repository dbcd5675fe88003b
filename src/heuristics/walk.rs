use rand::Rng;

use crate::{
    db::{formula::Formula, tracker::Tracker},
    structures::atom::Atom,
};

use super::Selector;

impl Selector {
    /// Uniformly among atoms with a positive make count.
    pub(super) fn random_walk(
        &mut self,
        formula: &Formula,
        tracker: &Tracker,
        rng: &mut impl Rng,
    ) -> Option<Atom> {
        self.ties.clear();
        self.ties
            .extend(formula.atoms().filter(|atom| tracker.make_count(*atom) > 0));
        self.choose_tie(rng)
    }

    pub(super) fn gwsat(
        &mut self,
        formula: &Formula,
        tracker: &Tracker,
        rng: &mut impl Rng,
    ) -> Option<Atom> {
        if self.walk(rng) {
            if let Some(atom) = self.random_walk(formula, tracker, rng) {
                return Some(atom);
            }
        }
        self.gsat(formula, tracker, rng)
    }

    pub(super) fn hwsat(
        &mut self,
        formula: &Formula,
        tracker: &Tracker,
        rng: &mut impl Rng,
    ) -> Option<Atom> {
        if self.walk(rng) {
            if let Some(atom) = self.random_walk(formula, tracker, rng) {
                return Some(atom);
            }
        }
        self.hsat(formula, tracker)
    }
}
