use rand::Rng;

use crate::{
    db::{formula::Formula, tracker::Tracker},
    structures::atom::Atom,
};

use super::Selector;

impl Selector {
    /// Uniformly among atoms of maximum net gain.
    pub(super) fn gsat(
        &mut self,
        formula: &Formula,
        tracker: &Tracker,
        rng: &mut impl Rng,
    ) -> Option<Atom> {
        self.keep_max(formula.atoms(), |atom| tracker.net_gain(atom));
        self.choose_tie(rng)
    }

    /// The lowest of the least recently flipped atoms of maximum net gain.
    pub(super) fn hsat(&mut self, formula: &Formula, tracker: &Tracker) -> Option<Atom> {
        self.keep_max(formula.atoms(), |atom| tracker.net_gain(atom));
        self.keep_least_recent(tracker);
        self.ties.first().copied()
    }
}
