use rand::{seq::SliceRandom, Rng};

use crate::{
    db::{formula::Formula, tracker::Tracker},
    structures::{atom::Atom, clause::Clause, literal::Literal},
};

use super::{any_atom, Selector};

impl Selector {
    pub(super) fn custom(
        &mut self,
        formula: &Formula,
        tracker: &Tracker,
        rng: &mut impl Rng,
    ) -> Option<Atom> {
        // Improvement is possible, so improve.
        self.keep_max(
            formula.atoms().filter(|atom| tracker.net_gain(*atom) > 0),
            |atom| tracker.net_gain(atom),
        );
        if !self.ties.is_empty() {
            return self.choose_tie(rng);
        }

        let Some(clause) = self.unsatisfied_clause(formula, tracker, rng) else {
            return any_atom(formula, rng);
        };

        if self.walk(rng) {
            return clause.choose(rng).map(|literal| literal.atom());
        }

        self.keep_max(clause.atoms(), |atom| tracker.net_gain(atom));
        self.keep_least_recent(tracker);
        self.choose_tie(rng)
    }
}
