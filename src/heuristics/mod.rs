/*!
Heuristics for choosing an atom to flip.

Each heuristic reads a [Tracker] (and the formula), and never mutates the tracker.
All randomness is drawn from a source of rng supplied by the caller.

| Heuristic | Choice |
|-----------|--------|
| [GSAT](Heuristic::GSAT) | Uniformly among atoms of maximum net gain. |
| [HSAT](Heuristic::HSAT) | Among atoms of maximum net gain, the atom flipped least recently, with any remaining tie broken by the lowest atom. |
| [GWSAT](Heuristic::GWSAT) | With the walk probability, a random walk. Otherwise, as GSAT. |
| [HWSAT](Heuristic::HWSAT) | With the walk probability, a random walk. Otherwise, as HSAT. |
| [WalkSAT](Heuristic::WalkSAT) | From a random unsatisfied clause, uniformly among atoms with a break count of zero. Else, with the walk probability uniformly among all atoms of the clause. Otherwise, uniformly among atoms of minimum break count. |
| [GSATTabu](Heuristic::GSATTabu) | As GSAT, restricted to atoms which are not tabu. |
| [WalkSATTabu](Heuristic::WalkSATTabu) | From a random unsatisfied clause, uniformly among atoms of minimum break count which are not tabu. |
| [Custom](Heuristic::Custom) | If some atom has positive net gain, as GSAT. Else, from a random unsatisfied clause, with the walk probability uniformly among all atoms of the clause. Otherwise, among atoms of the clause with maximum net gain, uniformly among those flipped least recently. |

A *random walk* chooses uniformly among atoms with a positive make count, i.e. among the atoms of unsatisfied clauses.
If no atom has a positive make count GWSAT and HWSAT fall back to GSAT and HSAT, respectively.

An atom is *tabu* if fewer than `tabu_tenure` flips have been made since the atom was last flipped.
As an atom which has not been flipped has a last flip of zero, each atom is tabu during the first `tabu_tenure` flips of an attempt.
- For GSATTabu, a tabu atom is permitted if flipping the atom would leave fewer unsatisfied clauses than the best valuation of the current attempt (the aspiration criterion).
  If no atom is permitted, the choice is among the atoms of maximum net gain, uniformly among those flipped least recently.
- For WalkSATTabu, if every atom of the clause is tabu, the choice is uniformly among the atoms of the clause flipped least recently.

A *random unsatisfied clause* is chosen uniformly among the unsatisfied clauses with some literal.
If every unsatisfied clause is empty, WalkSAT, WalkSATTabu and Custom instead choose uniformly among all atoms of the formula.

A walk probability of at most zero never walks, and a walk probability of at least one always walks.

A heuristic returns None only if there is nothing to choose, i.e. if the formula has no atoms.
*/

mod custom;
mod gsat;
mod tabu;
mod walk;
mod walksat;

use rand::{seq::SliceRandom, Rng};

use crate::{
    config::{Config, Heuristic, WalkProbability},
    db::{formula::Formula, tracker::Tracker, ClauseKey},
    misc::log::targets::{self},
    structures::{atom::Atom, literal::CLiteral},
};

/// A heuristic, together with its parameters and a buffer for ties.
#[derive(Clone, Debug)]
pub struct Selector {
    /// The heuristic.
    pub heuristic: Heuristic,

    /// The probability of a random walk, for heuristics which walk.
    pub walk_probability: WalkProbability,

    /// The tenure of a flipped atom, for tabu heuristics.
    pub tabu_tenure: usize,

    /// Candidate atoms, reused between choices.
    ties: Vec<Atom>,

    /// Candidate clauses, reused between choices.
    clauses: Vec<ClauseKey>,
}

impl Selector {
    pub fn new(heuristic: Heuristic, walk_probability: WalkProbability, tabu_tenure: usize) -> Self {
        Selector {
            heuristic,
            walk_probability,
            tabu_tenure,
            ties: Vec::default(),
            clauses: Vec::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.heuristic.value,
            config.walk_probability.value,
            config.tabu_tenure.value,
        )
    }

    /// An atom to flip, given the tracker and the objective of the best valuation in the current attempt.
    pub fn select(
        &mut self,
        formula: &Formula,
        tracker: &Tracker,
        attempt_best: usize,
        rng: &mut impl Rng,
    ) -> Option<Atom> {
        let choice = match self.heuristic {
            Heuristic::GSAT => self.gsat(formula, tracker, rng),
            Heuristic::GWSAT => self.gwsat(formula, tracker, rng),
            Heuristic::GSATTabu => self.gsat_tabu(formula, tracker, attempt_best, rng),
            Heuristic::HSAT => self.hsat(formula, tracker),
            Heuristic::HWSAT => self.hwsat(formula, tracker, rng),
            Heuristic::WalkSAT => self.walksat(formula, tracker, rng),
            Heuristic::WalkSATTabu => self.walksat_tabu(formula, tracker, rng),
            Heuristic::Custom => self.custom(formula, tracker, rng),
        };

        match choice {
            Some(atom) => {
                log::trace!(target: targets::SELECTION, "{}: {atom} with gain {}", self.heuristic, tracker.net_gain(atom))
            }
            None => log::debug!(target: targets::SELECTION, "{}: no atom", self.heuristic),
        }

        choice
    }

    /// Keeps, as ties, the given atoms with maximum score, and returns the maximum score (if some atom was given).
    fn keep_max(
        &mut self,
        atoms: impl IntoIterator<Item = Atom>,
        score: impl Fn(Atom) -> isize,
    ) -> Option<isize> {
        self.ties.clear();
        let mut max = None;

        for atom in atoms {
            let atom_score = score(atom);
            match max {
                Some(max_score) if atom_score < max_score => {}

                Some(max_score) if atom_score == max_score => self.ties.push(atom),

                _ => {
                    max = Some(atom_score);
                    self.ties.clear();
                    self.ties.push(atom);
                }
            }
        }

        max
    }

    /// Keeps, as ties, those ties flipped least recently.
    fn keep_least_recent(&mut self, tracker: &Tracker) {
        if let Some(least) = self.ties.iter().map(|atom| tracker.last_flip(*atom)).min() {
            self.ties.retain(|atom| tracker.last_flip(*atom) == least);
        }
    }

    /// A tie, chosen uniformly at random.
    fn choose_tie(&self, rng: &mut impl Rng) -> Option<Atom> {
        self.ties.choose(rng).copied()
    }

    /// Whether to take a random walk.
    fn walk(&self, rng: &mut impl Rng) -> bool {
        rng.gen::<f64>() < self.walk_probability
    }

    /// An unsatisfied clause with some literal, chosen uniformly at random.
    ///
    /// A draw landing on an empty clause is redrawn from the non-empty unsatisfied clauses.
    fn unsatisfied_clause<'f>(
        &mut self,
        formula: &'f Formula,
        tracker: &Tracker,
        rng: &mut impl Rng,
    ) -> Option<&'f [CLiteral]> {
        let clause = formula.clause(tracker.unsatisfied_clauses().choose(rng)?);
        if !clause.is_empty() {
            return Some(clause);
        }

        self.clauses.clear();
        self.clauses.extend(
            tracker
                .unsatisfied_clauses()
                .as_slice()
                .iter()
                .filter(|key| !formula.clause(**key).is_empty()),
        );

        self.clauses.choose(rng).map(|key| formula.clause(*key))
    }
}

/// Some atom of the formula, chosen uniformly at random.
fn any_atom(formula: &Formula, rng: &mut impl Rng) -> Option<Atom> {
    match formula.atom_count() {
        0 => None,
        count => Some(rng.gen_range(1..=count as Atom)),
    }
}

/// Whether the atom was flipped within the last `tenure` flips.
fn is_tabu(tracker: &Tracker, tenure: usize, atom: Atom) -> bool {
    tracker.flips() - tracker.last_flip(atom) < tenure
}
