/*!
A full valuation, together with incrementally maintained information about the clauses (un)satisfied by the valuation.

For each clause the tracker stores a count of the literals of the clause true on the valuation.
And, for each atom:
- A *make* count, the count of unsatisfied clauses which would be satisfied by flipping the value of the atom.
- A *break* count, the count of satisfied clauses which would be unsatisfied by flipping the value of the atom. \
  That is, the count of clauses in which the literal of the atom asserted by the valuation is the only true literal.
- The flip (count) at which the atom was last flipped, or zero if the atom has not been flipped.

The [net gain](Tracker::net_gain) of an atom, make minus break, is the reduction to the count of unsatisfied clauses that flipping the value of the atom would bring about.

# Incremental updates

[recompute](Tracker::recompute) derives all information from scratch by examining every clause, and is used only after the valuation has been replaced wholesale.

[flip](Tracker::flip), by contrast, examines only the clauses in which the flipped atom occurs.
If *l* is the literal asserted before the flip then *-l* is the literal asserted after the flip, and:
- Each clause containing *l* has one fewer true literal.
  + If no true literal remains, the clause is unsatisfied, and so the make count of each atom in the clause increases, and the break count of the flipped atom decreases.
  + If one true literal remains, the atom of that literal now breaks the clause.
- Each clause containing *-l* has one more true literal.
  + If *-l* is the only true literal, the clause is satisfied, and so the make count of each atom in the clause decreases, and the break count of the flipped atom increases.
  + If *-l* is one of two true literals, the atom of the other literal no longer breaks the clause.

As the [formula](crate::db::formula) contains no tautologies or duplicate literals, an atom occurs at most once in a clause and each clause containing the atom is examined once.

```rust
# use flip_sat::db::{formula::Formula, tracker::Tracker};
let formula = Formula::from_clauses(2, vec![vec![1, 2], vec![-1, 2], vec![1, -2]]).unwrap();
let mut tracker = Tracker::new(&formula).unwrap();

tracker.set_valuation(&[false, false]);
tracker.recompute(&formula);
assert_eq!(tracker.objective(), 1);
assert_eq!(tracker.net_gain(2), 0);

tracker.flip(&formula, 1);
assert_eq!(tracker.objective(), 1);
assert_eq!(tracker.net_gain(2), 1);

tracker.flip(&formula, 2);
assert_eq!(tracker.objective(), 0);
assert!(tracker.verify(&formula).is_ok());
```
*/

use rand::Rng;

use crate::{
    db::{clause_set::ClauseSet, formula::Formula, ClauseKey},
    misc::log::targets::{self},
    structures::{
        atom::{atom_slot, Atom},
        clause::Clause,
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::{self, ErrorKind},
};

/// The tracker.
#[derive(Clone, Debug)]
pub struct Tracker {
    /// The current valuation.
    valuation: CValuation,

    /// For each clause, a count of literals true on the valuation.
    true_counts: Vec<u32>,

    /// The keys of clauses with no true literal.
    unsatisfied: ClauseSet,

    /// For each atom, a count of unsatisfied clauses containing the atom.
    make_counts: Vec<usize>,

    /// For each atom, a count of clauses in which the literal of the atom is the only true literal.
    break_counts: Vec<usize>,

    /// For each atom, the flip at which the atom was last flipped.
    last_flips: Vec<usize>,

    /// A count of flips since history was last cleared.
    flips: usize,
}

impl Tracker {
    /// A tracker for the formula, with every atom valued false.
    ///
    /// As with [randomize](Tracker::randomize), [recompute](Tracker::recompute) is required before counts may be read.
    ///
    /// Fails if storage for the declared atoms of the formula cannot be allocated.
    pub fn new(formula: &Formula) -> Result<Self, ErrorKind> {
        let atom_count = formula.atom_count();
        let clause_count = formula.clause_count();
        Ok(Tracker {
            valuation: per_atom(atom_count, false)?,
            true_counts: vec![0; clause_count],
            unsatisfied: ClauseSet::new(clause_count),
            make_counts: per_atom(atom_count, 0)?,
            break_counts: per_atom(atom_count, 0)?,
            last_flips: per_atom(atom_count, 0)?,
            flips: 0,
        })
    }

    /// Values every atom independently and uniformly at random.
    ///
    /// Invalidates all counts, and so must be followed by a call to [recompute](Tracker::recompute).
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        for value in self.valuation.iter_mut() {
            *value = rng.gen();
        }
    }

    /// Replaces the valuation.
    ///
    /// Invalidates all counts, and so must be followed by a call to [recompute](Tracker::recompute).
    ///
    /// Panics if the length of `values` differs from the count of atoms.
    pub fn set_valuation(&mut self, values: &[bool]) {
        self.valuation.copy_from_slice(values);
    }

    /// Forgets all flips, so the flip count and the last flip of every atom is zero.
    pub fn clear_history(&mut self) {
        self.flips = 0;
        self.last_flips.fill(0);
    }

    /// Derives the unsatisfied clauses and all counts from the valuation, by examining each clause once.
    pub fn recompute(&mut self, formula: &Formula) {
        self.unsatisfied.clear();
        self.make_counts.fill(0);
        self.break_counts.fill(0);

        for (index, clause) in formula.clauses().enumerate() {
            let mut true_count = 0;
            let mut breaker = None;

            for literal in clause {
                if self.valuation.satisfies(*literal) {
                    true_count += 1;
                    breaker = Some(literal.atom());
                }
            }

            self.true_counts[index] = true_count;

            match (true_count, breaker) {
                (0, _) => {
                    self.unsatisfied.insert(index as ClauseKey);
                    for atom in clause.atoms() {
                        self.make_counts[atom_slot(atom)] += 1;
                    }
                }

                (1, Some(atom)) => self.break_counts[atom_slot(atom)] += 1,

                _ => {}
            }
        }

        log::trace!(target: targets::FLIP, "Recomputed with {} unsatisfied clauses", self.objective());
    }

    /// Flips the value of the atom, and updates the unsatisfied clauses and counts of atoms sharing a clause with the atom.
    ///
    /// Panics if the atom is not an atom of the formula.
    pub fn flip(&mut self, formula: &Formula, atom: Atom) {
        let slot = atom_slot(atom);

        let dropped = self.valuation.literal_of(atom);
        let gained = dropped.negate();
        self.valuation[slot] = !self.valuation[slot];

        for key in formula.occurrences(dropped) {
            let index = *key as usize;
            self.true_counts[index] -= 1;

            match self.true_counts[index] {
                0 => {
                    self.unsatisfied.insert(*key);
                    self.break_counts[slot] -= 1;
                    for clause_atom in formula.clause(*key).atoms() {
                        self.make_counts[atom_slot(clause_atom)] += 1;
                    }
                }

                1 => {
                    if let Some(sole) = self.true_literal(formula.clause(*key), None) {
                        self.break_counts[atom_slot(sole.atom())] += 1;
                    }
                }

                _ => {}
            }
        }

        for key in formula.occurrences(gained) {
            let index = *key as usize;
            self.true_counts[index] += 1;

            match self.true_counts[index] {
                1 => {
                    self.unsatisfied.remove(*key);
                    self.break_counts[slot] += 1;
                    for clause_atom in formula.clause(*key).atoms() {
                        self.make_counts[atom_slot(clause_atom)] -= 1;
                    }
                }

                2 => {
                    if let Some(other) = self.true_literal(formula.clause(*key), Some(gained)) {
                        self.break_counts[atom_slot(other.atom())] -= 1;
                    }
                }

                _ => {}
            }
        }

        self.flips += 1;
        self.last_flips[slot] = self.flips;

        log::trace!(target: targets::FLIP, "Flip {} to {gained}, objective {}", self.flips, self.objective());
    }

    /// Some literal of the clause true on the valuation, other than `skip`.
    fn true_literal(&self, clause: &[CLiteral], skip: Option<CLiteral>) -> Option<CLiteral> {
        clause
            .iter()
            .copied()
            .find(|literal| Some(*literal) != skip && self.valuation.satisfies(*literal))
    }

    /// A count of clauses unsatisfied on the valuation.
    pub fn objective(&self) -> usize {
        self.unsatisfied.len()
    }

    /// The clauses unsatisfied on the valuation.
    pub fn unsatisfied_clauses(&self) -> &ClauseSet {
        &self.unsatisfied
    }

    /// The count of unsatisfied clauses which flipping the atom would satisfy.
    pub fn make_count(&self, atom: Atom) -> usize {
        self.make_counts[atom_slot(atom)]
    }

    /// The count of satisfied clauses which flipping the atom would unsatisfy.
    pub fn break_count(&self, atom: Atom) -> usize {
        self.break_counts[atom_slot(atom)]
    }

    /// The reduction to the count of unsatisfied clauses which flipping the atom would bring about.
    pub fn net_gain(&self, atom: Atom) -> isize {
        self.make_count(atom) as isize - self.break_count(atom) as isize
    }

    /// The flip at which the atom was last flipped, or zero if the atom has not been flipped.
    pub fn last_flip(&self, atom: Atom) -> usize {
        self.last_flips[atom_slot(atom)]
    }

    /// A count of flips since history was last cleared.
    pub fn flips(&self) -> usize {
        self.flips
    }

    /// The current valuation.
    pub fn valuation(&self) -> &[bool] {
        &self.valuation
    }

    /// Checks the incrementally maintained information against a recomputation on a copy of the tracker.
    pub fn verify(&self, formula: &Formula) -> Result<(), ErrorKind> {
        let mut fresh = self.clone();
        fresh.recompute(formula);

        if fresh.true_counts != self.true_counts
            || fresh.make_counts != self.make_counts
            || fresh.break_counts != self.break_counts
            || fresh.unsatisfied.sorted() != self.unsatisfied.sorted()
        {
            log::error!(target: targets::CHECK, "Tracker drift after {} flips", self.flips);
            return Err(err::ErrorKind::from(err::ConsistencyError::TrackerDrift));
        }

        Ok(())
    }
}

/// A vector of `atom_count` copies of `value`, or an error if the vector cannot be allocated.
fn per_atom<T: Clone>(atom_count: usize, value: T) -> Result<Vec<T>, ErrorKind> {
    let mut values: Vec<T> = Vec::default();
    if values.try_reserve_exact(atom_count).is_err() {
        return Err(err::ErrorKind::from(err::FormatError::Oversized { atom_count }));
    }
    values.resize(atom_count, value);
    Ok(values)
}

#[cfg(test)]
mod tracker_tests {
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::generic::random::MinimalPCG32;

    fn random_formula(rng: &mut MinimalPCG32) -> Formula {
        Formula::random_k_sat(rng, 3, 30, 120).unwrap()
    }

    #[test]
    fn incremental_matches_recompute() {
        let mut rng = MinimalPCG32::seed_from_u64(7);

        for _ in 0..10 {
            let formula = random_formula(&mut rng);
            let mut tracker = Tracker::new(&formula).unwrap();
            tracker.randomize(&mut rng);
            tracker.recompute(&formula);

            for _ in 0..200 {
                let atom = rng.gen_range(1..=formula.atom_count() as Atom);
                tracker.flip(&formula, atom);
                assert_eq!(tracker.objective(), tracker.unsatisfied_clauses().len());
                assert!(tracker.verify(&formula).is_ok());
            }
        }
    }

    #[test]
    fn flip_is_an_involution() {
        let mut rng = MinimalPCG32::seed_from_u64(11);
        let formula = random_formula(&mut rng);
        let mut tracker = Tracker::new(&formula).unwrap();
        tracker.randomize(&mut rng);
        tracker.recompute(&formula);

        for atom in formula.atoms() {
            let before = tracker.clone();
            let gain = tracker.net_gain(atom);

            tracker.flip(&formula, atom);
            assert_eq!(tracker.net_gain(atom), -gain);
            assert_eq!(
                tracker.objective() as isize,
                before.objective() as isize - gain
            );

            tracker.flip(&formula, atom);
            assert_eq!(tracker.valuation(), before.valuation());
            assert_eq!(tracker.make_counts, before.make_counts);
            assert_eq!(tracker.break_counts, before.break_counts);
            assert_eq!(tracker.true_counts, before.true_counts);
            assert_eq!(tracker.unsatisfied.sorted(), before.unsatisfied.sorted());
        }
    }

    #[test]
    fn history() {
        let formula = Formula::from_clauses(3, vec![vec![1, 2, 3]]).unwrap();
        let mut tracker = Tracker::new(&formula).unwrap();
        tracker.recompute(&formula);

        tracker.flip(&formula, 2);
        tracker.flip(&formula, 3);
        tracker.flip(&formula, 2);

        assert_eq!(tracker.flips(), 3);
        assert_eq!(tracker.last_flip(1), 0);
        assert_eq!(tracker.last_flip(2), 3);
        assert_eq!(tracker.last_flip(3), 2);

        tracker.clear_history();
        assert_eq!(tracker.flips(), 0);
        assert_eq!(tracker.last_flip(2), 0);
    }

    #[test]
    fn empty_clause_is_never_satisfied() {
        let formula = Formula::from_clauses(1, vec![vec![], vec![1]]).unwrap();
        let mut tracker = Tracker::new(&formula).unwrap();
        tracker.recompute(&formula);

        assert_eq!(tracker.objective(), 2);
        tracker.flip(&formula, 1);
        assert_eq!(tracker.objective(), 1);
        assert_eq!(tracker.unsatisfied_clauses().as_slice(), &[0]);
        assert_eq!(tracker.make_count(1), 0);
        assert!(tracker.verify(&formula).is_ok());
    }
}
