/*!
The formula of a solve, as an immutable database of clauses.

Alongside the clauses, the formula stores an index from each literal to the (keys of the) clauses the literal occurs in.
The index covers both polarities of each atom up to the largest atom occurring in some clause, and any literal outside the index occurs in no clause.

```rust
# use flip_sat::db::formula::Formula;
let formula = Formula::from_clauses(3, vec![vec![1, -2], vec![2, 3], vec![-2, -3]]).unwrap();

assert_eq!(formula.atom_count(), 3);
assert_eq!(formula.clause_count(), 3);
assert_eq!(formula.clause(1), &[2, 3]);
assert_eq!(formula.occurrences(-2), &[0, 2]);
assert!(formula.occurrences(-1).is_empty());
```

A formula is built either [from clauses](Formula::from_clauses) or by [reading DIMACS](Formula::read_dimacs), and no method mutates a formula once built.
*/

use crate::{
    db::ClauseKey,
    structures::{
        atom::{slot_atom, Atom},
        clause::CClause,
        literal::{CLiteral, Literal},
    },
};

/// The formula database.
#[derive(Clone, Debug)]
pub struct Formula {
    /// A count of atoms, each atom *a* satisfying 1 ≤ *a* ≤ `atom_count`.
    pub(crate) atom_count: usize,

    /// The clauses of the formula, indexed by key.
    pub(crate) clauses: Vec<CClause>,

    /// For each literal slot up to the largest atom in some clause, the keys of clauses containing the literal, in ascending order.
    pub(crate) occurrences: Vec<Vec<ClauseKey>>,

    /// A count of tautological clauses which were read but not stored.
    pub(crate) tautology_count: usize,
}

impl Formula {
    /// A count of atoms in the formula.
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// An iterator over all atoms of the formula, in order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> {
        (0..self.atom_count).map(slot_atom)
    }

    /// A count of (stored) clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The literals of the clause with the given key.
    ///
    /// Panics if the key is not the key of some clause.
    pub fn clause(&self, key: ClauseKey) -> &[CLiteral] {
        &self.clauses[key as usize]
    }

    /// An iterator over all clauses of the formula, in key order.
    pub fn clauses(&self) -> impl Iterator<Item = &[CLiteral]> {
        self.clauses.iter().map(|clause| clause.as_slice())
    }

    /// The keys of all clauses which contain the literal.
    pub fn occurrences(&self, literal: CLiteral) -> &[ClauseKey] {
        self.occurrences
            .get(literal.slot())
            .map(|keys| keys.as_slice())
            .unwrap_or(&[])
    }

    /// A count of clauses read which were tautologies, and so were not stored.
    pub fn tautology_count(&self) -> usize {
        self.tautology_count
    }
}
