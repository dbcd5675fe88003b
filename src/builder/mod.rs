/*!
Tools for building a formula.

# Basic methods

The library has two basic methods for building a [Formula]:
- [from_clauses](Formula::from_clauses), from a count of atoms and a collection of clauses.
- [read_dimacs](Formula::read_dimacs), from the DIMACS representation of a formula.

In either case each clause is examined as it is added:
- Each literal must be non-zero, and the atom of the literal must be within the count of atoms.
- Repeated literals are kept once.
- A clause containing some literal and its negation is satisfied on every valuation, and so is counted but not stored.

For tests and experiments, random formulas may also be [generated](Formula::random_k_sat), optionally with a [planted](Formula::planted_k_sat) satisfying valuation.

# Examples

```rust
# use flip_sat::db::formula::Formula;
let formula = Formula::from_clauses(3, vec![vec![1, 1, -2], vec![2, -2, 3], vec![-3]]).unwrap();

assert_eq!(formula.clause_count(), 2);
assert_eq!(formula.clause(0), &[1, -2]);
assert_eq!(formula.tautology_count(), 1);
```

```rust
# use flip_sat::db::formula::Formula;
# use flip_sat::types::err::{ErrorKind, FormatError};
let result = Formula::from_clauses(2, vec![vec![1, 3]]);

assert_eq!(
    result.unwrap_err(),
    ErrorKind::Format(FormatError::AtomOutOfRange { literal: 3, atom_count: 2 })
);
```
*/

pub mod dimacs;

use rand::Rng;

use crate::{
    db::{formula::Formula, ClauseKey},
    misc::log::targets::{self},
    structures::{
        atom::{atom_slot, Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::{self, ErrorKind},
};

/// Ok results when adding a clause to a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the formula.
    Added,

    /// The clause was a tautology (and so was not added to the formula).
    Tautology,
}

impl Formula {
    /// A formula on `atom_count` atoms from the given clauses.
    pub fn from_clauses(
        atom_count: usize,
        clauses: impl IntoIterator<Item = CClause>,
    ) -> Result<Self, ErrorKind> {
        if atom_count > ATOM_MAX as usize {
            return Err(err::ErrorKind::from(err::FormatError::AtomsExhausted(
                ATOM_MAX,
            )));
        }

        let mut formula = Formula {
            atom_count,
            clauses: Vec::default(),
            occurrences: Vec::default(),
            tautology_count: 0,
        };

        for clause in clauses {
            formula.add_clause(clause)?;
        }

        Ok(formula)
    }

    /// Extends the occurrence index to cover each atom up to and including `atom`.
    ///
    /// The index grows with the atoms read, as the declared count of atoms may be far larger than the atoms used.
    fn index_atoms(&mut self, atom: Atom) -> Result<(), ErrorKind> {
        let required = 2 * atom_slot(atom) + 2;
        if let Some(additional) = required.checked_sub(self.occurrences.len()) {
            if self.occurrences.try_reserve_exact(additional).is_err() {
                return Err(err::ErrorKind::from(err::FormatError::Oversized {
                    atom_count: self.atom_count,
                }));
            }
            self.occurrences.resize_with(required, Vec::default);
        }
        Ok(())
    }

    /// Examines and (if not a tautology) stores a clause.
    fn add_clause(&mut self, clause: CClause) -> Result<ClauseOk, ErrorKind> {
        let mut the_clause = CClause::with_capacity(clause.len());

        for literal in clause {
            if literal == 0 {
                return Err(err::ErrorKind::from(err::FormatError::ZeroAtom));
            }
            if literal.atom() as usize > self.atom_count {
                return Err(err::ErrorKind::from(err::FormatError::AtomOutOfRange {
                    literal,
                    atom_count: self.atom_count,
                }));
            }
            if !the_clause.contains(&literal) {
                the_clause.push(literal);
            }
        }

        if the_clause.is_tautology() {
            log::trace!(target: targets::PARSE, "Skipped tautology {}", the_clause.as_dimacs());
            self.tautology_count += 1;
            return Ok(ClauseOk::Tautology);
        }

        let key = clause_key(self.clauses.len())?;
        if let Some(atom) = the_clause.atoms().max() {
            self.index_atoms(atom)?;
        }
        for literal in &the_clause {
            self.occurrences[literal.slot()].push(key);
        }
        self.clauses.push(the_clause);

        Ok(ClauseOk::Added)
    }

    /// A formula of `clause_count` clauses, each of `k` literals with atoms and polarities chosen uniformly at random.
    ///
    /// Generated clauses may repeat an atom, and so some clauses may be shorter than `k` or skipped as tautologies.
    pub fn random_k_sat(
        rng: &mut impl Rng,
        k: usize,
        atom_count: usize,
        clause_count: usize,
    ) -> Result<Self, ErrorKind> {
        let clauses = (0..clause_count)
            .map(|_| random_clause(rng, k, atom_count))
            .collect::<Vec<_>>();

        Formula::from_clauses(atom_count, clauses)
    }

    /// As [random_k_sat](Formula::random_k_sat), though only clauses satisfied by a hidden valuation are kept.
    ///
    /// Returns the formula together with the hidden valuation, so the formula is satisfiable by construction.
    pub fn planted_k_sat(
        rng: &mut impl Rng,
        k: usize,
        atom_count: usize,
        clause_count: usize,
    ) -> Result<(Self, CValuation), ErrorKind> {
        let hidden = (0..atom_count).map(|_| rng.gen()).collect::<CValuation>();

        // No clause without literals is satisfied.
        if atom_count == 0 || k == 0 {
            return Ok((Formula::from_clauses(atom_count, [])?, hidden));
        }

        let mut clauses = Vec::with_capacity(clause_count);
        while clauses.len() < clause_count {
            let clause = random_clause(rng, k, atom_count);
            if clause.iter().any(|literal| hidden.satisfies(*literal)) {
                clauses.push(clause);
            }
        }

        Ok((Formula::from_clauses(atom_count, clauses)?, hidden))
    }
}

/// The key of the clause stored after `count` clauses.
fn clause_key(count: usize) -> Result<ClauseKey, ErrorKind> {
    match ClauseKey::try_from(count) {
        Ok(key) if key < ClauseKey::MAX => Ok(key),
        _ => Err(err::ErrorKind::from(err::FormatError::ClausesExhausted(
            ClauseKey::MAX,
        ))),
    }
}

fn random_clause(rng: &mut impl Rng, k: usize, atom_count: usize) -> CClause {
    if atom_count == 0 {
        return CClause::default();
    }

    (0..k)
        .map(|_| {
            let atom = rng.gen_range(1..=atom_count as Atom);
            CLiteral::new(atom, rng.gen())
        })
        .collect()
}

#[cfg(test)]
mod builder_tests {
    use rand::SeedableRng;

    use super::*;
    use crate::generic::random::MinimalPCG32;

    #[test]
    fn occurrences() {
        let formula = Formula::from_clauses(2, vec![vec![1, 2], vec![-1, 2], vec![1, -2]]).unwrap();

        assert_eq!(formula.occurrences(1), &[0, 2]);
        assert_eq!(formula.occurrences(-1), &[1]);
        assert_eq!(formula.occurrences(2), &[0, 1]);
        assert_eq!(formula.occurrences(-2), &[2]);
    }

    #[test]
    fn zero_atom() {
        let result = Formula::from_clauses(2, vec![vec![1, 0, 2]]);
        assert_eq!(result.unwrap_err(), ErrorKind::Format(err::FormatError::ZeroAtom));
    }

    #[test]
    fn index_grows_with_atoms_read() {
        let formula = Formula::from_clauses(2_000_000_000, vec![vec![3, -5], vec![5]]).unwrap();

        assert_eq!(formula.atom_count(), 2_000_000_000);
        assert_eq!(formula.occurrences.len(), 10);
        assert_eq!(formula.occurrences(-5), &[0]);
        assert_eq!(formula.occurrences(5), &[1]);
        assert!(formula.occurrences(7).is_empty());
        assert!(formula.occurrences(-1_999_999_999).is_empty());
    }

    #[test]
    fn clause_keys_exhausted() {
        assert_eq!(clause_key(0), Ok(0));
        assert_eq!(clause_key(ClauseKey::MAX as usize - 1), Ok(ClauseKey::MAX - 1));
        assert!(clause_key(ClauseKey::MAX as usize).is_err());
        assert_eq!(
            clause_key(ClauseKey::MAX as usize + 1),
            Err(ErrorKind::Format(err::FormatError::ClausesExhausted(ClauseKey::MAX)))
        );
    }

    #[test]
    fn planted_is_satisfied() {
        let mut rng = MinimalPCG32::seed_from_u64(3);
        let (formula, hidden) = Formula::planted_k_sat(&mut rng, 3, 40, 170).unwrap();

        assert_eq!(formula.clause_count() + formula.tautology_count(), 170);
        assert!(formula
            .clauses()
            .all(|clause| clause.iter().any(|literal| hidden.satisfies(*literal))));
    }
}
