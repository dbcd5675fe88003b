//! Clauses, aka. a disjunction of literals.
//!
//! The canonical representation of a clause is a vector of [literals](crate::structures::literal).
//! Order of the literals is irrelevant to satisfaction, though preserved as read so that a solve is deterministic.
//!
//! ```rust
//! # use flip_sat::structures::clause::{CClause, Clause};
//! let clause: CClause = vec![1, -2, 3];
//!
//! assert_eq!(clause.as_dimacs(), "1 -2 3 0");
//! assert_eq!(clause.atoms().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// Something which stores some literals, taken as a disjunction.
pub trait Clause {
    /// The clause as a DIMACS string, including the terminating `0`.
    fn as_dimacs(&self) -> String;

    /// An iterator over the atoms of the clause, in the order the literals of the clause are stored.
    fn atoms(&self) -> impl Iterator<Item = Atom> + '_;

    /// True if the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.push('0');
        the_string
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.iter().map(|literal| literal.atom())
    }

    fn is_tautology(&self) -> bool {
        self.iter()
            .any(|literal| self.iter().any(|other| *other == literal.negate()))
    }
}
