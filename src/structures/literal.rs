//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The canonical representation of a literal is an integer, with the magnitude of the integer being the atom and the sign of the integer indicating the polarity of the literal.
//!
//! ```rust
//! # use flip_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, false);
//!
//! assert_eq!(literal, -79);
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.polarity());
//! assert!(literal.negate().polarity());
//! ```
//!
//! # Slots
//!
//! Each literal has a [slot](Literal::slot), so that structures which store something for each literal (e.g. the clauses a literal occurs in) may be a vector of length 2*n*.
//! The two literals of an atom occupy adjacent slots, negative first.
//!
//! ```rust
//! # use flip_sat::structures::literal::{CLiteral, Literal};
//! assert_eq!((-1 as CLiteral).slot(), 0);
//! assert_eq!((1 as CLiteral).slot(), 1);
//! assert_eq!((-2 as CLiteral).slot(), 2);
//! ```

use crate::structures::atom::{atom_slot, Atom};

/// The canonical representation of a literal, as an integer.
pub type CLiteral = i32;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The (zero-based) index of the literal in a structure with two slots per atom.
    fn slot(&self) -> usize;
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn slot(&self) -> usize {
        2 * atom_slot(self.atom()) + self.polarity() as usize
    }
}
