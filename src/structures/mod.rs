/*!
Abstract elements of a solve, and their representation.

- [Atoms](atom) are the things to which a value is given.
- [Literals](literal) pair an atom with a polarity.
- [Clauses](clause) are disjunctions of literals.
- [Valuations](valuation) give a value to every atom.

A formula is a conjunction of clauses, and is stored in the [formula database](crate::db::formula).
*/

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
