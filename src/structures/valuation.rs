/*!
A (full) function from atoms to truth values.

As local search revises a valuation by flipping the value of an atom, every atom has some value at all times.

The canonical representation of a valuation is a vector of booleans, where the value of an atom is stored at the [slot](crate::structures::atom::atom_slot) of the atom.

Equivalently, a valuation maps each atom to the literal it currently asserts, i.e. *a* if the atom *a* is true and *-a* otherwise.

```rust
# use flip_sat::structures::valuation::{CValuation, Valuation};
let valuation: CValuation = vec![true, false, true];

assert_eq!(valuation.value_of(2), false);
assert_eq!(valuation.literal_of(2), -2);
assert!(valuation.satisfies(-2));
assert_eq!(valuation.literals().collect::<Vec<_>>(), vec![1, -2, 3]);
```
*/

use crate::structures::{
    atom::{atom_slot, slot_atom, Atom},
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type CValuation = Vec<bool>;

/// A valuation is something which stores the value of each atom.
pub trait Valuation {
    /// The value of an atom under the valuation.
    ///
    /// Panics if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> bool;

    /// The literal of an atom asserted by the valuation.
    fn literal_of(&self, atom: Atom) -> CLiteral;

    /// Whether the literal is true on the valuation.
    fn satisfies(&self, literal: CLiteral) -> bool;

    /// An iterator through the literals asserted by the valuation, in atom order.
    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_;

    /// The valuation as a DIMACS style string of literals, terminated by `0`.
    fn as_dimacs(&self) -> String;

    /// A count of all the atoms in the valuation.
    fn atom_count(&self) -> usize;
}

impl Valuation for [bool] {
    fn value_of(&self, atom: Atom) -> bool {
        self[atom_slot(atom)]
    }

    fn literal_of(&self, atom: Atom) -> CLiteral {
        CLiteral::new(atom, self.value_of(atom))
    }

    fn satisfies(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom()) == literal.polarity()
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.iter()
            .enumerate()
            .map(|(slot, value)| CLiteral::new(slot_atom(slot), *value))
    }

    fn as_dimacs(&self) -> String {
        let mut the_string = String::default();
        for literal in self.literals() {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.push('0');
        the_string
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
