/*!
(The representation of) an atom (aka. a 'variable').

Atoms are identified as in DIMACS, by a positive integer *u* with 1 ≤ *u* ≤ *n*, where *n* is the number of atoms in a formula.

Structures which store something for each atom do so in a vector of length *n*, and the [slot](atom_slot) of an atom is its (zero-based) index in such a vector.

```rust
# use flip_sat::structures::atom::{atom_slot, slot_atom, Atom};
let atom: Atom = 7;
assert_eq!(atom_slot(atom), 6);
assert_eq!(slot_atom(6), atom);
```

# Notes
- Zero is never an atom, as `0` terminates a clause in the DIMACS format.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bounded by the magnitude of an [integer literal](crate::structures::literal::CLiteral).
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();

/// The slot of an atom, i.e. the index of the atom in some structure indexed by atoms.
#[inline(always)]
pub fn atom_slot(atom: Atom) -> usize {
    atom as usize - 1
}

/// The atom stored at some slot.
#[inline(always)]
pub fn slot_atom(slot: usize) -> Atom {
    (slot + 1) as Atom
}
