/*!
Independent verification of a valuation.

The check examines each clause of a formula directly, and so does not rely on any information maintained by a [tracker](crate::db::tracker).
A solve only reports a valuation as satisfying if the valuation passes the check.

```rust
# use flip_sat::db::formula::Formula;
# use flip_sat::procedures::check::{check_valuation, Verdict};
let formula = Formula::from_clauses(2, vec![vec![1, 2], vec![-1], vec![-2]]).unwrap();

assert_eq!(check_valuation(&formula, &[false, true]), Verdict::Fail(1));
assert_eq!(check_valuation(&formula, &[true, true]), Verdict::Fail(2));
```
*/

use crate::{
    db::formula::Formula,
    misc::log::targets::{self},
    structures::{clause::Clause, valuation::Valuation},
};

/// The verdict of a check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every clause is satisfied.
    Pass,

    /// Some clauses are not satisfied, with a count of those clauses.
    Fail(usize),
}

/// Checks whether each clause of the formula contains some literal true on the valuation.
///
/// Panics if the valuation has fewer values than the formula has atoms.
pub fn check_valuation(formula: &Formula, valuation: &[bool]) -> Verdict {
    let mut violated = 0;

    for clause in formula.clauses() {
        if !clause.iter().any(|literal| valuation.satisfies(*literal)) {
            log::trace!(target: targets::CHECK, "Unsatisfied: {}", clause.as_dimacs());
            violated += 1;
        }
    }

    match violated {
        0 => Verdict::Pass,
        _ => Verdict::Fail(violated),
    }
}
