/*!
Databases for holding information relevant to a solve.

- [Formula](formula::Formula) --- the clauses of a formula, and an index from literals to clauses. Immutable once built.
- [Tracker](tracker::Tracker) --- a full valuation, and information about the clauses (un)satisfied by the valuation which is updated incrementally as the valuation is revised.
- [ClauseSet](clause_set::ClauseSet) --- a set of clause keys, used by the tracker to store unsatisfied clauses.

Clauses are accessed through [keys](ClauseKey), which are simply the index of a clause in the formula.
*/

pub mod clause_set;
pub mod formula;
pub mod tracker;

/// The key to a clause in a [formula](formula::Formula), i.e. the index of the clause.
pub type ClauseKey = u32;
