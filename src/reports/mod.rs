/*!
Reports for the context.
*/

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// A valuation satisfying the formula of the context was found.
    Solved,

    /// The budgets of the solve were exhausted without finding a satisfying valuation.
    ///
    /// As local search is incomplete, the formula may or may not be satisfiable.
    Exhausted,

    /// No solve has finished.
    Unknown,
}

impl std::fmt::Display for Report {
    /// The status as written in the output of a SAT competition solver.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solved => write!(f, "SATISFIABLE"),
            Self::Exhausted | Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The result of a [solve](crate::procedures::solve).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct SolveReport {
    /// A count of flips made, across all attempts.
    pub flips: usize,

    /// A count of attempts made.
    pub restarts: usize,

    /// A count of clauses unsatisfied by the best valuation found, and so zero if and only if the formula was solved.
    pub best_objective: usize,
}

impl SolveReport {
    pub fn report(&self) -> Report {
        match self.best_objective {
            0 => Report::Solved,
            _ => Report::Exhausted,
        }
    }
}
