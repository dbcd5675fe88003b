use std::str::FromStr;

/// Variant heuristics for choosing an atom to flip.
///
/// See [heuristics](crate::heuristics) for a description of each variant.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Heuristic {
    /// Greedy: an atom of maximum net gain.
    GSAT = 0,

    /// Greedy, with a random walk on some flips.
    GWSAT,

    /// Greedy, excluding recently flipped atoms.
    GSATTabu,

    /// Greedy, preferring the atom flipped least recently.
    HSAT,

    /// Greedy with history, with a random walk on some flips.
    HWSAT,

    /// Focused on an unsatisfied clause, minimising breaks.
    WalkSAT,

    /// Focused on an unsatisfied clause, excluding recently flipped atoms.
    WalkSATTabu,

    /// Greedy while improvement is possible, otherwise focused with a random walk.
    Custom,
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GSAT => write!(f, "gsat"),
            Self::GWSAT => write!(f, "gwsat"),
            Self::GSATTabu => write!(f, "gsatTabu"),
            Self::HSAT => write!(f, "hsat"),
            Self::HWSAT => write!(f, "hwsat"),
            Self::WalkSAT => write!(f, "walksat"),
            Self::WalkSATTabu => write!(f, "walksatTabu"),
            Self::Custom => write!(f, "customsat"),
        }
    }
}

impl Heuristic {
    /// The minimum Heuristic type.
    pub const MIN: Heuristic = Heuristic::GSAT;

    /// The maximum Heuristic type.
    pub const MAX: Heuristic = Heuristic::Custom;
}

impl FromStr for Heuristic {
    type Err = std::convert::Infallible;

    /// The heuristic with the given name, or [Custom](Heuristic::Custom) if no heuristic has the name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gsat" => Ok(Self::GSAT),
            "gwsat" => Ok(Self::GWSAT),
            "gsatTabu" => Ok(Self::GSATTabu),
            "hsat" => Ok(Self::HSAT),
            "hwsat" => Ok(Self::HWSAT),
            "walksat" => Ok(Self::WalkSAT),
            "walksatTabu" => Ok(Self::WalkSATTabu),

            _other_string => Ok(Self::Custom),
        }
    }
}

#[cfg(test)]
mod heuristic_tests {
    use super::*;

    #[test]
    fn names() {
        for heuristic in [
            Heuristic::GSAT,
            Heuristic::GWSAT,
            Heuristic::GSATTabu,
            Heuristic::HSAT,
            Heuristic::HWSAT,
            Heuristic::WalkSAT,
            Heuristic::WalkSATTabu,
            Heuristic::Custom,
        ] {
            assert_eq!(heuristic.to_string().parse::<Heuristic>(), Ok(heuristic));
        }
    }

    #[test]
    fn unknown_is_custom() {
        assert_eq!("novelty".parse::<Heuristic>(), Ok(Heuristic::Custom));
        assert_eq!("GSAT".parse::<Heuristic>(), Ok(Heuristic::Custom));
        assert_eq!("".parse::<Heuristic>(), Ok(Heuristic::Custom));
    }
}
