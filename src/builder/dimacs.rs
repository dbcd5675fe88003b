//! Reading a formula from its DIMACS representation.
//!
//! The format:
//! - Lines beginning `c` are comments.
//! - A single line `p cnf <atoms> <clauses>` declares the count of atoms and clauses.
//! - Following the declaration, whitespace separated integers form clauses, each terminated by `0`.
//!   A clause may span several lines, and a line may contain several clauses.
//! - A line beginning `%` ends the formula, as in the SATLIB benchmarks.
//!
//! Reading fails if the count of clauses read differs from the count declared, or if a literal is outside the declared atoms.

use std::io::BufRead;

use crate::{
    db::formula::Formula,
    misc::log::targets::{self},
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self},
};

impl Formula {
    /// Reads a DIMACS formula.
    ///
    /// ```rust,ignore
    /// let formula = Formula::read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use flip_sat::db::formula::Formula;
    /// let mut dimacs = vec![];
    /// let _ = std::io::Write::write(&mut dimacs, b"
    /// c A comment
    /// p cnf 4 3
    ///  1  2       0
    /// -1  2 -3
    ///             0
    ///        3 -4 0
    /// %
    /// 0
    /// ");
    ///
    /// let formula = Formula::read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(formula.atom_count(), 4);
    /// assert_eq!(formula.clause_count(), 3);
    /// assert_eq!(formula.clause(1), &[-1, 2, -3]);
    /// ```
    #[allow(unused_labels)]
    pub fn read_dimacs(mut reader: impl BufRead) -> Result<Formula, err::ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();
        let mut clauses: Vec<CClause> = Vec::default();

        let mut line_counter = 0;

        let mut declared: Option<(usize, usize)> = None;

        // first phase, read until the problem specification
        'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue,

                Some('p') => {
                    declared = Some(problem_specification(&buffer)?);
                    break;
                }

                Some(_) => {
                    return Err(err::ErrorKind::from(err::ParseError::MissingProblem(
                        line_counter,
                    )))
                }
            }
        }

        let Some((atom_count, clause_count)) = declared else {
            return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
        };

        log::info!(target: targets::PARSE, "Expecting {atom_count} atoms and {clause_count} clauses");

        // second phase, read until the formula ends
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,

                None | Some('c') => {}

                Some('p') => {
                    return Err(err::ErrorKind::from(err::ParseError::MisplacedProblem(
                        line_counter,
                    )))
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        match item.parse::<CLiteral>() {
                            Ok(0) => clauses.push(std::mem::take(&mut clause_buffer)),

                            Ok(literal) => clause_buffer.push(literal),

                            Err(_) => {
                                return Err(err::ErrorKind::from(err::ParseError::Literal(
                                    line_counter,
                                )))
                            }
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            log::warn!(target: targets::PARSE, "Dropped {} literals following the final clause", clause_buffer.len());
        }

        if clauses.len() != clause_count {
            return Err(err::ErrorKind::from(err::FormatError::ClauseCount {
                expected: clause_count,
                found: clauses.len(),
            }));
        }

        let formula = Formula::from_clauses(atom_count, clauses)?;

        log::info!(target: targets::PARSE, "Read {} clauses ({} tautologies skipped)", formula.clause_count(), formula.tautology_count());

        Ok(formula)
    }
}

/// The count of atoms and clauses from a `p cnf <atoms> <clauses>` line.
fn problem_specification(line: &str) -> Result<(usize, usize), err::ErrorKind> {
    let mut problem_details = line.split_whitespace();

    let (Some("p"), Some("cnf")) = (problem_details.next(), problem_details.next()) else {
        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
    };

    let atom_count = match problem_details.next().map(str::parse::<usize>) {
        Some(Ok(count)) => count,
        _ => return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
    };

    let clause_count = match problem_details.next().map(str::parse::<usize>) {
        Some(Ok(count)) => count,
        _ => return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
    };

    Ok((atom_count, clause_count))
}

#[cfg(test)]
mod dimacs_tests {
    use super::*;
    use crate::types::err::{ErrorKind, FormatError, ParseError};

    fn read(dimacs: &str) -> Result<Formula, ErrorKind> {
        Formula::read_dimacs(dimacs.as_bytes())
    }

    #[test]
    fn clause_count_mismatch() {
        let result = read("p cnf 2 3\n1 2 0\n-1 2 0\n");
        assert_eq!(
            result.unwrap_err(),
            ErrorKind::Format(FormatError::ClauseCount {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn atom_out_of_range() {
        let result = read("p cnf 2 1\n1 -3 0\n");
        assert_eq!(
            result.unwrap_err(),
            ErrorKind::Format(FormatError::AtomOutOfRange {
                literal: -3,
                atom_count: 2
            })
        );
    }

    #[test]
    fn data_before_problem() {
        let result = read("c hello\n1 2 0\np cnf 2 1\n");
        assert_eq!(result.unwrap_err(), ErrorKind::Parse(ParseError::MissingProblem(2)));
    }

    #[test]
    fn repeated_problem() {
        let result = read("p cnf 2 1\n1 2 0\np cnf 2 1\n");
        assert_eq!(result.unwrap_err(), ErrorKind::Parse(ParseError::MisplacedProblem(3)));
    }

    #[test]
    fn malformed_problem() {
        assert_eq!(
            read("p cnf two 1\n1 2 0\n").unwrap_err(),
            ErrorKind::Parse(ParseError::ProblemSpecification)
        );
        assert_eq!(
            read("c only comments\n").unwrap_err(),
            ErrorKind::Parse(ParseError::ProblemSpecification)
        );
    }

    #[test]
    fn invalid_literal() {
        let result = read("p cnf 2 1\n1 x 0\n");
        assert_eq!(result.unwrap_err(), ErrorKind::Parse(ParseError::Literal(2)));
    }

    #[test]
    fn percent_ends_formula() {
        let formula = read("p cnf 3 2\n1 -2 0\n2 3 0\n%\n0\n\n").unwrap();
        assert_eq!(formula.clause_count(), 2);
    }

    #[test]
    fn tautologies_count_towards_declaration() {
        let formula = read("p cnf 2 2\n1 -1 0\n1 2 2 0\n").unwrap();
        assert_eq!(formula.clause_count(), 1);
        assert_eq!(formula.tautology_count(), 1);
        assert_eq!(formula.clause(0), &[1, 2]);
    }
}
