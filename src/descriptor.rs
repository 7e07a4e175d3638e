// src/descriptor.rs
// Line-oriented descriptor text -> Dfa.
//
// Format:
//   line 1: initial state id
//   line 2: final state id
//   then:   <state>: <symbol> <dest> [| <symbol> <dest> ...]

use core::fmt;

use thiserror::Error;

use crate::machine::Dfa;
use crate::table::{StateId, TransitionTable};

/// One defect in a descriptor. Line numbers are 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("missing initial state line")]
    MissingInitialState,
    #[error("missing final state line")]
    MissingFinalState,
    #[error("line {line}: expected a non-negative state id, got {text:?}")]
    BadStateNumber { line: usize, text: String },
    #[error("line {line}: no ':' between state and transitions in {text:?}")]
    MissingDelimiter { line: usize, text: String },
    #[error("line {line}: clause {clause:?} is not `<symbol> <dest>` (two integers)")]
    BadClause { line: usize, clause: String },
    #[error("line {line}: symbol code {text} is outside 0..=255")]
    SymbolOutOfRange { line: usize, text: String },
    #[error("{role} state {state} does not appear in the transition table")]
    UnknownStateReference { role: &'static str, state: StateId },
}

/// Everything wrong with a descriptor, collected in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors {
    pub errors: Vec<LineError>,
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "descriptor rejected with {} error(s):", self.errors.len())?;
        for e in &self.errors {
            write!(f, "\n  - {e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

/// Parses a full descriptor. The whole text is scanned before deciding, so
/// the error report names every offending line, not just the first.
pub fn parse_descriptor(text: &str) -> Result<Dfa, ParseErrors> {
    let mut errors = Vec::new();
    let mut table = TransitionTable::new();
    let mut initial = None;
    let mut final_state = None;
    let mut saw_initial_line = false;
    let mut saw_final_line = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        match line_no {
            1 => {
                saw_initial_line = true;
                initial = parse_state_id(line_no, line, &mut errors);
            }
            2 => {
                saw_final_line = true;
                final_state = parse_state_id(line_no, line, &mut errors);
            }
            _ => {
                if line.is_empty() {
                    continue;
                }
                parse_transition_line(line_no, line, &mut table, &mut errors);
            }
        }
    }

    if !saw_initial_line {
        errors.push(LineError::MissingInitialState);
    }
    if !saw_final_line {
        errors.push(LineError::MissingFinalState);
    }
    for (role, id) in [("initial", initial), ("final", final_state)] {
        if let Some(id) = id {
            if !table.contains_state(id) {
                errors.push(LineError::UnknownStateReference { role, state: id });
            }
        }
    }

    match (initial, final_state) {
        (Some(initial), Some(final_state)) if errors.is_empty() => {
            log::debug!(
                "descriptor parsed: {} states, {} edges, initial={initial}, final={final_state}",
                table.state_count(),
                table.edge_count()
            );
            Ok(Dfa::new(table, initial, final_state))
        }
        _ => Err(ParseErrors { errors }),
    }
}

fn parse_state_id(line: usize, text: &str, errors: &mut Vec<LineError>) -> Option<StateId> {
    match text.parse::<StateId>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push(LineError::BadStateNumber {
                line,
                text: text.to_string(),
            });
            None
        }
    }
}

fn parse_transition_line(
    line: usize,
    text: &str,
    table: &mut TransitionTable,
    errors: &mut Vec<LineError>,
) {
    let Some((state_part, clauses)) = text.split_once(':') else {
        errors.push(LineError::MissingDelimiter {
            line,
            text: text.to_string(),
        });
        return;
    };
    let Some(state) = parse_state_id(line, state_part.trim(), errors) else {
        return;
    };
    table.declare_state(state);

    for clause in clauses.split('|') {
        let clause = clause.trim();
        let tokens: Vec<&str> = clause.split_whitespace().collect();
        let (symbol_tok, dest_tok) = match tokens.as_slice() {
            [symbol, dest] => (*symbol, *dest),
            _ => {
                errors.push(LineError::BadClause {
                    line,
                    clause: clause.to_string(),
                });
                continue;
            }
        };
        let (Ok(symbol), Ok(dest)) = (symbol_tok.parse::<i64>(), dest_tok.parse::<StateId>())
        else {
            errors.push(LineError::BadClause {
                line,
                clause: clause.to_string(),
            });
            continue;
        };
        let Ok(symbol) = u8::try_from(symbol) else {
            errors.push(LineError::SymbolOutOfRange {
                line,
                text: symbol_tok.to_string(),
            });
            continue;
        };
        if table
            .transitions_from(state)
            .iter()
            .any(|t| t.symbol == symbol && t.dest == dest)
        {
            log::warn!("line {line}: duplicate transition {state} -{symbol}-> {dest}");
        }
        table.add_transition(state, symbol, dest);
    }
}
