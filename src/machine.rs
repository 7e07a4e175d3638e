// src/machine.rs
// Runs a DFA over a byte sequence against a read-only transition table.

use rayon::prelude::*;

use crate::table::{StateId, TransitionTable};

/// What to do with a transition whose destination is the state it leaves.
///
/// Under `Skip`, the default, a matching self-loop is passed over and the
/// scan continues with the next declared transition; under `Follow` it is
/// taken like any other edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfLoopPolicy {
    #[default]
    Skip,
    Follow,
}

/// Deterministic finite automaton: one owned transition table plus the
/// initial and final state ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    table: TransitionTable,
    initial: StateId,
    final_state: StateId,
    policy: SelfLoopPolicy,
}

impl Dfa {
    pub fn new(table: TransitionTable, initial: StateId, final_state: StateId) -> Self {
        Self {
            table,
            initial,
            final_state,
            policy: SelfLoopPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SelfLoopPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs the automaton over `input` and reports whether it ends in the
    /// final state.
    ///
    /// The cursor starts at the initial state on every call; nothing
    /// persists between calls. Per symbol, the current state's transitions
    /// are scanned in declaration order and the first match is taken. A
    /// symbol with no matching transition leaves the state unchanged; it is
    /// never an error. An empty input accepts iff the initial state is the
    /// final state.
    pub fn execute(&self, input: &[u8]) -> bool {
        let mut current = self.initial;
        for &symbol in input {
            current = self.step(current, symbol);
        }
        current == self.final_state
    }

    /// States visited: the initial state first, then one entry per consumed
    /// symbol. Unmatched symbols repeat the state they left unchanged.
    pub fn trace(&self, input: &[u8]) -> Vec<StateId> {
        let mut out = Vec::with_capacity(input.len() + 1);
        let mut current = self.initial;
        out.push(current);
        for &symbol in input {
            current = self.step(current, symbol);
            out.push(current);
        }
        out
    }

    /// Evaluates many inputs against the shared read-only table in
    /// parallel. Results line up positionally with `inputs`.
    pub fn execute_all<I>(&self, inputs: &[I]) -> Vec<bool>
    where
        I: AsRef<[u8]> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.execute(input.as_ref()))
            .collect()
    }

    fn step(&self, current: StateId, symbol: u8) -> StateId {
        for t in self.table.transitions_from(current) {
            if t.symbol != symbol {
                continue;
            }
            if t.dest == current && self.policy == SelfLoopPolicy::Skip {
                continue;
            }
            return t.dest;
        }
        current
    }

    pub fn initial_state(&self) -> StateId {
        self.initial
    }

    pub fn set_initial_state(&mut self, state: StateId) {
        self.initial = state;
    }

    pub fn final_state(&self) -> StateId {
        self.final_state
    }

    pub fn set_final_state(&mut self, state: StateId) {
        self.final_state = state;
    }

    pub fn policy(&self) -> SelfLoopPolicy {
        self.policy
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn set_table(&mut self, table: TransitionTable) {
        self.table = table;
    }

    pub fn into_table(self) -> TransitionTable {
        self.table
    }
}
