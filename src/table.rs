// src/table.rs
use core::fmt;

use hashbrown::HashMap;

/// State identifier. Uniqueness is by value; there is no separate identity.
pub type StateId = u32;

/// One directed edge: consume `symbol`, move to `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub symbol: u8,
    pub dest: StateId,
}

/// Adjacency map from state id to its outgoing transitions, kept in
/// declaration order. Lookup is first-match, so the order is load-bearing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    states: HashMap<StateId, Vec<Transition>>,
    edges: usize,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outgoing transitions of `state`. A state that was never inserted has
    /// no transitions; absence is not an error.
    pub fn transitions_from(&self, state: StateId) -> &[Transition] {
        self.states.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends an edge under `state`, creating its sequence if absent. The
    /// destination is registered as a state of its own with an empty
    /// sequence; it is not otherwise validated.
    pub fn add_transition(&mut self, state: StateId, symbol: u8, dest: StateId) {
        self.states
            .entry(state)
            .or_default()
            .push(Transition { symbol, dest });
        self.states.entry(dest).or_default();
        self.edges += 1;
    }

    /// Registers `state` with no outgoing transitions (no-op if present).
    pub fn declare_state(&mut self, state: StateId) {
        self.states.entry(state).or_default();
    }

    pub fn contains_state(&self, state: StateId) -> bool {
        self.states.contains_key(&state)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Out-degree of `state` (0 for unknown states).
    pub fn degree(&self, state: StateId) -> usize {
        self.transitions_from(state).len()
    }

    /// Declared state ids in ascending order.
    pub fn state_ids(&self) -> Vec<StateId> {
        let mut ids: Vec<StateId> = self.states.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Flat listing, one `state: symbol dest | ...` line per state.
impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.state_ids() {
            write!(f, "{id}:")?;
            for (i, t) in self.transitions_from(id).iter().enumerate() {
                if i > 0 {
                    write!(f, " |")?;
                }
                write!(f, " {} {}", t.symbol, t.dest)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
