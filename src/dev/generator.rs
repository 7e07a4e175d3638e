// src/dev/generator.rs
// Seeded random automata and inputs, shared by fuzz_exec and the sweep test.

use rand::Rng;

use crate::machine::Dfa;
use crate::table::TransitionTable;

/// Byte alphabet the generated tables draw their symbols from.
pub const ALPHABET: &[u8] = b"abcd%\x1b";

/// Random table over states 1..=`n_states` with `n_edges` edges. Self-loops
/// are produced only when `allow_self_loops` is set.
pub fn gen_table<R: Rng>(
    rng: &mut R,
    n_states: u32,
    n_edges: usize,
    allow_self_loops: bool,
) -> TransitionTable {
    assert!(n_states >= 1, "need at least one state");
    let mut table = TransitionTable::new();
    for state in 1..=n_states {
        table.declare_state(state);
    }
    let mut added = 0;
    while added < n_edges {
        let from = rng.random_range(1..=n_states);
        let dest = rng.random_range(1..=n_states);
        if !allow_self_loops && from == dest {
            continue;
        }
        let symbol = ALPHABET[rng.random_range(0..ALPHABET.len())];
        table.add_transition(from, symbol, dest);
        added += 1;
    }
    table
}

/// Random automaton over a generated table; initial and final states are
/// drawn from the declared ids.
pub fn gen_dfa<R: Rng>(rng: &mut R, n_states: u32, n_edges: usize, allow_self_loops: bool) -> Dfa {
    let table = gen_table(rng, n_states, n_edges, allow_self_loops);
    let initial = rng.random_range(1..=n_states);
    let final_state = rng.random_range(1..=n_states);
    Dfa::new(table, initial, final_state)
}

/// Random input of `len` bytes: mostly alphabet symbols, with the
/// occasional byte no table ever mentions.
pub fn gen_input<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        if rng.random_bool(0.9) {
            out.push(ALPHABET[rng.random_range(0..ALPHABET.len())]);
        } else {
            out.push(rng.random_range(0u8..=255));
        }
    }
    out
}
