// src/io.rs
use std::{
    collections::BTreeMap,
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::descriptor::parse_descriptor;
use crate::machine::{Dfa, SelfLoopPolicy};
use crate::table::TransitionTable;

/// Reads a descriptor file and builds the automaton it describes.
pub fn load_dfa_from_file(path: impl AsRef<Path>) -> anyhow::Result<Dfa> {
    let path = path.as_ref();
    log::debug!("reading descriptor from {}", path.display());
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read descriptor {}: {e}", path.display()))?;
    Ok(parse_descriptor(&text)?)
}

// -------------------- JSON (de)serialization --------------------

#[serde_as]
#[derive(Serialize, Deserialize)]
struct DfaDisk {
    initial: u32,
    #[serde(rename = "final")]
    final_state: u32,
    #[serde(default)]
    follow_self_loops: bool,
    #[serde_as(as = "serde_with::Seq<(_, _)>")]
    states: BTreeMap<u32, Vec<(u8, u32)>>,
}

impl From<&Dfa> for DfaDisk {
    fn from(dfa: &Dfa) -> Self {
        let table = dfa.table();
        let mut states = BTreeMap::new();
        for id in table.state_ids() {
            let transitions = table
                .transitions_from(id)
                .iter()
                .map(|t| (t.symbol, t.dest))
                .collect();
            states.insert(id, transitions);
        }
        Self {
            initial: dfa.initial_state(),
            final_state: dfa.final_state(),
            follow_self_loops: dfa.policy() == SelfLoopPolicy::Follow,
            states,
        }
    }
}

impl DfaDisk {
    fn into_dfa(self) -> Dfa {
        let mut table = TransitionTable::new();
        for (state, transitions) in self.states {
            table.declare_state(state);
            for (symbol, dest) in transitions {
                table.add_transition(state, symbol, dest);
            }
        }
        let policy = if self.follow_self_loops {
            SelfLoopPolicy::Follow
        } else {
            SelfLoopPolicy::Skip
        };
        Dfa::new(table, self.initial, self.final_state).with_policy(policy)
    }
}

/// Writes a built automaton as a JSON snapshot. Per-state transition order
/// is preserved, so first-match behavior survives a round trip.
pub fn save_dfa_json(path: &Path, dfa: &Dfa) -> std::io::Result<()> {
    // Stream to disk to avoid giant intermediate strings.
    let f = fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, &DfaDisk::from(dfa))?;
    w.flush()
}

pub fn load_dfa_json_bytes(data: &[u8]) -> Result<Dfa, String> {
    serde_json::from_slice::<DfaDisk>(data)
        .map(|d| d.into_dfa())
        .map_err(|e| format!("Failed to parse automaton JSON: {e}"))
}
