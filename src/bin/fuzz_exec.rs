// src/bin/fuzz_exec.rs
// Generate random automata and inputs, then check execution invariants:
//   - repeated runs and the parallel batch agree with a serial run
//   - the trace starts at the initial state and ends where execute says
//   - every hop in a trace is a declared edge (or a stay-in-place)
//   - on self-loop-free tables, Skip and Follow policies agree
//
// Knobs:
//   FUZZ_SEED=42  FUZZ_ITERS=50  FUZZ_STATES=8  FUZZ_EDGES=24
//   FUZZ_INPUTS=16  FUZZ_LEN=64

use dfarun::{
    dev::generator::{gen_dfa, gen_input},
    machine::{Dfa, SelfLoopPolicy},
};
use rand::{SeedableRng, rngs::StdRng};

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(default)
}

fn main() {
    let seed = env_u64("FUZZ_SEED", 42);
    let iters = env_usize("FUZZ_ITERS", 50);
    let n_states = env_u64("FUZZ_STATES", 8) as u32;
    let n_edges = env_usize("FUZZ_EDGES", 24);
    let n_inputs = env_usize("FUZZ_INPUTS", 16);
    let len = env_usize("FUZZ_LEN", 64);

    eprintln!("[fuzz] seed={seed} iters={iters} states={n_states} edges={n_edges}");
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..iters {
        let allow_self_loops = i % 2 == 0;
        let dfa = gen_dfa(&mut rng, n_states, n_edges, allow_self_loops);
        let inputs: Vec<Vec<u8>> = (0..n_inputs).map(|_| gen_input(&mut rng, len)).collect();

        if !check_iteration(&dfa, &inputs, allow_self_loops) {
            eprintln!("[fuzz] iter {i}: FAILED (replay with FUZZ_SEED={seed})");
            eprintln!("[fuzz] table:\n{}", dfa.table());
            std::process::exit(1);
        }
        eprintln!("[fuzz] iter {i}: {} inputs OK", inputs.len());
    }
    eprintln!("[fuzz] all iterations passed");
}

fn check_iteration(dfa: &Dfa, inputs: &[Vec<u8>], allow_self_loops: bool) -> bool {
    let serial: Vec<bool> = inputs.iter().map(|i| dfa.execute(i)).collect();
    let again: Vec<bool> = inputs.iter().map(|i| dfa.execute(i)).collect();
    if serial != again {
        eprintln!("[fuzz] results differ across identical runs");
        return false;
    }
    let batch = dfa.execute_all(inputs);
    if batch != serial {
        eprintln!("[fuzz] parallel batch disagrees with serial execution");
        return false;
    }

    for (input, &accepted) in inputs.iter().zip(&serial) {
        if !check_trace(dfa, input, accepted) {
            return false;
        }
    }

    if !allow_self_loops {
        let follow = dfa.clone().with_policy(SelfLoopPolicy::Follow);
        for (input, &accepted) in inputs.iter().zip(&serial) {
            if follow.execute(input) != accepted {
                eprintln!("[fuzz] policies diverge on a self-loop-free table");
                return false;
            }
        }
    }
    true
}

fn check_trace(dfa: &Dfa, input: &[u8], accepted: bool) -> bool {
    let trace = dfa.trace(input);
    if trace.len() != input.len() + 1 {
        eprintln!(
            "[fuzz] trace has {} entries for {} symbols",
            trace.len(),
            input.len()
        );
        return false;
    }
    if trace[0] != dfa.initial_state() {
        eprintln!("[fuzz] trace does not start at the initial state");
        return false;
    }
    let end = *trace.last().expect("trace is never empty");
    if accepted != (end == dfa.final_state()) {
        eprintln!("[fuzz] execute and trace disagree about the end state");
        return false;
    }
    for (step, (&from, &to)) in trace.iter().zip(&trace[1..]).enumerate() {
        let symbol = input[step];
        let declared = dfa
            .table()
            .transitions_from(from)
            .iter()
            .any(|t| t.symbol == symbol && t.dest == to);
        if to != from && !declared {
            eprintln!("[fuzz] hop {from}->{to} on symbol {symbol} has no declared edge");
            return false;
        }
    }
    true
}
