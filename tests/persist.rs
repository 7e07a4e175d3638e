//! Snapshot round-trips: a built automaton survives save/load with its
//! acceptance behavior and per-state transition order intact.

use std::fs;

use dfarun::{
    descriptor::parse_descriptor,
    io::{load_dfa_json_bytes, save_dfa_json},
    machine::SelfLoopPolicy,
};

const SAMPLE: &str = "1\n2\n1: 97 2 | 37 3\n2: 97 1 | 27 3\n3: 37 1 | 27 2\n";

#[test]
fn json_round_trip_preserves_behavior() {
    let dfa = parse_descriptor(SAMPLE).expect("sample parses");
    let path = std::env::temp_dir().join("dfarun_snapshot_roundtrip.json");
    save_dfa_json(&path, &dfa).expect("snapshot written");

    let bytes = fs::read(&path).expect("snapshot readable");
    let loaded = load_dfa_json_bytes(&bytes).expect("snapshot parses");
    let _ = fs::remove_file(&path);

    assert_eq!(loaded.initial_state(), dfa.initial_state());
    assert_eq!(loaded.final_state(), dfa.final_state());
    assert_eq!(loaded.policy(), dfa.policy());
    assert_eq!(loaded.table(), dfa.table());
    let inputs: [&[u8]; 5] = [b"a", b"", &[37, 27], b"a%", b"zz"];
    for input in inputs {
        assert_eq!(loaded.execute(input), dfa.execute(input));
    }
}

#[test]
fn json_round_trip_keeps_first_match_order() {
    // Two same-symbol transitions; acceptance depends on which comes first.
    let dfa = parse_descriptor("1\n2\n1: 97 2 | 97 3\n").expect("parses");
    let path = std::env::temp_dir().join("dfarun_snapshot_order.json");
    save_dfa_json(&path, &dfa).expect("snapshot written");

    let bytes = fs::read(&path).expect("snapshot readable");
    let loaded = load_dfa_json_bytes(&bytes).expect("snapshot parses");
    let _ = fs::remove_file(&path);

    assert!(loaded.execute(b"a"));
}

#[test]
fn json_round_trip_keeps_policy() {
    let dfa = parse_descriptor(SAMPLE)
        .expect("sample parses")
        .with_policy(SelfLoopPolicy::Follow);
    let path = std::env::temp_dir().join("dfarun_snapshot_policy.json");
    save_dfa_json(&path, &dfa).expect("snapshot written");

    let bytes = fs::read(&path).expect("snapshot readable");
    let loaded = load_dfa_json_bytes(&bytes).expect("snapshot parses");
    let _ = fs::remove_file(&path);

    assert_eq!(loaded.policy(), SelfLoopPolicy::Follow);
}

#[test]
fn garbage_bytes_are_reported_not_panicked() {
    assert!(load_dfa_json_bytes(b"not json").is_err());
}
