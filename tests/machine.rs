//! Execution semantics over hand-built tables and parsed descriptors: the
//! sample automaton scenarios, first-match ordering, the self-loop rule,
//! empty input, unmatched symbols, and parallel batch evaluation.

use dfarun::{
    descriptor::parse_descriptor,
    machine::{Dfa, SelfLoopPolicy},
    table::TransitionTable,
};

const SAMPLE: &str = "1\n2\n1: 97 2 | 37 3\n2: 97 1 | 27 3\n3: 37 1 | 27 2\n";

fn sample_dfa() -> Dfa {
    parse_descriptor(SAMPLE).expect("sample descriptor parses")
}

#[test]
fn single_symbol_reaches_final_state() {
    // 1 -97-> 2
    assert!(sample_dfa().execute(b"a"));
}

#[test]
fn empty_input_accepts_iff_initial_is_final() {
    assert!(!sample_dfa().execute(b""));
    let mut dfa = sample_dfa();
    dfa.set_final_state(1);
    assert!(dfa.execute(b""));
}

#[test]
fn two_hop_path_reaches_final_state() {
    // 1 -37-> 3 -27-> 2
    assert!(sample_dfa().execute(&[37, 27]));
}

#[test]
fn unmatched_symbol_leaves_state_unchanged() {
    // 'z' appears nowhere in the table.
    assert_eq!(sample_dfa().trace(b"z"), vec![1, 1]);
    assert!(sample_dfa().execute(b"za"));
}

#[test]
fn first_declared_transition_wins() {
    let mut table = TransitionTable::new();
    table.add_transition(1, b'x', 2);
    table.add_transition(1, b'x', 3);
    let dfa = Dfa::new(table, 1, 2);
    assert!(dfa.execute(b"x"));
}

#[test]
fn skipped_self_loop_falls_through_to_later_edge() {
    let mut table = TransitionTable::new();
    table.add_transition(1, b'x', 1);
    table.add_transition(1, b'x', 2);
    let dfa = Dfa::new(table, 1, 2);
    assert!(dfa.execute(b"x"));

    let follow = dfa.clone().with_policy(SelfLoopPolicy::Follow);
    assert_eq!(follow.trace(b"x"), vec![1, 1]);
    assert!(!follow.execute(b"x"));
}

#[test]
fn lone_matching_self_loop_behaves_as_unmatched() {
    let mut table = TransitionTable::new();
    table.add_transition(1, b'x', 1);
    table.add_transition(1, b'y', 2);
    let dfa = Dfa::new(table, 1, 2);
    assert_eq!(dfa.trace(b"x"), vec![1, 1]);
    assert!(!dfa.execute(b"x"));
    assert!(dfa.execute(b"xy"));
}

#[test]
fn repeated_runs_yield_the_same_answer() {
    let dfa = sample_dfa();
    let input = b"a%\x1ba";
    let first = dfa.execute(input);
    for _ in 0..10 {
        assert_eq!(dfa.execute(input), first);
    }
}

#[test]
fn batch_matches_serial_execution() {
    let dfa = sample_dfa();
    let inputs: Vec<&[u8]> = vec![b"a", b"", &[37, 27], b"zzz", b"aa"];
    let serial: Vec<bool> = inputs.iter().map(|i| dfa.execute(i)).collect();
    assert_eq!(dfa.execute_all(&inputs), serial);
}

#[test]
fn destinations_are_registered_states() {
    let mut table = TransitionTable::new();
    table.add_transition(1, b'x', 9);
    assert!(table.contains_state(9));
    assert!(table.transitions_from(9).is_empty());
    assert_eq!(table.state_count(), 2);
    assert_eq!(table.edge_count(), 1);
    assert_eq!(table.degree(1), 1);
    assert_eq!(table.degree(9), 0);
}

#[test]
fn listing_prints_states_in_ascending_order() {
    let listing = sample_dfa().table().to_string();
    assert_eq!(listing, "1: 97 2 | 37 3\n2: 97 1 | 27 3\n3: 37 1 | 27 2\n");
}

#[test]
fn blank_lines_between_transition_lines_are_ignored() {
    let dfa = parse_descriptor("1\n2\n\n1: 97 2\n\n").expect("blank lines parse");
    assert!(dfa.execute(b"a"));
}

#[test]
fn accessors_reflect_assignment() {
    let mut dfa = sample_dfa();
    assert_eq!(dfa.initial_state(), 1);
    assert_eq!(dfa.final_state(), 2);
    dfa.set_initial_state(3);
    dfa.set_final_state(1);
    assert_eq!(dfa.initial_state(), 3);
    assert_eq!(dfa.final_state(), 1);
    // 3 -37-> 1
    assert!(dfa.execute(b"%"));
}
