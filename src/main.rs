// src/main.rs
use std::process::ExitCode;

use dfarun::io::load_dfa_from_file;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(filename), Some(input)) = (args.next(), args.next()) else {
        eprintln!("Invalid Input!");
        eprintln!("Usage:");
        eprintln!("dfarun <dfa_filename> <input_string>");
        return ExitCode::FAILURE;
    };

    println!("Building DFA from {filename}");
    let dfa = match load_dfa_from_file(&filename) {
        Ok(dfa) => dfa,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Input: {input}");
    if dfa.execute(input.as_bytes()) {
        println!("Evaluation: True");
        ExitCode::SUCCESS
    } else {
        println!("Evaluation: False");
        ExitCode::FAILURE
    }
}
