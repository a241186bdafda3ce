//! Anagram Finder CLI
//!
//! Loads a dictionary directory given as the single argument, then reads
//! words from standard input and prints the longest anagram of each.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anagram_finder::{search_anagram, DictionaryIndex, NOT_FOUND};

fn run_interactive(index: &DictionaryIndex) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("matchFor> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }

        let word = line.trim();
        if word.is_empty() {
            break;
        }

        let result = search_anagram(index, word).unwrap_or(NOT_FOUND);
        println!("The longest anagram is... '{}'", result);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        // Missing argument is a usability message, not a failure.
        println!("Please provide the directory path as an argument");
        return;
    }

    let index = match DictionaryIndex::load(Path::new(&args[1])) {
        Ok(index) => index,
        Err(err) => {
            eprintln!("Failed to load dictionary: {}", err);
            std::process::exit(1);
        }
    };

    run_interactive(&index);
}
