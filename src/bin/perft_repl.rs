//! A minimal UCI-style REPL exposing the perft driver from `plecox`.
//!
//! This binary only understands the token subset needed to drive position setup and
//! perft from a GUI or a human: `uci`, `isready`, `ucinewgame`, `position`, `go perft`,
//! `go perftsuite`, `print`, `quit`/`exit`. Anything evaluation- or search-dependent
//! (`go depth`, `go movetime`, `setoption`) belongs to the excluded search layer and is
//! not handled here.

extern crate plecox;
#[macro_use]
extern crate log;
extern crate env_logger;

use std::fs;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use plecox::board::epd::parse_epd_file;
use plecox::board::perft::perft;
use plecox::Board;

const ENGINE_NAME: &str = "plecox-perft";
const ENGINE_AUTHOR: &str = "Plecox Contributors";

fn main() {
    env_logger::init();

    let mut board = Board::start_pos();

    // A single positional argv argument is accepted as a scripting convenience: an EPD
    // file to run non-interactively, equivalent to typing `go perftsuite <path>` at the
    // prompt. No other argv parsing is attempted.
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        run_perft_suite(&args[1]);
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("uci") => {
                println!("id name {}", ENGINE_NAME);
                println!("id author {}", ENGINE_AUTHOR);
                println!("uciok");
                io::stdout().flush().ok();
            }
            Some("isready") => {
                println!("readyok");
                io::stdout().flush().ok();
            }
            Some("ucinewgame") => {
                board = Board::start_pos();
            }
            Some("position") => {
                handle_position(&mut board, tokens.collect());
            }
            Some("go") => {
                handle_go(&board, tokens.collect());
            }
            Some("print") => {
                board.pretty_print();
            }
            Some("quit") | Some("exit") => {
                break;
            }
            Some(other) => {
                warn!("unrecognized command: {}", other);
            }
            None => {}
        }
    }
}

fn handle_position(board: &mut Board, tokens: Vec<&str>) {
    let mut iter = tokens.into_iter().peekable();

    let new_board = match iter.next() {
        Some("startpos") => Some(Board::start_pos()),
        Some("fen") => {
            let mut fen_parts = Vec::new();
            while let Some(&tok) = iter.peek() {
                if tok == "moves" {
                    break;
                }
                fen_parts.push(tok);
                iter.next();
            }
            let fen = fen_parts.join(" ");
            match Board::from_fen(&fen) {
                Ok(b) => Some(b),
                Err(e) => {
                    warn!("invalid FEN '{}': {}", fen, e);
                    None
                }
            }
        }
        _ => {
            warn!("expected 'startpos' or 'fen' after 'position'");
            None
        }
    };

    let mut next_board = match new_board {
        Some(b) => b,
        None => return,
    };

    if let Some(&"moves") = iter.peek() {
        iter.next();
        for mov_str in iter {
            if !next_board.apply_uci_move(mov_str) {
                warn!("illegal or malformed move in position command: {}", mov_str);
                break;
            }
        }
    }

    *board = next_board;
}

fn handle_go(board: &Board, tokens: Vec<&str>) {
    let mut iter = tokens.into_iter().peekable();
    match iter.next() {
        Some("perft") => {
            let mut depth: u16 = 1;
            let mut speed = false;
            while let Some(tok) = iter.next() {
                match tok {
                    "depth" => {
                        if let Some(d) = iter.next() {
                            depth = d.parse().unwrap_or(1);
                        }
                    }
                    "speed" => speed = true,
                    _ => {}
                }
            }
            run_perft(board, depth, speed);
        }
        Some("perftsuite") => {
            if let Some(path) = iter.next() {
                run_perft_suite(path);
            } else {
                warn!("expected a file path after 'go perftsuite'");
            }
        }
        _ => warn!("unrecognized 'go' subcommand"),
    }
}

fn run_perft(board: &Board, depth: u16, speed: bool) {
    let start = Instant::now();
    let mut total: u64 = 0;

    if depth == 0 {
        println!("Nodes searched: 1");
        return;
    }

    if !speed {
        let moves = board.generate_moves();
        for mov in moves.iter() {
            let mut b = board.shallow_clone();
            b.apply_move(*mov);
            let count = perft(&b, depth - 1);
            println!("{}: {}", mov.stringify(), count);
            total += count;
        }
    } else {
        total = perft(board, depth);
    }

    let elapsed = start.elapsed();
    let nanos = elapsed.as_secs() * 1_000_000_000 + u64::from(elapsed.subsec_nanos());
    let seconds = (nanos as f64) / 1_000_000_000.0;
    let nps = if seconds > 0.0 {
        (total as f64 / seconds) as u64
    } else {
        0
    };

    println!();
    println!("Nodes searched: {}", total);
    info!("perft depth {} took {:.3}s ({} nps)", depth, seconds, nps);
}

fn run_perft_suite(path: &str) {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("could not read EPD file '{}': {}", path, e);
            return;
        }
    };

    let (cases, parse_errors) = parse_epd_file(&contents);
    for (line_no, err) in &parse_errors {
        warn!("line {}: {}", line_no, err);
    }

    let mut passed = 0usize;
    let mut failed = 0usize;

    for (idx, case) in cases.iter().enumerate() {
        match case.run() {
            Ok(results) => {
                let line_ok = results.iter().all(|r| r.passed());
                if line_ok {
                    passed += 1;
                    info!("case {} ({}): pass", idx + 1, case.fen);
                } else {
                    failed += 1;
                    for r in &results {
                        if !r.passed() {
                            warn!(
                                "case {} ({}): D{} expected {}, got {}",
                                idx + 1,
                                case.fen,
                                r.depth,
                                r.expected,
                                r.actual
                            );
                        }
                    }
                }
            }
            Err(e) => {
                failed += 1;
                warn!("case {} ({}): board setup failed: {}", idx + 1, case.fen, e);
            }
        }
    }

    println!("Perft suite complete: {} passed, {} failed", passed, failed);
}
