//! loxt CLI
//!
//! Lexes and parses Lox expressions.

use std::io::IsTerminal;

use loxt_diagnostic::ColorMode;
use loxtc::commands::{explain_error, lex_file, parse_file, run_file, run_repl};

fn main() {
    loxtc::init_tracing();

    let mut color = ColorMode::default();
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::from_flag(value) else {
                eprintln!("error: invalid --color value '{value}' (expected auto, always or never)");
                std::process::exit(1);
            };
            color = mode;
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        let stdout = std::io::stdout();
        let is_tty = stdout.is_terminal();
        if let Err(e) = run_repl(std::io::stdin().lock(), stdout.lock(), color, is_tty) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        return;
    };

    match command.as_str() {
        "lex" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: loxt lex <file>");
                std::process::exit(1);
            };
            lex_file(path, color);
        }
        "parse" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: loxt parse <file>");
                std::process::exit(1);
            };
            parse_file(path, color);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("loxt {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            let Some(code) = args.get(1) else {
                eprintln!("Usage: loxt explain <ERROR_CODE>");
                eprintln!("Example: loxt explain E1002");
                std::process::exit(1);
            };
            explain_error(code);
        }
        path if !path.starts_with('-') => {
            run_file(path, color);
        }
        other => {
            eprintln!("Unknown option: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("loxt - Lox expression front end");
    println!();
    println!("Usage: loxt [--color=<mode>] [command | <file>]");
    println!();
    println!("Commands:");
    println!("  <file>               Lex and parse a file, print tokens and tree");
    println!("  lex <file>           Tokenize a file and print the tokens");
    println!("  parse <file>         Parse a file and print the tree");
    println!("  explain <code>       Explain an error code (e.g., E1002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("With no command, starts an interactive prompt.");
    println!();
    println!("Options:");
    println!("  --color=<mode>       auto (default), always, never");
    println!();
    println!("Logging:");
    println!("  LOXT_LOG=<filter>    e.g. LOXT_LOG=loxt_parse=trace");
}
