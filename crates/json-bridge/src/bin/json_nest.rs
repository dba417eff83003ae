//! `json-nest`: wrap a document in objects along a slash-delimited path.
//!
//! Usage:
//!   json-nest '<a/b/c>'
//!
//! The value is read from stdin. The path is the first argument.

use json_bridge::cli::nest_document;
use std::io::{self, Read, Write};

fn main() {
    // Log level comes from RUST_LOG, warnings by default.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let path = match args.get(1) {
        Some(p) => p.clone(),
        None => {
            eprintln!("First argument must be a slash-delimited path.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match nest_document(&path, buf.trim()) {
        Ok(result) => {
            let mut out = io::stdout();
            if let Err(e) = out.write_all(result.as_bytes()).and_then(|_| out.write_all(b"\n")) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
