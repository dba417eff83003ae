//! `json-merge`: deep-merge an update object over a base object.
//!
//! Usage:
//!   json-merge '<update>' [--nulls]
//!
//! The base document is read from stdin. The update document is the first
//! argument. With `--nulls`, explicit `null` values in the update overwrite
//! the base instead of being skipped.
//!
//! Set `RUST_LOG=debug` for diagnostics on stderr.

use json_bridge::cli::merge_documents;
use json_bridge::{MergeOptions, NullPolicy};
use std::io::{self, Read, Write};

fn main() {
    // Log level comes from RUST_LOG, warnings by default.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let update = match args.get(1) {
        Some(u) => u.clone(),
        None => {
            eprintln!("First argument must be a JSON object to merge.");
            std::process::exit(1);
        }
    };
    let null_policy = if args.iter().skip(2).any(|a| a == "--nulls") {
        NullPolicy::Overwrite
    } else {
        NullPolicy::Skip
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match merge_documents(buf.trim(), &update, &MergeOptions { null_policy }) {
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
