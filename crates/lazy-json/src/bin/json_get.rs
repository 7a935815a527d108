//! `json-get` — walk a JSON document lazily and print the value found.
//!
//! Usage:
//!   json-get [segment]...
//!
//! The document is read from stdin. Numeric segments index arrays, all other
//! segments are object keys.

use lazy_json::cli::lookup;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut buf = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match lookup(&buf, &args) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
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
