//! # flowwrap CLI
//!
//! Usage:
//!   flowwrap request.json -o placement.json
//!   echo '{ ... }' | flowwrap
//!   flowwrap --example > request.json
//!
//! Set `RUST_LOG=flowwrap=debug` to see row and truncation decisions.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_request_json());
        return;
    }

    // Read input
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1])
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    };
    let input = match input {
        Ok(input) => input,
        Err(e) => {
            eprintln!("✗ Failed to read input: {}", e);
            process::exit(1);
        }
    };

    let output_path = args.windows(2).find(|w| w[0] == "-o").map(|w| w[1].clone());

    let output = match flowwrap::layout_json(&input) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("✗ {}", e);
            process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &output) {
                eprintln!("✗ Failed to write {}: {}", path, e);
                process::exit(1);
            }
            eprintln!("✓ Written {} bytes to {}", output.len(), path);
        }
        None => println!("{}", output),
    }
}

fn example_request_json() -> &'static str {
    r##"{
  "config": {
    "horizontalGap": 8,
    "verticalGap": 6,
    "maxRows": 2,
    "padding": { "top": 12, "right": 12, "bottom": 12, "left": 12 }
  },
  "width": 320,
  "height": "natural",
  "children": [
    { "width": 64, "height": 28, "margin": { "top": 2, "right": 2, "bottom": 2, "left": 2 } },
    { "width": 92, "height": 28 },
    { "width": 48, "height": 28 },
    { "width": 120, "height": 28 },
    { "width": 40, "height": 28, "visible": false },
    { "width": 76, "height": 32 },
    { "width": 300, "height": 28 },
    { "width": 56, "height": 28 }
  ]
}
"##
}
