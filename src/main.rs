//! Library Circulation Engine CLI
//!
//! Command-line interface for processing library circulation commands.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- items.txt users.txt commands.txt output.txt
//! ```
//!
//! The program loads the catalog and user files, applies the commands in
//! file order, and writes the transaction log (followed by the final state
//! of every catalog item) to the output file.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use library_circulation_engine::cli;
use library_circulation_engine::pipeline;
use std::fs::File;
use std::process;

fn main() {
    let args = cli::parse_args();

    let mut output = match File::create(&args.output_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Error: failed to create output file '{}': {}",
                args.output_file.display(),
                e
            );
            process::exit(1);
        }
    };

    if let Err(e) = pipeline::process_run(
        &args.items_file,
        &args.users_file,
        &args.commands_file,
        &mut output,
    ) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
