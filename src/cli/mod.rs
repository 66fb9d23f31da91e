// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// This function parses the command-line arguments and returns a `CliArgs`
/// struct containing the parsed values. If parsing fails (e.g., missing
/// required arguments or the --help flag), clap will automatically display
/// an error message or help text and exit the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
