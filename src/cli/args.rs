use clap::Parser;
use std::path::PathBuf;

/// Process library circulation commands against a catalog and user registry
#[derive(Parser, Debug)]
#[command(name = "circulation-engine")]
#[command(
    about = "Process library circulation commands against a catalog and user registry",
    long_about = None
)]
pub struct CliArgs {
    /// Input file containing catalog item records
    #[arg(value_name = "ITEMS", help = "Path to the items file")]
    pub items_file: PathBuf,

    /// Input file containing library user records
    #[arg(value_name = "USERS", help = "Path to the users file")]
    pub users_file: PathBuf,

    /// Input file containing circulation commands
    #[arg(value_name = "COMMANDS", help = "Path to the commands file")]
    pub commands_file: PathBuf,

    /// Output file the transaction log is written to
    #[arg(value_name = "OUTPUT", help = "Path the transaction log is written to")]
    pub output_file: PathBuf,
}
