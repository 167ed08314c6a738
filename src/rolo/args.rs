use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "Interactive command-line address book", long_about = None)]
pub struct Cli {
    /// Storage file to use instead of the default (must be a .json path)
    pub file: Option<PathBuf>,
}
