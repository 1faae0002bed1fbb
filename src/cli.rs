use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coursetime")]
#[command(author, version, about = "Calculate course progress")]
pub struct Cli {
    /// Root folder path for the course
    pub root_folder: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
