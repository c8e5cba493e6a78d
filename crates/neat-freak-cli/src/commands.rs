use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "neat-freak")]
#[command(about = "A neat freak flat-folder organizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify and move the files in a directory
    Organize {
        /// Directory to organize (defaults to the current directory)
        #[arg(long)]
        dir: Option<String>,
    },
    /// Print configuration values
    PrintConfig,
}
