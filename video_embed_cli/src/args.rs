use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Turn debug logging on
    #[arg(short, long)]
    pub debug: bool,

    /// File with one `key: value` video option per line
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override a single option, e.g. youtube_width=640. Applied after the config file
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Skip links, code and escaped text, embed the remaining video URLs
    Process {
        /// Source text file, stdin if omitted
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Destination of resulting HTML file, stdout if omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Embed every video URL not directly preceded by '('
    Render {
        /// Source text file, stdin if omitted
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Destination of resulting HTML file, stdout if omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print all video options with their effective values
    Options,
}
