mod index;
mod scan;
mod schema;
mod view;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use view::OutputFormat;

#[derive(Parser)]
#[command(
    name = "reflectscope",
    version,
    about = "Collects reflection registrations from compiled JVM classes",
    long_about = "Reflectscope indexes compiled classes and jars, finds every type marked for \
                  reflection and prints the reflection requirements an ahead-of-time compiler \
                  needs to keep those types reflectively accessible."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an annotation index from classes and jars and save it as a snapshot
    #[command(
        long_about = "Reads .class files, class directories and .jar archives and writes the \
                      resulting annotation index. Files ending in .json are written as JSON, \
                      anything else as compressed MessagePack."
    )]
    Index {
        /// Class files, class directories or jar archives
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
        /// Snapshot file to write
        #[arg(long, short, value_name = "FILE")]
        out: PathBuf,
    },
    /// Scan an index for reflection markers and print the requirements
    #[command(
        long_about = "Scans either a saved index snapshot (--index) or freshly indexed classes \
                      and jars for the reflection marker. Fails on the first marker attached \
                      to something other than a type."
    )]
    Scan {
        /// Class files, class directories or jar archives to index before scanning
        #[arg(value_name = "PATH", required_unless_present = "index")]
        paths: Vec<PathBuf>,
        /// Previously saved index snapshot
        #[arg(long, value_name = "FILE", conflicts_with = "paths")]
        index: Option<PathBuf>,
        /// Marker annotation to look for (defaults to REFLECTSCOPE_MARKER or RegisterForReflection)
        #[arg(long, value_name = "FQN")]
        marker: Option<String>,
        /// Print one merged requirement per class instead of one per marker usage
        #[arg(long)]
        merge: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the JSON schema of a reflection requirement record
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _guard = reflectscope_core::logging::init_logging("cli", true);

    match cli.command {
        Commands::Index { paths, out } => index::run(&paths, &out),
        Commands::Scan {
            paths,
            index,
            marker,
            merge,
            format,
        } => scan::run(
            scan::ScanOptions {
                paths,
                index,
                marker,
                merge,
                format,
            },
            &mut std::io::stdout().lock(),
        ),
        Commands::Schema => schema::run(),
    }
}
