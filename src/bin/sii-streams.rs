//! sii-streams CLI
//!
//! Lists and edits the radio streams of a `live_streams.sii` file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use siistreams::{Config, Edit, Entry, EntryStore, LineEnding, Result, SiiError};
use tracing_subscriber::{fmt, EnvFilter};

/// sii-streams
#[derive(Parser, Debug)]
#[command(name = "sii-streams")]
#[command(about = "Edit the radio stream list of a live_streams.sii file")]
#[command(version)]
struct Args {
    /// Container file to read
    file: PathBuf,

    /// Write changes here instead of back to FILE
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Write CRLF line endings
    #[arg(long, global = true)]
    crlf: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every stream with its index
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Append a stream
    Add {
        /// Stream URL
        url: String,

        /// Label shown in game
        label: String,
    },

    /// Remove the stream at INDEX
    Remove {
        index: usize,
    },

    /// Exchange two streams
    Swap {
        a: usize,
        b: usize,
    },

    /// Change the URL and/or label of a stream
    Edit {
        index: usize,

        /// New URL
        #[arg(long)]
        url: Option<String>,

        /// New label
        #[arg(long)]
        label: Option<String>,
    },

    /// Move a stream one place up
    MoveUp {
        index: usize,
    },

    /// Move a stream one place down
    MoveDown {
        index: usize,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,siistreams=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let line_ending = if args.crlf {
        LineEnding::CrLf
    } else {
        LineEnding::Lf
    };
    let config = Config::builder().line_ending(line_ending).build();

    let mut store = EntryStore::open(&args.file, config)?;

    let edit = match args.command {
        Commands::List { json } => return list(&store, json),
        Commands::Add { url, label } => Edit::Insert(Entry::new(url, label)),
        Commands::Remove { index } => Edit::Delete { index },
        Commands::Swap { a, b } => Edit::Swap { a, b },
        Commands::Edit { index, url, label } => {
            let current = store.get(index).cloned().ok_or(SiiError::IndexOutOfRange {
                index,
                len: store.len(),
            })?;
            Edit::Update {
                index,
                url: url.unwrap_or(current.url),
                label: label.unwrap_or(current.label),
            }
        }
        Commands::MoveUp { index } => Edit::MoveUp { index },
        Commands::MoveDown { index } => Edit::MoveDown { index },
    };

    if let Some(index) = store.apply(edit)? {
        tracing::info!("Entry now at index {}", index);
    }

    if !store.is_dirty() {
        tracing::info!("Nothing changed; file left as is");
        return Ok(());
    }

    match args.output {
        Some(path) => store.save_as(&path),
        None => store.save(),
    }
}

fn list(store: &EntryStore, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(store.entries())
            .map_err(|e| SiiError::Serialization(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    for (index, entry) in store.entries().iter().enumerate() {
        println!("{:>4}  {}  {}", index, entry.label, entry.url);
    }
    Ok(())
}
