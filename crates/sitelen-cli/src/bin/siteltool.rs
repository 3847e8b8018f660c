use std::process;

use clap::{Parser, Subcommand};

use sitelen_cli::commands::convert_ops;

#[derive(Parser)]
#[command(name = "siteltool", about = "Sitelen Pona conversion diagnostics")]
struct Cli {
    /// Path to a custom lexicon TOML table (defaults to the built-in table)
    #[arg(long, global = true)]
    table: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert ASCII Toki Pona text; reads stdin lines when TEXT is absent
    Convert {
        /// Text to convert
        text: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Look up a single token's glyph
    Lookup {
        /// Token to look up (case-sensitive)
        token: String,
    },

    /// Dump the active lexicon table
    Table {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.table {
        if let Err(e) = convert_ops::load_table(path) {
            eprintln!("Error loading table {path}: {e}");
            process::exit(1);
        }
    }

    match cli.command {
        Command::Convert { text, json } => convert_ops::convert_cmd(text.as_deref(), json),
        Command::Lookup { token } => convert_ops::lookup_cmd(&token),
        Command::Table { json } => convert_ops::table_cmd(json),
    }
}
