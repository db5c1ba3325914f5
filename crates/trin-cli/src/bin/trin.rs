use clap::{Parser, Subcommand};

use trin_cli::commands::{check_ops, convert_ops};

#[derive(Parser)]
#[command(name = "trin", about = "Brahmic script transliteration")]
struct Cli {
    /// Path to a custom script catalogue TOML (defaults to the built-in
    /// nine-script catalogue)
    #[arg(long, global = true)]
    scripts: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text into a target script
    Convert {
        /// Target script name or 3-letter code
        #[arg(long)]
        to: String,
        /// Text to transliterate (reads stdin if neither TEXT nor --input is given)
        text: Option<String>,
        /// Read input from a file
        #[arg(long)]
        input: Option<String>,
        /// Also print a rendition in a secondary script
        #[arg(long)]
        hover: Option<String>,
        /// Disable the heuristic word-final adjustment rules
        #[arg(long)]
        basic: bool,
        /// Report which adjustment rules fired
        #[arg(long)]
        explain: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the distinct scripts present in a text
    Detect {
        /// Text to inspect (reads stdin if neither TEXT nor --input is given)
        text: Option<String>,
        /// Read input from a file
        #[arg(long)]
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the script catalogue
    Scripts {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run transliteration fixtures and report a verdict per row
    Check {
        /// Path to the fixture corpus TOML
        corpus_file: String,
        /// Run the rows in basic mode
        #[arg(long)]
        basic: bool,
        /// Show passing rows too
        #[arg(long)]
        verbose: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    trin_cli::init_tracing();

    let cli = Cli::parse();
    let registry = convert_ops::load_registry(cli.scripts.as_deref());

    match cli.command {
        Command::Convert {
            to,
            text,
            input,
            hover,
            basic,
            explain,
            json,
        } => convert_ops::convert_cmd(
            &registry,
            &to,
            text,
            input.as_deref(),
            hover.as_deref(),
            basic,
            explain,
            json,
        ),

        Command::Detect { text, input, json } => {
            convert_ops::detect_cmd(&registry, text, input.as_deref(), json)
        }

        Command::Scripts { json } => convert_ops::scripts_cmd(&registry, json),

        Command::Check {
            corpus_file,
            basic,
            verbose,
            json,
        } => check_ops::check_cmd(&registry, &corpus_file, basic, verbose, json),
    }
}
