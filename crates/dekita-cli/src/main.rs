//! Dekita asset CLI - draws the store feature graphic and app icon
//!
//! This binary wraps the raster backend with config loading, validation and
//! colored or JSON reporting.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

use dekita_cli::{commands, logging};

/// Dekita Calendar store asset generator
#[derive(Parser)]
#[command(name = "dekita-assets")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the 1024x500 feature graphic
    FeatureGraphic {
        /// Output PNG path (default: from config)
        #[arg(short, long)]
        out: Option<String>,

        /// TrueType/OpenType font file for the text
        #[arg(long)]
        font: Option<String>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate the app icon
    Icon {
        /// Output PNG path (default: from config)
        #[arg(short, long)]
        out: Option<String>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate the feature graphic and the icon
    All {
        /// Directory for both PNGs
        #[arg(long)]
        out_dir: Option<String>,

        /// TrueType/OpenType font file for the feature graphic
        #[arg(long)]
        font: Option<String>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print or write the default config
    Config {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a config file without drawing
    Validate {
        /// JSON config file
        #[arg(short, long)]
        config: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::FeatureGraphic {
            out,
            font,
            config,
            json,
        } => commands::feature_graphic::run(
            out.as_deref(),
            font.as_deref(),
            config.as_deref(),
            json,
        ),
        Commands::Icon { out, config, json } => {
            commands::icon::run(out.as_deref(), config.as_deref(), json)
        }
        Commands::All {
            out_dir,
            font,
            config,
            json,
        } => commands::all::run(
            out_dir.as_deref(),
            font.as_deref(),
            config.as_deref(),
            json,
        ),
        Commands::Config { output } => commands::config::run(output.as_deref()),
        Commands::Validate { config, json } => commands::validate::run(&config, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
