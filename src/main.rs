use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use snowwiz::{cmd, fmt};
use std::path::PathBuf;
use std::process;

/// Warehouse sizing advisor
///
/// snowwiz reads query history and suggests moving long-running queries off
/// extra-small warehouses and short queries off large ones, with the hourly
/// credit impact of each move.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    /// Use this config file instead of ./.snowwiz.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend warehouse sizes for query ids
    Recommend {
        /// Query ids to analyze
        #[arg(required = true, value_name = "IDS")]
        ids: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Output format: markdown, json
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Answer a question that mentions query ids
    Ask {
        /// Question text
        #[arg(required = true, value_name = "QUESTION")]
        question: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Output format: markdown, json
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Ask questions interactively
    Chat {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Output format: markdown, json
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List the built-in sample queries
    Samples,

    /// Initialize snowwiz configuration
    Init {
        /// Exported query history (JSON) to read instead of sample data
        #[arg(long, value_name = "PATH")]
        history_file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Emoji off from the CLI flag or the NO_EMOJI environment variable
    if cli.no_emoji || std::env::var_os("NO_EMOJI").is_some() {
        fmt::set_emoji_enabled(false);
    }

    let config = cli.config.as_deref();

    let result = match &cli.command {
        Some(Commands::Recommend { ids, json, format }) => {
            cmd::cmd_recommend(config, ids, *json, format.as_deref())
        }
        Some(Commands::Ask {
            question,
            json,
            format,
        }) => cmd::cmd_ask(config, question, *json, format.as_deref()),
        Some(Commands::Chat { json, format }) => cmd::cmd_chat(config, *json, format.as_deref()),
        Some(Commands::Samples) => {
            cmd::cmd_samples();
            Ok(())
        }
        Some(Commands::Init { history_file }) => cmd::cmd_init(history_file.as_deref()),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("snowwiz v{}", env!("CARGO_PKG_VERSION"));
            println!("Warehouse sizing advisor\n");
            println!("Usage: snowwiz <COMMAND>\n");
            println!("Commands:");
            println!("  recommend    Recommend warehouse sizes for query ids");
            println!("  ask          Answer a question that mentions query ids");
            println!("  chat         Ask questions interactively");
            println!("  samples      List the built-in sample queries");
            println!("  init         Initialize snowwiz configuration");
            println!("\nRun 'snowwiz <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use snowwiz::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
