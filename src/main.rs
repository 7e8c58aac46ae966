use anyhow::Result;
use botkit_utils::commands;
use botkit_utils::utils::duration::TimeUnit;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "botkit")]
#[command(about = "Duration, rounding, progress bar and pagination helpers", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert milliseconds to a duration
    Time {
        /// Number of milliseconds
        milliseconds: u64,

        /// Print the total in a single unit instead (s, m, h or d)
        #[arg(short, long)]
        unit: Option<TimeUnit>,

        /// Use the compact H:MM:SS format
        #[arg(long)]
        simple: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a time string such as "1h30m" into milliseconds
    Parse {
        /// Time string made of <number><s|m|h|d> tokens
        text: String,
    },

    /// Round a number to a number of decimal places
    Round {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Decimal places (default: round to an integer)
        #[arg(short, long)]
        digits: Option<u32>,
    },

    /// Draw a progress bar for a percentage
    Bar {
        #[arg(allow_negative_numbers = true)]
        progress: f64,

        /// Use ASCII characters instead of emoji
        #[arg(long)]
        ascii: bool,
    },

    /// Split a list of items into pages
    Paginate {
        /// Items per page
        #[arg(short, long, default_value = "10")]
        size: usize,

        /// Items to paginate
        items: Vec<String>,
    },

    /// Read JSON from stdin and pretty-print it
    Json {
        /// Fail if the input is larger than this many bytes
        #[arg(long)]
        max_bytes: Option<usize>,
    },

    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Time {
            milliseconds,
            unit,
            simple,
            json,
        } => commands::time::run(milliseconds, unit, simple, json),
        Commands::Parse { text } => commands::time::run_parse(&text),
        Commands::Round { value, digits } => commands::round::run(value, digits),
        Commands::Bar { progress, ascii } => commands::bar::run(progress, ascii),
        Commands::Paginate { size, items } => commands::paginate::run(&items, size),
        Commands::Json { max_bytes } => commands::json::run(max_bytes).await,
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "botkit", &mut std::io::stdout());
            Ok(())
        }
    }
}
