mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use cmd::resolve::Format;

/// Setup logging based on verbose flag or RUST_LOG environment variable
fn setup_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("rkaiq_cli=debug,rkaiq_build=debug")
    } else {
        EnvFilter::new("rkaiq_cli=info,rkaiq_build=info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser)]
#[command(
    name = "rkaiq-config",
    about = "Print the rkaiq build configuration for a target board",
    version
)]
struct Cli {
    /// Show debug logs
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve flags, sources and static libraries for a board
    Resolve {
        /// Target board. e.g. rk3588
        #[arg(long, short = 'b', env = "TARGET_BOARD_PLATFORM", default_value = "")]
        board: String,

        /// TOML macro table. Defaults to $RKAIQ_MACRO_TABLE, then the built-in table
        #[arg(long, short = 't')]
        table: Option<PathBuf>,

        #[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Load a module through its registered module type and print its properties
    Load {
        /// Module type. e.g. cc_rkaiq_library_static
        module_type: String,

        /// Module name. e.g. librkaiq_ae
        name: String,

        /// Target board. e.g. rk3588
        #[arg(long, short = 'b', env = "TARGET_BOARD_PLATFORM", default_value = "")]
        board: String,

        /// TOML macro table. Defaults to $RKAIQ_MACRO_TABLE, then the built-in table
        #[arg(long, short = 't')]
        table: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List boards with a known ISP hardware flag
    ListBoards,

    /// Validate a TOML macro table
    CheckTable {
        /// Path to the table
        path: PathBuf,
    },

    /// Print the built-in macro table as TOML
    DumpTable,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Resolve {
            board,
            table,
            format,
        } => cmd::resolve::run(&board, table.as_deref(), format),

        Commands::Load {
            module_type,
            name,
            board,
            table,
            json,
        } => cmd::load::run(&module_type, &name, &board, table.as_deref(), json),

        Commands::ListBoards => cmd::list_boards::run(),

        Commands::CheckTable { path } => cmd::table::run_check(&path),

        Commands::DumpTable => cmd::table::run_dump(),
    }
}
