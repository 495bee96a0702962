mod commands;
mod exit_code;

use clap::{Parser, Subcommand};
use exit_code::ExitCode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphql")]
#[command(about = "GraphQL CLI for generating IDE helper files", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the IDE helper config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Directory to write generated files to (overrides `outputDir`)
    #[arg(short, long, value_name = "DIR", global = true)]
    output_dir: Option<PathBuf>,

    /// Force colored output even when not a TTY
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true, conflicts_with = "color")]
    no_color: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output verbosity options
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Whether to show informational output (confirmations, reminders)
    pub show_info: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate schema files that help IDEs understand the schema
    ///
    /// Writes the definitions of all registered directives, the types added
    /// while building the schema and a stub file into the output directory.
    IdeHelper,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let output_opts = OutputOptions {
        show_info: !cli.quiet,
    };

    let code = match cli.command {
        Commands::IdeHelper => {
            commands::ide_helper::run(cli.config, cli.output_dir, output_opts)?
        }
    };

    if code != ExitCode::Success {
        code.exit();
    }
    Ok(())
}

/// Initialize tracing; silent unless `RUST_LOG` is set
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output based on flags and environment variables.
///
/// Priority order (highest to lowest):
/// 1. `--color` flag (force colors on)
/// 2. `--no-color` flag (force colors off)
/// 3. `NO_COLOR` environment variable (if set to any value, disable colors)
/// 4. `CLICOLOR_FORCE` environment variable (if set to non-zero, force colors)
/// 5. `CLICOLOR` environment variable (if set to "0", disable colors)
/// 6. Default: colors enabled if stdout is a TTY (handled by `colored` crate)
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    if force_color {
        control::set_override(true);
    } else if no_color {
        control::set_override(false);
    } else if std::env::var_os("NO_COLOR").is_some() {
        control::set_override(false);
    } else if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if !val.is_empty() && val != "0" {
            control::set_override(true);
        }
    } else if let Ok(val) = std::env::var("CLICOLOR") {
        if val == "0" {
            control::set_override(false);
        }
    }
}
