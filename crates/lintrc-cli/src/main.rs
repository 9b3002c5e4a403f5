//! lintrc CLI
//!
//! Command-line interface for inspecting and managing lintrc configuration
//! descriptors

mod commands;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use colored::Colorize;
use lintrc_core::{Result, RuleCatalog, init_tracing_with};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lintrc")]
#[command(about = "lintrc: inspect, validate, and resolve linter configuration")]
#[command(version = lintrc_core::VERSION)]
#[command(
    long_about = "lintrc loads ESLint-style configuration descriptors, validates them against\n\
a rule catalog, and reports the effective configuration any file would get.\n\
\n\
Examples:\n  \
lintrc init --with-examples      # Create a starter .lintrc.json\n  \
lintrc validate                  # Validate the discovered config\n  \
lintrc show --file src/app.ts    # Effective config for one file\n  \
lintrc catalog --detailed        # List known rules, presets, and envs"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to configuration file (.lintrc.json/.lintrc.yaml/.lintrc.toml)"
    )]
    config: Option<PathBuf>,

    /// Catalog manifest extending the built-in rule catalog
    #[arg(
        long,
        global = true,
        env = "LINTRC_CATALOG",
        help = "Path to a catalog manifest with extra rules, presets, or plugins"
    )]
    catalog: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(
        long,
        value_enum,
        help = "Generate completion script for specified shell"
    )]
    generate_completion: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a configuration file in the current directory
    Init {
        /// Configuration file format
        #[arg(long, default_value = "json", help = "Configuration file format")]
        format: ConfigFormat,

        /// Overwrite existing configuration file
        #[arg(long, help = "Overwrite existing configuration file")]
        force: bool,

        /// Include example rules and overrides
        #[arg(long, help = "Include example rules and overrides")]
        with_examples: bool,
    },

    /// Validate a configuration file against the rule catalog
    #[command(alias = "check")]
    Validate {
        /// Path to configuration file to validate
        #[arg(help = "Path to configuration file (default: discover .lintrc)")]
        path: Option<PathBuf>,
    },

    /// Show the loaded configuration, or what a given file would get
    Show {
        /// Path to configuration file to show
        #[arg(help = "Path to configuration file (default: discover .lintrc)")]
        path: Option<PathBuf>,

        /// Resolve the effective configuration for this file
        #[arg(long, help = "Report the effective configuration for a target file")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "human", help = "Output format")]
        format: OutputFormat,
    },

    /// List the rules, presets, plugins, and environments in the catalog
    Catalog {
        /// Show descriptions alongside every entry
        #[arg(long, help = "Show detailed information for each entry")]
        detailed: bool,
    },

    /// Print the JSON Schema for configuration descriptors
    Schema,

    /// Show version information
    #[command(alias = "ver")]
    Version {
        /// Show detailed version information
        #[arg(long, help = "Show detailed version and build information")]
        detailed: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ConfigFormat {
    /// JSON configuration format (JSONC accepted on load)
    Json,
    /// YAML configuration format
    Yaml,
    /// TOML configuration format
    Toml,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON format for programmatic consumption
    Json,
}

fn main() {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.generate_completion {
        generate_completion_script(shell);
        return;
    }

    // Initialize colored output
    if cli.no_color || std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    }

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "lintrc_core=error,lintrc_cli=error",
        1 => "lintrc_core=warn,lintrc_cli=warn",
        2 => "lintrc_core=info,lintrc_cli=info",
        3 => "lintrc_core=debug,lintrc_cli=debug",
        _ => "lintrc_core=trace,lintrc_cli=trace",
    };
    init_tracing_with(log_level);

    if let Err(e) = run_command(cli) {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn generate_completion_script(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Build the rule catalog all commands consult, applying a manifest when given
fn load_catalog(manifest: Option<&PathBuf>) -> Result<RuleCatalog> {
    let mut catalog = RuleCatalog::builtin();
    if let Some(path) = manifest {
        catalog.load_manifest_file(path)?;
    }
    Ok(catalog)
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init {
            format,
            force,
            with_examples,
        }) => commands::init_command(format, force, with_examples),

        Some(Commands::Validate { path }) => {
            let catalog = load_catalog(cli.catalog.as_ref())?;
            commands::validate_command(path.or(cli.config), &catalog)
        }

        Some(Commands::Show { path, file, format }) => {
            let catalog = load_catalog(cli.catalog.as_ref())?;
            commands::show_command(path.or(cli.config), file, format, &catalog)
        }

        Some(Commands::Catalog { detailed }) => {
            let catalog = load_catalog(cli.catalog.as_ref())?;
            commands::catalog_command(detailed, &catalog)
        }

        Some(Commands::Schema) => commands::schema_command(),

        Some(Commands::Version { detailed }) => {
            if detailed {
                println!("lintrc {}", lintrc_core::VERSION);
                println!("Build information:");
                println!("  Target: {}", std::env::consts::ARCH);
                println!("  OS: {}", std::env::consts::OS);
            } else {
                println!("{}", lintrc_core::VERSION);
            }
            Ok(())
        }

        None => {
            // No subcommand provided, show help
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
