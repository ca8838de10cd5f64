use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

use designer_ast::GeneratorOptions;

#[derive(Parser)]
#[command(name = "designer", version, about = "Page designer AST tools")]
struct Cli {
    /// Log filter, e.g. `debug` or `designer_ast=trace`
    #[arg(long, global = true, env = "DESIGNER_LOG", default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct FormatArgs {
    /// Indentation unit
    #[arg(long, env = "DESIGNER_INDENT", default_value = "  ")]
    indent: String,
    /// Emit everything on one line
    #[arg(long)]
    compact: bool,
}

impl FormatArgs {
    fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            indent: self.indent.clone(),
            format: !self.compact,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate markup from a JSON component config.
    Build {
        /// Path to a .json config (one object or a list)
        input: PathBuf,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Print node count and depth of a config's tree.
    Stats { input: PathBuf },
    /// Print every element with the given tag.
    Find {
        input: PathBuf,
        #[arg(long)]
        tag: String,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Re-generate a markup file.
    Fmt {
        input: PathBuf,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// List the built-in component palette.
    Catalog {
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    install_tracing(&cli.log);

    if let Err(err) = run(cli) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

fn install_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build { input, out, format } => {
            let markup = designer_cli::build_cmd(&input, out.as_deref(), &format.options())?;
            match out {
                Some(path) => println!("Generated: {}", path.display()),
                None => println!("{markup}"),
            }
        }
        Commands::Stats { input } => {
            let stats = designer_cli::stats_cmd(&input)?;
            println!("nodes: {}", stats.nodes);
            println!("elements: {}", stats.elements);
            println!("depth: {}", stats.depth);
        }
        Commands::Find { input, tag, format } => {
            for markup in designer_cli::find_cmd(&input, &tag, &format.options())? {
                println!("{markup}");
            }
        }
        Commands::Fmt { input, format } => {
            println!("{}", designer_cli::fmt_cmd(&input, &format.options())?);
        }
        Commands::Catalog { json } => {
            if json {
                println!("{}", designer_cli::catalog_json()?);
            } else {
                for line in designer_cli::catalog_lines() {
                    println!("{line}");
                }
            }
        }
    }
    Ok(())
}
