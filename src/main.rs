//! firstones CLI: write words in the First Ones script.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;

use firstones::config::FirstOnesConfig;
use firstones::engine::Engine;
use firstones::error::FirstOnesResult;

#[derive(Parser)]
#[command(
    name = "firstones",
    version,
    about = "Convert words to the First Ones script from She-Ra"
)]
struct Cli {
    /// Draw a grid in the SVG, for debugging.
    #[arg(long, global = true)]
    grid: bool,

    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SVG for the given words to stdout.
    ///
    /// Words are phonemes (`SH-fEEt/R-All`) or plain words with an optional
    /// language prefix (`en:hello`, `es:ca/sa`).
    Svg {
        /// Words to render. Each argument may hold several space-separated words.
        words: Vec<String>,
    },

    /// Print an SVG chart of every glyph.
    DumpGlyphs,

    /// Serve the HTML form and SVG endpoint.
    Http {
        /// Address to listen on, e.g. `127.0.0.1:8080`.
        address: String,
    },

    /// Show what the engine has loaded.
    Info,

    /// Print the version.
    Version,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let engine = || -> FirstOnesResult<Engine> {
        let mut config = match &cli.config {
            Some(path) => FirstOnesConfig::load(path)?,
            None => FirstOnesConfig::default(),
        };
        if cli.grid {
            config.show_grid = true;
        }
        Ok(Engine::from_config(config)?)
    };

    match cli.command {
        Commands::Version => {
            println!("firstones {}", env!("CARGO_PKG_VERSION"));
        }

        Commands::Svg { words } => {
            let mut words: Vec<String> = words
                .iter()
                .flat_map(|w| w.split_whitespace().map(str::to_string))
                .collect();
            if words.is_empty() {
                words.push("SH-fEEt-R-All".to_string());
            }
            let rendered = engine()?.render_document(&words)?;
            print!("{}", rendered.document);
        }

        Commands::DumpGlyphs => {
            print!("{}", engine()?.render_glyph_catalogue());
        }

        Commands::Http { address } => serve(engine()?, &address)?,

        Commands::Info => {
            print!("{}", engine()?.info());
        }
    }

    Ok(())
}

#[cfg(feature = "server")]
fn serve(engine: Engine, address: &str) -> Result<()> {
    use miette::IntoDiagnostic;

    let runtime = tokio::runtime::Runtime::new().into_diagnostic()?;
    runtime
        .block_on(firstones::server::serve(engine, address))
        .into_diagnostic()
}

#[cfg(not(feature = "server"))]
fn serve(_engine: Engine, address: &str) -> Result<()> {
    Err(miette::miette!(
        help = "rebuild with `cargo build --features server`",
        "cannot serve on {address}: built without the HTTP server"
    ))
}
