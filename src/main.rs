use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fumis::{Config, Input, OutputFormat};

#[derive(Parser)]
#[command(name = "fumis", about = "Normalize a Fumis WiRCU status payload")]
struct Cli {
    /// Payload file to read. Reads stdin when omitted or `-`.
    payload: Option<PathBuf>,

    /// Config file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// What to print. Overrides `[output] format`.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Print single-line JSON.
    #[arg(long)]
    compact: bool,

    /// Write debug logs to stderr (RUST_LOG overrides the level).
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Snapshot,
    Attributes,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Snapshot => OutputFormat::Snapshot,
            Format::Attributes => OutputFormat::Attributes,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("fumis debug log started");
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if cli.compact {
        config.output.pretty = false;
    }

    let raw = Input::from_arg(cli.payload).read()?;
    println!("{}", fumis::process(&raw, &config)?);
    Ok(())
}
