mod probe;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "shortopt")]
#[command(version, about = "Parse single-character flags and report what was consumed", long_about = None)]
struct Cli {
    /// Characters to register as options that continue parsing
    #[arg(short, long, value_name = "CHARS", default_value = "")]
    flags: String,

    /// Characters to register as options that stop parsing
    #[arg(short, long, value_name = "CHARS", default_value = "")]
    stop: String,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Arguments to parse, given after `--`
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    tracing::debug!(args = cli.args.len(), "executing probe");
    let report = probe::probe(&cli.flags, &cli.stop, &cli.args)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
