//! Runs a JSON cache script against `LruCache` and prints each step's output.
//!
//! ```text
//! lru-script tests/fixtures/capacity_two.json
//! lru-script --format json --capacity 4 script.json
//! RUST_LOG=slotlru=trace lru-script script.json
//! ```
//!
//! Exits with status 1 when the script carries `expected` outputs and any of
//! them differ.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use slotlru::script::{Report, Script, run_script};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "lru-script", version, about = "Run a JSON script against an LRU cache")]
struct Cli {
    /// Script file with `operations`, `arguments` and optional `expected`.
    path: PathBuf,

    /// Use this capacity instead of the script's construction argument.
    #[arg(long)]
    capacity: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter; overrides RUST_LOG. Defaults to `warn` when neither is set.
    #[arg(long, env = "SLOTLRU_LOG")]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log filter {level:?}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))
}

fn render_text(script: &Script, report: &Report) -> String {
    let mut out = String::new();
    for (step, observed) in report.observed.iter().enumerate() {
        let args = &script.arguments[step];
        let value = observed
            .as_ref()
            .map_or_else(|| "null".to_string(), ToString::to_string);
        out.push_str(&format!(
            "{step:>4}  {:<10} {:<12} -> {value}\n",
            script.operations[step],
            format!("{args:?}")
        ));
    }
    for mismatch in &report.mismatches {
        let expected = mismatch
            .expected
            .as_ref()
            .map_or_else(|| "null".to_string(), ToString::to_string);
        let observed = mismatch
            .observed
            .as_ref()
            .map_or_else(|| "null".to_string(), ToString::to_string);
        out.push_str(&format!(
            "mismatch at step {} ({}): expected {expected}, observed {observed}\n",
            mismatch.step, mismatch.operation
        ));
    }
    out
}

fn run(cli: &Cli) -> Result<bool> {
    let script = Script::from_path(&cli.path)
        .with_context(|| format!("loading {}", cli.path.display()))?;
    let report = run_script(&script, cli.capacity)
        .with_context(|| format!("running {}", cli.path.display()))?;

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&script, &report)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
    }
    Ok(report.passed())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;

    if run(&cli)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
