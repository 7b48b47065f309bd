use anyhow::{bail, Context, Result as AnyhowResult};
use clap::Parser;
use scratch::commands::find_command;
use scratch::config::{ScratchConfig, ScratchOptions};
use scratch::host::memory::MemoryHost;
use scratch::host::EditorHost;
use scratch::services::tracing_setup;
use scratch::ScratchController;
use std::path::PathBuf;

/// Run scratch buffer commands against an in-memory editor and print the result
#[derive(Parser, Debug)]
#[command(name = "scratch")]
#[command(about = "Open, reuse and split a single scratch buffer", long_about = None)]
#[command(version)]
struct Args {
    /// Commands to run in order (e.g. Scratch, ScratchSplit)
    #[arg(value_name = "COMMANDS")]
    commands: Vec<String>,

    /// Path to a JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the scratch buffer name
    #[arg(long, value_name = "NAME")]
    buffer_name: Option<String>,

    /// Start with unsaved changes in the initial buffer
    #[arg(long)]
    modified: bool,

    /// Path to log file (default: stderr)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the configuration JSON Schema and exit
    #[arg(long)]
    dump_schema: bool,
}

fn load_config(args: &Args) -> AnyhowResult<ScratchConfig> {
    let mut config = match &args.config {
        Some(path) => ScratchConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ScratchConfig::default(),
    };

    if let Some(name) = &args.buffer_name {
        config.buffer_name = name.clone();
    }
    Ok(config)
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    tracing_setup::init_global(args.log_file.as_deref()).context("Failed to open log file")?;

    if args.dump_schema {
        let schema = schemars::schema_for!(ScratchOptions);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let config = load_config(&args)?;
    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let controller = ScratchController::new(config)?;
    let mut host = MemoryHost::new();
    if args.modified {
        let active = host.active_buffer();
        host.set_modified(active, true)?;
    }

    for name in &args.commands {
        let Some(command) = find_command(name) else {
            bail!("Unknown command: {name}");
        };
        let outcome = controller
            .execute(command.action, &mut host)
            .with_context(|| format!("{} failed", command.name))?;
        tracing::info!(
            "{}: {:?} -> {}",
            command.name,
            outcome.placement.decision(),
            outcome.buffer
        );
    }

    println!("{}", serde_json::to_string_pretty(&host.snapshot())?);
    Ok(())
}
