use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use taskboard_core::{Board, BoardAction, BoardConfig};

/// Replay a list of board actions and print the resulting board
#[derive(Debug, Parser)]
#[command(name = "taskboard", version)]
struct Cli {
    /// JSON array of actions; read from stdin when omitted
    actions: Option<PathBuf>,

    /// JSON board layout; the built-in layout is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BoardConfig::load(path)
            .with_context(|| format!("failed to load board layout {}", path.display()))?,
        None => BoardConfig::default(),
    };

    let input = match &cli.actions {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read actions {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read actions from stdin")?;
            buffer
        }
    };
    let actions: Vec<BoardAction> =
        serde_json::from_str(&input).context("actions must be a JSON array")?;

    let mut board = Board::new(config);
    let summary = board.replay(&actions);
    for reason in &summary.ignored {
        tracing::warn!(%reason, "action ignored");
    }
    tracing::info!(
        applied = summary.applied,
        ignored = summary.ignored.len(),
        "replay finished"
    );

    println!("{}", serde_json::to_string_pretty(&board)?);
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
