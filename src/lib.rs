mod auth;
mod draw;
mod history;
mod models;
mod quotes;
mod shell;

pub use auth::SessionGate;
pub use draw::{DrawController, DrawEvent, DrawPhase, DrawState};
pub use history::{History, HistoryStore};
pub use models::{Category, QuoteRecord};
pub use quotes::{meta, pool, CategoryMeta};

use anyhow::{anyhow, Result};
use shell::Shell;
use tokio::sync::mpsc::unbounded_channel;

pub fn run() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Wishbox starting up...");

    let data_dir = dirs::data_dir()
        .ok_or_else(|| anyhow!("no user data directory available"))?
        .join("wishbox");
    std::fs::create_dir_all(&data_dir)?;

    let history = HistoryStore::new(data_dir.join("history.json"))?;
    let (event_tx, event_rx) = unbounded_channel();
    let controller = DrawController::new(history.clone(), event_tx);
    let shell = Shell::new(SessionGate::new(), history, controller, event_rx);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(shell.run())
}
