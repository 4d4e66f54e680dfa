use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use taskboard_core::AppConfig;
use taskboard_persistence::{SqliteTaskStore, TaskStore};
use taskboard_tui::App;

#[derive(Parser)]
#[command(name = "taskboard", version, about = "A terminal kanban board backed by SQLite")]
struct Cli {
    /// Path to the SQLite database file
    #[arg(short, long, env = "TASKBOARD_DB")]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let config = AppConfig::load();
    let db_path = config
        .effective_database_path(cli.database)
        .ok_or_else(|| anyhow::anyhow!("no database path; pass --database or set TASKBOARD_DB"))?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    tracing::info!(path = %db_path.display(), "opening task store");

    let store: Arc<dyn TaskStore> = Arc::new(SqliteTaskStore::new(&db_path));
    let mut app = App::new(store);
    app.run().await?;

    Ok(())
}
