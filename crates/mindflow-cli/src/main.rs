use clap::{Parser, Subcommand};
use mindflow_core::JournalEntry;
use mindflow_sentiment::{SentimentClassifier, SentimentConfig};
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mindflow-cli")]
#[command(about = "MindFlow journal command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a piece of text with the configured sentiment model
    Classify {
        /// Text to classify
        text: String,
    },
    /// Apply pending database migrations
    Migrate,
    /// Print a user's most recent journal entries as JSON
    Entries {
        /// Users-service identifier of the entry owner
        #[arg(long)]
        user: String,

        /// Maximum number of entries to print
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
    /// Print a user's mood trend as JSON
    Trend {
        /// Users-service identifier of the entry owner
        #[arg(long)]
        user: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Classify { text }) => run_classify(&text).await?,
        Some(Commands::Migrate) => run_migrate().await?,
        Some(Commands::Entries { user, limit }) => run_entries(&user, limit).await?,
        Some(Commands::Trend { user }) => run_trend(&user).await?,
        None => println!("mindflow-cli: run with --help to list commands"),
    }

    Ok(())
}

async fn run_classify(text: &str) -> anyhow::Result<()> {
    let text = mindflow_core::validate_entry_text(text)?;
    let settings = mindflow_core::load_sentiment_settings()?;
    let classifier = SentimentClassifier::new(SentimentConfig::from_settings(&settings))?;
    if !classifier.is_configured() {
        tracing::warn!("HUGGING_FACE_API_KEY not set; result will be neutral");
    }

    let result = classifier.classify(text).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn connect() -> anyhow::Result<PgPool> {
    let settings = mindflow_core::load_database_settings()?;
    Ok(mindflow_db::connect_pool(&settings).await?)
}

async fn run_migrate() -> anyhow::Result<()> {
    let pool = connect().await?;
    mindflow_db::run_migrations(&pool).await?;
    println!("migrations up to date");
    Ok(())
}

async fn run_entries(user_id: &str, limit: i64) -> anyhow::Result<()> {
    if limit < 1 {
        anyhow::bail!("--limit must be at least 1");
    }
    let pool = connect().await?;
    let entries: Vec<JournalEntry> = mindflow_db::list_journal_entries(&pool, user_id, limit)
        .await?
        .into_iter()
        .map(JournalEntry::from)
        .collect();
    if entries.is_empty() {
        tracing::info!(user_id, "no journal entries found");
    }
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

async fn run_trend(user_id: &str) -> anyhow::Result<()> {
    let pool = connect().await?;
    let entries: Vec<JournalEntry> = mindflow_db::list_trend_entries(&pool, user_id)
        .await?
        .into_iter()
        .map(JournalEntry::from)
        .collect();
    let trend = mindflow_core::build_mood_trend(&entries);
    println!("{}", serde_json::to_string_pretty(&trend)?);
    Ok(())
}
