use anyhow::Context;
use clap::{Parser, Subcommand};
use unfold::bookmarks::Bookmarks;
use unfold::catalog::random_id;
use unfold::config::Config;
use unfold::profile::load_profile;
use unfold::recent::RecentSearches;
use unfold::report;
use unfold::store::FileStore;
use unfold::{ApiClient, SearchSession};

#[derive(Parser)]
#[command(name = "unfold", about = "Unfold — creature catalog lookup")]
struct Cli {
    /// Write debug logs to /tmp/unfold-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Exact lookup with fuzzy fallback.
    Search { query: String },
    /// Detail, description and evolution tree for one creature.
    Show { id_or_name: String },
    /// Show a random creature.
    Random,
    /// List recent searches.
    Recent {
        #[arg(long)]
        clear: bool,
    },
    /// Toggle a bookmark, or list bookmarks when no id is given.
    Bookmark { id: Option<u32> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/unfold-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("unfold debug log started — tail -f /tmp/unfold-debug.log");
    }

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config: falling back to defaults");
        Config::defaults()
    });
    let store = FileStore::new(config.storage.resolved_dir());

    match cli.command {
        Command::Search { query } => {
            let client = ApiClient::new(&config.api)?;
            let session = SearchSession::spawn(client, store, &config.search);
            session.submit_query(query.as_str());
            let state = session.settled().await;
            print!("{}", report::render_state(&state));
        }
        Command::Show { id_or_name } => show(&config, &id_or_name).await?,
        Command::Random => {
            let id = random_id(&mut rand::thread_rng());
            show(&config, &id.to_string()).await?;
        }
        Command::Recent { clear } => {
            let mut recent = RecentSearches::load(store, config.search.recent_limit);
            if clear {
                recent.clear();
                println!("Recent searches cleared.");
            } else if recent.entries().is_empty() {
                println!("No recent searches.");
            } else {
                print!("{}", report::render_entries(recent.entries()));
            }
        }
        Command::Bookmark { id: Some(id) } => {
            let mut bookmarks = Bookmarks::load(store);
            if bookmarks.toggle(id) {
                println!("Bookmarked #{id:03}.");
            } else {
                println!("Removed bookmark #{id:03}.");
            }
        }
        Command::Bookmark { id: None } => {
            let bookmarks = Bookmarks::load(store);
            if bookmarks.ids().is_empty() {
                println!("No bookmarks.");
            }
            for id in bookmarks.ids() {
                println!("#{id:03}");
            }
        }
    }
    Ok(())
}

async fn show(config: &Config, id_or_name: &str) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api)?;
    let profile = load_profile(&client, id_or_name)
        .await
        .with_context(|| format!("loading {id_or_name:?}"))?;
    print!("{}", report::render_profile(&profile));
    Ok(())
}
