use anyhow::Context;
use clap::{Arg, Command};
use deckplan_core::OutlineService;
use deckplan_gen::OpenAiGenerator;
use deckplan_store::SqliteOutlineStore;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Command::new("deckplan-server")
        .version(deckplan_server::VERSION)
        .about("Backend for hierarchical presentation outlines")
        .arg(
            Arg::new("bind")
                .long("bind")
                .default_value("127.0.0.1:5000")
                .help("Address to listen on"),
        )
        .arg(
            Arg::new("database")
                .long("database")
                .default_value("deckplan.db")
                .help("Path of the SQLite database file"),
        )
        .arg(
            Arg::new("model")
                .long("model")
                .help("Completion model override"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("Completion endpoint base URL override"),
        );

    let matches = cli.get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = matches
        .get_one::<String>("bind")
        .expect("bind has a default")
        .parse()
        .context("--bind must be a socket address like 127.0.0.1:5000")?;

    let api_key =
        std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set in the environment")?;

    let mut generator = OpenAiGenerator::new(api_key);
    if let Some(model) = matches.get_one::<String>("model") {
        generator = generator.with_model(model);
    }
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        generator = generator.with_base_url(base_url);
    }

    let database = matches
        .get_one::<String>("database")
        .expect("database has a default");
    let store = SqliteOutlineStore::open(database)
        .with_context(|| format!("opening database {database}"))?;

    let service = Arc::new(OutlineService::new(generator, store));
    deckplan_server::serve(service, addr).await?;

    Ok(())
}
