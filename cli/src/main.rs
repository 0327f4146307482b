use anyhow::Result;
use clap::Parser;
use pokedex_cli::{flow, Terminal};
use pokedex_core::{PokeClient, DEFAULT_LIMIT};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Browse Pokémon from a PokéAPI-shaped host in the terminal.
#[derive(Parser, Debug)]
#[command(name = "pokedex", version)]
struct Args {
    /// How many Pokémon to fetch from the first list page.
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,

    /// Base URL of the API host.
    #[arg(long, default_value = "https://pokeapi.co/api/v2")]
    base_url: String,

    /// Log fetch activity to stderr.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = PokeClient::new(&args.base_url);
    let mut ui = Terminal::new();
    flow::run(&client, args.limit, &mut ui).await;

    Ok(())
}
