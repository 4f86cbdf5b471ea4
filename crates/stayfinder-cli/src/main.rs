mod render;
mod room;
mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stayfinder_core::Catalog;

#[derive(Debug, Parser)]
#[command(name = "stayfinder")]
#[command(about = "Room search, pricing, and mock booking from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the room catalog with filters and sorting
    Search(search::SearchArgs),
    /// Show full details for one room
    Show {
        /// Room id from the search results
        room_id: String,
    },
    /// Price a stay for a room and an optional date pair
    Quote(room::QuoteArgs),
    /// Reserve a room (mock confirmation; nothing is persisted)
    Book(room::BookArgs),
    /// Suggest destinations matching a query
    Locations {
        /// Free-text query; omit to list every destination
        query: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = stayfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    tracing::debug!(rooms = catalog.len(), env = %config.env, "catalog ready");

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => search::run_search(&catalog, &config, &args),
        Commands::Show { room_id } => room::run_show(&catalog, &config, &room_id),
        Commands::Quote(args) => room::run_quote(&catalog, &config, &args),
        Commands::Book(args) => room::run_book(&catalog, &config, &args),
        Commands::Locations { query } => {
            search::run_locations(query.as_deref().unwrap_or(""));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_accepts_repeated_amenity_flags() {
        let cli = Cli::try_parse_from([
            "stayfinder",
            "search",
            "--amenity",
            "wifi",
            "--amenity",
            "spa",
            "--sort",
            "price-low",
        ])
        .expect("args should parse");
        let Commands::Search(args) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(args.amenities, vec!["wifi", "spa"]);
        assert_eq!(args.sort, "price-low");
    }

    #[test]
    fn book_parses_dates() {
        let cli = Cli::try_parse_from([
            "stayfinder",
            "book",
            "1",
            "--check-in",
            "2024-03-15",
            "--check-out",
            "2024-03-18",
            "--guests",
            "2",
        ])
        .expect("args should parse");
        assert!(matches!(cli.command, Commands::Book(_)));
    }
}
