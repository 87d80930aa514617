use crate::search::{run_catalog_export, run_labels, run_search, CatalogArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use villa_map::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Villa Map",
    about = "Search the villa catalog and serve the interactive map backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Filter the catalog from the command line
    Search(SearchArgs),
    /// Show the display label for one or more amenity tags
    Labels {
        /// Amenity tags such as infinity-pool or wine-cellar
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Write the active catalog as CSV to stdout
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search(args),
        Command::Labels { tags } => {
            run_labels(&tags);
            Ok(())
        }
        Command::Catalog(args) => run_catalog_export(args),
    }
}
