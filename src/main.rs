use crate::config::Config;
use crate::router::handle;
use crate::site::Site;
use anyhow::Context;
use astra::Server;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

mod config;
mod domain;
mod errors;
mod inventory;
mod responses;
mod router;
mod scraper;
mod site;
mod spreadsheets;
mod templates;
mod update;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "property_catalog", about = "Listing inventory updater and catalog site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the spreadsheet, scrape listing photos and rewrite the inventory JSON
    Update {
        /// Scrape and print a sample, but don't write the inventory
        #[arg(long)]
        dry_run: bool,
        /// Use a local CSV export instead of downloading from Google Drive
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Where to write the inventory (default: INVENTORY_PATH)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Serve the catalog page from the inventory JSON
    Serve {
        /// Address to listen on (default: BIND_ADDR)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
        /// Inventory file to serve (default: INVENTORY_PATH)
        #[arg(short, long)]
        inventory: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = Config::from_env()?;

    match cli.command {
        Commands::Update {
            dry_run,
            csv,
            output,
        } => {
            update::run_update(&cfg, &update::UpdateArgs { dry_run, csv, output })?;
            info!("done");
            Ok(())
        }
        Commands::Serve { bind, inventory } => {
            let path = inventory.unwrap_or_else(|| cfg.inventory_path.clone());
            let site = Site::load(&path, cfg.placeholder_image.clone())
                .with_context(|| format!("loading inventory from {}", path.display()))?;

            let addr = bind.unwrap_or(cfg.bind_addr);
            info!("Starting server at http://{addr}");

            Server::bind(&addr)
                .max_workers(8)
                .serve(move |req, _info| match handle(req, &site) {
                    Ok(resp) => resp,
                    Err(err) => responses::html_error_response(err),
                })
                .context("server ended with error")?;

            info!("Server shut down cleanly.");
            Ok(())
        }
    }
}
