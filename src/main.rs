use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use std::path::PathBuf;
use stockbook::{Config, Controller, Inventory};

#[derive(Parser)]
#[clap(author, version, about = "Single-user inventory and sales tracker")]
struct Cli {
    /// TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Products file (overrides config)
    #[clap(long)]
    products: Option<PathBuf>,

    /// Sales file (overrides config)
    #[clap(long)]
    sales: Option<PathBuf>,

    /// Write single-line JSON instead of indented
    #[clap(long)]
    compact: bool,

    /// Debug logging
    #[clap(short, long)]
    debug: bool,
}

fn main() {
    // exit status stays 0 either way, bad flags included
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return;
        }
    };

    let log_level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(path) = cli.products {
        config = config.products_path(path);
    }
    if let Some(path) = cli.sales {
        config = config.sales_path(path);
    }
    if cli.compact {
        config = config.pretty(false);
    }
    info!(
        "products at {}, sales at {}",
        config.products_path.display(),
        config.sales_path.display()
    );

    let inventory = Inventory::new(&config);
    let stdin = std::io::stdin();
    Controller::new(inventory, stdin.lock(), std::io::stdout()).run()?;
    Ok(())
}
