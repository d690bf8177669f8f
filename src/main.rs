use clap::Parser;
use miette::{IntoDiagnostic, Result};
use shopcart::application::session::CartSession;
use shopcart::domain::catalog::Catalog;
use shopcart::interfaces::load_catalog;
use shopcart::interfaces::menu::Menu;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog file (CSV with an `id,name,price` header, or a `.json` array).
    /// Uses the built-in demo catalog when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the menu transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match cli.catalog {
        Some(path) => load_catalog(&path).into_diagnostic()?,
        None => Catalog::default(),
    };
    let mut session = CartSession::new(catalog);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());
    menu.run(&mut session).into_diagnostic()?;

    Ok(())
}
