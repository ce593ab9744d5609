//! # Scoutline Main Entry Point
//!
//! Terminal client for company research profiles.

use anyhow::Result;
use scoutline::cmd_args::CommandLineArgs;
use scoutline::{oneshot, AppController};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    // Logs go to stderr so they never corrupt the interactive screen;
    // silent unless RUST_LOG asks for output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // One-shot mode: explicit --company, or stdout is not a terminal
    if let Some(company) = cmd_args.company() {
        let company = company.clone();
        let ok = oneshot::run_once(&cmd_args, &company).await?;
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }
    if !atty::is(atty::Stream::Stdout) {
        anyhow::bail!("stdout is not a terminal; use --company <name> for one-shot mode");
    }

    println!("Scoutline - Company Research");
    println!("Type a company name and press Enter to fetch its profile");
    println!("Press Esc or Ctrl+C to quit");
    println!("Starting application...\n");

    let mut app = AppController::new(cmd_args)?;
    app.run().await?;

    println!("Goodbye!");
    Ok(())
}
