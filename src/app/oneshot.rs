//! # One-Shot Mode
//!
//! Non-interactive lookup: fetch a single profile, print the card to
//! stdout and report success or the fixed failure message. Used for the
//! `--company` flag and whenever stdout is not a terminal.

use crate::app::services::{AgentService, FETCH_FAILED_MESSAGE};
use crate::app::views::card;
use crate::cmd_args::CommandLineArgs;
use crate::{config, profile};
use anyhow::Result;

/// Fetch one profile and print it; returns false when the lookup failed
pub async fn run_once(cmd_args: &CommandLineArgs, company: &str) -> Result<bool> {
    let profile_path = config::get_profile_path();
    let connection = profile::load_profile(cmd_args.profile(), &profile_path)?;
    let service = AgentService::new(&connection)?;

    match service.fetch_profile(company).await {
        Ok((profile, status)) => {
            for line in card::profile_card_lines(&profile) {
                println!("{line}");
            }
            if cmd_args.verbose() {
                if let (Some(code), Some(ms)) = (status.status_code, status.duration_ms) {
                    println!("{code} · {ms}ms");
                }
            }
            Ok(true)
        }
        Err(e) => {
            tracing::warn!("One-shot lookup for '{}' failed: {e:#}", company);
            println!("{FETCH_FAILED_MESSAGE}");
            Ok(false)
        }
    }
}
