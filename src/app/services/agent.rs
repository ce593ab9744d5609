//! # Agent Service
//!
//! Manages requests to the research agent service. Fetches run on spawned
//! tokio tasks and report back through an internal channel, so the UI
//! loop never blocks on the network; each response carries the sequence
//! number of the request that produced it.

use crate::app::models::{CompanyProfile, HttpStatus};
use crate::app::services::decode;
use crate::profile::ServiceProfile;
use anyhow::{anyhow, Result};
use std::time::Instant;
use tokio::sync::mpsc;

/// The one user-facing failure message. Transport errors, non-2xx
/// statuses and malformed response bodies are deliberately not
/// distinguished to the user; causes go to the log.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch company data. Please try again.";

/// Message type for async agent response handling
#[derive(Debug)]
pub enum AgentResponse {
    /// Decoded profile for the request with this sequence number
    Success {
        seq: u64,
        profile: CompanyProfile,
        status: HttpStatus,
    },
    /// The request failed; `message` is what the user sees
    Error { seq: u64, message: String },
}

/// Service for fetching company profiles from the agent endpoint
pub struct AgentService {
    client: reqwest::Client,
    agent_url: String,
    /// Channel for receiving async responses
    response_receiver: mpsc::Receiver<AgentResponse>,
    /// Channel sender for async tasks to send responses
    response_sender: mpsc::Sender<AgentResponse>,
}

impl AgentService {
    /// Create a new AgentService addressing the profile's server
    pub fn new(profile: &impl ServiceProfile) -> Result<Self> {
        let (response_sender, response_receiver) = mpsc::channel(10);
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| anyhow!("failed to create HTTP client: {e}"))?;
        let agent_url = agent_url(profile.server());
        tracing::info!("AgentService created for {}", agent_url);

        Ok(Self {
            client,
            agent_url,
            response_receiver,
            response_sender,
        })
    }

    /// Check if there are any pending responses (non-blocking)
    pub fn poll_response(&mut self) -> Option<AgentResponse> {
        self.response_receiver.try_recv().ok()
    }

    /// Fetch a profile asynchronously
    ///
    /// Spawns a tokio task that executes the request and sends the result
    /// back through the internal channel. An empty query is a no-op; the
    /// caller gates submission, this guard just keeps the service safe to
    /// call unconditionally.
    pub fn execute_async(&self, seq: u64, company: String) {
        if company.trim().is_empty() {
            tracing::debug!("Ignoring request #{} with empty company name", seq);
            return;
        }

        let client = self.client.clone();
        let url = self.agent_url.clone();
        let result_sender = self.response_sender.clone();

        tokio::spawn(async move {
            let response = match fetch(&client, &url, &company).await {
                Ok((profile, status)) => AgentResponse::Success {
                    seq,
                    profile,
                    status,
                },
                Err(e) => {
                    tracing::warn!("Request #{} for '{}' failed: {e:#}", seq, company);
                    AgentResponse::Error {
                        seq,
                        message: FETCH_FAILED_MESSAGE.to_string(),
                    }
                }
            };

            // Ignore send errors (receiver might have been dropped)
            let _ = result_sender.send(response).await;
        });
    }

    /// Fetch a single profile, for one-shot mode
    pub async fn fetch_profile(&self, company: &str) -> Result<(CompanyProfile, HttpStatus)> {
        fetch(&self.client, &self.agent_url, company).await
    }
}

/// Full address of the agent endpoint for a server base
fn agent_url(server: &str) -> String {
    format!("{}/agent", server.trim_end_matches('/'))
}

/// Execute one lookup: GET, status check, decode, defensive extraction
///
/// The company name travels as the `company` query parameter and is
/// percent-encoded by reqwest's typed query API.
async fn fetch(
    client: &reqwest::Client,
    url: &str,
    company: &str,
) -> Result<(CompanyProfile, HttpStatus)> {
    let start = Instant::now();

    let response = client
        .get(url)
        .query(&[("company", company)])
        .send()
        .await
        .map_err(|e| anyhow!("request to agent service failed: {e}"))?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("agent service returned {status}"));
    }

    let body = response
        .text()
        .await
        .map_err(|e| anyhow!("failed to read agent response body: {e}"))?;

    let document = decode::decode_document(&body)?;
    let profile = CompanyProfile::from_document(&document);

    let http_status = HttpStatus {
        status_code: Some(status.as_u16()),
        duration_ms: Some(start.elapsed().as_millis() as u64),
    };
    Ok((profile, http_status))
}
