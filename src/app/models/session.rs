//! # Session Model
//!
//! Lifecycle state for the current lookup. Exactly one [`RequestState`]
//! variant holds at any time; transitions replace the whole value, so the
//! renderer never observes a torn state. Every request is tagged with a
//! monotonically increasing sequence number and a response is applied
//! only when its sequence matches the latest issued request; a straggler
//! from a superseded request is discarded silently.

use crate::app::models::CompanyProfile;

/// Mutually exclusive lifecycle state of the current lookup
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Success(CompanyProfile),
    Failure(String),
}

/// HTTP outcome of the most recent completed request, for the status line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpStatus {
    pub status_code: Option<u16>,
    pub duration_ms: Option<u64>,
}

/// State machine for the request/response lifecycle
#[derive(Debug, Clone)]
pub struct SessionModel {
    state: RequestState,
    /// Sequence number of the most recently issued request
    latest_seq: u64,
    http_status: HttpStatus,
}

impl SessionModel {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            latest_seq: 0,
            http_status: HttpStatus::default(),
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    pub fn http_status(&self) -> &HttpStatus {
        &self.http_status
    }

    /// Begin a new request: discard any prior outcome, move to `Loading`
    /// and return the sequence number the response must carry to be
    /// considered current.
    pub fn start_load(&mut self) -> u64 {
        self.latest_seq += 1;
        self.state = RequestState::Loading;
        self.http_status = HttpStatus::default();
        tracing::debug!("Request #{} started", self.latest_seq);
        self.latest_seq
    }

    /// Apply a successful outcome; returns false for a stale sequence
    pub fn succeed(&mut self, seq: u64, profile: CompanyProfile, status: HttpStatus) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.state = RequestState::Success(profile);
        self.http_status = status;
        true
    }

    /// Apply a failed outcome; returns false for a stale sequence
    pub fn fail(&mut self, seq: u64, message: String) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.state = RequestState::Failure(message);
        true
    }

    fn is_current(&self, seq: u64) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(
                "Discarding stale response #{} (latest is #{})",
                seq,
                self.latest_seq
            );
            return false;
        }
        true
    }
}

impl Default for SessionModel {
    fn default() -> Self {
        Self::new()
    }
}
