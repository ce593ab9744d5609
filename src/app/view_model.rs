//! # Application View Model
//!
//! Coordinates the query input and the request lifecycle and exposes the
//! state the views render from. All business rules about when submission
//! is allowed and how responses are applied live here, so the state
//! machine can be unit tested without a terminal or a network.

use crate::app::models::{QueryModel, RequestState, SessionModel};
use crate::app::services::AgentResponse;

/// View model owning the input and session state slices
///
/// The two slices are independent on purpose: the user keeps editing the
/// query while a request is in flight.
#[derive(Debug)]
pub struct AppViewModel {
    query: QueryModel,
    session: SessionModel,
    profile_name: String,
    verbose: bool,
    dirty: bool,
}

impl AppViewModel {
    pub fn new() -> Self {
        Self {
            query: QueryModel::new(),
            session: SessionModel::new(),
            profile_name: "default".to_string(),
            verbose: false,
            dirty: true,
        }
    }

    pub fn set_profile_name(&mut self, name: impl Into<String>) {
        self.profile_name = name.into();
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn query(&self) -> &QueryModel {
        &self.query
    }

    pub fn state(&self) -> &RequestState {
        self.session.state()
    }

    pub fn session(&self) -> &SessionModel {
        &self.session
    }

    /// True iff the trimmed query is non-empty and no request is loading
    pub fn can_submit(&self) -> bool {
        self.query.has_submittable_text() && !self.session.is_loading()
    }

    /// Begin a request if submission is allowed
    ///
    /// Moves the session to `Loading` (discarding any prior outcome) and
    /// returns the sequence number plus the query to fetch. The caller
    /// hands both to the agent service.
    pub fn begin_request(&mut self) -> Option<(u64, String)> {
        if !self.can_submit() {
            return None;
        }
        let seq = self.session.start_load();
        self.dirty = true;
        Some((seq, self.query.text().to_string()))
    }

    /// Apply a response from the agent service
    ///
    /// Stale responses (sequence older than the latest request) are
    /// discarded and leave the state untouched.
    pub fn apply_response(&mut self, response: AgentResponse) {
        let applied = match response {
            AgentResponse::Success {
                seq,
                profile,
                status,
            } => self.session.succeed(seq, profile, status),
            AgentResponse::Error { seq, message } => self.session.fail(seq, message),
        };
        if applied {
            self.dirty = true;
        }
    }

    // -- input editing, delegated to the query model --

    pub fn insert_char(&mut self, ch: char) {
        self.query.insert_char(ch);
        self.dirty = true;
    }

    pub fn delete_char_before_cursor(&mut self) {
        if self.query.delete_char_before_cursor() {
            self.dirty = true;
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.query.move_cursor_left();
        self.dirty = true;
    }

    pub fn move_cursor_right(&mut self) {
        self.query.move_cursor_right();
        self.dirty = true;
    }

    pub fn move_cursor_to_start(&mut self) {
        self.query.move_cursor_to_start();
        self.dirty = true;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.query.move_cursor_to_end();
        self.dirty = true;
    }

    /// Mark the screen as needing a redraw (resize, first paint)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Consume the dirty flag; true means the views should re-render
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for AppViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{CompanyProfile, HttpStatus};
    use crate::app::services::FETCH_FAILED_MESSAGE;

    fn type_query(vm: &mut AppViewModel, text: &str) {
        for ch in text.chars() {
            vm.insert_char(ch);
        }
    }

    fn success(seq: u64, name: &str) -> AgentResponse {
        AgentResponse::Success {
            seq,
            profile: CompanyProfile {
                name: Some(name.to_string()),
                ..Default::default()
            },
            status: HttpStatus::default(),
        }
    }

    #[test]
    fn can_submit_should_be_false_for_empty_or_whitespace_query() {
        let mut vm = AppViewModel::new();
        assert!(!vm.can_submit());

        type_query(&mut vm, "   ");
        assert!(!vm.can_submit());

        type_query(&mut vm, "Zomato");
        assert!(vm.can_submit());
    }

    #[test]
    fn can_submit_should_be_false_while_loading() {
        let mut vm = AppViewModel::new();
        type_query(&mut vm, "Zomato");

        let (seq, query) = vm.begin_request().unwrap();
        assert_eq!(query, "Zomato");
        assert!(!vm.can_submit(), "loading must gate submission");

        vm.apply_response(success(seq, "Zomato"));
        assert!(vm.can_submit());
    }

    #[test]
    fn begin_request_should_refuse_empty_query() {
        let mut vm = AppViewModel::new();
        assert!(vm.begin_request().is_none());
        assert_eq!(*vm.state(), RequestState::Idle);
    }

    #[test]
    fn new_submit_should_clear_previous_profile() {
        let mut vm = AppViewModel::new();
        type_query(&mut vm, "Zomato");

        let (seq, _) = vm.begin_request().unwrap();
        vm.apply_response(success(seq, "Zomato"));
        assert!(matches!(vm.state(), RequestState::Success(_)));

        vm.begin_request().unwrap();
        assert_eq!(*vm.state(), RequestState::Loading);
    }

    #[test]
    fn failure_then_resubmit_should_reach_success_without_residual_error() {
        let mut vm = AppViewModel::new();
        type_query(&mut vm, "Zomato");

        let (seq, _) = vm.begin_request().unwrap();
        vm.apply_response(AgentResponse::Error {
            seq,
            message: FETCH_FAILED_MESSAGE.to_string(),
        });
        assert_eq!(
            *vm.state(),
            RequestState::Failure(FETCH_FAILED_MESSAGE.to_string())
        );

        let (seq, _) = vm.begin_request().unwrap();
        vm.apply_response(success(seq, "Zomato"));
        assert!(matches!(vm.state(), RequestState::Success(_)));
    }

    #[test]
    fn stale_response_should_not_change_state() {
        let mut vm = AppViewModel::new();
        type_query(&mut vm, "Zomato");

        let (first, _) = vm.begin_request().unwrap();
        // Applying the first outcome unlocks submission for the second
        vm.apply_response(success(first, "Old"));
        let (second, _) = vm.begin_request().unwrap();

        vm.take_dirty();
        vm.apply_response(success(first, "Stale"));
        assert_eq!(*vm.state(), RequestState::Loading);
        assert!(!vm.take_dirty(), "discarded response must not trigger a redraw");

        vm.apply_response(success(second, "Fresh"));
        match vm.state() {
            RequestState::Success(profile) => assert_eq!(profile.name.as_deref(), Some("Fresh")),
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[test]
    fn editing_should_stay_live_while_loading() {
        let mut vm = AppViewModel::new();
        type_query(&mut vm, "Zom");
        vm.begin_request().unwrap();

        type_query(&mut vm, "ato");
        assert_eq!(vm.query().text(), "Zomato");
        assert_eq!(*vm.state(), RequestState::Loading);
    }
}
