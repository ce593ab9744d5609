//! # Interactive Screen
//!
//! Renders the whole application state to a [`RenderStream`]: the query
//! row, a busy indicator while loading, the error banner, the profile
//! card and a status line. Rendering is a pure function of the view
//! model; the screen holds no state beyond the terminal size.

use crate::app::io::{RenderStream, TerminalSize};
use crate::app::models::RequestState;
use crate::app::view_model::AppViewModel;
use crate::app::views::card;
use anyhow::Result;
use crossterm::style::Stylize;
use std::io::Write;

/// Screen title row
const TITLE: &str = "Scoutline - Company Research";

/// Prompt prefix for the query row
const PROMPT: &str = "company> ";

/// Hint shown while the query is empty
const PLACEHOLDER: &str = "Enter company name (e.g., Zomato)";

/// Row of the query input line
const INPUT_ROW: u16 = 2;

/// First row of the body area (busy indicator, error banner, card)
const BODY_ROW: u16 = 4;

/// Terminal view for the interactive mode
pub struct ProfileScreen<RS: RenderStream> {
    stream: RS,
    size: TerminalSize,
}

impl<RS: RenderStream> ProfileScreen<RS> {
    pub fn new(stream: RS) -> Result<Self> {
        let size = stream.get_size()?;
        Ok(Self { stream, size })
    }

    /// Set up the terminal: raw mode, alternate screen
    pub fn initialize(&mut self) -> Result<()> {
        self.stream.enable_raw_mode()?;
        self.stream.enter_alternate_screen()?;
        Ok(())
    }

    /// Restore the terminal on exit
    pub fn cleanup(&mut self) -> Result<()> {
        self.stream.show_cursor()?;
        self.stream.leave_alternate_screen()?;
        self.stream.disable_raw_mode()?;
        Ok(())
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.size = (width, height);
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.size
    }

    /// Render the full screen from the view model
    pub fn render(&mut self, view_model: &AppViewModel) -> Result<()> {
        self.stream.hide_cursor()?;
        self.stream.clear_screen()?;

        self.write_line(0, &format!("{}", TITLE.bold()))?;
        self.render_query_row(view_model)?;
        self.render_body(view_model)?;
        self.render_status_line(view_model)?;

        // Park the visible cursor inside the query text
        let cursor_x = (PROMPT.len() + view_model.query().cursor()) as u16;
        self.stream
            .move_cursor(cursor_x.min(self.size.0.saturating_sub(1)), INPUT_ROW)?;
        self.stream.show_cursor()?;
        self.stream.flush()?;
        Ok(())
    }

    fn render_query_row(&mut self, view_model: &AppViewModel) -> Result<()> {
        let query = view_model.query().text();
        let line = if query.is_empty() {
            format!("{}{}", PROMPT.dark_cyan(), PLACEHOLDER.dark_grey())
        } else {
            format!("{}{}", PROMPT.dark_cyan(), query)
        };
        self.write_line(INPUT_ROW, &line)
    }

    fn render_body(&mut self, view_model: &AppViewModel) -> Result<()> {
        match view_model.state() {
            RequestState::Idle => Ok(()),
            RequestState::Loading => {
                let busy = format!("{}", "Researching...".dark_yellow());
                self.write_line(BODY_ROW, &busy)
            }
            RequestState::Failure(message) => {
                let banner = format!("{}", message.as_str().red());
                self.write_line(BODY_ROW, &banner)
            }
            RequestState::Success(profile) => {
                let mut row = BODY_ROW;
                let bottom = self.size.1.saturating_sub(2);
                for line in card::profile_card_lines(profile) {
                    if row >= bottom {
                        break;
                    }
                    let styled = if line.chars().all(|c| c.is_ascii_uppercase() || c == ' ')
                        && !line.is_empty()
                    {
                        format!("{}", line.as_str().dark_grey())
                    } else {
                        line
                    };
                    self.write_line(row, &styled)?;
                    row += 1;
                }
                Ok(())
            }
        }
    }

    fn render_status_line(&mut self, view_model: &AppViewModel) -> Result<()> {
        let state_label = match view_model.state() {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success(_) => "ready",
            RequestState::Failure(_) => "error",
        };

        let mut status = format!("profile: {}  [{}]", view_model.profile_name(), state_label);
        if view_model.verbose() {
            let http = view_model.session().http_status();
            if let (Some(code), Some(ms)) = (http.status_code, http.duration_ms) {
                status.push_str(&format!("  {code} · {ms}ms"));
            }
        }

        let row = self.size.1.saturating_sub(1);
        let line = format!("{}", status.as_str().dark_grey());
        self.write_line(row, &line)
    }

    /// Write one line at a row, truncated to the terminal width
    ///
    /// Truncation counts visible characters, skipping ANSI escape
    /// sequences, so styling never pushes text past the edge.
    fn write_line(&mut self, row: u16, text: &str) -> Result<()> {
        self.stream.move_cursor(0, row)?;
        let truncated = truncate_visible(text, self.size.0 as usize);
        write!(self.stream, "{truncated}")?;
        Ok(())
    }
}

/// Truncate to `max` visible characters, keeping escape sequences intact
fn truncate_visible(text: &str, max: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut visible = 0;
    let mut in_escape = false;

    for ch in text.chars() {
        if ch == '\x1b' {
            in_escape = true;
            result.push(ch);
        } else if in_escape {
            result.push(ch);
            if ch == 'm' {
                in_escape = false;
            }
        } else {
            if visible >= max {
                continue;
            }
            visible += 1;
            result.push(ch);
        }
    }

    result
}
